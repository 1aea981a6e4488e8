use std::time::Duration;

use anyhow::{Result, ensure};

use crate::relativity::ScaleMode;

/// Runtime settings collected from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Rest length of the ruler, meters.
    pub proper_length: f64,
    /// Proper time used in reports, seconds.
    pub proper_time: f64,
    pub scale: ScaleMode,
    /// Minimum spacing between clock ticks.
    pub frame_interval: Duration,
    /// Control input change per arrow key press.
    pub step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proper_length: 100.0,
            proper_time: 10.0,
            scale: ScaleMode::Linear,
            frame_interval: Duration::from_millis(16),
            step: 0.01,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.proper_length.is_finite() && self.proper_length > 0.0,
            "proper length must be positive, got {}",
            self.proper_length
        );
        ensure!(
            self.proper_time.is_finite() && self.proper_time > 0.0,
            "proper time must be positive, got {}",
            self.proper_time
        );
        ensure!(
            !self.frame_interval.is_zero(),
            "frame interval must be at least 1 ms"
        );
        ensure!(
            self.step > 0.0 && self.step <= 1.0,
            "step must be in (0, 1], got {}",
            self.step
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            Config {
                proper_length: 0.0,
                ..Default::default()
            },
            Config {
                proper_time: -1.0,
                ..Default::default()
            },
            Config {
                frame_interval: Duration::ZERO,
                ..Default::default()
            },
            Config {
                step: 1.5,
                ..Default::default()
            },
            Config {
                step: f64::NAN,
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }
}
