//! Control input to velocity mapping.
//!
//! The control is a normalized `[0, 1]` position. Each scale maps it onto its
//! own velocity sub-range so the Lorentz factor never hits the singularity at c.

use clap::ValueEnum;

/// Where the control lands when the scale changes.
pub const CONTROL_MIDPOINT: f64 = 0.5;

pub const LINEAR_MIN: f64 = 0.1;
pub const LINEAR_SPAN: f64 = 0.8;
pub const LOG_MIN: f64 = 0.9;
pub const LOG_SPAN: f64 = 0.0999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScaleMode {
    /// 0.1c to 0.9c, evenly spaced
    #[default]
    Linear,
    /// 0.9c to 0.9999c, finer near c
    Logarithmic,
}

impl ScaleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleMode::Linear => "Linear",
            ScaleMode::Logarithmic => "Logarithmic",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ScaleMode::Linear => ScaleMode::Logarithmic,
            ScaleMode::Logarithmic => ScaleMode::Linear,
        }
    }

    /// Closed velocity range covered by this scale.
    pub fn range(&self) -> (f64, f64) {
        match self {
            ScaleMode::Linear => (LINEAR_MIN, LINEAR_MIN + LINEAR_SPAN),
            ScaleMode::Logarithmic => (LOG_MIN, LOG_MIN + LOG_SPAN),
        }
    }
}

/// Map a control position to a velocity fraction of c.
///
/// The logarithmic scale is a quartic ease-out: equal control steps near 1
/// move the velocity less and less as it approaches 0.9999c.
pub fn map(control_input: f64, mode: ScaleMode) -> f64 {
    match mode {
        ScaleMode::Linear => LINEAR_MIN + LINEAR_SPAN * control_input,
        ScaleMode::Logarithmic => {
            let rest = 1.0 - control_input;
            LOG_MIN + LOG_SPAN * (1.0 - rest.powi(4))
        }
    }
}

/// The two user-mutated values behind the velocity slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityControl {
    input: f64,
    mode: ScaleMode,
}

impl Default for VelocityControl {
    fn default() -> Self {
        Self::new(ScaleMode::default())
    }
}

impl VelocityControl {
    pub fn new(mode: ScaleMode) -> Self {
        Self {
            input: CONTROL_MIDPOINT,
            mode,
        }
    }

    pub fn input(&self) -> f64 {
        self.input
    }

    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    pub fn set_input(&mut self, x: f64) {
        self.input = if x.is_nan() {
            CONTROL_MIDPOINT
        } else {
            x.clamp(0.0, 1.0)
        };
    }

    pub fn step(&mut self, delta: f64) {
        self.set_input(self.input + delta);
    }

    /// Switching scales always recenters the control, even if `mode` is
    /// already active.
    pub fn set_mode(&mut self, mode: ScaleMode) {
        self.mode = mode;
        self.input = CONTROL_MIDPOINT;
    }

    pub fn velocity(&self) -> f64 {
        map(self.input, self.mode)
    }
}
