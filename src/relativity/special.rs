/// Speed of light in m/s.
pub const C: f64 = 299_792_458.0;

/// Lorentz factor γ = 1 / sqrt(1 - β²), with β = v/c.
pub fn lorentz_factor(beta: f64) -> f64 {
    1.0 / (1.0 - beta * beta).sqrt()
}

/// Length contraction: L = L0 / γ
pub fn length_contraction(proper_length: f64, beta: f64) -> f64 {
    proper_length * KinematicFactors::compute(beta).length_contraction
}

/// Time dilation: t = t0 · γ
pub fn time_dilation(proper_time: f64, beta: f64) -> f64 {
    proper_time * KinematicFactors::compute(beta).time_dilation
}

/// Everything derived from a single velocity fraction.
///
/// Only valid for β in (0, 1). The velocity mapper never produces anything
/// outside that range, so no checks happen here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicFactors {
    pub gamma: f64,
    /// 1/γ, the fraction of its rest length a moving ruler keeps.
    pub length_contraction: f64,
    /// Always equal to γ.
    pub time_dilation: f64,
}

impl KinematicFactors {
    pub fn compute(beta: f64) -> Self {
        let gamma = lorentz_factor(beta);
        Self {
            gamma,
            length_contraction: 1.0 / gamma,
            time_dilation: gamma,
        }
    }

    /// Velocity in m/s for a given fraction of c.
    pub fn speed_mps(beta: f64) -> f64 {
        beta * C
    }
}
