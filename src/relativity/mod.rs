pub mod special;
pub mod velocity;

pub use special::{C, KinematicFactors, length_contraction, lorentz_factor, time_dilation};
pub use velocity::{ScaleMode, VelocityControl, map};
