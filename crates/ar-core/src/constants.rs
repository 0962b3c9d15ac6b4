//! Global constants for ar-core

/// World meters per screen pixel for pan deltas
pub const PAN_SPEED_FACTOR: f32 = 0.001;

/// Smallest pinch factor accepted from a gesture source
pub const MIN_SCALE_FACTOR: f32 = 1e-4;

/// Uniform scale given to a freshly placed model
pub const DEFAULT_MODEL_SCALE: f32 = 0.05;

/// World position a freshly placed model is anchored at (in front of and below the camera)
pub const DEFAULT_PLACEMENT: [f32; 3] = [0.0, -1.0, -3.0];

/// Angle of one spin step (radians about +Y)
pub const SPIN_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

/// Duration of one spin step (seconds)
pub const SPIN_DURATION: f32 = 1.0;
