//! Timed orientation animation (spin control)

use glam::Quat;

use crate::constants::{SPIN_ANGLE, SPIN_DURATION};
use crate::engine::rotation_around_y;

/// Turns an orientation by `Ry(angle)` about world +Y over a fixed duration
///
/// The angle is swept linearly, so turns of more than half a revolution keep
/// their direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationTween {
    pub from: Quat,
    pub to: Quat,
    /// Total sweep about world +Y (radians)
    pub angle: f32,
    /// Seconds
    pub duration: f32,
    elapsed: f32,
}

impl OrientationTween {
    /// Spin about world +Y by `angle` radians over `duration` seconds
    pub fn spin(from: Quat, angle: f32, duration: f32) -> Self {
        Self {
            from,
            to: (rotation_around_y(angle) * from).normalize(),
            angle,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Default spin step (an eighth of a turn over one second)
    pub fn default_spin(from: Quat) -> Self {
        Self::spin(from, SPIN_ANGLE, SPIN_DURATION)
    }

    /// Fraction of the animation completed, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Orientation at the current time
    pub fn current(&self) -> Quat {
        (rotation_around_y(self.angle * self.progress()) * self.from).normalize()
    }

    /// Advance by `dt` seconds and return the new orientation
    pub fn advance(&mut self, dt: f32) -> Quat {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn quat_close(a: Quat, b: Quat) -> bool {
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn test_spin_reaches_target() {
        let mut tween = OrientationTween::default_spin(Quat::IDENTITY);
        assert!(!tween.is_finished());

        for _ in 0..10 {
            tween.advance(0.1);
        }
        assert!(tween.is_finished());
        assert!(quat_close(
            tween.current(),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)
        ));
    }

    #[test]
    fn test_spin_halfway() {
        let mut tween = OrientationTween::spin(Quat::IDENTITY, 1.0, 2.0);
        let halfway = tween.advance(1.0);
        assert_relative_eq!(tween.progress(), 0.5);
        assert!(quat_close(halfway, Quat::from_rotation_y(0.5)));
    }

    #[test]
    fn test_spin_beyond_half_turn_keeps_direction() {
        let mut tween = OrientationTween::spin(Quat::IDENTITY, 1.5 * PI, 1.0);
        let halfway = tween.advance(0.5);
        assert!(quat_close(halfway, Quat::from_rotation_y(0.75 * PI)));
        assert!(halfway.y > 0.9);
    }

    #[test]
    fn test_full_turn_spin_moves_midway() {
        let mut tween = OrientationTween::spin(Quat::IDENTITY, 2.0 * PI, 1.0);
        let halfway = tween.advance(0.5);
        assert!(quat_close(halfway, Quat::from_rotation_y(PI)));
        assert!(!quat_close(halfway, Quat::IDENTITY));

        let end = tween.advance(0.5);
        assert!(quat_close(end, Quat::IDENTITY));
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let mut tween = OrientationTween::spin(Quat::IDENTITY, 1.0, 1.0);
        let end = tween.advance(5.0);
        assert_relative_eq!(tween.progress(), 1.0);
        assert!(quat_close(end, tween.to));
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let tween = OrientationTween::spin(Quat::IDENTITY, 0.3, 0.0);
        assert!(tween.is_finished());
        assert!(quat_close(tween.current(), Quat::from_rotation_y(0.3)));
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut tween = OrientationTween::spin(Quat::IDENTITY, 1.0, 1.0);
        tween.advance(-3.0);
        assert_relative_eq!(tween.progress(), 0.0);
    }
}
