//! Momentum delta → normalized intensity, as pure functions.
//!
//! All inputs are pre-collision values: the velocity arguments are the
//! snapshots taken at the start of the step, before the engine's collision
//! resolution mutated anything.

use glam::Vec2;

/// Mass used for momentum purposes. Infinite mass models an immovable
/// anchor and contributes no momentum.
fn momentum_mass(mass: f32) -> f32 {
    if mass.is_finite() { mass } else { 0.0 }
}

/// Momentum vector of one body: velocity scaled by mass.
pub fn momentum(velocity: Vec2, mass: f32) -> Vec2 {
    velocity * momentum_mass(mass)
}

/// Scalar collision momentum of a pair: the Euclidean norm of the
/// difference between the two bodies' momentum vectors.
pub fn collision_momentum(va: Vec2, ma: f32, vb: Vec2, mb: f32) -> f32 {
    (momentum(va, ma) - momentum(vb, mb)).length()
}

/// Normalize raw collision momentum against the configured upper threshold:
/// `min(raw, t) / t`, clamped to [0, 1].
///
/// An unbounded (infinite) threshold yields 0 for every input. This is the
/// documented opt-in behavior, not an error: intensity stays inert until
/// the host supplies a finite positive threshold. Non-positive thresholds
/// are treated the same way.
pub fn intensity(raw_momentum: f32, upper_threshold: f32) -> f32 {
    if !upper_threshold.is_finite() || upper_threshold <= 0.0 {
        return 0.0;
    }
    (raw_momentum.min(upper_threshold) / upper_threshold).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_momentum_scales_elementwise() {
        let m = momentum(Vec2::new(3.0, 4.0), 2.0);
        assert!((m.x - 6.0).abs() < 1e-6);
        assert!((m.y - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_infinite_mass_contributes_no_momentum() {
        let m = momentum(Vec2::new(100.0, -50.0), f32::INFINITY);
        assert_eq!(m, Vec2::ZERO);
    }

    #[test]
    fn test_collision_momentum_against_static_anchor() {
        // vA = (3,4), mA = m, B static: raw = 5m.
        for m in [1.0, 2.5, 10.0] {
            let raw = collision_momentum(Vec2::new(3.0, 4.0), m, Vec2::ZERO, f32::INFINITY);
            assert!((raw - 5.0 * m).abs() < 1e-4);
        }
    }

    #[test]
    fn test_intensity_worked_example() {
        // mA = 10, T = 100: raw = 50, intensity = 0.5.
        let raw = collision_momentum(Vec2::new(3.0, 4.0), 10.0, Vec2::ZERO, f32::INFINITY);
        assert!((intensity(raw, 100.0) - 0.5).abs() < 1e-6);
        // mA = 30: raw = 150, capped at 100, intensity = 1.
        let raw = collision_momentum(Vec2::new(3.0, 4.0), 30.0, Vec2::ZERO, f32::INFINITY);
        assert!((intensity(raw, 100.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_intensity_in_unit_range_and_monotone() {
        let t = 50.0;
        let mut prev = 0.0;
        for i in 0..200 {
            let raw = i as f32;
            let v = intensity(raw, t);
            assert!((0.0..=1.0).contains(&v));
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_unbounded_threshold_is_always_zero() {
        for raw in [0.0, 1.0, 1e6, f32::MAX] {
            assert_eq!(intensity(raw, f32::INFINITY), 0.0);
        }
    }

    #[test]
    fn test_degenerate_thresholds_are_zero() {
        assert_eq!(intensity(42.0, 0.0), 0.0);
        assert_eq!(intensity(42.0, -1.0), 0.0);
        assert_eq!(intensity(42.0, f32::NAN), 0.0);
    }
}
