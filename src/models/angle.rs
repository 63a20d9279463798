// src/models/angle.rs
//
// Rotation value kept in [0, 360) degrees and stored as radians

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub fn new(degrees: f32) -> Self {
        Self {
            radians: to_radians(normalize(degrees)),
        }
    }

    pub fn radians(&self) -> f32 {
        self.radians
    }

    pub fn degrees(&self) -> f32 {
        to_degrees(self.radians)
    }

    pub fn set_degrees(&mut self, degrees: f32) -> &mut Self {
        self.radians = to_radians(normalize(degrees));
        self
    }

    pub fn add_degrees(&mut self, degrees: f32) -> &mut Self {
        let current = self.degrees();
        self.set_degrees(current + degrees)
    }

    /// Nudge the angle forward by a single degree
    pub fn add_one_degree(&mut self) -> &mut Self {
        self.add_degrees(1.0)
    }
}

fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

fn to_degrees(radians: f32) -> f32 {
    (radians * 180.0 / PI) % 360.0
}

// rem_euclid can round up to exactly 360.0 for tiny negative inputs
fn normalize(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn assert_degrees(angle: &Angle, expected: f32) {
        let diff = (angle.degrees() - expected).abs();
        // 359.9999 and 0.0 are the same rotation
        assert!(
            diff < EPSILON || (360.0 - diff) < EPSILON,
            "expected {} degrees, got {}",
            expected,
            angle.degrees()
        );
    }

    mod construction_tests {
        use super::*;

        #[test]
        fn test_new_normalizes_input() {
            assert_degrees(&Angle::new(0.0), 0.0);
            assert_degrees(&Angle::new(90.0), 90.0);
            assert_degrees(&Angle::new(360.0), 0.0);
            assert_degrees(&Angle::new(450.0), 90.0);
            assert_degrees(&Angle::new(-90.0), 270.0);
            assert_degrees(&Angle::new(-720.0), 0.0);
        }

        #[test]
        fn test_radians_are_stored_directly() {
            let angle = Angle::new(180.0);
            assert!((angle.radians() - PI).abs() < 1e-6);

            let angle = Angle::new(-180.0);
            assert!((angle.radians() - PI).abs() < 1e-6);
        }

        #[test]
        fn test_tiny_negative_stays_in_range() {
            let angle = Angle::new(-1e-9);
            assert!(angle.degrees() < 360.0);
            assert!(angle.degrees() >= 0.0);
        }
    }

    mod mutation_tests {
        use super::*;

        #[test]
        fn test_set_degrees_is_chainable() {
            let mut angle = Angle::new(10.0);
            angle.set_degrees(370.0).add_degrees(5.0);
            assert_degrees(&angle, 15.0);
        }

        #[test]
        fn test_add_one_degree() {
            let mut angle = Angle::new(359.0);
            angle.add_one_degree();
            assert_degrees(&angle, 0.0);
        }

        #[test]
        fn test_add_degrees_wraps_for_whole_range() {
            for d in (0..360).step_by(15) {
                for k in [-1000, -361, -1, 0, 1, 45, 359, 720, 1000] {
                    let mut angle = Angle::new(d as f32);
                    angle.add_degrees(k as f32);
                    let expected = ((d + k) as f32).rem_euclid(360.0);
                    assert_degrees(&angle, expected);
                }
            }
        }
    }
}
