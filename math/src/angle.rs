use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

pub const ANG45: Angle = Angle(FRAC_PI_4);
pub const ANG90: Angle = Angle(FRAC_PI_2);

/// Radians, always wrapped in to `0..TAU`
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Angle(f32);

impl Angle {
    #[inline]
    pub const fn new(mut radians: f32) -> Self {
        radians %= TAU;
        if radians < 0.0 {
            radians += TAU;
        }
        Angle(radians)
    }

    /// From the map `THINGS` angle field which is in whole degrees
    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Angle::new(degrees.to_radians())
    }

    #[inline]
    pub const fn rad(&self) -> f32 {
        self.0
    }

    #[inline]
    pub fn sin_cos(&self) -> (f32, f32) {
        self.0.sin_cos()
    }

    #[inline(always)]
    pub fn unit(&self) -> Vec2 {
        let (y, x) = self.sin_cos();
        Vec2::new(x, y)
    }

    pub fn from_vector(input: Vec2) -> Self {
        Angle::new(input.y.atan2(input.x))
    }

    /// Signed shortest difference `self - other` in `-PI..PI`
    pub fn delta(self, other: Angle) -> f32 {
        let mut d = self.0 - other.0;
        if d > TAU / 2.0 {
            d -= TAU;
        } else if d < -TAU / 2.0 {
            d += TAU;
        }
        d
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, other: Angle) -> Angle {
        Angle::new(self.0 + other.0)
    }
}

impl Add<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, other: f32) -> Angle {
        Angle::new(self.0 + other)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, other: Angle) {
        *self = *self + other;
    }
}

impl AddAssign<f32> for Angle {
    #[inline]
    fn add_assign(&mut self, other: f32) {
        *self = *self + other;
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, other: Angle) -> Angle {
        Angle::new(self.0 - other.0)
    }
}

impl Sub<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, other: f32) -> Angle {
        Angle::new(self.0 - other)
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, other: Angle) {
        *self = *self - other;
    }
}

impl Neg for Angle {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Angle::new(-self.0)
    }
}

/// Angle of the vector from `point2` to `point1`
#[inline]
pub fn point_to_angle_2(point1: Vec2, point2: Vec2) -> Angle {
    let x = point1.x - point2.x;
    let y = point1.y - point2.y;
    Angle::new(y.atan2(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn wraps_negative() {
        let a = Angle::new(-FRAC_PI_2);
        assert!((a.rad() - 3.0 * FRAC_PI_2).abs() < 1e-5);
        let b = Angle::new(TAU + 0.5);
        assert!((b.rad() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn shortest_delta() {
        let a = Angle::from_degrees(350.0);
        let b = Angle::from_degrees(10.0);
        assert!((a.delta(b) + 20f32.to_radians()).abs() < 1e-4);
        assert!((b.delta(a) - 20f32.to_radians()).abs() < 1e-4);
        assert!(((ANG90 - ANG45).rad() - FRAC_PI_4).abs() < 1e-6);
        assert!((point_to_angle_2(Vec2::new(-1.0, 0.0), Vec2::ZERO).rad() - PI).abs() < 1e-5);
    }
}
