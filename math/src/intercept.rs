use glam::Vec2;

/// A point and a direction. Used both for partition lines and for paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace {
    pub xy: Vec2,
    pub dxy: Vec2,
}

impl Trace {
    #[inline]
    pub const fn new(xy: Vec2, dxy: Vec2) -> Self {
        Self { xy, dxy }
    }

    /// Signed perpendicular distance of `v2` from the line. Positive is the
    /// right (front) side.
    #[inline]
    pub fn signed_distance(&self, v2: Vec2) -> f32 {
        let len = self.dxy.length();
        if len <= f32::EPSILON {
            return 0.0;
        }
        let d = v2 - self.xy;
        (self.dxy.y * d.x - self.dxy.x * d.y) / len
    }
}

/// Determine which side of the trace the vector point is on. 0 is the right
/// (front), 1 the left. A point on the line is on the back.
#[inline]
pub fn point_on_side(trace: Trace, v2: Vec2) -> usize {
    let dx = v2.x - trace.xy.x;
    let dy = v2.y - trace.xy.y;

    if (trace.dxy.y * dx) > (dy * trace.dxy.x) {
        // Front side
        return 0;
    }
    // Backside
    1
}

/// Returns the fractional intercept point along the first divline.
///
/// The lines can be pictured as arg1 being an infinite plane, and arg2 being
/// the line to check if intersected by the plane.
///
/// P_InterceptVector
#[inline]
pub fn intercept_vector(v2: Trace, v1: Trace) -> f32 {
    let denominator = (v1.dxy.y * v2.dxy.x) - (v1.dxy.x * v2.dxy.y);
    if denominator.abs() <= f32::EPSILON {
        return 0.0;
    }
    let numerator = ((v1.xy.x - v2.xy.x) * v1.dxy.y) + ((v2.xy.y - v1.xy.y) * v1.dxy.x);
    numerator / denominator
}

/// Where two infinite lines cross, `None` if parallel
#[inline]
pub fn line_line_intersection(a: Trace, b: Trace) -> Option<Vec2> {
    let denominator = a.dxy.perp_dot(b.dxy);
    if denominator.abs() <= 1e-9 {
        return None;
    }
    let t = (b.xy - a.xy).perp_dot(b.dxy) / denominator;
    Some(a.xy + a.dxy * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides() {
        let t = Trace::new(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert_eq!(point_on_side(t, Vec2::new(5.0, 5.0)), 0);
        assert_eq!(point_on_side(t, Vec2::new(-5.0, 5.0)), 1);
        assert_eq!(point_on_side(t, Vec2::new(0.0, 3.0)), 1);
        assert!((t.signed_distance(Vec2::new(5.0, 5.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn intercepts() {
        let path = Trace::new(Vec2::new(-10.0, 0.0), Vec2::new(20.0, 0.0));
        let wall = Trace::new(Vec2::new(0.0, -5.0), Vec2::new(0.0, 10.0));
        assert!((intercept_vector(path, wall) - 0.5).abs() < 1e-6);
        let p = line_line_intersection(path, wall).unwrap();
        assert!(p.distance(Vec2::ZERO) < 1e-5);
        assert!(line_line_intersection(path, path).is_none());
    }
}
