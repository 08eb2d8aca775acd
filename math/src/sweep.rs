//! Swept box and segment primitives.
//!
//! Things are axis aligned boxes (a centre and a half width `radius`) and walls
//! are segments. A box swept along `delta` hits a segment where the centre's
//! path enters the Minkowski sum of the segment and the box. That sum is a
//! convex polygon whose edge normals are only the two axes plus the segment
//! normal, so clipping the path against those three slabs (Cyrus-Beck) is
//! exact.

use glam::Vec2;

/// Fractions closer than this are considered equal
pub const FRAC_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Fraction along `delta`, `0.0..=1.0`
    pub fraction: f32,
    /// Unit contact normal, pointing back toward the mover
    pub normal: Vec2,
    /// 0 = x slab, 1 = y slab, 2 = segment normal slab
    pub axis: usize,
    /// True if the box already overlapped at the start
    pub started_inside: bool,
}

/// Clip a path against one slab `lo..=hi` along `axis`. Narrows `t_enter` and
/// `t_exit`; returns false if the path misses the slab.
#[inline]
fn clip_slab(
    origin: f32,
    dir: f32,
    lo: f32,
    hi: f32,
    t_enter: &mut f32,
    t_exit: &mut f32,
    entered: &mut bool,
) -> bool {
    *entered = false;
    if dir.abs() <= f32::EPSILON {
        return origin >= lo && origin <= hi;
    }
    let inv = 1.0 / dir;
    let mut t0 = (lo - origin) * inv;
    let mut t1 = (hi - origin) * inv;
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    if t0 > *t_enter {
        *t_enter = t0;
        *entered = true;
    }
    if t1 < *t_exit {
        *t_exit = t1;
    }
    *t_enter <= *t_exit
}

/// Unit normal of the segment on its right (front) side
#[inline]
pub fn segment_normal(v1: Vec2, v2: Vec2) -> Vec2 {
    let d = v2 - v1;
    Vec2::new(d.y, -d.x).normalize_or_zero()
}

/// Sweep an axis aligned box of half width `radius` centred at `start` along
/// `delta` against the segment `v1`-`v2`.
pub fn sweep_box_segment(
    start: Vec2,
    delta: Vec2,
    radius: f32,
    v1: Vec2,
    v2: Vec2,
) -> Option<SweepHit> {
    let n = segment_normal(v1, v2);
    if n == Vec2::ZERO {
        return None;
    }
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut axis = usize::MAX;
    let mut entered = false;

    // Axis slabs, the segment extent widened by the box
    for a in 0..2 {
        let lo = v1[a].min(v2[a]) - radius;
        let hi = v1[a].max(v2[a]) + radius;
        if !clip_slab(start[a], delta[a], lo, hi, &mut t_enter, &mut t_exit, &mut entered) {
            return None;
        }
        if entered {
            axis = a;
        }
    }

    // Segment normal slab. The box projects on to `n` as +/- r(|nx| + |ny|)
    let reach = radius * (n.x.abs() + n.y.abs());
    let plane = n.dot(v1);
    if !clip_slab(
        n.dot(start),
        n.dot(delta),
        plane - reach,
        plane + reach,
        &mut t_enter,
        &mut t_exit,
        &mut entered,
    ) {
        return None;
    }
    if entered {
        axis = 2;
    }

    if t_exit < 0.0 || t_enter > 1.0 {
        return None;
    }
    let started_inside = t_enter < 0.0;
    let normal = if started_inside || axis == usize::MAX {
        // Already overlapping, push out along the wall normal
        axis = 2;
        if n.dot(start - v1) >= 0.0 { n } else { -n }
    } else if axis == 2 {
        if n.dot(delta) > 0.0 { -n } else { n }
    } else {
        let mut out = Vec2::ZERO;
        out[axis] = if delta[axis] > 0.0 { -1.0 } else { 1.0 };
        out
    };
    Some(SweepHit {
        fraction: t_enter.clamp(0.0, 1.0),
        normal,
        axis,
        started_inside,
    })
}

/// Sweep a box of half width `radius` against another of half width
/// `other_radius` centred at `other`. The normal is the face of `other` that
/// was entered.
pub fn sweep_box_box(
    start: Vec2,
    delta: Vec2,
    radius: f32,
    other: Vec2,
    other_radius: f32,
) -> Option<SweepHit> {
    let r = radius + other_radius;
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut axis = usize::MAX;
    let mut entered = false;
    for a in 0..2 {
        if !clip_slab(
            start[a],
            delta[a],
            other[a] - r,
            other[a] + r,
            &mut t_enter,
            &mut t_exit,
            &mut entered,
        ) {
            return None;
        }
        if entered {
            axis = a;
        }
    }
    if t_exit < 0.0 || t_enter > 1.0 {
        return None;
    }
    let started_inside = t_enter < 0.0;
    if started_inside || axis == usize::MAX {
        // Push out along the axis of least penetration
        let d = start - other;
        axis = if (r - d.x.abs()) < (r - d.y.abs()) { 0 } else { 1 };
    }
    let mut normal = Vec2::ZERO;
    normal[axis] = if started_inside {
        if start[axis] >= other[axis] { 1.0 } else { -1.0 }
    } else if delta[axis] > 0.0 {
        -1.0
    } else {
        1.0
    };
    Some(SweepHit {
        fraction: t_enter.clamp(0.0, 1.0),
        normal,
        axis,
        started_inside,
    })
}

/// Segment-segment intersection. Returns the fraction along `start + delta`
/// and along `v1`-`v2`, both `0.0..=1.0`.
pub fn segment_intersect(start: Vec2, delta: Vec2, v1: Vec2, v2: Vec2) -> Option<(f32, f32)> {
    let e = v2 - v1;
    let denominator = delta.perp_dot(e);
    if denominator.abs() <= f32::EPSILON {
        return None;
    }
    let w = v1 - start;
    let t = w.perp_dot(e) / denominator;
    let u = w.perp_dot(delta) / denominator;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some((t, u))
    } else {
        None
    }
}

/// Liang-Barsky clip of `v1`-`v2` to the box `min`..`max`. Returns the
/// parametric range kept.
pub fn clip_segment_to_box(v1: Vec2, v2: Vec2, min: Vec2, max: Vec2) -> Option<(f32, f32)> {
    let d = v2 - v1;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    let checks = [
        (-d.x, v1.x - min.x),
        (d.x, max.x - v1.x),
        (-d.y, v1.y - min.y),
        (d.y, max.y - v1.y),
    ];
    for (p, q) in checks {
        if p.abs() <= f32::EPSILON {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((t0, t1))
}

/// Length of the segment inside a box of half width `radius` at `centre`.
/// Used to break ties between hits at the same fraction.
pub fn segment_box_overlap(v1: Vec2, v2: Vec2, centre: Vec2, radius: f32) -> f32 {
    let slack = Vec2::splat(radius + 0.01);
    match clip_segment_to_box(v1, v2, centre - slack, centre + slack) {
        Some((t0, t1)) => (t1 - t0) * v1.distance(v2),
        None => 0.0,
    }
}

/// True if `p` is inside or on the counter-clockwise polygon
pub fn point_in_convex(poly: &[Vec2], p: Vec2, epsilon: f32) -> bool {
    if poly.len() < 3 {
        return false;
    }
    for i in 0..poly.len() {
        let a = poly[i];
        let b = poly[(i + 1) % poly.len()];
        let e = b - a;
        let len = e.length();
        if len <= f32::EPSILON {
            continue;
        }
        if e.perp_dot(p - a) / len < -epsilon {
            return false;
        }
    }
    true
}

/// Doom style clipped velocity: remove the part of `v` going in to the
/// surface with `normal`
#[inline]
pub fn slide_along(v: Vec2, normal: Vec2) -> Vec2 {
    let into = v.dot(normal);
    if into >= 0.0 {
        return v;
    }
    v - normal * into
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_into_vertical_wall() {
        // Wall at x = 128, box radius 16 at x = 100 moving +x by 20
        let hit = sweep_box_segment(
            Vec2::new(100.0, 0.0),
            Vec2::new(20.0, 0.0),
            16.0,
            Vec2::new(128.0, -64.0),
            Vec2::new(128.0, 64.0),
        )
        .unwrap();
        assert!((hit.fraction - 0.6).abs() < 1e-5);
        assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
        assert!(!hit.started_inside);
    }

    #[test]
    fn box_misses_short_wall() {
        let hit = sweep_box_segment(
            Vec2::new(100.0, 100.0),
            Vec2::new(20.0, 0.0),
            16.0,
            Vec2::new(128.0, -64.0),
            Vec2::new(128.0, 64.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn box_hits_diagonal_wall() {
        // 45 degree wall through (100, 0). The corner of the box touches first
        let hit = sweep_box_segment(
            Vec2::new(50.0, 0.0),
            Vec2::new(100.0, 0.0),
            10.0,
            Vec2::new(50.0, -50.0),
            Vec2::new(150.0, 50.0),
        )
        .unwrap();
        // Box corner (x + 10, y - 10) meets x - y = 100 at x = 80 -> centre
        // x = 80, fraction 0.3
        assert!((hit.fraction - 0.3).abs() < 1e-4);
        assert_eq!(hit.axis, 2);
        assert!(hit.normal.x < 0.0);
    }

    #[test]
    fn zero_radius_matches_segment_intersect() {
        let s = Vec2::new(0.0, 0.0);
        let d = Vec2::new(100.0, 30.0);
        let v1 = Vec2::new(60.0, -40.0);
        let v2 = Vec2::new(40.0, 90.0);
        let (t, _) = segment_intersect(s, d, v1, v2).unwrap();
        let hit = sweep_box_segment(s, d, 0.0, v1, v2).unwrap();
        assert!((t - hit.fraction).abs() < 1e-5);
    }

    #[test]
    fn box_box_entry() {
        let hit = sweep_box_box(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            16.0,
            Vec2::new(80.0, 5.0),
            20.0,
        )
        .unwrap();
        assert!((hit.fraction - 0.44).abs() < 1e-5);
        assert_eq!(hit.axis, 0);
        assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn liang_barsky() {
        let (t0, t1) = clip_segment_to_box(
            Vec2::new(-10.0, 5.0),
            Vec2::new(30.0, 5.0),
            Vec2::ZERO,
            Vec2::splat(10.0),
        )
        .unwrap();
        assert!((t0 - 0.25).abs() < 1e-6);
        assert!((t1 - 0.5).abs() < 1e-6);
        assert!(
            clip_segment_to_box(
                Vec2::new(-10.0, 15.0),
                Vec2::new(30.0, 15.0),
                Vec2::ZERO,
                Vec2::splat(10.0)
            )
            .is_none()
        );
    }

    #[test]
    fn convex_contains() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(point_in_convex(&square, Vec2::new(5.0, 5.0), 0.0));
        assert!(point_in_convex(&square, Vec2::new(10.0, 5.0), 0.01));
        assert!(!point_in_convex(&square, Vec2::new(11.0, 5.0), 0.01));
    }

    #[test]
    fn slide_removes_normal_part() {
        let v = slide_along(Vec2::new(10.0, 5.0), Vec2::new(-1.0, 0.0));
        assert_eq!(v, Vec2::new(0.0, 5.0));
        let away = slide_along(Vec2::new(-10.0, 5.0), Vec2::new(-1.0, 0.0));
        assert_eq!(away, Vec2::new(-10.0, 5.0));
    }
}
