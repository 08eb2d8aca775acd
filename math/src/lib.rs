mod angle;
mod intercept;
mod sweep;

pub use angle::*;
use glam::Vec2;
pub use intercept::*;
pub use sweep::*;

const FRACBITS: i32 = 16;
const FRACUNIT: f32 = (1 << FRACBITS) as f32;

/// Convert a Doom `fixed_t` fixed-point float to `f32`
pub const fn fixed_to_float(value: i32) -> f32 {
    value as f32 / FRACUNIT
}

pub const RNDTABLE: [i32; 256] = [
    0, 8, 109, 220, 222, 241, 149, 107, 75, 248, 254, 140, 16, 66, 74, 21, 211, 47, 80, 242, 154,
    27, 205, 128, 161, 89, 77, 36, 95, 110, 85, 48, 212, 140, 211, 249, 22, 79, 200, 50, 28, 188,
    52, 140, 202, 120, 68, 145, 62, 70, 184, 190, 91, 197, 152, 224, 149, 104, 25, 178, 252, 182,
    202, 182, 141, 197, 4, 81, 181, 242, 145, 42, 39, 227, 156, 198, 225, 193, 219, 93, 122, 175,
    249, 0, 175, 143, 70, 239, 46, 246, 163, 53, 163, 109, 168, 135, 2, 235, 25, 92, 20, 145, 138,
    77, 69, 166, 78, 176, 173, 212, 166, 113, 94, 161, 41, 50, 239, 49, 111, 164, 70, 60, 2, 37,
    171, 75, 136, 156, 11, 56, 42, 146, 138, 229, 73, 146, 77, 61, 98, 196, 135, 106, 63, 197, 195,
    86, 96, 203, 113, 101, 170, 247, 181, 113, 80, 250, 108, 7, 255, 237, 129, 226, 79, 107, 112,
    166, 103, 241, 24, 223, 239, 120, 198, 58, 60, 82, 128, 3, 184, 66, 143, 224, 145, 224, 81,
    206, 163, 45, 63, 90, 168, 114, 59, 33, 159, 95, 28, 139, 123, 98, 125, 196, 15, 70, 194, 253,
    54, 14, 109, 226, 71, 17, 161, 93, 186, 87, 244, 138, 20, 52, 123, 251, 26, 36, 17, 46, 52,
    231, 232, 76, 31, 221, 84, 37, 216, 165, 212, 106, 197, 242, 98, 43, 39, 175, 254, 145, 190,
    84, 118, 222, 187, 136, 120, 163, 236, 249,
];

/// The Doom table RNG. Each level owns one so runs are reproducible and no
/// state is shared between levels.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DoomRng {
    rnd_index: usize,
    prnd_index: usize,
}

impl DoomRng {
    pub const fn new() -> Self {
        Self {
            rnd_index: 0,
            prnd_index: 0,
        }
    }

    /// Gameplay random, 0..=255
    #[inline]
    pub fn p_random(&mut self) -> i32 {
        self.prnd_index = (self.prnd_index + 1) & 0xFF;
        RNDTABLE[self.prnd_index]
    }

    /// Non-gameplay random (effects only)
    #[inline]
    pub fn m_random(&mut self) -> i32 {
        self.rnd_index = (self.rnd_index + 1) & 0xFF;
        RNDTABLE[self.rnd_index]
    }

    #[inline]
    pub fn p_subrandom(&mut self) -> i32 {
        let r = self.p_random();
        r - self.p_random()
    }

    pub fn clear(&mut self) {
        self.rnd_index = 0;
        self.prnd_index = 0;
    }
}

/// True if the line segment from point1 to point2 penetrates the circle
#[inline]
pub fn circle_seg_collide(c_origin: Vec2, c_radius: f32, s_start: Vec2, s_end: Vec2) -> bool {
    let lc = c_origin - s_start;
    let d = s_end - s_start;
    let p = project_vec2d(lc, d);
    let nearest = s_start + p;

    circle_point_intersect(c_origin, c_radius, nearest)
        && p.length() < d.length()
        && p.dot(d) > f32::EPSILON
}

#[inline]
fn project_vec2d(this: Vec2, onto: Vec2) -> Vec2 {
    let d = onto.dot(onto);
    if d > 0.0 {
        let dp = this.dot(onto);
        return onto * (dp / d);
    }
    onto
}

#[inline]
pub fn circle_point_intersect(origin: Vec2, radius: f32, point: Vec2) -> bool {
    (point - origin).length() < radius
}

#[inline]
pub fn circle_circle_intersect(
    origin: Vec2,
    origin_radius: f32,
    point: Vec2,
    point_radius: f32,
) -> bool {
    (point - origin).length() < origin_radius + point_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_per_instance() {
        let mut a = DoomRng::new();
        let mut b = DoomRng::new();
        assert_eq!(a.p_random(), 8);
        assert_eq!(a.p_random(), 109);
        assert_eq!(b.p_random(), 8);
        a.clear();
        assert_eq!(a.p_random(), 8);
        assert_eq!(a.m_random(), 8);
    }

    #[test]
    fn circles() {
        assert!(circle_point_intersect(
            Vec2::new(3.0, 5.0),
            1.0,
            Vec2::new(2.5, 4.5)
        ));
        assert!(!circle_point_intersect(
            Vec2::new(3.0, 5.0),
            1.0,
            Vec2::new(2.0, 4.0)
        ));
        assert!(circle_circle_intersect(
            Vec2::ZERO,
            2.0,
            Vec2::new(3.0, 0.0),
            1.5
        ));
        assert!(circle_seg_collide(
            Vec2::new(5.0, 1.0),
            2.0,
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0)
        ));
    }

    #[test]
    fn fixed() {
        assert_eq!(fixed_to_float(1 << 16), 1.0);
        assert_eq!(fixed_to_float(0xE800), 0.90625);
    }
}
