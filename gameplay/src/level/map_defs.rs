//! The runtime map records. Everything is held in flat arrays owned by
//! `MapData` and cross-referenced by index.

use glam::Vec2;
use math::{Angle, Trace, point_on_side};

use crate::level::flags::LineDefFlags;
use crate::pic::SwitchAction;
use crate::thing::ThingId;
use crate::thinker::ThinkerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeType {
    Horizontal,
    Vertical,
    Positive,
    Negative,
}

/// The SECTORS record, at runtime.
#[derive(Debug, Clone, Default)]
pub struct Sector {
    pub num: usize,
    pub floorheight: f32,
    pub ceilingheight: f32,
    /// Index in to `PicData` flats
    pub floorpic: usize,
    /// Index in to `PicData` flats
    pub ceilingpic: usize,
    pub lightlevel: i32,
    pub special: i16,
    pub tag: i16,

    /// The mover currently running on this sector. Only one at a time.
    pub specialdata: Option<ThinkerId>,
    /// Every line bordering the sector
    pub lines: Vec<usize>,
    /// Things whose centre is inside the sector
    pub things: Vec<ThingId>,

    /// thing that made a sound (or none)
    pub sound_target: Option<ThingId>,
    /// 0 = untraversed, 1,2 = sndlines -1
    pub soundtraversed: i32,
    /// Extent of all bordering lines
    pub blockbox: BBox,
    /// origin for any sounds played by the sector
    pub sound_origin: Vec2,
}

impl Sector {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        num: usize,
        floorheight: f32,
        ceilingheight: f32,
        floorpic: usize,
        ceilingpic: usize,
        lightlevel: i32,
        special: i16,
        tag: i16,
    ) -> Self {
        Self {
            num,
            floorheight,
            ceilingheight,
            floorpic,
            ceilingpic,
            lightlevel,
            special,
            tag,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct SideDef {
    // add this to the calculated texture column
    pub textureoffset: f32,
    // add this to the calculated texture top
    pub rowoffset: f32,
    /// `None` is the "-" no texture marker
    pub toptexture: Option<usize>,
    pub bottomtexture: Option<usize>,
    pub midtexture: Option<usize>,
    /// Sector the SideDef is facing.
    pub sector: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for BBox {
    /// An inverted box that any added point will replace
    fn default() -> Self {
        Self {
            top: f32::MIN,
            bottom: f32::MAX,
            left: f32::MAX,
            right: f32::MIN,
        }
    }
}

impl BBox {
    pub fn new(v1: Vec2, v2: Vec2) -> Self {
        let mut bbox = BBox::default();
        bbox.add_point(v1);
        bbox.add_point(v2);
        bbox
    }

    /// The box around a path from `start` to `start + delta`, grown by
    /// `radius`
    pub fn from_path(start: Vec2, delta: Vec2, radius: f32) -> Self {
        BBox::new(start, start + delta).expand(radius)
    }

    pub fn add_point(&mut self, v: Vec2) {
        self.left = self.left.min(v.x);
        self.right = self.right.max(v.x);
        self.bottom = self.bottom.min(v.y);
        self.top = self.top.max(v.y);
    }

    pub fn expand(&self, by: f32) -> Self {
        Self {
            top: self.top + by,
            bottom: self.bottom - by,
            left: self.left - by,
            right: self.right + by,
        }
    }

    #[inline]
    pub fn intersects(&self, other: &BBox) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.bottom <= other.top
            && self.top >= other.bottom
    }

    #[inline]
    pub fn contains(&self, v: Vec2, slack: f32) -> bool {
        v.x >= self.left - slack
            && v.x <= self.right + slack
            && v.y >= self.bottom - slack
            && v.y <= self.top + slack
    }

    /// No area, or never had a point added
    pub fn is_degenerate(&self) -> bool {
        self.right - self.left <= 0.0 || self.top - self.bottom <= 0.0
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left, self.bottom)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right, self.top)
    }

    #[inline]
    pub fn centre(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }
}

#[derive(Debug, Clone)]
pub struct LineDef {
    pub num: usize,
    // Vertices, from v1 to v2.
    pub v1: Vec2,
    pub v2: Vec2,
    // Precalculated v2 - v1 for side checking.
    pub delta: Vec2,
    pub flags: u32,
    pub special: i16,
    pub tag: i16,

    pub bbox: BBox,
    // To aid move clipping.
    pub slopetype: SlopeType,

    pub front_sidedef: usize,
    /// `None` if one sided
    pub back_sidedef: Option<usize>,

    // Front and back sector.
    pub frontsector: usize,
    pub backsector: Option<usize>,

    /// A switch texture on this line waiting to flip back
    pub switch_action: Option<SwitchAction>,
}

impl LineDef {
    #[inline]
    pub fn trace(&self) -> Trace {
        Trace::new(self.v1, self.delta)
    }

    /// 0 is the front (right) side, 1 the back
    #[inline]
    pub fn point_on_side(&self, v: Vec2) -> usize {
        point_on_side(self.trace(), v)
    }

    #[inline]
    pub fn is_two_sided(&self) -> bool {
        LineDefFlags::TwoSided.is_set(self.flags) && self.backsector.is_some()
    }

    #[inline]
    pub fn sidedef(&self, side: usize) -> Option<usize> {
        if side == 0 {
            Some(self.front_sidedef)
        } else {
            self.back_sidedef
        }
    }

    #[inline]
    pub fn sector(&self, side: usize) -> Option<usize> {
        if side == 0 {
            Some(self.frontsector)
        } else {
            self.backsector
        }
    }
}

#[derive(Debug, Clone)]
pub struct Segment {
    // Vertices, from v1 to v2.
    pub v1: Vec2,
    pub v2: Vec2,

    /// Offset distance along the linedef (from `start_vertex`) to the start
    /// of this `Segment`
    pub offset: f32,
    pub angle: Angle,

    pub sidedef: usize,
    /// The Linedef this segment travels along.
    pub linedef: usize,
    /// Which side of the linedef this seg is on
    pub side: usize,

    pub frontsector: usize,
    pub backsector: Option<usize>,
}

impl Segment {
    pub fn point_on_side(&self, v: Vec2) -> usize {
        point_on_side(Trace::new(self.v1, self.v2 - self.v1), v)
    }
}

/// A convex BSP leaf
#[derive(Debug, Clone, Default)]
pub struct SubSector {
    pub sector: usize,
    /// Indexes in to `MapData::segments`
    pub segs: Vec<usize>,
    /// Closed counter-clockwise outline, including the corners cut by
    /// partition lines that have no seg
    pub polygon: Vec<Vec2>,
    pub bbox: BBox,
    /// Things whose centre is inside this leaf
    pub things: Vec<ThingId>,
}

/// One side of a BSP split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeChild {
    Node(usize),
    SubSector(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Where the line used for splitting the level starts
    pub xy: Vec2,
    /// Direction and length of the splitting line
    pub delta: Vec2,
    /// Bounding boxes of the front (0) and back (1) children
    pub bboxes: [BBox; 2],
    /// Front (right) child first
    pub children: [NodeChild; 2],
}
