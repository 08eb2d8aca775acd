//! Sweeps and rays through the level.
//!
//! A trace runs in two phases. The BSP leaves the path can touch are walked
//! and every wall, thing and flat the path meets is gathered. The hits are
//! then sorted by distance along the path and handed to the caller's hooks in
//! that order until a hook returns `false`.
//!
//! Gathering only reads the map, so a hook can inspect anything on the level.
//! Hooks record what they need and the caller changes the level after the
//! trace returns.

use glam::Vec2;
use math::{
    FRAC_EPSILON, point_in_convex, segment_box_overlap, segment_intersect, segment_normal,
    sweep_box_box, sweep_box_segment,
};

use crate::doom_def::MAXRADIUS;
use crate::level::map_data::MapData;
use crate::level::map_defs::BBox;
use crate::thing::{MapObjects, ThingId};

#[cfg(feature = "hprof")]
use coarse_prof::profile;

/// Per level scratch state so a line or thing is looked at once per trace
/// even when it is in many leaves.
#[derive(Debug, Default, Clone)]
pub struct TraceContext {
    valid_count: u32,
    line_marks: Vec<u32>,
    thing_marks: Vec<u32>,
}

impl TraceContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self, lines: usize, things: usize) {
        if self.line_marks.len() < lines {
            self.line_marks.resize(lines, 0);
        }
        if self.thing_marks.len() < things {
            self.thing_marks.resize(things, 0);
        }
        self.valid_count = self.valid_count.wrapping_add(1);
        if self.valid_count == 0 {
            self.line_marks.fill(0);
            self.thing_marks.fill(0);
            self.valid_count = 1;
        }
    }

    /// True the first time a line is seen in this trace
    #[inline]
    fn mark_line(&mut self, line: usize) -> bool {
        if self.line_marks[line] == self.valid_count {
            return false;
        }
        self.line_marks[line] = self.valid_count;
        true
    }

    #[inline]
    fn mark_thing(&mut self, thing: ThingId) -> bool {
        let i = thing.index();
        if i >= self.thing_marks.len() {
            self.thing_marks.resize(i + 1, 0);
        }
        if self.thing_marks[i] == self.valid_count {
            return false;
        }
        self.thing_marks[i] = self.valid_count;
        true
    }
}

/// A path through the level. `z`, `height` and `dz` only matter for thing and
/// flat hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRequest {
    pub start: Vec2,
    pub delta: Vec2,
    /// Half width of the box being swept, 0 for a ray
    pub radius: f32,
    /// Bottom of the swept box at the start
    pub z: f32,
    pub height: f32,
    /// Change in `z` over the whole path
    pub dz: f32,
    /// Never report this thing, normally the one moving
    pub ignore: Option<ThingId>,
}

impl TraceRequest {
    /// An infinitely thin ray with no vertical extent
    pub fn ray(start: Vec2, delta: Vec2) -> Self {
        Self {
            start,
            delta,
            radius: 0.0,
            z: 0.0,
            height: 0.0,
            dz: 0.0,
            ignore: None,
        }
    }

    /// A box of `radius` and `height` standing at `z` moving flat
    pub fn mover(start: Vec2, delta: Vec2, radius: f32, z: f32, height: f32) -> Self {
        Self {
            start,
            delta,
            radius,
            z,
            height,
            dz: 0.0,
            ignore: None,
        }
    }

    /// Give the path a vertical component
    pub fn with_z(mut self, z: f32, dz: f32) -> Self {
        self.z = z;
        self.dz = dz;
        self
    }

    pub fn ignoring(mut self, thing: ThingId) -> Self {
        self.ignore = Some(thing);
        self
    }

    #[inline]
    pub fn point_at(&self, fraction: f32) -> Vec2 {
        self.start + self.delta * fraction
    }

    #[inline]
    pub fn z_at(&self, fraction: f32) -> f32 {
        self.z + self.dz * fraction
    }

    /// Length of the path in map units
    #[inline]
    pub fn length(&self) -> f32 {
        self.delta.length()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHit {
    pub line: usize,
    /// Side of the line the path started on, 0 is the front
    pub side: usize,
    pub fraction: f32,
    /// How much of the line is inside the box at contact
    pub overlap: f32,
    /// Unit normal facing the path start
    pub normal: Vec2,
    /// Where the centre of the box is at contact
    pub point: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThingHit {
    pub thing: ThingId,
    pub fraction: f32,
    pub overlap: f32,
    /// 0 if the x face was struck, 1 for y
    pub axis: usize,
    pub normal: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatHit {
    pub subsector: usize,
    pub sector: usize,
    /// False for the floor
    pub ceiling: bool,
    pub fraction: f32,
    pub point: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceHit {
    Line(LineHit),
    Thing(ThingHit),
    Flat(FlatHit),
}

impl TraceHit {
    #[inline]
    pub fn fraction(&self) -> f32 {
        match self {
            TraceHit::Line(h) => h.fraction,
            TraceHit::Thing(h) => h.fraction,
            TraceHit::Flat(h) => h.fraction,
        }
    }

    #[inline]
    fn overlap(&self) -> f32 {
        match self {
            TraceHit::Line(h) => h.overlap,
            TraceHit::Thing(h) => h.overlap,
            TraceHit::Flat(_) => 0.0,
        }
    }
}

pub type LineHook<'a> = &'a mut dyn FnMut(&LineHit) -> bool;
pub type ThingHook<'a> = &'a mut dyn FnMut(&ThingHit) -> bool;
pub type FlatHook<'a> = &'a mut dyn FnMut(&FlatHit) -> bool;

/// The callbacks for one trace. A missing hook means that kind of hit is not
/// gathered at all.
#[derive(Default)]
pub struct TraceHooks<'a> {
    pub line: Option<LineHook<'a>>,
    pub thing: Option<ThingHook<'a>>,
    pub flat: Option<FlatHook<'a>>,
}

impl<'a> TraceHooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_line(mut self, f: LineHook<'a>) -> Self {
        self.line = Some(f);
        self
    }

    pub fn on_thing(mut self, f: ThingHook<'a>) -> Self {
        self.thing = Some(f);
        self
    }

    pub fn on_flat(mut self, f: FlatHook<'a>) -> Self {
        self.flat = Some(f);
        self
    }
}

/// Sweep the request's box along its path. Returns true if every hook asked
/// to continue (or nothing was hit).
pub fn trace_move(
    map: &MapData,
    things: &MapObjects,
    ctx: &mut TraceContext,
    req: &TraceRequest,
    mut hooks: TraceHooks,
) -> bool {
    #[cfg(feature = "hprof")]
    profile!("trace_move");
    let hits = gather(
        map,
        things,
        ctx,
        req,
        hooks.line.is_some(),
        hooks.thing.is_some(),
        hooks.flat.is_some(),
    );
    for hit in hits.iter() {
        let go_on = match hit {
            TraceHit::Line(h) => hooks.line.as_mut().is_none_or(|f| f(h)),
            TraceHit::Thing(h) => hooks.thing.as_mut().is_none_or(|f| f(h)),
            TraceHit::Flat(h) => hooks.flat.as_mut().is_none_or(|f| f(h)),
        };
        if !go_on {
            return false;
        }
    }
    true
}

/// `trace_move` with a zero width box
pub fn trace_ray(
    map: &MapData,
    things: &MapObjects,
    ctx: &mut TraceContext,
    req: &TraceRequest,
    hooks: TraceHooks,
) -> bool {
    let req = TraceRequest {
        radius: 0.0,
        ..*req
    };
    trace_move(map, things, ctx, &req, hooks)
}

/// Visit every leaf a box of `radius` may touch on the path, nearest first
pub fn trace_subsectors(
    map: &MapData,
    start: Vec2,
    delta: Vec2,
    radius: f32,
    f: &mut impl FnMut(usize) -> bool,
) -> bool {
    map.visit_leaves(start, delta, radius, f)
}

/// Every hit on the path, sorted
pub fn gather(
    map: &MapData,
    things: &MapObjects,
    ctx: &mut TraceContext,
    req: &TraceRequest,
    want_lines: bool,
    want_things: bool,
    want_flats: bool,
) -> Vec<TraceHit> {
    ctx.begin(map.linedefs.len(), things.capacity());
    let mut hits = Vec::new();
    let reach = if want_things {
        req.radius + MAXRADIUS
    } else {
        req.radius
    };

    map.visit_leaves(req.start, req.delta, reach, &mut |ss| {
        let leaf = &map.subsectors[ss];
        if want_lines {
            for &seg in leaf.segs.iter() {
                let line = map.segments[seg].linedef;
                if !ctx.mark_line(line) {
                    continue;
                }
                if let Some(hit) = test_line(map, req, line) {
                    hits.push(TraceHit::Line(hit));
                }
            }
        }
        if want_things {
            for &id in leaf.things.iter() {
                if req.ignore == Some(id) || !ctx.mark_thing(id) {
                    continue;
                }
                if let Some(hit) = test_thing(things, req, id) {
                    hits.push(TraceHit::Thing(hit));
                }
            }
        }
        if want_flats {
            test_flats(map, req, ss, &mut hits);
        }
        true
    });

    sort_hits(&mut hits);
    hits
}

/// Nearest first. Hits within `FRAC_EPSILON` of the first of a run are one
/// group, ordered by the larger overlap.
fn sort_hits(hits: &mut [TraceHit]) {
    hits.sort_by(|a, b| a.fraction().total_cmp(&b.fraction()));
    let mut i = 0;
    while i < hits.len() {
        let base = hits[i].fraction();
        let mut j = i + 1;
        while j < hits.len() && hits[j].fraction() - base <= FRAC_EPSILON {
            j += 1;
        }
        if j - i > 1 {
            hits[i..j].sort_by(|a, b| b.overlap().total_cmp(&a.overlap()));
        }
        i = j;
    }
}

fn test_line(map: &MapData, req: &TraceRequest, line_num: usize) -> Option<LineHit> {
    let line = &map.linedefs[line_num];
    let side = line.point_on_side(req.start);
    let (fraction, normal) = if req.radius <= 0.0 {
        let (t, _) = segment_intersect(req.start, req.delta, line.v1, line.v2)?;
        let n = segment_normal(line.v1, line.v2);
        (t, if side == 0 { n } else { -n })
    } else {
        let hit = sweep_box_segment(req.start, req.delta, req.radius, line.v1, line.v2)?;
        (hit.fraction, hit.normal)
    };
    if req.delta.dot(normal) >= 0.0 {
        return None;
    }
    let point = req.point_at(fraction);
    Some(LineHit {
        line: line_num,
        side,
        fraction,
        overlap: segment_box_overlap(line.v1, line.v2, point, req.radius),
        normal,
        point,
    })
}

fn test_thing(things: &MapObjects, req: &TraceRequest, id: ThingId) -> Option<ThingHit> {
    let thing = things.get(id)?;
    let hit = sweep_box_box(req.start, req.delta, req.radius, thing.xy, thing.radius)?;
    if req.delta.dot(hit.normal) >= 0.0 {
        return None;
    }
    // Vertical overlap at contact
    let z = req.z_at(hit.fraction);
    if z > thing.z + thing.height || z + req.height < thing.z {
        return None;
    }
    let other = 1 - hit.axis.min(1);
    let p = req.point_at(hit.fraction);
    let lo = (p[other] - req.radius).max(thing.xy[other] - thing.radius);
    let hi = (p[other] + req.radius).min(thing.xy[other] + thing.radius);
    Some(ThingHit {
        thing: id,
        fraction: hit.fraction,
        overlap: (hi - lo).max(0.0),
        axis: hit.axis.min(1),
        normal: hit.normal,
    })
}

fn test_flats(map: &MapData, req: &TraceRequest, ss: usize, hits: &mut Vec<TraceHit>) {
    if req.dz == 0.0 {
        return;
    }
    let leaf = &map.subsectors[ss];
    let sector = &map.sectors[leaf.sector];
    let (plane, from, ceiling) = if req.dz < 0.0 {
        (sector.floorheight, req.z, false)
    } else {
        (sector.ceilingheight, req.z + req.height, true)
    };
    let t = (plane - from) / req.dz;
    if !(0.0..=1.0).contains(&t) {
        return;
    }
    let point = req.point_at(t);
    if leaf.polygon.len() >= 3 {
        if !point_in_convex(&leaf.polygon, point, 0.5) {
            return;
        }
    } else if !leaf.bbox.contains(point, 0.5) {
        return;
    }
    hits.push(TraceHit::Flat(FlatHit {
        subsector: ss,
        sector: leaf.sector,
        ceiling,
        fraction: t,
        point,
    }));
}

/// Lines and things overlapping a box of `radius` at `centre`. Used for
/// position checks where nothing moves.
pub fn touching(
    map: &MapData,
    things: &MapObjects,
    ctx: &mut TraceContext,
    centre: Vec2,
    radius: f32,
    ignore: Option<ThingId>,
) -> (Vec<usize>, Vec<ThingId>) {
    ctx.begin(map.linedefs.len(), things.capacity());
    let bbox = BBox::from_path(centre, Vec2::ZERO, radius);
    let slack = Vec2::splat(radius);
    let mut lines = Vec::new();
    let mut found = Vec::new();
    map.visit_leaves(centre, Vec2::ZERO, radius + MAXRADIUS, &mut |ss| {
        let leaf = &map.subsectors[ss];
        for &seg in leaf.segs.iter() {
            let num = map.segments[seg].linedef;
            if !ctx.mark_line(num) {
                continue;
            }
            let line = &map.linedefs[num];
            if !line.bbox.intersects(&bbox) {
                continue;
            }
            if math::clip_segment_to_box(line.v1, line.v2, centre - slack, centre + slack)
                .is_some_and(|(t0, t1)| t1 > t0)
            {
                lines.push(num);
            }
        }
        for &id in leaf.things.iter() {
            if ignore == Some(id) || !ctx.mark_thing(id) {
                continue;
            }
            if let Some(t) = things.get(id) {
                let r = t.radius + radius;
                if (t.xy.x - centre.x).abs() < r && (t.xy.y - centre.y).abs() < r {
                    found.push(id);
                }
            }
        }
        true
    });
    (lines, found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_hit(fraction: f32, overlap: f32, line: usize) -> TraceHit {
        TraceHit::Line(LineHit {
            line,
            side: 0,
            fraction,
            overlap,
            normal: Vec2::X,
            point: Vec2::ZERO,
        })
    }

    #[test]
    fn ties_go_to_larger_overlap() {
        let mut hits = vec![
            line_hit(0.5, 1.0, 0),
            line_hit(0.2, 0.0, 1),
            line_hit(0.5 + 1e-7, 4.0, 2),
        ];
        sort_hits(&mut hits);
        let order: Vec<usize> = hits
            .iter()
            .map(|h| match h {
                TraceHit::Line(l) => l.line,
                _ => usize::MAX,
            })
            .collect();
        assert_eq!(order, vec![1, 2, 0]);
    }
}
