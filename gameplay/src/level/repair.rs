//! One-time repair of subsector outlines.
//!
//! A subsector in the lumps is only the segs that lie on real lines. Where a
//! partition line cuts through open space there is no seg, so the leaf is not
//! closed. The outline is rebuilt from the partition lines on the path from
//! the root, clipped against each other and against the segs, so that every
//! leaf ends up with a closed convex polygon and a usable bounding box.

use std::collections::HashSet;
use std::time::Instant;

use glam::Vec2;
use log::{debug, warn};
use math::{Angle, Trace, clip_segment_to_box, line_line_intersection};

use crate::level::map_data::MapData;
use crate::level::map_defs::{BBox, NodeChild, Segment};

/// Slack allowed outside an ancestor partition half-plane
const PARTITION_SLACK: f32 = 0.1;
/// Slack allowed behind a seg of the leaf itself
const SEG_SLACK: f32 = -500.0;
/// Slack allowed outside the ancestor child box
const BBOX_SLACK: f32 = 1.0;
/// Points closer than this are the same point
const DEDUPE_DIST: f32 = 0.2;
/// Furthest an implicit corner is moved to meet a neighbour
const SEAM_SNAP_DIST: f32 = 4.0;

/// An ancestor node and the side of it the leaf is on
#[derive(Clone, Copy)]
struct Ancestor {
    node: usize,
    side: usize,
}

pub(crate) fn repair_subsectors(map: &mut MapData) {
    let start = Instant::now();
    let mut path = Vec::new();
    let mut leaf_paths = vec![Vec::new(); map.subsectors.len()];
    collect_paths(map, map.root(), &mut path, &mut leaf_paths);

    for (ss, ancestors) in leaf_paths.iter().enumerate() {
        build_polygon(map, ss, ancestors);
    }
    snap_seams(map);
    for ss in map.subsectors.iter_mut() {
        let mut bbox = BBox::default();
        for p in ss.polygon.iter() {
            bbox.add_point(*p);
        }
        ss.bbox = bbox;
    }
    fix_degenerate_boxes(map);
    add_missing_segs(map);

    debug!(
        "{}: Rebuilt {} subsector outlines, took: {:#?}",
        map.name,
        map.subsectors.len(),
        start.elapsed()
    );
}

fn collect_paths(
    map: &MapData,
    child: NodeChild,
    path: &mut Vec<Ancestor>,
    out: &mut [Vec<Ancestor>],
) {
    match child {
        NodeChild::SubSector(ss) => {
            if let Some(slot) = out.get_mut(ss) {
                *slot = path.clone();
            }
        }
        NodeChild::Node(n) => {
            for side in 0..2 {
                path.push(Ancestor { node: n, side });
                collect_paths(map, map.nodes[n].children[side], path, out);
                path.pop();
            }
        }
    }
}

fn seg_vertices(map: &MapData, ss: usize) -> Vec<Vec2> {
    let mut points = Vec::new();
    for &seg in map.subsectors[ss].segs.iter() {
        let seg = &map.segments[seg];
        push_unique(&mut points, seg.v1);
        push_unique(&mut points, seg.v2);
    }
    points
}

fn push_unique(points: &mut Vec<Vec2>, p: Vec2) {
    if points.iter().all(|q| q.distance(p) >= DEDUPE_DIST) {
        points.push(p);
    }
}

fn build_polygon(map: &mut MapData, ss: usize, ancestors: &[Ancestor]) {
    let seg_traces: Vec<Trace> = map.subsectors[ss]
        .segs
        .iter()
        .map(|&s| {
            let seg = &map.segments[s];
            Trace::new(seg.v1, seg.v2 - seg.v1)
        })
        .collect();
    let partitions: Vec<Trace> = ancestors.iter().map(|a| map.nodes[a.node].trace()).collect();
    let parent_box = ancestors
        .last()
        .map(|a| map.nodes[a.node].bboxes[a.side]);

    let keep = |p: Vec2| -> bool {
        for a in ancestors.iter() {
            let d = map.nodes[a.node].signed_distance(p);
            let inside = if a.side == 0 {
                d >= -PARTITION_SLACK
            } else {
                d <= PARTITION_SLACK
            };
            if !inside {
                return false;
            }
        }
        if seg_traces.iter().any(|t| t.signed_distance(p) < SEG_SLACK) {
            return false;
        }
        parent_box.is_none_or(|b| b.contains(p, BBOX_SLACK))
    };

    let mut points = seg_vertices(map, ss);
    for (i, a) in partitions.iter().enumerate() {
        for b in partitions[i + 1..].iter() {
            if let Some(p) = line_line_intersection(*a, *b) {
                if keep(p) {
                    push_unique(&mut points, p);
                }
            }
        }
        for s in seg_traces.iter() {
            if let Some(p) = line_line_intersection(*a, *s) {
                if keep(p) {
                    push_unique(&mut points, p);
                }
            }
        }
    }

    if points.len() < 3 {
        warn!(
            "{}: subsector {ss} outline has {} points, using seg vertices",
            map.name,
            points.len()
        );
        map.subsectors[ss].polygon = seg_vertices(map, ss);
        return;
    }
    sort_ccw(&mut points);
    map.subsectors[ss].polygon = points;
}

fn sort_ccw(points: &mut [Vec2]) {
    let centroid = points.iter().copied().sum::<Vec2>() / points.len() as f32;
    points.sort_by(|a, b| {
        let aa = Angle::from_vector(*a - centroid).rad();
        let ab = Angle::from_vector(*b - centroid).rad();
        aa.total_cmp(&ab)
    });
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let e = b - a;
    let len2 = e.length_squared();
    if len2 <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(e) / len2).clamp(0.0, 1.0);
    p.distance(a + e * t)
}

/// Move outline corners that were made up from partitions on to a vertex of
/// the neighbouring leaf if they do not already meet it. Rounding in the node
/// builder leaves small gaps otherwise.
fn snap_seams(map: &mut MapData) {
    let mut real = HashSet::new();
    for seg in map.segments.iter() {
        real.insert((seg.v1.x.to_bits(), seg.v1.y.to_bits()));
        real.insert((seg.v2.x.to_bits(), seg.v2.y.to_bits()));
    }
    let boxes: Vec<BBox> = map
        .subsectors
        .iter()
        .map(|ss| {
            let mut b = BBox::default();
            for p in ss.polygon.iter() {
                b.add_point(*p);
            }
            b.expand(SEAM_SNAP_DIST)
        })
        .collect();

    let mut snapped = 0;
    for ss in 0..map.subsectors.len() {
        for i in 0..map.subsectors[ss].polygon.len() {
            let p = map.subsectors[ss].polygon[i];
            if real.contains(&(p.x.to_bits(), p.y.to_bits())) {
                continue;
            }
            let mut joined = false;
            let mut nearest: Option<(f32, Vec2)> = None;
            for (other, other_box) in boxes.iter().enumerate() {
                if other == ss || !other_box.contains(p, 0.0) {
                    continue;
                }
                let poly = &map.subsectors[other].polygon;
                for (j, &q) in poly.iter().enumerate() {
                    let d = q.distance(p);
                    if d < DEDUPE_DIST
                        || distance_to_segment(p, q, poly[(j + 1) % poly.len()]) < DEDUPE_DIST
                    {
                        joined = true;
                        break;
                    }
                    if d <= SEAM_SNAP_DIST && nearest.is_none_or(|(nd, _)| d < nd) {
                        nearest = Some((d, q));
                    }
                }
                if joined {
                    break;
                }
            }
            if !joined {
                if let Some((_, q)) = nearest {
                    map.subsectors[ss].polygon[i] = q;
                    snapped += 1;
                }
            }
        }
    }
    debug!("{}: Snapped {snapped} seam vertices", map.name);
}

fn fix_degenerate_boxes(map: &mut MapData) {
    for ss in 0..map.subsectors.len() {
        if !map.subsectors[ss].bbox.is_degenerate() {
            continue;
        }
        let mut bbox = BBox::default();
        for p in seg_vertices(map, ss) {
            bbox.add_point(p);
        }
        map.subsectors[ss].bbox = bbox;
    }
}

/// Lines the node builder dropped still need to block. Give each one a seg in
/// every leaf its span crosses.
fn add_missing_segs(map: &mut MapData) {
    let mut has_seg = vec![false; map.linedefs.len()];
    for seg in map.segments.iter() {
        has_seg[seg.linedef] = true;
    }

    for line_num in 0..map.linedefs.len() {
        if has_seg[line_num] {
            continue;
        }
        let line = &map.linedefs[line_num];
        let mut new_segs = Vec::new();
        for (ss, leaf) in map.subsectors.iter().enumerate() {
            if !leaf.bbox.intersects(&line.bbox) {
                continue;
            }
            let Some((t0, t1)) =
                clip_segment_to_box(line.v1, line.v2, leaf.bbox.min(), leaf.bbox.max())
            else {
                continue;
            };
            if t1 - t0 <= f32::EPSILON {
                continue;
            }
            let v1 = line.v1 + line.delta * t0;
            let v2 = line.v1 + line.delta * t1;
            new_segs.push((
                ss,
                Segment {
                    v1,
                    v2,
                    offset: line.delta.length() * t0,
                    angle: Angle::from_vector(line.delta),
                    sidedef: line.front_sidedef,
                    linedef: line_num,
                    side: 0,
                    frontsector: line.frontsector,
                    backsector: if line.is_two_sided() {
                        line.backsector
                    } else {
                        None
                    },
                },
            ));
        }
        if !new_segs.is_empty() {
            warn!(
                "{}: linedef {line_num} had no segs, added {} synthetic",
                map.name,
                new_segs.len()
            );
        }
        for (ss, seg) in new_segs {
            map.segments.push(seg);
            let idx = map.segments.len() - 1;
            map.subsectors[ss].segs.push(idx);
        }
    }
}
