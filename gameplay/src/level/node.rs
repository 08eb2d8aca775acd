use glam::Vec2;
use math::{Trace, point_on_side};

use crate::level::map_data::MapData;
use crate::level::map_defs::{BBox, Node, NodeChild};

impl Node {
    /// R_PointOnSide
    ///
    /// Determine with cross-product which side of a splitting line the point is on
    #[inline]
    pub fn point_on_side(&self, v: Vec2) -> usize {
        point_on_side(self.trace(), v)
    }

    #[inline]
    pub fn trace(&self) -> Trace {
        Trace::new(self.xy, self.delta)
    }

    /// Signed distance from the partition, positive is the front
    #[inline]
    pub fn signed_distance(&self, v: Vec2) -> f32 {
        self.trace().signed_distance(v)
    }
}

impl MapData {
    /// R_PointInSubsector
    ///
    /// Walk from the root choosing the side the point is on. Always ends on a
    /// leaf. A map without nodes is a single subsector.
    pub fn point_in_subsector(&self, point: Vec2) -> usize {
        let mut child = match self.root {
            Some(c) => c,
            None => return 0,
        };
        loop {
            match child {
                NodeChild::SubSector(ss) => return ss,
                NodeChild::Node(n) => {
                    let node = &self.nodes[n];
                    child = node.children[node.point_on_side(point)];
                }
            }
        }
    }

    /// The sector containing `point`
    #[inline]
    pub fn find_sector(&self, point: Vec2) -> usize {
        self.subsectors[self.point_in_subsector(point)].sector
    }

    /// The BSP root. Subsector 0 when the map has no nodes.
    #[inline]
    pub fn root(&self) -> NodeChild {
        self.root.unwrap_or(NodeChild::SubSector(0))
    }

    /// Call `f` for every leaf a box of half width `radius` could touch while
    /// moving from `start` along `delta`. Leaves on the side of each partition
    /// nearest `start` come first. `f` returns false to stop early, in which
    /// case this returns false.
    pub fn visit_leaves(
        &self,
        start: Vec2,
        delta: Vec2,
        radius: f32,
        f: &mut impl FnMut(usize) -> bool,
    ) -> bool {
        let swept = BBox::from_path(start, delta, radius);
        self.visit_child(self.root(), start, delta, radius, &swept, f)
    }

    fn visit_child(
        &self,
        child: NodeChild,
        start: Vec2,
        delta: Vec2,
        radius: f32,
        swept: &BBox,
        f: &mut impl FnMut(usize) -> bool,
    ) -> bool {
        let node = match child {
            NodeChild::SubSector(ss) => {
                let leaf = &self.subsectors[ss];
                if !leaf.bbox.is_degenerate() && !leaf.bbox.expand(1.0).intersects(swept) {
                    return true;
                }
                return f(ss);
            }
            NodeChild::Node(n) => &self.nodes[n],
        };

        let len = node.delta.length();
        let (d_start, d_end, reach) = if len > f32::EPSILON {
            let n = Vec2::new(node.delta.y, -node.delta.x) / len;
            (
                node.signed_distance(start),
                node.signed_distance(start + delta),
                radius * (n.x.abs() + n.y.abs()),
            )
        } else {
            (0.0, 0.0, radius)
        };
        let near = node.point_on_side(start);
        let touches = [
            d_start.max(d_end) + reach > 0.0,
            d_start.min(d_end) - reach <= 0.0,
        ];

        for side in [near, near ^ 1] {
            if !touches[side] || !node.bboxes[side].expand(1.0).intersects(swept) {
                continue;
            }
            if !self.visit_child(node.children[side], start, delta, radius, swept, f) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::level::map_defs::{BBox, Node, NodeChild};

    #[test]
    fn node_sides() {
        let node = Node {
            xy: Vec2::new(0.0, 0.0),
            delta: Vec2::new(0.0, 64.0),
            bboxes: [BBox::default(); 2],
            children: [NodeChild::SubSector(0), NodeChild::SubSector(1)],
        };
        assert_eq!(node.point_on_side(Vec2::new(10.0, 10.0)), 0);
        assert_eq!(node.point_on_side(Vec2::new(-10.0, 10.0)), 1);
        // On the line is the back
        assert_eq!(node.point_on_side(Vec2::new(0.0, 10.0)), 1);
        assert!(node.signed_distance(Vec2::new(10.0, 0.0)) > 9.9);
    }
}
