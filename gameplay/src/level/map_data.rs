use std::collections::HashMap;
use std::time::Instant;

use glam::Vec2;
use log::{debug, info};
use math::Angle;
use wad::{IS_SSECTOR_MASK, WadMap, WadThing};

use crate::error::LoadError;
use crate::level::flags::LineDefFlags;
use crate::level::map_defs::{
    BBox, LineDef, Node, NodeChild, Sector, Segment, SideDef, SlopeType, SubSector,
};
use crate::level::repair;
use crate::PicData;

/// The gap between the sectors either side of a two sided line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOpening {
    pub top: f32,
    pub bottom: f32,
    pub range: f32,
    pub lowfloor: f32,
}

/// Everything static about a level plus the mutable sector, line and side
/// state the specials change.
///
/// Records reference each other by index in to the arrays here. The arrays
/// are sized once at load and never grow afterwards, apart from synthetic segs
/// added by the load time repair.
#[derive(Debug, Clone, Default)]
pub struct MapData {
    pub name: String,
    things: Vec<WadThing>,
    pub vertexes: Vec<Vec2>,
    pub linedefs: Vec<LineDef>,
    pub sectors: Vec<Sector>,
    pub sidedefs: Vec<SideDef>,
    pub subsectors: Vec<SubSector>,
    pub segments: Vec<Segment>,
    pub nodes: Vec<Node>,
    pub(crate) root: Option<NodeChild>,
    sector_tags: HashMap<i16, Vec<usize>>,
    line_tags: HashMap<i16, Vec<usize>>,
    checksum: u32,
}

fn check_ref(
    kind: &'static str,
    index: usize,
    target: &'static str,
    value: usize,
    count: usize,
) -> Result<usize, LoadError> {
    if value >= count {
        return Err(LoadError::BadReference {
            kind,
            index,
            target,
            value,
            count,
        });
    }
    Ok(value)
}

impl MapData {
    /// Build the runtime map. Any out of range reference fails the whole load.
    ///
    /// Doom function name `P_SetupLevel` (the geometry half)
    pub fn load(map: &WadMap, pic_data: &mut PicData) -> Result<Self, LoadError> {
        if map.sectors.is_empty() {
            return Err(LoadError::Empty("sectors"));
        }
        if map.linedefs.is_empty() {
            return Err(LoadError::Empty("linedefs"));
        }
        if map.subsectors.is_empty() {
            return Err(LoadError::Empty("subsectors"));
        }

        let mut data = MapData {
            name: map.name.clone(),
            things: map.things.clone(),
            ..MapData::default()
        };
        info!("{}: Loaded {} things", data.name, data.things.len());

        data.vertexes = map
            .vertexes
            .iter()
            .map(|v| Vec2::new(v.x as f32, v.y as f32))
            .collect();
        data.load_sectors(map, pic_data);
        data.load_sidedefs(map, pic_data)?;
        data.load_linedefs(map)?;
        data.fix_vertices(map)?;
        data.load_segments(map)?;
        data.load_subsectors(map)?;
        data.load_nodes(map)?;

        data.link_sector_lines();
        data.build_tag_lists();

        repair::repair_subsectors(&mut data);
        data.checksum = data.compute_checksum();
        info!(
            "{}: Ready, {} subsectors, {} segs, checksum {:08x}",
            data.name,
            data.subsectors.len(),
            data.segments.len(),
            data.checksum
        );
        Ok(data)
    }

    fn load_sectors(&mut self, map: &WadMap, pic_data: &mut PicData) {
        self.sectors = map
            .sectors
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Sector::new(
                    i,
                    s.floor_height as f32,
                    s.ceil_height as f32,
                    pic_data.intern_flat(&s.floor_tex),
                    pic_data.intern_flat(&s.ceil_tex),
                    s.light_level as i32,
                    s.kind,
                    s.tag,
                )
            })
            .collect();
        info!("{}: Loaded {} sectors", self.name, self.sectors.len());
    }

    fn load_sidedefs(&mut self, map: &WadMap, pic_data: &mut PicData) -> Result<(), LoadError> {
        let count = self.sectors.len();
        self.sidedefs = map
            .sidedefs
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Ok(SideDef {
                    textureoffset: s.x_offset as f32,
                    rowoffset: s.y_offset as f32,
                    toptexture: pic_data.intern_wallpic(&s.upper_tex),
                    bottomtexture: pic_data.intern_wallpic(&s.lower_tex),
                    midtexture: pic_data.intern_wallpic(&s.middle_tex),
                    sector: check_ref("sidedef", i, "sector", s.sector as usize, count)?,
                })
            })
            .collect::<Result<_, LoadError>>()?;
        info!("{}: Loaded {} sidedefs", self.name, self.sidedefs.len());
        Ok(())
    }

    fn load_linedefs(&mut self, map: &WadMap) -> Result<(), LoadError> {
        let nv = self.vertexes.len();
        let ns = self.sidedefs.len();
        let mut linedefs = Vec::with_capacity(map.linedefs.len());
        for (num, l) in map.linedefs.iter().enumerate() {
            let v1 = self.vertexes[check_ref("linedef", num, "vertex", l.start_vertex as usize, nv)?];
            let v2 = self.vertexes[check_ref("linedef", num, "vertex", l.end_vertex as usize, nv)?];
            let front = check_ref("linedef", num, "sidedef", l.front_sidedef as usize, ns)?;
            let back = match l.back_sidedef {
                Some(b) => Some(check_ref("linedef", num, "sidedef", b as usize, ns)?),
                None => None,
            };
            let mut flags = l.flags as u32;
            if back.is_none() && LineDefFlags::TwoSided.is_set(flags) {
                debug!("{}: linedef {num} is flagged two sided without a back", self.name);
                flags &= !(LineDefFlags::TwoSided as u32);
            }

            let delta = v2 - v1;
            let slopetype = if delta.x == 0.0 {
                SlopeType::Vertical
            } else if delta.y == 0.0 {
                SlopeType::Horizontal
            } else if delta.y / delta.x > 0.0 {
                SlopeType::Positive
            } else {
                SlopeType::Negative
            };

            linedefs.push(LineDef {
                num,
                v1,
                v2,
                delta,
                flags,
                special: l.special as i16,
                tag: l.sector_tag,
                bbox: BBox::new(v1, v2),
                slopetype,
                front_sidedef: front,
                back_sidedef: back,
                frontsector: self.sidedefs[front].sector,
                backsector: back.map(|b| self.sidedefs[b].sector),
                switch_action: None,
            });
        }
        self.linedefs = linedefs;
        info!("{}: Loaded {} linedefs", self.name, self.linedefs.len());
        Ok(())
    }

    /// Remove slime trails. Seg vertices that are not endpoints of their
    /// linedef were rounded to integers by the node builder, so move them back
    /// on to the line by projecting them. Axis aligned lines round without
    /// error and are skipped.
    ///
    /// killough 10/98
    fn fix_vertices(&mut self, map: &WadMap) -> Result<(), LoadError> {
        let start = Instant::now();
        let nv = self.vertexes.len();
        let nl = self.linedefs.len();
        let mut hit = vec![false; nv];
        let mut moved = 0;

        for (i, seg) in map.segs.iter().enumerate() {
            let linedef = &self.linedefs[check_ref("seg", i, "linedef", seg.linedef as usize, nl)?];
            if linedef.delta.x == 0.0 || linedef.delta.y == 0.0 {
                continue;
            }
            for v_idx in [seg.start_vertex as usize, seg.end_vertex as usize] {
                check_ref("seg", i, "vertex", v_idx, nv)?;
                if hit[v_idx] {
                    continue;
                }
                hit[v_idx] = true;
                let v = self.vertexes[v_idx];
                if v == linedef.v1 || v == linedef.v2 {
                    continue;
                }
                let dx2 = linedef.delta.x * linedef.delta.x;
                let dy2 = linedef.delta.y * linedef.delta.y;
                let dxy = linedef.delta.x * linedef.delta.y;
                let s = dx2 + dy2;
                let (x0, y0) = (v.x, v.y);
                let (x1, y1) = (linedef.v1.x, linedef.v1.y);
                self.vertexes[v_idx] = Vec2::new(
                    (dx2 * x0 + dy2 * x1 + dxy * (y0 - y1)) / s,
                    (dy2 * y0 + dx2 * y1 + dxy * (x0 - x1)) / s,
                );
                moved += 1;
            }
        }

        debug!(
            "{}: Fixed {moved} map vertices, took: {:#?}",
            self.name,
            start.elapsed()
        );
        Ok(())
    }

    fn load_segments(&mut self, map: &WadMap) -> Result<(), LoadError> {
        let nv = self.vertexes.len();
        let mut segments = Vec::with_capacity(map.segs.len());
        for (i, ms) in map.segs.iter().enumerate() {
            let v1 = self.vertexes[check_ref("seg", i, "vertex", ms.start_vertex as usize, nv)?];
            let v2 = self.vertexes[check_ref("seg", i, "vertex", ms.end_vertex as usize, nv)?];
            // Checked by the vertex fix
            let linedef = &self.linedefs[ms.linedef as usize];
            let side = (ms.side != 0) as usize;
            let sidedef = linedef.sidedef(side).ok_or(LoadError::BadReference {
                kind: "seg",
                index: i,
                target: "back sidedef",
                value: side,
                count: 1,
            })?;
            let backsector = if linedef.is_two_sided() {
                linedef.sector(side ^ 1)
            } else {
                None
            };
            segments.push(Segment {
                v1,
                v2,
                offset: ms.offset as f32,
                angle: Angle::from_vector(v2 - v1),
                sidedef,
                linedef: linedef.num,
                side,
                frontsector: self.sidedefs[sidedef].sector,
                backsector,
            });
        }
        self.segments = segments;
        info!("{}: Loaded {} segs", self.name, self.segments.len());
        Ok(())
    }

    fn load_subsectors(&mut self, map: &WadMap) -> Result<(), LoadError> {
        let count = self.segments.len();
        let mut subsectors = Vec::with_capacity(map.subsectors.len());
        for (i, s) in map.subsectors.iter().enumerate() {
            let first = s.start_seg as usize;
            let end = first + s.seg_count as usize;
            if s.seg_count == 0 || end > count {
                return Err(LoadError::BadReference {
                    kind: "subsector",
                    index: i,
                    target: "seg",
                    value: end,
                    count,
                });
            }
            subsectors.push(SubSector {
                sector: self.segments[first].frontsector,
                segs: (first..end).collect(),
                ..SubSector::default()
            });
        }
        self.subsectors = subsectors;
        info!("{}: Loaded {} subsectors", self.name, self.subsectors.len());
        Ok(())
    }

    fn load_nodes(&mut self, map: &WadMap) -> Result<(), LoadError> {
        let nn = map.nodes.len();
        let nss = self.subsectors.len();
        let mut nodes = Vec::with_capacity(nn);
        for (i, n) in map.nodes.iter().enumerate() {
            let mut children = [NodeChild::SubSector(0); 2];
            for (side, raw) in n.child_index.iter().enumerate() {
                children[side] = if raw & IS_SSECTOR_MASK != 0 {
                    let ss = (raw & !IS_SSECTOR_MASK) as usize;
                    NodeChild::SubSector(check_ref("node", i, "subsector", ss, nss)?)
                } else {
                    // children are stored before their parent, anything else could loop
                    NodeChild::Node(check_ref("node", i, "node", *raw as usize, i)?)
                };
            }
            // top, bottom, left, right
            let bboxes = n.bounding_boxes.map(|b| BBox {
                top: b[0] as f32,
                bottom: b[1] as f32,
                left: b[2] as f32,
                right: b[3] as f32,
            });
            nodes.push(Node {
                xy: Vec2::new(n.x as f32, n.y as f32),
                delta: Vec2::new(n.dx as f32, n.dy as f32),
                bboxes,
                children,
            });
        }
        self.nodes = nodes;
        self.root = Some(if self.nodes.is_empty() {
            NodeChild::SubSector(0)
        } else {
            NodeChild::Node(self.nodes.len() - 1)
        });
        info!("{}: Loaded {} nodes", self.name, self.nodes.len());
        Ok(())
    }

    /// Give each sector its bordering lines, blockbox and sound origin
    fn link_sector_lines(&mut self) {
        for line in self.linedefs.iter() {
            let front = &mut self.sectors[line.frontsector];
            front.lines.push(line.num);
            front.blockbox.add_point(line.v1);
            front.blockbox.add_point(line.v2);
            if let Some(back) = line.backsector {
                if back != line.frontsector {
                    let back = &mut self.sectors[back];
                    back.lines.push(line.num);
                    back.blockbox.add_point(line.v1);
                    back.blockbox.add_point(line.v2);
                }
            }
        }
        for sector in self.sectors.iter_mut() {
            if sector.lines.is_empty() {
                debug!("{}: sector {} has no lines", self.name, sector.num);
                continue;
            }
            sector.sound_origin = sector.blockbox.centre();
        }
    }

    fn build_tag_lists(&mut self) {
        self.sector_tags.clear();
        self.line_tags.clear();
        for s in self.sectors.iter().filter(|s| s.tag != 0) {
            self.sector_tags.entry(s.tag).or_default().push(s.num);
        }
        for l in self.linedefs.iter().filter(|l| l.tag != 0) {
            self.line_tags.entry(l.tag).or_default().push(l.num);
        }
    }

    fn compute_checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for v in self.vertexes.iter() {
            hasher.update(&v.x.to_le_bytes());
            hasher.update(&v.y.to_le_bytes());
        }
        for l in self.linedefs.iter() {
            hasher.update(&l.special.to_le_bytes());
            hasher.update(&l.tag.to_le_bytes());
            hasher.update(&l.flags.to_le_bytes());
        }
        for s in self.sectors.iter() {
            hasher.update(&s.floorheight.to_le_bytes());
            hasher.update(&s.ceilingheight.to_le_bytes());
            hasher.update(&s.special.to_le_bytes());
        }
        for ss in self.subsectors.iter() {
            for p in ss.polygon.iter() {
                hasher.update(&p.x.to_le_bytes());
                hasher.update(&p.y.to_le_bytes());
            }
        }
        hasher.finalize()
    }

    /// CRC of the geometry as loaded
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn things(&self) -> &[WadThing] {
        &self.things
    }

    /// Sectors carrying `tag`. Tag 0 matches nothing.
    pub fn sectors_by_tag(&self, tag: i16) -> &[usize] {
        self.sector_tags
            .get(&tag)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Lines carrying `tag`. Tag 0 matches nothing.
    pub fn lines_by_tag(&self, tag: i16) -> &[usize] {
        self.line_tags
            .get(&tag)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The sector on the other side of `line` from `sector`
    pub fn next_sector(&self, line: usize, sector: usize) -> Option<usize> {
        let line = &self.linedefs[line];
        if !line.is_two_sided() {
            return None;
        }
        if line.frontsector == sector {
            return line.backsector;
        }
        Some(line.frontsector)
    }

    /// P_LineOpening
    ///
    /// The vertical gap through a two sided line. `None` for one sided lines.
    pub fn line_opening(&self, line: usize) -> Option<LineOpening> {
        let line = &self.linedefs[line];
        if !line.is_two_sided() {
            return None;
        }
        let front = &self.sectors[line.frontsector];
        let back = &self.sectors[line.backsector?];
        let top = front.ceilingheight.min(back.ceilingheight);
        let (bottom, lowfloor) = if front.floorheight > back.floorheight {
            (front.floorheight, back.floorheight)
        } else {
            (back.floorheight, front.floorheight)
        };
        Some(LineOpening {
            top,
            bottom,
            range: top - bottom,
            lowfloor,
        })
    }

    /// Every distinct sector sharing a two sided line with `sector`
    pub fn neighbours(&self, sector: usize) -> impl Iterator<Item = usize> + '_ {
        self.sectors[sector]
            .lines
            .iter()
            .filter_map(move |&l| self.next_sector(l, sector))
    }
}
