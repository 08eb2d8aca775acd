//! Fixed-layout map lump records.
//!
//! Every record here is a little-endian array element of a map lump. The
//! collaborator that walks the WAD directory hands over the raw lump bytes and
//! `parse_lump` turns them in to typed records, refusing any lump whose length
//! isn't an exact multiple of the record size.

use crate::error::LumpError;

/// Set on a node child index when the child is a subsector
pub const IS_SSECTOR_MASK: u16 = 0x8000;
/// Used in linedef sidedef fields to mean "no side"
pub const NO_SIDEDEF: u16 = 0xFFFF;

/// A record in a map lump. `SIZE` is the on-disk size in bytes.
pub trait LumpRecord: Sized {
    const NAME: &'static str;
    const SIZE: usize;

    /// `bytes` is always exactly `SIZE` long
    fn parse(bytes: &[u8]) -> Self;

    fn write(&self, out: &mut Vec<u8>);
}

#[inline]
fn read_i16(bytes: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline]
fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Lump names are 8 bytes padded with NUL. Doom is case insensitive about
/// them so they are uppercased here once.
fn read_name(bytes: &[u8], offset: usize) -> String {
    let raw = &bytes[offset..offset + 8];
    let end = raw.iter().position(|b| *b == 0).unwrap_or(8);
    String::from_utf8_lossy(&raw[..end]).to_ascii_uppercase()
}

fn write_name(name: &str, out: &mut Vec<u8>) {
    let mut buf = [0u8; 8];
    for (i, b) in name.bytes().take(8).enumerate() {
        buf[i] = b;
    }
    out.extend_from_slice(&buf);
}

/// Parse an entire lump in to records
pub fn parse_lump<T: LumpRecord>(bytes: &[u8]) -> Result<Vec<T>, LumpError> {
    if bytes.len() % T::SIZE != 0 {
        return Err(LumpError::BadLumpSize {
            lump: T::NAME,
            size: bytes.len(),
            record: T::SIZE,
        });
    }
    Ok(bytes.chunks_exact(T::SIZE).map(T::parse).collect())
}

/// Serialise records back to lump bytes
pub fn write_lump<T: LumpRecord>(records: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(records.len() * T::SIZE);
    for r in records {
        r.write(&mut out);
    }
    out
}

/// A `Thing` describes only the position, type, and angle + spawn flags
///
/// | Field Size | Data Type | Content    |
/// |------------|-----------|------------|
/// |  0x00-0x01 |    i16    | X Position |
/// |  0x02-0x03 |    i16    | Y Position |
/// |  0x04-0x05 |    i16    | Angle      |
/// |  0x06-0x07 |    i16    | Type       |
/// |  0x08-0x09 |    i16    | Flags      |
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WadThing {
    pub x: i16,
    pub y: i16,
    pub angle: i16,
    pub kind: i16,
    pub flags: i16,
}

impl WadThing {
    pub const fn new(x: i16, y: i16, angle: i16, kind: i16, flags: i16) -> WadThing {
        WadThing {
            x,
            y,
            angle,
            kind,
            flags,
        }
    }
}

impl LumpRecord for WadThing {
    const NAME: &'static str = "THINGS";
    const SIZE: usize = 10;

    fn parse(b: &[u8]) -> Self {
        WadThing::new(
            read_i16(b, 0),
            read_i16(b, 2),
            read_i16(b, 4),
            read_i16(b, 6),
            read_i16(b, 8),
        )
    }

    fn write(&self, out: &mut Vec<u8>) {
        for v in [self.x, self.y, self.angle, self.kind, self.flags] {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }
}

/// | Field Size | Data Type | Content      |
/// |------------|-----------|--------------|
/// |  0x00-0x01 |    i16    | X Coordinate |
/// |  0x02-0x03 |    i16    | Y Coordinate |
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct WadVertex {
    pub x: i16,
    pub y: i16,
}

impl WadVertex {
    pub const fn new(x: i16, y: i16) -> WadVertex {
        WadVertex { x, y }
    }
}

impl LumpRecord for WadVertex {
    const NAME: &'static str = "VERTEXES";
    const SIZE: usize = 4;

    fn parse(b: &[u8]) -> Self {
        WadVertex::new(read_i16(b, 0), read_i16(b, 2))
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.x.to_le_bytes());
        out.extend_from_slice(&self.y.to_le_bytes());
    }
}

/// Each linedef represents a line from one of the VERTEXES to another.
///
///| Field Size | Data Type      | Content                                   |
///|------------|----------------|-------------------------------------------|
///|  0x00-0x01 | Unsigned short | Start vertex                              |
///|  0x02-0x03 | Unsigned short | End vertex                                |
///|  0x04-0x05 | Unsigned short | Flags                                     |
///|  0x06-0x07 | Unsigned short | Line type / Action                        |
///|  0x08-0x09 | Unsigned short | Sector tag                                |
///|  0x0A-0x0B | Unsigned short | Front sidedef ( 0xFFFF side not present ) |
///|  0x0C-0x0D | Unsigned short | Back sidedef  ( 0xFFFF side not present ) |
///
/// The first side is the right side when walking from start to end vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadLineDef {
    pub start_vertex: u16,
    pub end_vertex: u16,
    pub flags: u16,
    /// Unsigned because the generalized ranges go well past `i16::MAX`
    pub special: u16,
    pub sector_tag: i16,
    pub front_sidedef: u16,
    pub back_sidedef: Option<u16>,
}

impl WadLineDef {
    pub const fn new(
        start_vertex: u16,
        end_vertex: u16,
        flags: u16,
        special: u16,
        sector_tag: i16,
        front_sidedef: u16,
        back_sidedef: Option<u16>,
    ) -> WadLineDef {
        WadLineDef {
            start_vertex,
            end_vertex,
            flags,
            special,
            sector_tag,
            front_sidedef,
            back_sidedef,
        }
    }
}

impl LumpRecord for WadLineDef {
    const NAME: &'static str = "LINEDEFS";
    const SIZE: usize = 14;

    fn parse(b: &[u8]) -> Self {
        let back = read_u16(b, 12);
        WadLineDef::new(
            read_u16(b, 0),
            read_u16(b, 2),
            read_u16(b, 4),
            read_u16(b, 6),
            read_i16(b, 8),
            read_u16(b, 10),
            (back != NO_SIDEDEF).then_some(back),
        )
    }

    fn write(&self, out: &mut Vec<u8>) {
        for v in [self.start_vertex, self.end_vertex, self.flags, self.special] {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out.extend_from_slice(&self.sector_tag.to_le_bytes());
        out.extend_from_slice(&self.front_sidedef.to_le_bytes());
        out.extend_from_slice(&self.back_sidedef.unwrap_or(NO_SIDEDEF).to_le_bytes());
    }
}

/// A sidedef is a definition of what wall texture(s) to draw along a
/// `LineDef`, and a group of sidedefs outline the space of a `Sector`
///
/// Each `SideDef` record is 30 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadSideDef {
    pub x_offset: i16,
    pub y_offset: i16,
    pub upper_tex: String,
    pub lower_tex: String,
    pub middle_tex: String,
    pub sector: u16,
}

impl WadSideDef {
    pub fn new(
        x_offset: i16,
        y_offset: i16,
        upper_tex: &str,
        lower_tex: &str,
        middle_tex: &str,
        sector: u16,
    ) -> WadSideDef {
        WadSideDef {
            x_offset,
            y_offset,
            upper_tex: upper_tex.to_ascii_uppercase(),
            lower_tex: lower_tex.to_ascii_uppercase(),
            middle_tex: middle_tex.to_ascii_uppercase(),
            sector,
        }
    }
}

impl LumpRecord for WadSideDef {
    const NAME: &'static str = "SIDEDEFS";
    const SIZE: usize = 30;

    fn parse(b: &[u8]) -> Self {
        WadSideDef {
            x_offset: read_i16(b, 0),
            y_offset: read_i16(b, 2),
            upper_tex: read_name(b, 4),
            lower_tex: read_name(b, 12),
            middle_tex: read_name(b, 20),
            sector: read_u16(b, 28),
        }
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.x_offset.to_le_bytes());
        out.extend_from_slice(&self.y_offset.to_le_bytes());
        write_name(&self.upper_tex, out);
        write_name(&self.lower_tex, out);
        write_name(&self.middle_tex, out);
        out.extend_from_slice(&self.sector.to_le_bytes());
    }
}

/// A `Sector` is a horizontal (east-west and north-south) area of the level
/// where a floor height and ceiling height is defined.
///
/// Each `Sector` record is 26 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadSector {
    pub floor_height: i16,
    pub ceil_height: i16,
    pub floor_tex: String,
    pub ceil_tex: String,
    /// Light level from 0-255
    pub light_level: i16,
    /// This determines some area-effects called special sectors
    pub kind: i16,
    /// Links the sector to linedefs carrying the same tag
    pub tag: i16,
}

impl WadSector {
    pub fn new(
        floor_height: i16,
        ceil_height: i16,
        floor_tex: &str,
        ceil_tex: &str,
        light_level: i16,
        kind: i16,
        tag: i16,
    ) -> WadSector {
        WadSector {
            floor_height,
            ceil_height,
            floor_tex: floor_tex.to_ascii_uppercase(),
            ceil_tex: ceil_tex.to_ascii_uppercase(),
            light_level,
            kind,
            tag,
        }
    }
}

impl LumpRecord for WadSector {
    const NAME: &'static str = "SECTORS";
    const SIZE: usize = 26;

    fn parse(b: &[u8]) -> Self {
        WadSector {
            floor_height: read_i16(b, 0),
            ceil_height: read_i16(b, 2),
            floor_tex: read_name(b, 4),
            ceil_tex: read_name(b, 12),
            light_level: read_i16(b, 20),
            kind: read_i16(b, 22),
            tag: read_i16(b, 24),
        }
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.floor_height.to_le_bytes());
        out.extend_from_slice(&self.ceil_height.to_le_bytes());
        write_name(&self.floor_tex, out);
        write_name(&self.ceil_tex, out);
        for v in [self.light_level, self.kind, self.tag] {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }
}

/// The Segments (SEGS) are in a sequential order determined by the `SubSector`
/// (SSECTOR), which are part of the NODES recursive tree
///
/// | Field Size | Data Type | Content                              |
/// |------------|-----------|--------------------------------------|
/// |  0x00-0x01 |    u16    | Index to vertex the line starts from |
/// |  0x02-0x03 |    u16    | Index to vertex the line ends with   |
/// |  0x04-0x05 |    i16    | Angle in Binary Angle Measurement (BAMS) |
/// |  0x06-0x07 |    u16    | Index to the linedef this seg travels along|
/// |  0x08-0x09 |    i16    | 0 == follows the line, 1 == opposite direction |
/// |  0x0A-0x0B |    i16    | Distance along the linedef this seg starts at |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadSegment {
    pub start_vertex: u16,
    pub end_vertex: u16,
    pub angle: i16,
    pub linedef: u16,
    /// The `side`, 0 = front/right, 1 = back/left
    pub side: i16,
    pub offset: i16,
}

impl WadSegment {
    pub const fn new(
        start_vertex: u16,
        end_vertex: u16,
        angle: i16,
        linedef: u16,
        side: i16,
        offset: i16,
    ) -> WadSegment {
        WadSegment {
            start_vertex,
            end_vertex,
            angle,
            linedef,
            side,
            offset,
        }
    }
}

impl LumpRecord for WadSegment {
    const NAME: &'static str = "SEGS";
    const SIZE: usize = 12;

    fn parse(b: &[u8]) -> Self {
        WadSegment::new(
            read_u16(b, 0),
            read_u16(b, 2),
            read_i16(b, 4),
            read_u16(b, 6),
            read_i16(b, 8),
            read_i16(b, 10),
        )
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.start_vertex.to_le_bytes());
        out.extend_from_slice(&self.end_vertex.to_le_bytes());
        out.extend_from_slice(&self.angle.to_le_bytes());
        out.extend_from_slice(&self.linedef.to_le_bytes());
        out.extend_from_slice(&self.side.to_le_bytes());
        out.extend_from_slice(&self.offset.to_le_bytes());
    }
}

/// A `SubSector` divides up all the SECTORS into convex polygons. They are then
/// referenced through the NODES resources. There will be (number of nodes) + 1.
///
/// | Field Size | Data Type | Content                            |
/// |------------|-----------|------------------------------------|
/// |  0x00-0x01 |    u16    | How many segments line this sector |
/// |  0x02-0x03 |    u16    | Index to the starting segment      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadSubSector {
    pub seg_count: u16,
    pub start_seg: u16,
}

impl WadSubSector {
    pub const fn new(seg_count: u16, start_seg: u16) -> WadSubSector {
        WadSubSector {
            seg_count,
            start_seg,
        }
    }
}

impl LumpRecord for WadSubSector {
    const NAME: &'static str = "SSECTORS";
    const SIZE: usize = 4;

    fn parse(b: &[u8]) -> Self {
        WadSubSector::new(read_u16(b, 0), read_u16(b, 2))
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.seg_count.to_le_bytes());
        out.extend_from_slice(&self.start_seg.to_le_bytes());
    }
}

/// The splitting line used for a node, a box for each side of the split, and
/// the children. **The last node is the root node**
///
/// | Field Size | Content                                          |
/// |------------|--------------------------------------------------|
/// | 0x00-0x03  | Partition line start x, y                        |
/// | 0x04-0x07  | Partition line delta x, y                        |
/// | 0x08-0x0F  | Right (front) box: top, bottom, left, right      |
/// | 0x10-0x17  | Left (back) box: top, bottom, left, right        |
/// | 0x18-0x19  | Right (front) child index + subsector indicator  |
/// | 0x1A-0x1B  | Left (back) child index + subsector indicator    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadNode {
    pub x: i16,
    pub y: i16,
    pub dx: i16,
    pub dy: i16,
    /// `[top, bottom, left, right]` for the right then the left child
    pub bounding_boxes: [[i16; 4]; 2],
    /// Right then left. `IS_SSECTOR_MASK` set means the low bits index a
    /// subsector
    pub child_index: [u16; 2],
}

impl WadNode {
    pub const fn new(
        x: i16,
        y: i16,
        dx: i16,
        dy: i16,
        bounding_boxes: [[i16; 4]; 2],
        right_child_id: u16,
        left_child_id: u16,
    ) -> WadNode {
        WadNode {
            x,
            y,
            dx,
            dy,
            bounding_boxes,
            child_index: [right_child_id, left_child_id],
        }
    }
}

impl LumpRecord for WadNode {
    const NAME: &'static str = "NODES";
    const SIZE: usize = 28;

    fn parse(b: &[u8]) -> Self {
        let mut bounding_boxes = [[0i16; 4]; 2];
        for (side, bbox) in bounding_boxes.iter_mut().enumerate() {
            for (i, v) in bbox.iter_mut().enumerate() {
                *v = read_i16(b, 8 + side * 8 + i * 2);
            }
        }
        WadNode::new(
            read_i16(b, 0),
            read_i16(b, 2),
            read_i16(b, 4),
            read_i16(b, 6),
            bounding_boxes,
            read_u16(b, 24),
            read_u16(b, 26),
        )
    }

    fn write(&self, out: &mut Vec<u8>) {
        for v in [self.x, self.y, self.dx, self.dy] {
            out.extend_from_slice(&v.to_le_bytes());
        }
        for bbox in &self.bounding_boxes {
            for v in bbox {
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
        out.extend_from_slice(&self.child_index[0].to_le_bytes());
        out.extend_from_slice(&self.child_index[1].to_le_bytes());
    }
}

/// Only the `BLOCKMAP` header is consumed. The block lists themselves are not
/// needed since broad-phase goes through the BSP leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WadBlockMapHeader {
    /// Leftmost X coord
    pub x_origin: i16,
    /// Bottommost Y coord
    pub y_origin: i16,
    pub columns: u16,
    pub rows: u16,
}

impl WadBlockMapHeader {
    pub const SIZE: usize = 8;

    pub fn parse(bytes: &[u8]) -> Result<Self, LumpError> {
        if bytes.len() < Self::SIZE {
            return Err(LumpError::ShortHeader {
                lump: "BLOCKMAP",
                size: bytes.len(),
            });
        }
        Ok(WadBlockMapHeader {
            x_origin: read_i16(bytes, 0),
            y_origin: read_i16(bytes, 2),
            columns: read_u16(bytes, 4),
            rows: read_u16(bytes, 6),
        })
    }
}
