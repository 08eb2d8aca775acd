//! Level tests run on small synthetic maps.
//!
//! A strip map is a row of rectangular rooms along the x axis, each one
//! sector and one subsector. Rooms next to each other share a two sided line
//! running from the top vertex to the bottom one, so its front faces the room
//! on the left. The node tree splits at every shared line.

mod door_tests;
mod load_tests;
mod missile_tests;
mod mover_tests;
mod platform_tests;
mod repair_tests;
mod teleport_tests;
mod trace_tests;

use wad::{
    IS_SSECTOR_MASK, WadLineDef, WadMap, WadNode, WadSector, WadSegment, WadSideDef,
    WadSubSector, WadThing, WadVertex,
};

use crate::events::recorder::Recorder;
use crate::level::Level;
use crate::options::GameOptions;
use crate::pic::PicData;
use crate::thing::ThingId;

/// Size of every room along y
pub(super) const DEPTH: i16 = 256;

const WALL_TEX: &str = "STARTAN3";
const BLOCKING: u16 = 1;
const TWO_SIDED: u16 = 4;

#[derive(Debug, Clone)]
pub(super) struct Room {
    pub width: i16,
    pub floor: i16,
    pub ceiling: i16,
    pub light: i16,
    pub special: i16,
    pub tag: i16,
}

impl Room {
    pub fn new(width: i16, floor: i16, ceiling: i16) -> Self {
        Self {
            width,
            floor,
            ceiling,
            light: 160,
            special: 0,
            tag: 0,
        }
    }

    pub fn tagged(mut self, tag: i16) -> Self {
        self.tag = tag;
        self
    }

    pub fn special(mut self, special: i16) -> Self {
        self.special = special;
        self
    }
}

#[derive(Debug, Default, Clone)]
pub(super) struct Strip {
    rooms: Vec<Room>,
    /// Special and tag of the line on the left edge of each room after the
    /// first
    joins: Vec<(u16, i16)>,
    things: Vec<WadThing>,
}

impl Strip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room on the right end of the strip
    pub fn room(mut self, room: Room) -> Self {
        if !self.rooms.is_empty() {
            self.joins.push((0, 0));
        }
        self.rooms.push(room);
        self
    }

    /// Give the line joining the last room to the one before it a special
    pub fn join(mut self, special: u16, tag: i16) -> Self {
        if let Some(last) = self.joins.last_mut() {
            *last = (special, tag);
        }
        self
    }

    /// Place a map thing, flagged for every skill
    pub fn thing(mut self, x: i16, y: i16, angle: i16, kind: i16) -> Self {
        self.things.push(WadThing::new(x, y, angle, kind, 7));
        self
    }

    /// Left edge of each room, then the right edge of the strip
    fn edges(&self) -> Vec<i16> {
        let mut xs = vec![0];
        for room in self.rooms.iter() {
            let last = xs[xs.len() - 1];
            xs.push(last + room.width);
        }
        xs
    }

    /// Linedef on the left edge of room `k`, `k` from 1
    pub fn join_line(&self, k: usize) -> usize {
        2 * self.rooms.len() + 1 + k
    }

    pub fn build(&self) -> WadMap {
        let n = self.rooms.len();
        let xs = self.edges();
        // vertex on the bottom or top of edge k
        let v = |k: usize, top: bool| (2 * k + top as usize) as u16;

        let vertexes = xs
            .iter()
            .flat_map(|&x| [WadVertex::new(x, 0), WadVertex::new(x, DEPTH)])
            .collect();
        let sectors = self
            .rooms
            .iter()
            .map(|r| WadSector::new(r.floor, r.ceiling, "FLOOR4_8", "CEIL3_5", r.light, r.special, r.tag))
            .collect();

        let mut linedefs = Vec::new();
        let mut sidedefs = Vec::new();
        let mut wall = |v1: u16, v2: u16, sector: usize| {
            sidedefs.push(WadSideDef::new(0, 0, "-", "-", WALL_TEX, sector as u16));
            linedefs.push(WadLineDef::new(
                v1,
                v2,
                BLOCKING,
                0,
                0,
                (sidedefs.len() - 1) as u16,
                None,
            ));
        };
        for i in 0..n {
            wall(v(i + 1, false), v(i, false), i);
            wall(v(i, true), v(i + 1, true), i);
        }
        wall(v(0, false), v(0, true), 0);
        wall(v(n, true), v(n, false), n - 1);
        for k in 1..n {
            let (special, tag) = self.joins[k - 1];
            sidedefs.push(WadSideDef::new(0, 0, WALL_TEX, WALL_TEX, "-", (k - 1) as u16));
            sidedefs.push(WadSideDef::new(0, 0, WALL_TEX, WALL_TEX, "-", k as u16));
            let back = (sidedefs.len() - 1) as u16;
            linedefs.push(WadLineDef::new(
                v(k, true),
                v(k, false),
                TWO_SIDED,
                special,
                tag,
                back - 1,
                Some(back),
            ));
        }

        let mut segs = Vec::new();
        let mut subsectors = Vec::new();
        for i in 0..n {
            let first = segs.len() as u16;
            segs.push(WadSegment::new(v(i + 1, false), v(i, false), 0, (2 * i) as u16, 0, 0));
            segs.push(WadSegment::new(v(i, true), v(i + 1, true), 0, (2 * i + 1) as u16, 0, 0));
            if i == 0 {
                segs.push(WadSegment::new(v(0, false), v(0, true), 0, (2 * n) as u16, 0, 0));
            } else {
                let line = self.join_line(i) as u16;
                segs.push(WadSegment::new(v(i, false), v(i, true), 0, line, 1, 0));
            }
            if i == n - 1 {
                segs.push(WadSegment::new(v(n, true), v(n, false), 0, (2 * n + 1) as u16, 0, 0));
            } else {
                let line = self.join_line(i + 1) as u16;
                segs.push(WadSegment::new(v(i + 1, true), v(i + 1, false), 0, line, 0, 0));
            }
            subsectors.push(WadSubSector::new(4, first));
        }

        // node k - 1 splits on edge k, the last one is the root
        let mut nodes = Vec::new();
        for k in 1..n {
            let x = xs[k];
            let right = [DEPTH, 0, x, xs[k + 1]];
            let left = [DEPTH, 0, xs[0], x];
            let left_child = if k == 1 {
                IS_SSECTOR_MASK
            } else {
                (k - 2) as u16
            };
            nodes.push(WadNode::new(
                x,
                0,
                0,
                DEPTH,
                [right, left],
                IS_SSECTOR_MASK | k as u16,
                left_child,
            ));
        }

        WadMap {
            name: "MAP01".to_string(),
            things: self.things.clone(),
            linedefs,
            sidedefs,
            vertexes,
            segs,
            subsectors,
            nodes,
            sectors,
            blockmap: None,
        }
    }

    pub fn load(&self) -> Level {
        Level::load(&self.build(), GameOptions::default(), PicData::default()).unwrap()
    }

    /// Load with an event recorder attached from the start
    pub fn load_recorded(&self) -> (Level, Recorder) {
        let mut level = self.load();
        let recorder = Recorder::default();
        level.subscribe(Box::new(recorder.clone()));
        (level, recorder)
    }
}

/// A single 512 square room with player 1 standing in the middle facing east
pub(super) fn single_room() -> Strip {
    Strip::new()
        .room(Room::new(512, 0, 128))
        .thing(256, 128, 0, 1)
}

pub(super) fn player(level: &Level) -> ThingId {
    level.players[0].unwrap()
}

/// A 256 square of one sector, cut at x = 128 with the right half cut again at
/// y = 128. The partitions cross at (128, 128) where no seg ends. Leaf 0 is
/// the left half, 1 the bottom right and 2 the top right.
pub(super) fn crossed_square() -> WadMap {
    let vertexes = vec![
        WadVertex::new(0, 0),
        WadVertex::new(256, 0),
        WadVertex::new(256, 256),
        WadVertex::new(0, 256),
        WadVertex::new(128, 0),
        WadVertex::new(128, 256),
        WadVertex::new(256, 128),
    ];
    let sidedefs = (0..4)
        .map(|_| WadSideDef::new(0, 0, "-", "-", WALL_TEX, 0))
        .collect();
    // bottom, right, top, left
    let linedefs = vec![
        WadLineDef::new(1, 0, BLOCKING, 0, 0, 0, None),
        WadLineDef::new(2, 1, BLOCKING, 0, 0, 1, None),
        WadLineDef::new(3, 2, BLOCKING, 0, 0, 2, None),
        WadLineDef::new(0, 3, BLOCKING, 0, 0, 3, None),
    ];
    let segs = vec![
        WadSegment::new(4, 0, 0, 0, 0, 128),
        WadSegment::new(0, 3, 0, 3, 0, 0),
        WadSegment::new(3, 5, 0, 2, 0, 0),
        WadSegment::new(1, 4, 0, 0, 0, 0),
        WadSegment::new(6, 1, 0, 1, 0, 128),
        WadSegment::new(5, 2, 0, 2, 0, 128),
        WadSegment::new(2, 6, 0, 1, 0, 0),
    ];
    let subsectors = vec![
        WadSubSector::new(3, 0),
        WadSubSector::new(2, 3),
        WadSubSector::new(2, 5),
    ];
    let nodes = vec![
        // below the line is the front
        WadNode::new(
            128,
            128,
            128,
            0,
            [[128, 0, 128, 256], [256, 128, 128, 256]],
            IS_SSECTOR_MASK | 1,
            IS_SSECTOR_MASK | 2,
        ),
        WadNode::new(
            128,
            0,
            0,
            256,
            [[256, 0, 128, 256], [256, 0, 0, 128]],
            0,
            IS_SSECTOR_MASK,
        ),
    ];

    WadMap {
        name: "MAP01".to_string(),
        things: vec![WadThing::new(64, 128, 0, 1, 7)],
        linedefs,
        sidedefs,
        vertexes,
        segs,
        subsectors,
        nodes,
        sectors: vec![WadSector::new(0, 128, "FLOOR4_8", "CEIL3_5", 160, 0, 0)],
        blockmap: None,
    }
}

/// A right triangle of one sector with its sharp corner at (512, 0). The
/// long wall meets the floor line at about 27 degrees. No nodes, the whole
/// map is one leaf.
pub(super) fn wedge() -> WadMap {
    let vertexes = vec![
        WadVertex::new(0, 0),
        WadVertex::new(512, 0),
        WadVertex::new(0, 256),
    ];
    let sidedefs = (0..3)
        .map(|_| WadSideDef::new(0, 0, "-", "-", WALL_TEX, 0))
        .collect();
    // bottom, long wall, left
    let linedefs = vec![
        WadLineDef::new(1, 0, BLOCKING, 0, 0, 0, None),
        WadLineDef::new(2, 1, BLOCKING, 0, 0, 1, None),
        WadLineDef::new(0, 2, BLOCKING, 0, 0, 2, None),
    ];
    let segs = vec![
        WadSegment::new(1, 0, 0, 0, 0, 0),
        WadSegment::new(0, 2, 0, 2, 0, 0),
        WadSegment::new(2, 1, 0, 1, 0, 0),
    ];

    WadMap {
        name: "MAP01".to_string(),
        things: vec![WadThing::new(100, 50, 0, 1, 7)],
        linedefs,
        sidedefs,
        vertexes,
        segs,
        subsectors: vec![WadSubSector::new(3, 0)],
        nodes: Vec::new(),
        sectors: vec![WadSector::new(0, 128, "FLOOR4_8", "CEIL3_5", 160, 0, 0)],
        blockmap: None,
    }
}
