//! The bulk of map entities, typically shown as sprites. Things like monsters,
//! giblets, rockets, items and the players themselves.
//!
//! All things live in the level's `MapObjects` store and are referred to by
//! `ThingId`. A thing holds sector and subsector indexes, never references,
//! so the store can be borrowed independently of the map.

mod interact;
pub use interact::*;
mod movement;
pub use movement::*;
mod shooting;
pub use shooting::*;
mod spawn;
pub use spawn::*;
mod store;
pub use store::*;

use glam::{Vec2, Vec3};
use math::Angle;
use serde::{Deserialize, Serialize};
use wad::WadThing;

use crate::doom_def::NUMCARDS;
use crate::info::{MapObjInfo, MapObjKind, StateNum};
use crate::level::Level;

/// Handle to a thing. The generation changes whenever a slot is reused, so a
/// stale id never resolves to a different thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThingId {
    index: u32,
    generation: u32,
}

impl ThingId {
    pub(crate) const fn new(index: usize, generation: u32) -> Self {
        Self {
            index: index as u32,
            generation,
        }
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum MapObjFlag {
    /// Call `touch_special` when touched.
    Special = 1,
    /// Blocks.
    Solid = 2,
    /// Can be hit.
    Shootable = 4,
    /// Don't use the sector links (invisible but touchable).
    NoSector = 8,
    /// Don't use the block links (inert but displayable)
    NoBlockmap = 16,
    /// Not to be activated by sound, deaf monster.
    Ambush = 32,
    /// Will try to attack right back.
    JustHit = 64,
    /// Will take at least one step before attacking.
    JustAttacked = 128,
    /// On level spawning (initial position), hang from ceiling instead of stand
    /// on floor.
    SpawnCeiling = 256,
    /// Don't apply gravity (every tic), that is, object will float, keeping
    /// current height  or changing it actively.
    NoGravity = 512,
    /// This allows jumps from high places.
    DropOff = 0x400,
    /// For players, will pick up items.
    Pickup = 0x800,
    /// Player cheat.
    NoClip = 0x1000,
    /// Player: keep info about sliding along walls.
    Slide = 0x2000,
    /// Allow moves to any height, no gravity. For active floaters, e.g.
    /// cacodemons, pain elementals.
    Float = 0x4000,
    /// Don't cross lines or look at heights on teleport.
    Teleport = 0x8000,
    /// Don't hit same species, explode on block. Player missiles as well as
    /// fireballs of various kinds.
    Missile = 0x10000,
    /// Dropped by a demon, not level spawned. E.g. ammo clips dropped by dying
    /// former humans.
    Dropped = 0x20000,
    /// Use fuzzy draw (shadow demons or spectres),  temporary player
    /// invisibility powerup.
    Shadow = 0x40000,
    /// Flag: don't bleed when shot (use puff),  barrels and shootable furniture
    /// shall not bleed.
    NoBlood = 0x80000,
    /// Don't stop moving halfway off a step, that is, have dead bodies slide
    /// down all the way.
    Corpse = 0x100000,
    /// Floating to a height for a move, don't auto float to target's height.
    InFloat = 0x200000,
    /// On kill, count this enemy object towards intermission kill total. Happy
    /// gathering.
    CountKill = 0x400000,
    /// On picking up, count this item object towards intermission item total.
    CountItem = 0x800000,
    /// Special handling: skull in flight. Neither a cacodemon nor a missile.
    SkullFly = 0x1000000,
    /// Don't spawn this object in death match mode (e.g. key cards).
    NotDeathmatch = 0x2000000,
}

impl MapObjFlag {
    #[inline]
    pub const fn is_set(self, flags: u32) -> bool {
        flags & self as u32 != 0
    }
}

/// The parts of a player that the level itself changes
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    /// 0..3 player number
    pub num: usize,
    pub armorpoints: i32,
    /// Armor type is 0-2.
    pub armortype: i32,
    pub cards: [bool; NUMCARDS],
    pub killcount: i32,
    pub itemcount: i32,
    pub secretcount: i32,
    /// For screen flashing (red or bright).
    pub damagecount: i32,
    pub bonuscount: i32,
    /// Raised by some sector lights
    pub extralight: i32,
    /// Last message handed to the player
    pub message: Option<String>,
}

/// What a thing is for. Decided once at spawn from the kind and flags.
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    Player(PlayerData),
    Monster,
    Missile,
    Item,
    Decoration,
}

impl Role {
    pub fn for_kind(kind: MapObjKind, flags: u32) -> Self {
        if kind == MapObjKind::MT_PLAYER {
            Role::Player(PlayerData::default())
        } else if MapObjFlag::Missile.is_set(flags) {
            Role::Missile
        } else if MapObjFlag::CountKill.is_set(flags) {
            Role::Monster
        } else if MapObjFlag::Special.is_set(flags) {
            Role::Item
        } else {
            Role::Decoration
        }
    }
}

/// Monster decision making lives outside the level. The level calls this once
/// per tick for every live thing that is not a player, before moving it.
pub trait ThingController {
    fn think(&mut self, level: &mut Level, thing: ThingId);
}

#[derive(Debug, Clone)]
pub struct MapObject {
    pub id: ThingId,
    /// The type of object
    pub kind: MapObjKind,
    pub role: Role,
    /// Info for drawing: position.
    pub xy: Vec2,
    pub z: f32,
    /// Momentum, used to update position.
    pub momxy: Vec2,
    pub momz: f32,
    /// orientation
    pub angle: Angle,
    /// For movement checking.
    pub radius: f32,
    pub height: f32,
    pub flags: u32,
    pub health: i32,
    /// The subsector the centre of the thing is in
    pub subsector: usize,
    /// The closest interval over all contacted Sectors.
    pub floorz: f32,
    pub ceilingz: f32,
    /// Lowest floor over all contacted Sectors.
    pub dropoffz: f32,
    pub state: StateNum,
    /// state tic counter
    pub tics: i32,
    /// Thing being chased/attacked (or None),
    /// also the originator for missiles.
    pub target: Option<ThingId>,
    pub tracer: Option<ThingId>,
    /// Movement direction, movement generation (zig-zagging).
    /// 0-7, 8 is none
    pub movedir: i32,
    /// when 0, select a new dir
    pub movecount: i32,
    /// Reaction time: if non 0, don't attack yet.
    /// Used by player to freeze a bit after teleporting.
    pub reactiontime: i32,
    /// If >0, the target will be chased
    /// no matter what (even if shot)
    pub threshold: i32,
    /// For nightmare respawn.
    pub spawn_point: Option<WadThing>,
}

impl MapObject {
    #[inline]
    pub fn info(&self) -> &'static MapObjInfo {
        self.kind.info()
    }

    #[inline]
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.xy.x, self.xy.y, self.z)
    }

    #[inline]
    pub fn has_flag(&self, flag: MapObjFlag) -> bool {
        flag.is_set(self.flags)
    }

    pub fn player(&self) -> Option<&PlayerData> {
        match &self.role {
            Role::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn player_mut(&mut self) -> Option<&mut PlayerData> {
        match &mut self.role {
            Role::Player(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player(_))
    }

    #[inline]
    pub fn is_monster(&self) -> bool {
        matches!(self.role, Role::Monster)
    }

    /// True if standing on the floor
    #[inline]
    pub fn on_floor(&self) -> bool {
        self.z <= self.floorz
    }
}
