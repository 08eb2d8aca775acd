//! Level simulation for Doom format maps.
//!
//! Load a map with [`Level::load`], hook up observers with
//! [`Level::subscribe`], then call [`Level::tick`] 35 times a second. Sector
//! movers, lights and switches are thinkers in [`thinker`], things live in
//! [`thing`] and every collision, sight and hitscan query goes through
//! [`trace`].

pub mod doom_def;
pub mod env;
pub mod error;
pub mod events;
#[rustfmt::skip]
pub mod info;
pub mod lang;
pub mod level;
pub mod options;
pub mod pic;
pub mod thing;
pub mod thinker;
pub mod trace;

pub use env::TriggerKind;
pub use error::LoadError;
pub use events::{LevelEvent, LevelObserver, SoundOrigin};
pub use glam;
pub use info::{MapObjKind, SfxName, StateNum};
pub use lang::english;
pub use level::{
    Level, LevelTotals,
    flags::LineDefFlags,
    map_data::MapData,
    map_defs::{LineDef, Node, NodeChild, Sector, Segment, SideDef, SubSector},
};
pub use log;
pub use options::{GameOptions, Skill};
pub use pic::PicData;
pub use thing::{MapObjFlag, MapObject, ThingController, ThingId};
pub use thinker::{Thinker, ThinkerId};
