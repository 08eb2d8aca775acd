//! The data that makes up an entire level, along with the per tick loop that
//! runs it.
//!
//! A `Level` owns the map, the things on it and the thinkers moving it. Every
//! other module adds to `Level` with its own `impl` block, so this file only
//! holds the state and the top level loop.

pub mod flags;
pub mod map_data;
pub mod map_defs;
pub mod node;
pub(crate) mod repair;

#[cfg(test)]
mod tests;

use glam::Vec2;
use log::{debug, info};
use math::DoomRng;
use wad::{MapLumps, WadMap, WadThing};

use crate::doom_def::MAXPLAYERS;
use crate::error::LoadError;
use crate::events::{Events, LevelObserver};
use crate::level::map_data::MapData;
use crate::options::GameOptions;
use crate::pic::PicData;
use crate::thing::{MapObjects, ThingController, ThingId};
use crate::thinker::Thinkers;
use crate::trace::{self, TraceContext, TraceHooks, TraceRequest};

#[cfg(feature = "hprof")]
use coarse_prof::profile;

/// Counts for the end of level tally
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LevelTotals {
    pub kills: i32,
    pub items: i32,
    pub secrets: i32,
}

/// The level is considered a `World` of sorts. One that exists only while
/// the players are in it. Everything on it is interlinked by index, which
/// makes it easy for thinkers and things to work on any part of it.
pub struct Level {
    pub map_data: MapData,
    pub things: MapObjects,
    pub thinkers: Thinkers,
    /// Texture numbers, animations and switch pairs
    pub pic_data: PicData,
    pub options: GameOptions,
    pub events: Events,
    pub rng: DoomRng,
    /// Marks for lines and things already seen by the running trace
    pub(crate) trace_ctx: TraceContext,
    /// Tics since the level started
    pub level_time: u32,
    /// The thing each player controls, if spawned
    pub players: [Option<ThingId>; MAXPLAYERS],
    /// The `Things` for player start locations
    pub player_starts: [Option<WadThing>; MAXPLAYERS],
    pub totals: LevelTotals,
    /// Set once an exit is triggered, `true` for the secret exit
    pub exit: Option<bool>,
    controller: Option<Box<dyn ThingController>>,
}

impl std::fmt::Debug for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Level")
            .field("map", &self.map_data.name)
            .field("level_time", &self.level_time)
            .field("things", &self.things.len())
            .field("thinkers", &self.thinkers.len())
            .field("exit", &self.exit)
            .finish()
    }
}

impl Level {
    /// Set up a complete level: geometry, things and the specials that run
    /// from the first tick.
    ///
    /// Doom function name `P_SetupLevel`
    pub fn load(map: &WadMap, options: GameOptions, mut pic_data: PicData) -> Result<Self, LoadError> {
        let map_data = MapData::load(map, &mut pic_data)?;
        let mut level = Level {
            map_data,
            things: MapObjects::new(),
            thinkers: Thinkers::new(),
            pic_data,
            options,
            events: Events::default(),
            rng: DoomRng::new(),
            trace_ctx: TraceContext::new(),
            level_time: 0,
            players: [None; MAXPLAYERS],
            player_starts: [None; MAXPLAYERS],
            totals: LevelTotals::default(),
            exit: None,
            controller: None,
        };

        let mthings = level.map_data.things().to_vec();
        for mthing in mthings.iter() {
            level.spawn_map_thing(mthing);
        }
        level.spawn_specials();

        info!(
            "Loaded {}: {} things, {} thinkers, {} kills, {} items, {} secrets",
            level.map_data.name,
            level.things.len(),
            level.thinkers.len(),
            level.totals.kills,
            level.totals.items,
            level.totals.secrets
        );
        Ok(level)
    }

    /// Decode raw lumps then `load`
    pub fn from_lumps(lumps: &MapLumps, options: GameOptions, pic_data: PicData) -> Result<Self, LoadError> {
        let map = WadMap::parse(lumps)?;
        Self::load(&map, options, pic_data)
    }

    pub fn subscribe(&mut self, observer: Box<dyn LevelObserver>) {
        self.events.subscribe(observer);
    }

    /// Install the monster brain. Replaces any previous one.
    pub fn set_controller(&mut self, controller: Box<dyn ThingController>) {
        self.controller = Some(controller);
    }

    /// P_Ticker
    ///
    /// One fixed tic: thinkers, animations and switches, things, then the
    /// sectors players stand in.
    pub fn tick(&mut self) {
        #[cfg(feature = "hprof")]
        profile!("tick");

        self.run_thinkers();
        self.update_specials();

        // the controller is out of the level while it runs so it can borrow
        // the level mutably
        let mut controller = self.controller.take();
        for id in self.things.ids() {
            let Some(thing) = self.things.get(id) else {
                // removed earlier this tic
                continue;
            };
            if !thing.is_player() {
                if let Some(c) = controller.as_mut() {
                    c.think(self, id);
                }
            }
            self.tick_thing(id);
        }
        if self.controller.is_none() {
            self.controller = controller;
        }

        for id in self.players.into_iter().flatten() {
            self.player_in_special_sector(id);
        }
        self.level_time += 1;
    }

    /// Run `tics` tics, stopping early if the level is exited
    pub fn run(&mut self, tics: u32) -> u32 {
        for n in 0..tics {
            if self.exit.is_some() {
                debug!("Level exited after {n} tics");
                return n;
            }
            self.tick();
        }
        tics
    }

    /// Checksum of everything that moves. Two runs of the same level with the
    /// same input give the same value every tic.
    pub fn state_checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.level_time.to_le_bytes());
        for sector in self.map_data.sectors.iter() {
            hasher.update(&sector.floorheight.to_le_bytes());
            hasher.update(&sector.ceilingheight.to_le_bytes());
            hasher.update(&sector.lightlevel.to_le_bytes());
            hasher.update(&sector.special.to_le_bytes());
        }
        for side in self.map_data.sidedefs.iter() {
            hasher.update(&side.textureoffset.to_le_bytes());
        }
        for thing in self.things.iter() {
            hasher.update(&thing.xy.x.to_le_bytes());
            hasher.update(&thing.xy.y.to_le_bytes());
            hasher.update(&thing.z.to_le_bytes());
            hasher.update(&thing.health.to_le_bytes());
            hasher.update(&(thing.state as u32).to_le_bytes());
        }
        hasher.update(&(self.thinkers.len() as u32).to_le_bytes());
        hasher.finalize()
    }

    /// R_PointInSubsector
    #[inline]
    pub fn point_in_subsector(&self, point: Vec2) -> usize {
        self.map_data.point_in_subsector(point)
    }

    #[inline]
    pub fn find_sector(&self, point: Vec2) -> usize {
        self.map_data.find_sector(point)
    }

    /// Sweep a box through the level. See `trace::trace_move`.
    pub fn trace_move(&mut self, req: &TraceRequest, hooks: TraceHooks) -> bool {
        trace::trace_move(&self.map_data, &self.things, &mut self.trace_ctx, req, hooks)
    }

    pub fn trace_ray(&mut self, req: &TraceRequest, hooks: TraceHooks) -> bool {
        trace::trace_ray(&self.map_data, &self.things, &mut self.trace_ctx, req, hooks)
    }

    pub fn trace_subsectors(
        &self,
        start: Vec2,
        delta: Vec2,
        radius: f32,
        f: &mut impl FnMut(usize) -> bool,
    ) -> bool {
        trace::trace_subsectors(&self.map_data, start, delta, radius, f)
    }
}
