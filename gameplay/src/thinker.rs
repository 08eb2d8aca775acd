//! Long running sector effects: doors, lifts, floors, lights and so on.
//!
//! Every effect is a plain serialisable struct wrapped in `Thinker`. The
//! `Thinkers` list owns them and runs them in the order they were added.
//! Sectors refer to their running mover by `ThinkerId`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::env::ceiling::CeilingMove;
use crate::env::doors::VerticalDoor;
use crate::env::floor::FloorMove;
use crate::env::lights::{FireFlicker, Glow, LightFlash, StrobeFlash};
use crate::env::platforms::Platform;
use crate::env::scroll::Scroll;
use crate::level::Level;

/// Handle to a running thinker. Ids are never reused within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThinkerId(u32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Thinker {
    VerticalDoor(VerticalDoor),
    FloorMove(FloorMove),
    CeilingMove(CeilingMove),
    Platform(Platform),
    FireFlicker(FireFlicker),
    LightFlash(LightFlash),
    StrobeFlash(StrobeFlash),
    Glow(Glow),
    Scroll(Scroll),
}

impl Thinker {
    /// Run one tick. Returns false once the thinker is finished and should
    /// be dropped from the list.
    pub fn think(&mut self, level: &mut Level) -> bool {
        match self {
            Thinker::VerticalDoor(t) => t.think(level),
            Thinker::FloorMove(t) => t.think(level),
            Thinker::CeilingMove(t) => t.think(level),
            Thinker::Platform(t) => t.think(level),
            Thinker::FireFlicker(t) => t.think(level),
            Thinker::LightFlash(t) => t.think(level),
            Thinker::StrobeFlash(t) => t.think(level),
            Thinker::Glow(t) => t.think(level),
            Thinker::Scroll(t) => t.think(level),
        }
    }

    /// The sector this thinker changes, if any
    pub fn sector(&self) -> Option<usize> {
        match self {
            Thinker::VerticalDoor(t) => Some(t.sector),
            Thinker::FloorMove(t) => Some(t.sector),
            Thinker::CeilingMove(t) => Some(t.sector),
            Thinker::Platform(t) => Some(t.sector),
            Thinker::FireFlicker(t) => Some(t.sector),
            Thinker::LightFlash(t) => Some(t.sector),
            Thinker::StrobeFlash(t) => Some(t.sector),
            Thinker::Glow(t) => Some(t.sector),
            Thinker::Scroll(_) => None,
        }
    }

    pub fn vertical_door(&mut self) -> Option<&mut VerticalDoor> {
        match self {
            Thinker::VerticalDoor(t) => Some(t),
            _ => None,
        }
    }

    pub fn ceiling_move(&mut self) -> Option<&mut CeilingMove> {
        match self {
            Thinker::CeilingMove(t) => Some(t),
            _ => None,
        }
    }

    pub fn platform(&mut self) -> Option<&mut Platform> {
        match self {
            Thinker::Platform(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Slot {
    Live(Thinker),
    /// Taken out while it thinks
    Running,
    Removed,
}

/// Owner of every thinker on a level. Removal leaves a tombstone that is
/// swept after the tick so ids and run order stay stable while iterating.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thinkers {
    next_id: u32,
    slots: Vec<(ThinkerId, Slot)>,
}

impl Thinkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, thinker: Thinker) -> ThinkerId {
        let id = ThinkerId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, Slot::Live(thinker)));
        id
    }

    #[inline]
    fn position(&self, id: ThinkerId) -> Option<usize> {
        // ids only ever increase along the list
        self.slots.binary_search_by_key(&id, |(i, _)| *i).ok()
    }

    pub fn get(&self, id: ThinkerId) -> Option<&Thinker> {
        match &self.slots[self.position(id)?].1 {
            Slot::Live(t) => Some(t),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: ThinkerId) -> Option<&mut Thinker> {
        let i = self.position(id)?;
        match &mut self.slots[i].1 {
            Slot::Live(t) => Some(t),
            _ => None,
        }
    }

    /// Drop a thinker. Safe to call on one that is currently running.
    pub fn remove(&mut self, id: ThinkerId) -> Option<Thinker> {
        let i = self.position(id)?;
        match std::mem::replace(&mut self.slots[i].1, Slot::Removed) {
            Slot::Live(t) => Some(t),
            _ => None,
        }
    }

    pub(crate) fn take(&mut self, id: ThinkerId) -> Option<Thinker> {
        let i = self.position(id)?;
        match std::mem::replace(&mut self.slots[i].1, Slot::Running) {
            Slot::Live(t) => Some(t),
            other => {
                self.slots[i].1 = other;
                None
            }
        }
    }

    /// Return a thinker after it ran. Ignored if it was removed meanwhile.
    pub(crate) fn put_back(&mut self, id: ThinkerId, thinker: Thinker) {
        if let Some(i) = self.position(id) {
            if self.slots[i].1 == Slot::Running {
                self.slots[i].1 = Slot::Live(thinker);
            }
        }
    }

    /// Id of the slot at `index`, live or not. Thinkers pushed during a run
    /// get appended so walking by index picks them up in the same tick.
    pub(crate) fn id_at(&self, index: usize) -> Option<ThinkerId> {
        self.slots.get(index).map(|(id, _)| *id)
    }

    /// Sweep out tombstones
    pub(crate) fn compact(&mut self) {
        self.slots.retain(|(_, s)| !matches!(s, Slot::Removed));
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThinkerId, &Thinker)> {
        self.slots.iter().filter_map(|(id, s)| match s {
            Slot::Live(t) => Some((*id, t)),
            _ => None,
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ThinkerId, &mut Thinker)> {
        self.slots.iter_mut().filter_map(|(id, s)| match s {
            Slot::Live(t) => Some((*id, t)),
            _ => None,
        })
    }

    pub fn ids(&self) -> Vec<ThinkerId> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialise every live thinker
    pub fn snapshot(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let thinkers: Thinkers = bincode::deserialize(bytes)?;
        debug!("Restored {} thinkers", thinkers.len());
        Ok(thinkers)
    }
}

impl Level {
    /// P_RunThinkers
    pub(crate) fn run_thinkers(&mut self) {
        let mut i = 0;
        while let Some(id) = self.thinkers.id_at(i) {
            if let Some(mut thinker) = self.thinkers.take(id) {
                if thinker.think(self) {
                    self.thinkers.put_back(id, thinker);
                } else {
                    debug!("Thinker {:?} finished", id);
                    self.thinkers.remove(id);
                }
            }
            i += 1;
        }
        self.thinkers.compact();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::lights::Glow;

    fn glow(sector: usize) -> Thinker {
        Thinker::Glow(Glow {
            sector,
            min_light: 96,
            max_light: 160,
            direction: -1,
        })
    }

    #[test]
    fn ids_survive_removal() {
        let mut thinkers = Thinkers::new();
        let a = thinkers.push(glow(0));
        let b = thinkers.push(glow(1));
        let c = thinkers.push(glow(2));
        assert!(thinkers.remove(b).is_some());
        thinkers.compact();
        assert_eq!(thinkers.ids(), vec![a, c]);
        assert_eq!(thinkers.get(c).and_then(|t| t.sector()), Some(2));
        assert!(thinkers.get(b).is_none());
    }

    #[test]
    fn removed_while_running_stays_removed() {
        let mut thinkers = Thinkers::new();
        let a = thinkers.push(glow(0));
        let t = thinkers.take(a).unwrap();
        assert!(thinkers.get(a).is_none());
        thinkers.remove(a);
        thinkers.put_back(a, t);
        assert!(thinkers.get(a).is_none());
    }

    #[test]
    fn snapshot_restores_same_list() {
        let mut thinkers = Thinkers::new();
        thinkers.push(glow(3));
        let b = thinkers.push(glow(4));
        thinkers.remove(b);
        thinkers.compact();
        let bytes = thinkers.snapshot().unwrap();
        let restored = Thinkers::restore(&bytes).unwrap();
        assert_eq!(restored, thinkers);
        assert_eq!(restored.len(), 1);
    }
}
