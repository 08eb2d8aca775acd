//! Change notifications for the renderer, audio and anything else watching
//! the level. Delivery is synchronous, an observer sees the event during the
//! same tick that caused it.

use glam::Vec3;

use crate::info::{MapObjKind, SfxName, StateNum};
use crate::thing::ThingId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundOrigin {
    Thing(ThingId),
    Sector(usize),
    /// Heard everywhere
    Global,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LevelEvent {
    ThingAdded {
        thing: ThingId,
        kind: MapObjKind,
    },
    ThingRemoved {
        thing: ThingId,
    },
    ThingMoved {
        thing: ThingId,
        xyz: Vec3,
    },
    ThingSpriteChanged {
        thing: ThingId,
        state: StateNum,
    },
    SectorZChanged {
        sector: usize,
        floor: f32,
        ceiling: f32,
    },
    SectorLightChanged {
        sector: usize,
        light: i32,
    },
    SectorFlatChanged {
        sector: usize,
        floor: usize,
        ceiling: usize,
    },
    /// Any texture or offset on the sidedef changed
    WallTextureChanged {
        sidedef: usize,
    },
    Sound {
        sfx: SfxName,
        origin: SoundOrigin,
    },
    Message {
        player: ThingId,
        text: &'static str,
    },
    LevelExit {
        secret: bool,
    },
}

pub trait LevelObserver {
    fn notify(&mut self, event: &LevelEvent);
}

/// The observer list owned by a level
#[derive(Default)]
pub struct Events {
    observers: Vec<Box<dyn LevelObserver>>,
}

impl std::fmt::Debug for Events {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Events")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Events {
    pub fn subscribe(&mut self, observer: Box<dyn LevelObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub fn emit(&mut self, event: LevelEvent) {
        for o in self.observers.iter_mut() {
            o.notify(&event);
        }
    }

    pub fn sound(&mut self, sfx: SfxName, origin: SoundOrigin) {
        if sfx != SfxName::None {
            self.emit(LevelEvent::Sound { sfx, origin });
        }
    }
}

#[cfg(test)]
pub(crate) mod recorder {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Keeps every event for inspection in tests
    #[derive(Clone, Default)]
    pub struct Recorder(pub Rc<RefCell<Vec<LevelEvent>>>);

    impl LevelObserver for Recorder {
        fn notify(&mut self, event: &LevelEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    impl Recorder {
        pub fn count(&self, f: impl Fn(&LevelEvent) -> bool) -> usize {
            self.0.borrow().iter().filter(|e| f(e)).count()
        }
    }
}
