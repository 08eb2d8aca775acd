use super::{MapObject, ThingId};

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    thing: Option<MapObject>,
}

/// Owner of every live `MapObject` on a level. Slots are reused once freed,
/// with the generation bumped so old ids go stale.
#[derive(Debug, Clone, Default)]
pub struct MapObjects {
    slots: Vec<Slot>,
    free: Vec<usize>,
    len: usize,
}

impl MapObjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the thing and stamp it with its new id
    pub fn insert(&mut self, mut thing: MapObject) -> ThingId {
        let index = match self.free.pop() {
            Some(i) => i,
            None => {
                self.slots.push(Slot::default());
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[index];
        let id = ThingId::new(index, slot.generation);
        thing.id = id;
        slot.thing = Some(thing);
        self.len += 1;
        id
    }

    #[inline]
    pub fn get(&self, id: ThingId) -> Option<&MapObject> {
        self.slots
            .get(id.index())
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.thing.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, id: ThingId) -> Option<&mut MapObject> {
        self.slots
            .get_mut(id.index())
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.thing.as_mut())
    }

    #[inline]
    pub fn contains(&self, id: ThingId) -> bool {
        self.get(id).is_some()
    }

    /// Take the thing out of the store. Callers unlink it from sector and
    /// subsector lists first.
    pub fn remove(&mut self, id: ThingId) -> Option<MapObject> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation {
            return None;
        }
        let thing = slot.thing.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        self.len -= 1;
        Some(thing)
    }

    /// Ids of all live things in slot order
    pub fn ids(&self) -> Vec<ThingId> {
        self.iter().map(|t| t.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapObject> {
        self.slots.iter().filter_map(|s| s.thing.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest slot index ever used plus one
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::{MapObjKind, StateNum};
    use crate::thing::Role;
    use glam::Vec2;
    use math::Angle;

    fn thing() -> MapObject {
        MapObject {
            id: ThingId::new(0, 0),
            kind: MapObjKind::MT_COLUMN,
            role: Role::Decoration,
            xy: Vec2::ZERO,
            z: 0.0,
            momxy: Vec2::ZERO,
            momz: 0.0,
            angle: Angle::default(),
            radius: 16.0,
            height: 16.0,
            flags: 0,
            health: 1000,
            subsector: 0,
            floorz: 0.0,
            ceilingz: 0.0,
            dropoffz: 0.0,
            state: StateNum::S_COLU,
            tics: -1,
            target: None,
            tracer: None,
            movedir: 8,
            movecount: 0,
            reactiontime: 0,
            threshold: 0,
            spawn_point: None,
        }
    }

    #[test]
    fn stale_ids_do_not_resolve() {
        let mut things = MapObjects::new();
        let a = things.insert(thing());
        assert_eq!(things.get(a).map(|t| t.id), Some(a));
        assert!(things.remove(a).is_some());
        assert!(things.get(a).is_none());
        let b = things.insert(thing());
        assert_eq!(a.index(), b.index());
        assert_ne!(a, b);
        assert!(things.get(a).is_none());
        assert_eq!(things.len(), 1);
        assert!(things.remove(a).is_none());
    }
}
