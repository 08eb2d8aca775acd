//! Tallies the events a level emits while it runs.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gameplay::log::info;
use gameplay::{Level, LevelEvent, LevelObserver};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tally {
    pub spawned: usize,
    pub removed: usize,
    pub sector_moves: usize,
    pub light_changes: usize,
    pub wall_changes: usize,
    pub sounds: usize,
    pub messages: usize,
    pub exit: Option<bool>,
}

/// Shared with the level so the counts can be read after it runs
#[derive(Debug, Default, Clone)]
pub struct TallyObserver(pub Rc<RefCell<Tally>>);

impl LevelObserver for TallyObserver {
    fn notify(&mut self, event: &LevelEvent) {
        let mut tally = self.0.borrow_mut();
        match event {
            LevelEvent::ThingAdded { .. } => tally.spawned += 1,
            LevelEvent::ThingRemoved { .. } => tally.removed += 1,
            LevelEvent::SectorZChanged { .. } => tally.sector_moves += 1,
            LevelEvent::SectorLightChanged { .. } => tally.light_changes += 1,
            LevelEvent::SectorFlatChanged { .. } | LevelEvent::WallTextureChanged { .. } => {
                tally.wall_changes += 1
            }
            LevelEvent::Sound { .. } => tally.sounds += 1,
            LevelEvent::Message { text, .. } => {
                info!("{text}");
                tally.messages += 1;
            }
            LevelEvent::LevelExit { secret } => tally.exit = Some(*secret),
            LevelEvent::ThingMoved { .. } | LevelEvent::ThingSpriteChanged { .. } => {}
        }
    }
}

/// End of run report
#[derive(Debug, Clone)]
pub struct Summary {
    pub map: String,
    pub tics: u32,
    pub checksum: u32,
    pub geometry: u32,
    pub things: usize,
    pub thinkers: usize,
    pub kills: (i32, i32),
    pub items: (i32, i32),
    pub secrets: (i32, i32),
    pub health: Option<i32>,
    pub tally: Tally,
}

impl Summary {
    pub fn new(map: &str, tics: u32, level: &Level, tally: Tally) -> Self {
        let player = level.players[0].and_then(|id| level.things.get(id));
        let data = player.and_then(|t| t.player());
        Self {
            map: map.to_string(),
            tics,
            checksum: level.state_checksum(),
            geometry: level.map_data.checksum(),
            things: level.things.len(),
            thinkers: level.thinkers.len(),
            kills: (data.map_or(0, |p| p.killcount), level.totals.kills),
            items: (data.map_or(0, |p| p.itemcount), level.totals.items),
            secrets: (data.map_or(0, |p| p.secretcount), level.totals.secrets),
            health: player.map(|t| t.health),
            tally,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "map:       {}", self.map)?;
        writeln!(f, "tics:      {} ({:.1}s)", self.tics, self.tics as f32 / 35.0)?;
        writeln!(f, "checksum:  {:08x}", self.checksum)?;
        writeln!(f, "geometry:  {:08x}", self.geometry)?;
        writeln!(f, "things:    {}", self.things)?;
        writeln!(f, "thinkers:  {}", self.thinkers)?;
        writeln!(f, "kills:     {}/{}", self.kills.0, self.kills.1)?;
        writeln!(f, "items:     {}/{}", self.items.0, self.items.1)?;
        writeln!(f, "secrets:   {}/{}", self.secrets.0, self.secrets.1)?;
        match self.health {
            Some(health) => writeln!(f, "health:    {health}")?,
            None => writeln!(f, "health:    no player")?,
        }
        writeln!(
            f,
            "events:    {} spawned, {} removed, {} sector moves, {} light changes, {} texture changes, {} sounds, {} messages",
            self.tally.spawned,
            self.tally.removed,
            self.tally.sector_moves,
            self.tally.light_changes,
            self.tally.wall_changes,
            self.tally.sounds,
            self.tally.messages,
        )?;
        match self.tally.exit {
            Some(true) => write!(f, "exit:      secret"),
            Some(false) => write!(f, "exit:      normal"),
            None => write!(f, "exit:      none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use gameplay::{SfxName, SoundOrigin};

    use super::*;

    #[test]
    fn tally_counts() {
        let mut observer = TallyObserver::default();
        observer.notify(&LevelEvent::SectorZChanged {
            sector: 2,
            floor: 0.0,
            ceiling: 72.0,
        });
        observer.notify(&LevelEvent::Sound {
            sfx: SfxName::pstart,
            origin: SoundOrigin::Sector(2),
        });
        observer.notify(&LevelEvent::WallTextureChanged { sidedef: 4 });
        observer.notify(&LevelEvent::LevelExit { secret: true });

        let tally = observer.0.borrow().clone();
        assert_eq!(tally.sector_moves, 1);
        assert_eq!(tally.sounds, 1);
        assert_eq!(tally.wall_changes, 1);
        assert_eq!(tally.exit, Some(true));
        assert_eq!(tally.messages, 0);
    }
}
