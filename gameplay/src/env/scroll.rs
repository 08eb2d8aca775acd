use serde::{Deserialize, Serialize};

use crate::events::LevelEvent;
use crate::level::Level;

/// Special 48, the wall texture scrolls left one unit per tic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scroll {
    pub line: usize,
    pub sidedef: usize,
}

impl Scroll {
    pub fn think(&mut self, level: &mut Level) -> bool {
        level.map_data.sidedefs[self.sidedef].textureoffset += 1.0;
        level.events.emit(LevelEvent::WallTextureChanged {
            sidedef: self.sidedef,
        });
        true
    }
}
