//! Switch textures flipping when used, and flipping back for repeatable
//! switches.
//!
//! Doom source name `p_switch`

use log::{debug, trace};

use crate::events::{LevelEvent, SoundOrigin};
use crate::info::SfxName;
use crate::level::Level;
use crate::pic::{ButtonWhere, SwitchAction};

/// Tics a repeatable switch stays pressed
const BUTTONTIME: i32 = 35;

impl Level {
    /// Start a sound at the sector's sound origin
    pub(crate) fn sector_sound(&mut self, sector: usize, sfx: SfxName) {
        self.events.sound(sfx, SoundOrigin::Sector(sector));
    }

    /// P_ChangeSwitchTexture
    ///
    /// Flip the first switch texture found on the front side, top then
    /// middle then bottom. A line that can't be used again loses its special.
    pub fn change_switch_texture(&mut self, line: usize, use_again: bool) {
        let (special, side, sector) = {
            let ld = &mut self.map_data.linedefs[line];
            let special = ld.special;
            if !use_again {
                ld.special = 0;
            }
            (special, ld.front_sidedef, ld.frontsector)
        };

        let sd = &self.map_data.sidedefs[side];
        let found = [
            (ButtonWhere::Top, sd.toptexture),
            (ButtonWhere::Middle, sd.midtexture),
            (ButtonWhere::Bottom, sd.bottomtexture),
        ]
        .into_iter()
        .find_map(|(bwhere, tex)| {
            let tex = tex?;
            self.pic_data.switch_pair(tex).map(|other| (bwhere, tex, other))
        });
        let Some((bwhere, texture, other)) = found else {
            debug!("Line {line} has no switch texture to change");
            return;
        };

        let sfx = if special == 11 || special == 51 || self.pic_data.is_exit_switch(texture) {
            SfxName::swtchx
        } else {
            SfxName::swtchn
        };
        self.sector_sound(sector, sfx);
        self.set_side_texture(side, bwhere, other);

        if use_again {
            let ld = &mut self.map_data.linedefs[line];
            if ld.switch_action.is_none() {
                ld.switch_action = Some(SwitchAction {
                    bwhere,
                    texture,
                    timer: BUTTONTIME,
                });
            }
        }
    }

    fn set_side_texture(&mut self, sidedef: usize, bwhere: ButtonWhere, texture: usize) {
        let sd = &mut self.map_data.sidedefs[sidedef];
        match bwhere {
            ButtonWhere::Top => sd.toptexture = Some(texture),
            ButtonWhere::Middle => sd.midtexture = Some(texture),
            ButtonWhere::Bottom => sd.bottomtexture = Some(texture),
        }
        self.events.emit(LevelEvent::WallTextureChanged { sidedef });
    }

    /// Count down pressed switches and flip them back when their time is up
    pub(crate) fn update_switches(&mut self) {
        for line in 0..self.map_data.linedefs.len() {
            let ld = &mut self.map_data.linedefs[line];
            let Some(action) = ld.switch_action.as_mut() else {
                continue;
            };
            action.timer -= 1;
            if action.timer > 0 {
                continue;
            }
            let action = *action;
            ld.switch_action = None;
            let (side, sector) = (ld.front_sidedef, ld.frontsector);
            trace!("Switch on line {line} popped back out");
            self.set_side_texture(side, action.bwhere, action.texture);
            self.sector_sound(sector, SfxName::swtchn);
        }
    }
}
