use log::info;
use serde::{Deserialize, Serialize};

use super::PicData;

/// Which part of a sidedef holds the switch texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonWhere {
    Top,
    Middle,
    Bottom,
}

/// A pressed repeatable switch waiting to flip back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchAction {
    pub bwhere: ButtonWhere,
    /// Texture to restore
    pub texture: usize,
    /// Tics left
    pub timer: i32,
}

struct ButtonDef {
    name1: &'static str,
    name2: &'static str,
    episode: i32,
}

impl ButtonDef {
    const fn new(name1: &'static str, name2: &'static str, episode: i32) -> Self {
        ButtonDef {
            name1,
            name2,
            episode,
        }
    }
}

// CHANGE THE TEXTURE OF A WALL SWITCH TO ITS OPPOSITE
const BUTTON_DEFS: [ButtonDef; 40] = [
    // Doom shareware episode 1 switches
    ButtonDef::new("SW1BRCOM", "SW2BRCOM", 1),
    ButtonDef::new("SW1BRN1", "SW2BRN1", 1),
    ButtonDef::new("SW1BRN2", "SW2BRN2", 1),
    ButtonDef::new("SW1BRNGN", "SW2BRNGN", 1),
    ButtonDef::new("SW1BROWN", "SW2BROWN", 1),
    ButtonDef::new("SW1COMM", "SW2COMM", 1),
    ButtonDef::new("SW1COMP", "SW2COMP", 1),
    ButtonDef::new("SW1DIRT", "SW2DIRT", 1),
    ButtonDef::new("SW1EXIT", "SW2EXIT", 1),
    ButtonDef::new("SW1GRAY", "SW2GRAY", 1),
    ButtonDef::new("SW1GRAY1", "SW2GRAY1", 1),
    ButtonDef::new("SW1METAL", "SW2METAL", 1),
    ButtonDef::new("SW1PIPE", "SW2PIPE", 1),
    ButtonDef::new("SW1SLAD", "SW2SLAD", 1),
    ButtonDef::new("SW1STARG", "SW2STARG", 1),
    ButtonDef::new("SW1STON1", "SW2STON1", 1),
    ButtonDef::new("SW1STON2", "SW2STON2", 1),
    ButtonDef::new("SW1STONE", "SW2STONE", 1),
    ButtonDef::new("SW1STRTN", "SW2STRTN", 1),
    // Doom registered episodes 2&3 switches
    ButtonDef::new("SW1BLUE", "SW2BLUE", 2),
    ButtonDef::new("SW1CMT", "SW2CMT", 2),
    ButtonDef::new("SW1GARG", "SW2GARG", 2),
    ButtonDef::new("SW1GSTON", "SW2GSTON", 2),
    ButtonDef::new("SW1HOT", "SW2HOT", 2),
    ButtonDef::new("SW1LION", "SW2LION", 2),
    ButtonDef::new("SW1SATYR", "SW2SATYR", 2),
    ButtonDef::new("SW1SKIN", "SW2SKIN", 2),
    ButtonDef::new("SW1VINE", "SW2VINE", 2),
    ButtonDef::new("SW1WOOD", "SW2WOOD", 2),
    // Doom II switches
    ButtonDef::new("SW1PANEL", "SW2PANEL", 3),
    ButtonDef::new("SW1ROCK", "SW2ROCK", 3),
    ButtonDef::new("SW1MET2", "SW2MET2", 3),
    ButtonDef::new("SW1WDMET", "SW2WDMET", 3),
    ButtonDef::new("SW1BRIK", "SW2BRIK", 3),
    ButtonDef::new("SW1MOD1", "SW2MOD1", 3),
    ButtonDef::new("SW1ZIM", "SW2ZIM", 3),
    ButtonDef::new("SW1STON6", "SW2STON6", 3),
    ButtonDef::new("SW1TEK", "SW2TEK", 3),
    ButtonDef::new("SW1MARB", "SW2MARB", 3),
    ButtonDef::new("SW1SKULL", "SW2SKULL", 3),
];

pub struct Switches;

impl Switches {
    /// Registers the switch textures for the episode set and returns them in
    /// on/off pairs.
    ///
    /// Doom function name `P_InitSwitchList`
    pub fn init(episode: i32, pic_data: &mut PicData) -> Vec<usize> {
        let mut switch_list = Vec::new();
        for def in BUTTON_DEFS.iter().filter(|d| d.episode <= episode) {
            if let (Some(a), Some(b)) = (
                pic_data.intern_wallpic(def.name1),
                pic_data.intern_wallpic(def.name2),
            ) {
                switch_list.push(a);
                switch_list.push(b);
            }
        }
        info!("Initialised {} switch pairs", switch_list.len() / 2);

        switch_list
    }
}
