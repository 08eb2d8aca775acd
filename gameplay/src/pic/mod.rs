//! Texture and flat bookkeeping for the simulation. Pixels are a renderer
//! concern, what the level needs is:
//! - a stable number for every wall texture and flat name it references
//! - wall texture heights, for the "shortest lower texture" specials
//! - animated texture cycles
//! - switch on/off pairs
//!
//! Names are interned as the map loads. The animation and switch names are
//! registered first so each animation cycle occupies a contiguous range.

mod animations;
pub use animations::*;
mod switches;
pub use switches::*;

use log::debug;

/// Flat name that marks an open sky
pub const SKY_FLAT_NAME: &str = "F_SKY1";
/// Height assumed for textures with no known size
pub const DEFAULT_TEXTURE_HEIGHT: f32 = 64.0;

#[derive(Debug, Clone)]
pub struct FlatPic {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct WallPic {
    pub name: String,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct PicData {
    walls: Vec<WallPic>,
    /// Used in animations
    wall_translation: Vec<usize>,
    flats: Vec<FlatPic>,
    /// Used in animations
    flat_translation: Vec<usize>,
    /// The number flats use to signify a sky should be drawn
    sky_num: usize,
    animations: Vec<PicAnimation>,
    /// Switch textures in on/off pairs
    switch_list: Vec<usize>,
}

impl Default for PicData {
    fn default() -> Self {
        Self::new(3)
    }
}

impl PicData {
    /// `switch_episode` selects how many switch pairs are known: 1 shareware,
    /// 2 registered, 3 commercial.
    pub fn new(switch_episode: i32) -> Self {
        let mut pic_data = Self {
            walls: Vec::new(),
            wall_translation: Vec::new(),
            flats: Vec::new(),
            flat_translation: Vec::new(),
            sky_num: 0,
            animations: Vec::new(),
            switch_list: Vec::new(),
        };
        pic_data.sky_num = pic_data.intern_flat(SKY_FLAT_NAME);
        pic_data.animations = PicAnimation::init(&mut pic_data);
        pic_data.switch_list = Switches::init(switch_episode, &mut pic_data);
        pic_data
    }

    pub fn sky_num(&self) -> usize {
        self.sky_num
    }

    /// Number for a wall texture, registering it if new. `-` and empty names
    /// are "no texture".
    pub fn intern_wallpic(&mut self, name: &str) -> Option<usize> {
        let name = name.trim().to_ascii_uppercase();
        if name.is_empty() || name == "-" {
            return None;
        }
        if let Some(num) = self.wallpic_num_for_name(&name) {
            return Some(num);
        }
        self.walls.push(WallPic {
            name,
            height: DEFAULT_TEXTURE_HEIGHT,
        });
        self.wall_translation.push(self.walls.len() - 1);
        Some(self.walls.len() - 1)
    }

    /// Number for a flat, registering it if new
    pub fn intern_flat(&mut self, name: &str) -> usize {
        let name = name.trim().to_ascii_uppercase();
        if let Some(num) = self.flat_num_for_name(&name) {
            return num;
        }
        self.flats.push(FlatPic { name });
        self.flat_translation.push(self.flats.len() - 1);
        self.flats.len() - 1
    }

    pub fn wallpic_num_for_name(&self, name: &str) -> Option<usize> {
        self.walls
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn flat_num_for_name(&self, name: &str) -> Option<usize> {
        self.flats
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn get_texture(&self, num: usize) -> Option<&WallPic> {
        self.walls.get(num)
    }

    pub fn get_flat(&self, num: usize) -> Option<&FlatPic> {
        self.flats.get(num)
    }

    pub fn num_textures(&self) -> usize {
        self.walls.len()
    }

    /// Height of a wall texture. Unknown numbers get the default.
    pub fn texture_height(&self, num: usize) -> f32 {
        self.walls
            .get(num)
            .map(|w| w.height)
            .unwrap_or(DEFAULT_TEXTURE_HEIGHT)
    }

    /// Record the real height of a texture, registering the name if needed
    pub fn set_texture_height(&mut self, name: &str, height: f32) {
        if let Some(num) = self.intern_wallpic(name) {
            self.walls[num].height = height;
        } else {
            debug!("set_texture_height: ignored unnamed texture");
        }
    }

    /// The frame currently showing for an animated wall texture
    pub fn wall_translation(&self, num: usize) -> usize {
        self.wall_translation.get(num).copied().unwrap_or(num)
    }

    /// The frame currently showing for an animated flat
    pub fn flat_translation(&self, num: usize) -> usize {
        self.flat_translation.get(num).copied().unwrap_or(num)
    }

    /// Advance all animated textures and flats to `level_time`
    pub fn update_animations(&mut self, level_time: u32) {
        let animations = std::mem::take(&mut self.animations);
        for anim in animations.iter() {
            anim.update(self, level_time as usize);
        }
        self.animations = animations;
    }

    /// The other half of a switch pair
    pub fn switch_pair(&self, texture: usize) -> Option<usize> {
        let i = self.switch_list.iter().position(|&t| t == texture)?;
        Some(self.switch_list[i ^ 1])
    }

    /// True if this is the "on" texture of an exit switch
    pub fn is_exit_switch(&self, texture: usize) -> bool {
        self.walls
            .get(texture)
            .map(|w| w.name.ends_with("EXIT"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let mut pics = PicData::new(1);
        let a = pics.intern_wallpic("startan3").unwrap();
        let b = pics.intern_wallpic("STARTAN3").unwrap();
        assert_eq!(a, b);
        assert_eq!(pics.intern_wallpic("-"), None);
        assert_eq!(pics.texture_height(a), DEFAULT_TEXTURE_HEIGHT);
        pics.set_texture_height("STARTAN3", 128.0);
        assert_eq!(pics.texture_height(a), 128.0);
        assert_eq!(pics.intern_flat(SKY_FLAT_NAME), pics.sky_num());
    }

    #[test]
    fn switch_pairs_swap_both_ways() {
        let pics = PicData::new(1);
        let on = pics.wallpic_num_for_name("SW1COMP").unwrap();
        let off = pics.wallpic_num_for_name("SW2COMP").unwrap();
        assert_eq!(pics.switch_pair(on), Some(off));
        assert_eq!(pics.switch_pair(off), Some(on));
        assert!(pics.wallpic_num_for_name("SW1PANEL").is_none());
    }

    #[test]
    fn flats_cycle() {
        let mut pics = PicData::new(1);
        let base = pics.flat_num_for_name("NUKAGE1").unwrap();
        assert_eq!(pics.flat_translation(base), base);
        pics.update_animations(8);
        assert_eq!(pics.flat_translation(base), base + 1);
        pics.update_animations(24);
        assert_eq!(pics.flat_translation(base), base);
    }
}
