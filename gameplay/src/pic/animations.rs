use log::info;

use super::PicData;

#[derive(Debug, Clone, Default)]
pub struct PicAnimation {
    is_texture: bool,
    basepic: usize,
    numpics: usize,
    speed: usize,
}

impl PicAnimation {
    pub fn update(&self, pic_data: &mut PicData, level_time: usize) {
        for i in 0..self.numpics {
            let pic = self.basepic + ((level_time / self.speed + i) % self.numpics);
            if self.is_texture {
                pic_data.wall_translation[self.basepic + i] = pic;
            } else {
                pic_data.flat_translation[self.basepic + i] = pic;
            }
        }
    }

    /// Register every frame of each cycle, in order, so each animation is a
    /// contiguous range of numbers.
    ///
    /// Doom function name `P_InitPicAnims`
    pub fn init(pic_data: &mut PicData) -> Vec<PicAnimation> {
        let mut anims = Vec::with_capacity(ANIM_DEFS.len());

        for def in ANIM_DEFS.iter() {
            let mut nums = Vec::with_capacity(def.frames.len());
            for name in def.frames {
                if def.is_texture {
                    if let Some(num) = pic_data.intern_wallpic(name) {
                        nums.push(num);
                    }
                } else {
                    nums.push(pic_data.intern_flat(name));
                }
            }
            let contiguous = nums.windows(2).all(|w| w[1] == w[0] + 1);
            if nums.len() < 2 || !contiguous {
                continue;
            }
            anims.push(PicAnimation {
                is_texture: def.is_texture,
                basepic: nums[0],
                numpics: nums.len(),
                speed: def.speed,
            });
        }
        info!("Initialised {} animated textures", anims.len());

        anims
    }
}

pub struct AnimationDef {
    is_texture: bool,
    frames: &'static [&'static str],
    speed: usize,
}

impl AnimationDef {
    const fn new(is_texture: bool, frames: &'static [&'static str], speed: usize) -> Self {
        Self {
            is_texture,
            frames,
            speed,
        }
    }
}

const ANIM_DEFS: [AnimationDef; 22] = [
    AnimationDef::new(false, &["NUKAGE1", "NUKAGE2", "NUKAGE3"], 8),
    AnimationDef::new(false, &["FWATER1", "FWATER2", "FWATER3", "FWATER4"], 8),
    AnimationDef::new(false, &["SWATER1", "SWATER2", "SWATER3", "SWATER4"], 8),
    AnimationDef::new(false, &["LAVA1", "LAVA2", "LAVA3", "LAVA4"], 8),
    AnimationDef::new(false, &["BLOOD1", "BLOOD2", "BLOOD3"], 8),
    // DOOM II flat animations.
    AnimationDef::new(false, &["RROCK05", "RROCK06", "RROCK07", "RROCK08"], 8),
    AnimationDef::new(false, &["SLIME01", "SLIME02", "SLIME03", "SLIME04"], 8),
    AnimationDef::new(false, &["SLIME05", "SLIME06", "SLIME07", "SLIME08"], 8),
    AnimationDef::new(false, &["SLIME09", "SLIME10", "SLIME11", "SLIME12"], 8),
    AnimationDef::new(true, &["BLODGR1", "BLODGR2", "BLODGR3", "BLODGR4"], 8),
    AnimationDef::new(true, &["SLADRIP1", "SLADRIP2", "SLADRIP3"], 8),
    AnimationDef::new(true, &["BLODRIP1", "BLODRIP2", "BLODRIP3", "BLODRIP4"], 8),
    AnimationDef::new(true, &["FIREWALA", "FIREWALB", "FIREWALL"], 8),
    AnimationDef::new(true, &["GSTFONT1", "GSTFONT2", "GSTFONT3"], 8),
    AnimationDef::new(true, &["FIRELAV3", "FIRELAVA"], 8),
    AnimationDef::new(true, &["FIREMAG1", "FIREMAG2", "FIREMAG3"], 8),
    AnimationDef::new(true, &["FIREBLU1", "FIREBLU2"], 8),
    AnimationDef::new(true, &["ROCKRED1", "ROCKRED2", "ROCKRED3"], 8),
    AnimationDef::new(true, &["BFALL1", "BFALL2", "BFALL3", "BFALL4"], 8),
    AnimationDef::new(true, &["SFALL1", "SFALL2", "SFALL3", "SFALL4"], 8),
    AnimationDef::new(true, &["WFALL1", "WFALL2", "WFALL3", "WFALL4"], 8),
    AnimationDef::new(true, &["DBRAIN1", "DBRAIN2", "DBRAIN3", "DBRAIN4"], 8),
];
