use argh::FromArgs;
use gameplay::{GameOptions, Skill, log};

/// Run a Doom map headless and report what happened
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug, trace
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// directory holding the map lumps (THINGS, LINEDEFS, ...)
    #[argh(option, default = "Default::default()")]
    pub map_dir: String,
    /// map name, E1M1 or MAP01 style
    #[argh(option, default = "Default::default()")]
    pub map: String,
    /// number of tics to run, 35 to a second
    #[argh(option, default = "0")]
    pub tics: u32,
    /// set the skill, 0-4 (0: easiest, 4: hardest)
    #[argh(option)]
    pub skill: Option<Skill>,
    /// disable monsters
    #[argh(switch)]
    pub no_monsters: bool,
    /// monsters respawn after being killed
    #[argh(switch)]
    pub respawn: bool,
    /// monsters move faster
    #[argh(switch)]
    pub fast: bool,
    /// print the state checksum after every tic
    #[argh(switch)]
    pub trace_checksums: bool,
}

/// Episode and map numbers from a map name, and whether it is a Doom II name
pub fn map_numbers(name: &str) -> Option<(i32, i32, bool)> {
    let name = name.to_ascii_uppercase();
    if let Some(num) = name.strip_prefix("MAP") {
        return num.parse().ok().map(|map| (1, map, true));
    }
    let rest = name.strip_prefix('E')?;
    let (episode, map) = rest.split_once('M')?;
    Some((episode.parse().ok()?, map.parse().ok()?, false))
}

impl From<&CLIOptions> for GameOptions {
    fn from(g: &CLIOptions) -> Self {
        let (episode, map, commercial) = map_numbers(&g.map).unwrap_or((1, 1, false));
        GameOptions {
            skill: g.skill.unwrap_or_default(),
            episode,
            map,
            commercial,
            no_monsters: g.no_monsters,
            respawn_monsters: g.respawn,
            fast_monsters: g.fast,
            ..GameOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_names() {
        assert_eq!(map_numbers("E2M7"), Some((2, 7, false)));
        assert_eq!(map_numbers("map30"), Some((1, 30, true)));
        assert_eq!(map_numbers("MAPXX"), None);
        assert_eq!(map_numbers("E1"), None);
        assert_eq!(map_numbers(""), None);
    }

    #[test]
    fn cli_to_game_options() {
        let cli = CLIOptions::from_args(
            &["levelsim"],
            &["--map", "MAP07", "--skill", "4", "--no-monsters"],
        )
        .unwrap();
        let options = GameOptions::from(&cli);
        assert!(options.commercial);
        assert_eq!(options.map, 7);
        assert_eq!(options.skill, Skill::Nightmare);
        assert!(options.no_monsters);
        assert!(!options.fast_monsters);
    }
}
