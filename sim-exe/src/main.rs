//! `levelsim` loads one map from a directory of raw lumps, runs the level
//! for a number of tics with no renderer or input, then prints a state
//! checksum and a summary of what happened.

mod cli;
mod config;
mod summary;

use std::error::Error;
use std::path::PathBuf;

use cli::*;
use gameplay::log::{self, debug, info};
use gameplay::{GameOptions, Level, PicData};
use mimalloc::MiMalloc;
use simplelog::TermLogger;
use wad::MapLumps;

use crate::config::SimConfig;
use crate::summary::{Summary, TallyObserver};

const BASE_DIR: &str = "levelsim/";

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<(), Box<dyn Error>> {
    let mut options: CLIOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(log::LevelFilter::Info),
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut sim_config = SimConfig::load()?;
    sim_config.sync_cli(&mut options);
    sim_config.write()?;

    let game_options = GameOptions::from(&options);
    // switch textures known to each game
    let switch_episode = if game_options.commercial {
        3
    } else if game_options.episode > 1 {
        2
    } else {
        1
    };

    let map_dir: PathBuf = options.map_dir.clone().into();
    let lumps = MapLumps::from_dir(&options.map, &map_dir)?;
    let mut level = Level::from_lumps(&lumps, game_options, PicData::new(switch_episode))?;
    info!(
        "Loaded {}: {} sectors, {} lines, {} things",
        lumps.name,
        level.map_data.sectors.len(),
        level.map_data.linedefs.len(),
        level.things.len()
    );

    let tally = TallyObserver::default();
    level.subscribe(Box::new(tally.clone()));

    let ran = if options.trace_checksums {
        let mut ran = 0;
        while ran < options.tics && level.exit.is_none() {
            level.tick();
            ran += 1;
            println!("{:>6} {:08x}", level.level_time, level.state_checksum());
        }
        ran
    } else {
        level.run(options.tics)
    };
    debug!("Ran {ran} of {} tics", options.tics);

    let summary = Summary::new(&lumps.name, ran, &level, tally.0.borrow().clone());
    println!("{summary}");

    #[cfg(feature = "hprof")]
    coarse_prof::write(&mut std::io::stdout())?;
    Ok(())
}
