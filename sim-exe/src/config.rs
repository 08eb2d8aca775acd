//! User configuration options.

use std::fs::{self, create_dir_all};
use std::io;
use std::path::PathBuf;

use dirs::config_dir;
use gameplay::Skill;
use gameplay::log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BASE_DIR, CLIOptions};

const LOG_TAG: &str = "SimConfig";
const CONFIG_FILE: &str = "levelsim.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no user config directory on this system")]
    NoConfigDir,
    #[error("config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not serialise config: {0}")]
    Serialise(#[from] toml::ser::Error),
}

fn get_cfg_file() -> Result<PathBuf, ConfigError> {
    let mut dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    dir.push(BASE_DIR);
    if !dir.exists() {
        create_dir_all(&dir).map_err(|source| ConfigError::Io {
            path: dir.clone(),
            source,
        })?;
    }
    dir.push(CONFIG_FILE);
    Ok(dir)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Last map directory used
    pub map_dir: String,
    pub map: String,
    pub tics: u32,
    pub skill: Skill,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            map_dir: String::new(),
            map: "E1M1".to_string(),
            tics: 35 * 60,
            skill: Skill::default(),
        }
    }
}

impl SimConfig {
    /// Read the config, writing out the defaults if there is none or it
    /// can't be parsed
    pub fn load() -> Result<Self, ConfigError> {
        let path = get_cfg_file()?;
        match fs::read_to_string(&path) {
            Ok(buf) if !buf.is_empty() => {
                if let Ok(data) = toml::from_str(&buf) {
                    info!(target: LOG_TAG, "Loaded config from {path:?}");
                    return Ok(data);
                }
                warn!(target: LOG_TAG, "Could not deserialise {path:?}, recreating config");
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(ConfigError::Io { path, source }),
        }
        let config = SimConfig::default();
        config.write()?;
        info!(target: LOG_TAG, "Created default config");
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn write(&self) -> Result<(), ConfigError> {
        let path = get_cfg_file()?;
        let data = self.to_toml()?;
        fs::write(&path, data).map_err(|source| ConfigError::Io { path, source })
    }

    /// Sync the CLI options and config with each other. Anything given on the
    /// command line wins and is remembered.
    pub fn sync_cli(&mut self, cli: &mut CLIOptions) {
        info!(target: LOG_TAG, "Checking CLI options");

        if !cli.map_dir.is_empty() && cli.map_dir != self.map_dir {
            cli.map_dir.clone_into(&mut self.map_dir);
            info!(target: LOG_TAG, "Map directory changed to: {}", &cli.map_dir);
        } else {
            self.map_dir.clone_into(&mut cli.map_dir);
        }

        if !cli.map.is_empty() && cli.map != self.map {
            cli.map.clone_into(&mut self.map);
        } else {
            self.map.clone_into(&mut cli.map);
        }

        if cli.tics != 0 && cli.tics != self.tics {
            self.tics = cli.tics;
        } else {
            cli.tics = self.tics;
        }

        if let Some(skill) = cli.skill {
            self.skill = skill;
        } else {
            cli.skill = Some(self.skill);
        }
    }
}

#[cfg(test)]
mod tests {
    use argh::FromArgs;

    use super::*;

    fn cli(args: &[&str]) -> CLIOptions {
        CLIOptions::from_args(&["levelsim"], args).unwrap()
    }

    #[test]
    fn cli_overrides_are_remembered() {
        let mut config = SimConfig::default();
        let mut options = cli(&["--map-dir", "/tmp/e1m1", "--tics", "70", "--skill", "3"]);
        config.sync_cli(&mut options);
        assert_eq!(config.map_dir, "/tmp/e1m1");
        assert_eq!(config.tics, 70);
        assert_eq!(config.skill, Skill::Hard);
        assert_eq!(options.map, "E1M1");
    }

    #[test]
    fn config_fills_missing_cli() {
        let mut config = SimConfig {
            map_dir: "maps/MAP01".to_string(),
            map: "MAP01".to_string(),
            tics: 350,
            skill: Skill::Easy,
        };
        let mut options = cli(&[]);
        config.sync_cli(&mut options);
        assert_eq!(options.map_dir, "maps/MAP01");
        assert_eq!(options.map, "MAP01");
        assert_eq!(options.tics, 350);
        assert_eq!(options.skill, Some(Skill::Easy));
    }

    #[test]
    fn toml_round_trip() {
        let config = SimConfig {
            tics: 99,
            ..SimConfig::default()
        };
        let text = config.to_toml().unwrap();
        let back: SimConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
        // missing keys fall back to defaults
        let partial: SimConfig = toml::from_str("tics = 5").unwrap();
        assert_eq!(partial.map, "E1M1");
    }
}
