//! A single map's lumps, as raw bytes and as parsed records.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::LumpError;
use crate::lumps::*;

/// The lump names that make up a map, in WAD order
pub const MAP_LUMP_NAMES: [&str; 8] = [
    "THINGS", "LINEDEFS", "SIDEDEFS", "VERTEXES", "SEGS", "SSECTORS", "NODES", "SECTORS",
];

/// Raw lump bytes for one map. The WAD directory walker fills this in, or
/// `from_dir` reads a directory of extracted lumps.
#[derive(Debug, Default, Clone)]
pub struct MapLumps {
    pub name: String,
    pub things: Vec<u8>,
    pub linedefs: Vec<u8>,
    pub sidedefs: Vec<u8>,
    pub vertexes: Vec<u8>,
    pub segs: Vec<u8>,
    pub ssectors: Vec<u8>,
    pub nodes: Vec<u8>,
    pub sectors: Vec<u8>,
    pub blockmap: Option<Vec<u8>>,
}

impl MapLumps {
    /// Reads `THINGS`, `LINEDEFS`, ... from `dir`. The file may be named
    /// exactly as the lump or carry a `.lmp` extension. `BLOCKMAP` is
    /// optional.
    pub fn from_dir(name: &str, dir: &Path) -> Result<Self, LumpError> {
        let read = |lump: &'static str| -> Result<Option<Vec<u8>>, LumpError> {
            for candidate in [
                dir.join(lump),
                dir.join(format!("{lump}.lmp")),
                dir.join(lump.to_ascii_lowercase()),
                dir.join(format!("{}.lmp", lump.to_ascii_lowercase())),
            ] {
                if candidate.exists() {
                    debug!("Reading {candidate:?}");
                    return fs::read(&candidate)
                        .map(Some)
                        .map_err(|source| LumpError::Io {
                            path: candidate,
                            source,
                        });
                }
            }
            Ok(None)
        };
        let require = |lump: &'static str| -> Result<Vec<u8>, LumpError> {
            read(lump)?.ok_or(LumpError::MissingLump(lump))
        };

        let lumps = MapLumps {
            name: name.to_ascii_uppercase(),
            things: require("THINGS")?,
            linedefs: require("LINEDEFS")?,
            sidedefs: require("SIDEDEFS")?,
            vertexes: require("VERTEXES")?,
            segs: require("SEGS")?,
            ssectors: require("SSECTORS")?,
            nodes: require("NODES")?,
            sectors: require("SECTORS")?,
            blockmap: read("BLOCKMAP")?,
        };
        info!("Read map {} from {:?}", lumps.name, dir);
        Ok(lumps)
    }
}

/// Every map lump decoded in to records
#[derive(Debug, Default, Clone)]
pub struct WadMap {
    pub name: String,
    pub things: Vec<WadThing>,
    pub linedefs: Vec<WadLineDef>,
    pub sidedefs: Vec<WadSideDef>,
    pub vertexes: Vec<WadVertex>,
    pub segs: Vec<WadSegment>,
    pub subsectors: Vec<WadSubSector>,
    pub nodes: Vec<WadNode>,
    pub sectors: Vec<WadSector>,
    pub blockmap: Option<WadBlockMapHeader>,
}

impl WadMap {
    /// Decode all lumps. Any lump with a bad size fails the whole map.
    pub fn parse(lumps: &MapLumps) -> Result<Self, LumpError> {
        Ok(WadMap {
            name: lumps.name.clone(),
            things: parse_lump(&lumps.things)?,
            linedefs: parse_lump(&lumps.linedefs)?,
            sidedefs: parse_lump(&lumps.sidedefs)?,
            vertexes: parse_lump(&lumps.vertexes)?,
            segs: parse_lump(&lumps.segs)?,
            subsectors: parse_lump(&lumps.ssectors)?,
            nodes: parse_lump(&lumps.nodes)?,
            sectors: parse_lump(&lumps.sectors)?,
            blockmap: lumps
                .blockmap
                .as_deref()
                .map(WadBlockMapHeader::parse)
                .transpose()?,
        })
    }

    /// Encode back to raw lumps. Used to build maps in code.
    pub fn to_lumps(&self) -> MapLumps {
        MapLumps {
            name: self.name.clone(),
            things: write_lump(&self.things),
            linedefs: write_lump(&self.linedefs),
            sidedefs: write_lump(&self.sidedefs),
            vertexes: write_lump(&self.vertexes),
            segs: write_lump(&self.segs),
            ssectors: write_lump(&self.subsectors),
            nodes: write_lump(&self.nodes),
            sectors: write_lump(&self.sectors),
            blockmap: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_sectors_fail_whole_map() {
        let map = WadMap {
            name: "MAP01".into(),
            sectors: vec![WadSector::new(0, 128, "FLOOR4_8", "CEIL3_5", 160, 0, 0)],
            vertexes: vec![WadVertex::new(0, 0), WadVertex::new(64, 0)],
            ..Default::default()
        };
        let mut lumps = map.to_lumps();
        lumps.sectors.pop();
        let err = WadMap::parse(&lumps).unwrap_err();
        assert!(matches!(
            err,
            LumpError::BadLumpSize {
                lump: "SECTORS",
                ..
            }
        ));
    }

    #[test]
    fn missing_dir_lump() {
        let dir = std::env::temp_dir().join("wad-map-missing-lump-test");
        let _ = std::fs::create_dir_all(&dir);
        let err = MapLumps::from_dir("E1M1", &dir).unwrap_err();
        assert!(matches!(err, LumpError::MissingLump("THINGS")));
    }
}
