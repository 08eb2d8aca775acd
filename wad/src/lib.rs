//! Map lump records and their decoding.
//!
//! A map in a WAD is a marker lump followed by a fixed run of data lumps:
//!
//! ```text,ignore
//!   ┌──────────┐
//!   │  E1M1    │  marker, zero length
//!   ├──────────┤
//!   │ THINGS   │  10 bytes per record
//!   │ LINEDEFS │  14
//!   │ SIDEDEFS │  30
//!   │ VERTEXES │   4
//!   │ SEGS     │  12
//!   │ SSECTORS │   4
//!   │ NODES    │  28
//!   │ SECTORS  │  26
//!   │ REJECT   │  unused here
//!   │ BLOCKMAP │  8 byte header + block lists
//!   └──────────┘
//! ```
//!
//! Walking the WAD directory itself is left to the caller, this crate starts
//! from the lump bytes.

pub mod error;
/// A Lump is a chunk of data that is `sizeof<record-in-lump> * num-of-entries`
/// long. The lump module has the record structs and the parse/write helpers.
pub mod lumps;
pub mod map;

pub use error::LumpError;
pub use lumps::{
    IS_SSECTOR_MASK, LumpRecord, NO_SIDEDEF, WadBlockMapHeader, WadLineDef, WadNode, WadSector,
    WadSegment, WadSideDef, WadSubSector, WadThing, WadVertex, parse_lump, write_lump,
};
pub use map::{MAP_LUMP_NAMES, MapLumps, WadMap};
