//! The tilemap container format.
//!
//! A tilemap container packs a whole tile pyramid into one seekable file:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ HEADER (32 bytes)                                            │
//! │   magic b"fotontiles_v01", format tag, geometry tag,         │
//! │   levels_count, block_side_or_0                              │
//! ├──────────────────────────────────────────────────────────────┤
//! │ LEVEL INDEX (levels_count x 16 bytes)                        │
//! │   per level: offset + length of its tile table               │
//! │   (a hole level keeps a zero-length entry)                   │
//! ├──────────────────────────────────────────────────────────────┤
//! │ TILE TABLES (one per level, geometry per the header)         │
//! │   compact: x u32 | y u32 | offset u64 | size u64 per tile    │
//! │   dense:   offset u64 | size u64 per grid slot               │
//! │   (size == 0 means "tile absent")                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │ PAYLOAD (concatenated raw tile bytes)                        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are big-endian; payload offsets are absolute file offsets.
//! The layout is write-once: containers are built in a single forward pass
//! and never updated in place.

mod reader;
mod types;
mod writer;

pub use reader::TileMapReader;
pub use types::{
	FileHeader, LevelIndex, TableGeometry, TileIndex, TileSlot, COMPACT_ENTRY_LENGTH, DENSE_ENTRY_LENGTH,
	HEADER_LENGTH, LEVEL_INDEX_ENTRY_LENGTH, MAGIC, MAX_LEVELS,
};
pub use writer::{TileMapWriter, WriterConfig};
