//! Shared value types: binary data, byte ranges, tile coordinates and formats.

mod blob;
mod byte_range;
mod tile_coord;
mod tile_format;

pub use blob::Blob;
pub use byte_range::ByteRange;
pub use tile_coord::{level_side, TileCoord, MAX_LEVEL};
pub use tile_format::TileFormat;
