//! Core building blocks shared by the fotontiles crates.
//!
//! This crate carries no container logic of its own. It provides:
//! - [`types`]: tile coordinates, tile image formats, byte ranges and blobs,
//! - [`io`]: byte-order aware value codecs plus seekable file readers/writers,
//! - [`progress`]: a minimal terminal progress bar.

pub mod io;
pub mod progress;
pub mod types;

pub use types::{level_side, Blob, ByteRange, TileCoord, TileFormat};
