//! Pack quad-tree pyramids of image tiles into tilemap containers and back.
//!
//! The crate is built from two symmetric pairs:
//! - [`DirectoryTilesReader`] scans a directory of `<x>_<y>_<z>.<ext>` tile
//!   files; [`TileMapWriter`] packs such a directory into a single seekable
//!   `.tilemap` container file.
//! - [`TileMapReader`] opens a container for point lookups and iteration;
//!   [`DirectoryTilesWriter`] extracts every contained tile back into loose
//!   files.
//!
//! # Quick start
//! ```no_run
//! use fotontiles_container::*;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Pack a directory of tiles into a container
//!     let tiles = DirectoryTilesReader::open_path(Path::new("tiles"))?;
//!     TileMapWriter::write_to_path(&tiles, Path::new("pyramid.tilemap"), &WriterConfig::default())?;
//!
//!     // Extract it again somewhere else
//!     let mut container = TileMapReader::open_path(Path::new("pyramid.tilemap"))?;
//!     DirectoryTilesWriter::write_to_path(&mut container, Path::new("extracted"))?;
//!     Ok(())
//! }
//! ```

mod directory;
mod error;
mod tilemap;

pub use directory::*;
pub use error::ContainerError;
pub use tilemap::*;
