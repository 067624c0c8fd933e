//! Tile directories: loose tile files as produced by a tiling pipeline.
//!
//! A tile directory is flat. Every tile is one file named
//! `<x>_<y>_<z>.<ext>`, where `x`/`y` are the column/row within zoom level
//! `z` and `<ext>` names the image codec (see
//! [`TileFormat`](fotontiles_core::TileFormat)). Directory entries that don't
//! carry a tile image extension are ignored.

mod reader;
mod writer;

pub use reader::DirectoryTilesReader;
pub use writer::DirectoryTilesWriter;

use fotontiles_core::{TileCoord, TileFormat};
use std::path::PathBuf;

/// One zoom level of a scanned tile directory.
///
/// Levels between 0 and the deepest observed zoom always exist; a level
/// without tiles simply owns an empty slot list. Tiles are ordered by
/// `(y, x)`, which fixes the container layout independently of filesystem
/// iteration order.
#[derive(Debug)]
pub struct SourceLevel {
	/// The zoom level.
	pub level: u8,
	/// The tiles present at this level.
	pub tiles: Vec<SourceTile>,
}

/// A single tile file queued for packing.
#[derive(Debug)]
pub struct SourceTile {
	/// The parsed tile coordinate.
	pub coord: TileCoord,
	/// The path of the tile image file.
	pub path: PathBuf,
	/// The file size in bytes at scan time.
	pub size: u64,
}

/// Returns the file name a tile is stored under.
pub fn tile_file_name(coord: &TileCoord, format: TileFormat) -> String {
	format!("{}_{}_{}.{}", coord.x, coord.y, coord.level, format.as_extension())
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	#[test]
	fn file_names() -> Result<()> {
		let coord = TileCoord::new(5, 6, 3)?;
		assert_eq!(tile_file_name(&coord, TileFormat::JPG), "5_6_3.jpg");
		assert_eq!(tile_file_name(&coord, TileFormat::WEBP), "5_6_3.webp");
		Ok(())
	}
}
