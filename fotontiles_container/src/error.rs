//! Typed failure modes of container building and extraction.
//!
//! Per-tile conditions (`InputParse`, `TruncatedEntry`, tile-level `Io`) are
//! reported and skipped by the bulk operations; structural conditions
//! (`EmptyInput`, `UnsupportedVersion`) abort the whole run. The caller, not
//! this crate, decides process exit behavior.

use fotontiles_core::TileCoord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or reading tilemap containers.
#[derive(Debug, Error)]
pub enum ContainerError {
	/// A file with a tile image extension whose name does not parse as
	/// `<x>_<y>_<z>` with underscore delimiters.
	#[error("file name {name:?} does not match the <x>_<y>_<z> tile pattern")]
	InputParse { name: String },

	/// The input directory contains no valid tile files at all.
	#[error("no valid tile files found in {path:?}")]
	EmptyInput { path: PathBuf },

	/// The container does not start with a known magic/version tag.
	#[error("unsupported container version (found {found:?})")]
	UnsupportedVersion { found: String },

	/// An index entry points past the end of the container.
	#[error("tile {coord} ends at byte {end} but the container is {len} bytes long")]
	TruncatedEntry { coord: TileCoord, end: u64, len: u64 },

	#[error(transparent)]
	Io(#[from] std::io::Error),
}
