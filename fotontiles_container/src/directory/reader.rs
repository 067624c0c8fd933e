//! Scanning a tile directory into an ordered pyramid of source tiles.

use super::{SourceLevel, SourceTile};
use crate::error::ContainerError;
use anyhow::{bail, ensure, Context, Result};
use fotontiles_core::{TileCoord, TileFormat};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::{
	collections::HashMap,
	fmt::Debug,
	fs,
	path::{Path, PathBuf},
};

lazy_static! {
	static ref TILE_STEM: Regex = Regex::new(r"^(\d+)_(\d+)_(\d+)$").unwrap();
}

/// A reader for tiles stored as loose files in a directory.
///
/// Scanning happens once in [`open_path`](DirectoryTilesReader::open_path).
/// Files without a tile image extension are ignored silently; files that
/// carry one but whose name or coordinates don't parse are reported and
/// skipped. All tiles must share one image format.
pub struct DirectoryTilesReader {
	dir: PathBuf,
	tile_format: TileFormat,
	levels: Vec<SourceLevel>,
}

impl DirectoryTilesReader {
	/// Scans `dir` and groups its tile files into levels.
	///
	/// # Errors
	/// Returns an error if the directory does not exist, contains tiles of
	/// multiple image formats, or contains no valid tiles at all
	/// ([`ContainerError::EmptyInput`]).
	pub fn open_path(dir: &Path) -> Result<DirectoryTilesReader> {
		log::trace!("scan {dir:?}");

		ensure!(dir.exists(), "path {dir:?} does not exist");
		ensure!(dir.is_dir(), "path {dir:?} is not a directory");

		let mut tiles: Vec<SourceTile> = Vec::new();
		let mut container_format: Option<TileFormat> = None;
		let mut max_level: u8 = 0;

		for entry in fs::read_dir(dir)? {
			let entry = entry?;
			if !entry.file_type()?.is_file() {
				continue;
			}
			let Ok(name) = entry.file_name().into_string() else {
				continue;
			};
			let Some((stem, file_format)) = split_tile_extension(&name) else {
				continue;
			};

			let coord = match parse_tile_stem(&name, stem) {
				Ok(coord) => coord,
				Err(err) => {
					log::warn!("skipping {name:?}: {err:#}");
					continue;
				}
			};

			if let Some(format) = container_format {
				if format != file_format {
					let mut found = [format, file_format];
					found.sort();
					bail!("found multiple tile formats: {found:?}");
				}
			} else {
				container_format = Some(file_format);
			}

			let size = match entry.metadata() {
				Ok(metadata) => metadata.len(),
				Err(err) => {
					log::warn!("skipping {name:?}: {err}");
					continue;
				}
			};

			max_level = max_level.max(coord.level);
			tiles.push(SourceTile {
				coord,
				path: entry.path(),
				size,
			});
		}

		if tiles.is_empty() {
			bail!(ContainerError::EmptyInput {
				path: dir.to_path_buf()
			});
		}
		let tile_format = container_format.context("tile format must be specified")?;

		let mut grouped: HashMap<u8, Vec<SourceTile>> = tiles.into_iter().into_group_map_by(|tile| tile.coord.level);
		let levels = (0..=max_level)
			.map(|level| SourceLevel {
				level,
				tiles: grouped
					.remove(&level)
					.unwrap_or_default()
					.into_iter()
					.sorted_unstable_by_key(|tile| (tile.coord.y, tile.coord.x))
					.collect(),
			})
			.collect();

		Ok(DirectoryTilesReader {
			dir: dir.to_path_buf(),
			tile_format,
			levels,
		})
	}

	/// Returns the shared image format of all scanned tiles.
	pub fn tile_format(&self) -> TileFormat {
		self.tile_format
	}

	/// Returns the levels `0..=max_z`, holes included.
	pub fn levels(&self) -> &[SourceLevel] {
		&self.levels
	}

	/// Returns `max_z + 1`.
	pub fn levels_count(&self) -> u8 {
		self.levels.len() as u8
	}

	/// Returns the total number of scanned tiles.
	pub fn count_tiles(&self) -> u64 {
		self.levels.iter().map(|level| level.tiles.len() as u64).sum()
	}
}

impl Debug for DirectoryTilesReader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DirectoryTilesReader")
			.field("dir", &self.dir)
			.field("tile_format", &self.tile_format)
			.field("levels", &self.levels.len())
			.field("tiles", &self.count_tiles())
			.finish()
	}
}

/// Splits a file name into stem and recognized tile format, if it has one.
fn split_tile_extension(name: &str) -> Option<(&str, TileFormat)> {
	let (stem, extension) = name.rsplit_once('.')?;
	Some((stem, TileFormat::from_extension(extension)?))
}

/// Parses `<x>_<y>_<z>` and validates the coordinate against its level.
fn parse_tile_stem(name: &str, stem: &str) -> Result<TileCoord> {
	let input_parse = || ContainerError::InputParse { name: name.to_string() };
	let captures = TILE_STEM.captures(stem).ok_or_else(input_parse)?;
	let x: u32 = captures[1].parse().map_err(|_| input_parse())?;
	let y: u32 = captures[2].parse().map_err(|_| input_parse())?;
	let level: u8 = captures[3].parse().map_err(|_| input_parse())?;
	TileCoord::new(x, y, level)
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::{fixture::FileWriteStr, fixture::PathChild, TempDir};

	#[test]
	fn scans_and_orders_tiles() -> Result<()> {
		let dir = TempDir::new()?;
		dir.child("0_0_0.jpg").write_str("root")?;
		dir.child("0_1_1.jpg").write_str("row one")?;
		dir.child("1_0_1.jpg").write_str("row zero")?;
		dir.child(".DS_Store").write_str("")?;
		dir.child("notes.txt").write_str("ignored")?;

		let reader = DirectoryTilesReader::open_path(dir.path())?;
		assert_eq!(reader.tile_format(), TileFormat::JPG);
		assert_eq!(reader.levels_count(), 2);
		assert_eq!(reader.count_tiles(), 3);

		let order: Vec<String> = reader.levels()[1].tiles.iter().map(|tile| tile.coord.to_string()).collect();
		assert_eq!(order, ["1_0_1", "0_1_1"]);
		Ok(())
	}

	#[test]
	fn keeps_hole_levels() -> Result<()> {
		let dir = TempDir::new()?;
		dir.child("0_0_0.png").write_str("z0")?;
		dir.child("3_5_3.png").write_str("z3")?;

		let reader = DirectoryTilesReader::open_path(dir.path())?;
		assert_eq!(reader.levels_count(), 4);
		assert!(reader.levels()[1].tiles.is_empty());
		assert!(reader.levels()[2].tiles.is_empty());
		assert_eq!(reader.levels()[3].tiles.len(), 1);
		Ok(())
	}

	#[test]
	fn skips_unparsable_and_out_of_bounds_names() -> Result<()> {
		let dir = TempDir::new()?;
		dir.child("0_0_0.jpg").write_str("good")?;
		dir.child("foo_bar.jpg").write_str("bad stem")?;
		dir.child("2_0_1.jpg").write_str("x out of bounds")?;
		dir.child("1_2_345.jpg").write_str("level out of range")?;

		let reader = DirectoryTilesReader::open_path(dir.path())?;
		assert_eq!(reader.count_tiles(), 1);
		Ok(())
	}

	#[test]
	fn empty_directory_fails() -> Result<()> {
		let dir = TempDir::new()?;
		dir.child("readme.md").write_str("no tiles here")?;

		let err = DirectoryTilesReader::open_path(dir.path()).unwrap_err();
		assert!(matches!(
			err.downcast_ref::<ContainerError>(),
			Some(ContainerError::EmptyInput { .. })
		));
		Ok(())
	}

	#[test]
	fn mixed_formats_fail() -> Result<()> {
		let dir = TempDir::new()?;
		dir.child("0_0_0.jpg").write_str("jpg")?;
		dir.child("0_0_1.png").write_str("png")?;

		let err = DirectoryTilesReader::open_path(dir.path()).unwrap_err();
		assert_eq!(err.to_string(), "found multiple tile formats: [PNG, JPG]");
		Ok(())
	}

	#[test]
	fn missing_directory_fails() {
		assert!(DirectoryTilesReader::open_path(Path::new("/does/not/exist")).is_err());
	}
}
