//! Reading tilemap containers: point lookup and slot iteration.

use super::types::{FileHeader, LevelIndex, TileIndex, TileSlot};
use crate::error::ContainerError;
use anyhow::{bail, Context, Result};
use fotontiles_core::io::DataReaderFile;
use fotontiles_core::{Blob, ByteRange, TileCoord, TileFormat};
use log::{trace, warn};
use std::{collections::HashMap, fmt::Debug, path::Path};

/// A reader over one tilemap container file.
///
/// All tile tables are parsed once at open time; afterwards a point lookup
/// is an in-memory probe plus one payload read. Corruption is contained: an
/// unreadable level table only loses that level, and an entry pointing past
/// the end of the file only loses that tile.
pub struct TileMapReader {
	reader: DataReaderFile,
	header: FileHeader,
	levels: Vec<TileIndex>,
	lookup: Vec<HashMap<(u32, u32), ByteRange>>,
}

impl TileMapReader {
	/// Opens a container file and parses its header and index region.
	///
	/// # Errors
	/// Returns [`ContainerError::UnsupportedVersion`] for an unknown version
	/// tag and plain errors when the header or level index cannot be read.
	pub fn open_path(path: &Path) -> Result<TileMapReader> {
		trace!("read {path:?}");

		let mut reader = DataReaderFile::open(path)?;
		let header = FileHeader::from_reader(&mut reader)?;
		let level_index = LevelIndex::from_blob(
			&reader
				.read_range(&header.level_index_range())
				.context("reading the level index")?,
		)?;

		let mut levels = Vec::with_capacity(level_index.len());
		let mut lookup = Vec::with_capacity(level_index.len());
		for (level, range) in level_index.iter().enumerate() {
			let level = level as u8;
			let table = if range.is_empty() {
				TileIndex::new_empty(level)
			} else {
				reader
					.read_range(range)
					.and_then(|blob| TileIndex::from_blob(&blob, &header.geometry, level))
					.unwrap_or_else(|err| {
						warn!("skipping the tile table of level {level}: {err:#}");
						TileIndex::new_empty(level)
					})
			};
			lookup.push(
				table
					.iter()
					.map(|slot| ((slot.coord.x, slot.coord.y), slot.range))
					.collect(),
			);
			levels.push(table);
		}

		Ok(TileMapReader {
			reader,
			header,
			levels,
			lookup,
		})
	}

	/// Returns the parsed container header.
	pub fn header(&self) -> &FileHeader {
		&self.header
	}

	/// Returns the image format of the contained tiles.
	pub fn tile_format(&self) -> TileFormat {
		self.header.tile_format
	}

	/// Returns the per-level tile tables, holes included.
	pub fn levels(&self) -> &[TileIndex] {
		&self.levels
	}

	/// Returns the total number of contained tiles.
	pub fn count_tiles(&self) -> u64 {
		self.levels.iter().map(|table| table.len() as u64).sum()
	}

	/// Returns the container file length in bytes.
	pub fn container_length(&self) -> u64 {
		self.reader.len()
	}

	/// Returns the payload bytes of one tile, or `None` if it is absent.
	///
	/// # Errors
	/// Returns [`ContainerError::TruncatedEntry`] if the tile's index entry
	/// reaches past the end of the container.
	pub fn get_tile(&mut self, coord: &TileCoord) -> Result<Option<Blob>> {
		trace!("get_tile {coord}");

		let Some(ranges) = self.lookup.get(coord.level as usize) else {
			return Ok(None);
		};
		let Some(range) = ranges.get(&(coord.x, coord.y)).copied() else {
			return Ok(None);
		};
		self.read_checked(coord, &range).map(Some)
	}

	/// Returns the payload bytes of a slot obtained from [`levels`](Self::levels).
	pub fn read_slot(&mut self, slot: &TileSlot) -> Result<Blob> {
		self.read_checked(&slot.coord, &slot.range)
	}

	fn read_checked(&mut self, coord: &TileCoord, range: &ByteRange) -> Result<Blob> {
		if range.end() > self.reader.len() {
			bail!(ContainerError::TruncatedEntry {
				coord: *coord,
				end: range.end(),
				len: self.reader.len(),
			});
		}
		self.reader.read_range(range)
	}
}

impl Debug for TileMapReader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TileMapReader")
			.field("header", &self.header)
			.field("tiles", &self.count_tiles())
			.finish()
	}
}
