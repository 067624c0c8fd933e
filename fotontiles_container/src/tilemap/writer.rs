//! Packing a scanned tile directory into a tilemap container.

use super::types::{
	FileHeader, LevelIndex, TableGeometry, TileIndex, TileSlot, HEADER_LENGTH, LEVEL_INDEX_ENTRY_LENGTH,
};
use crate::directory::DirectoryTilesReader;
use anyhow::{ensure, Result};
use fotontiles_core::io::DataWriterFile;
use fotontiles_core::progress::get_progress_bar;
use fotontiles_core::{Blob, ByteRange};
use log::{trace, warn};
use std::{fs, path::Path};

/// Explicit configuration of one writer run.
#[derive(Clone, Copy, Debug)]
pub struct WriterConfig {
	/// The tile table geometry to write.
	pub geometry: TableGeometry,
}

impl Default for WriterConfig {
	fn default() -> Self {
		WriterConfig {
			geometry: TableGeometry::Compact,
		}
	}
}

/// Packs tile directories into tilemap containers.
pub struct TileMapWriter {}

impl TileMapWriter {
	/// Writes all tiles of `reader` into a new container file at `path`.
	///
	/// The byte layout is fully planned before the output file is created;
	/// a single forward pass then emits header, level index, tile tables and
	/// payload in order. A tile file that fails to read during the payload
	/// pass keeps its reserved bytes (zero-filled) and gets its index entry
	/// patched to the absent sentinel, so the run degrades per tile instead
	/// of failing.
	pub fn write_to_path(reader: &DirectoryTilesReader, path: &Path, config: &WriterConfig) -> Result<()> {
		trace!("write {path:?}");

		let geometry = config.geometry;
		let header = FileHeader::new(reader.tile_format(), geometry, reader.levels_count())?;

		// Plan the index region. Slot positions are resolved here once, which
		// also rejects tiles that don't fit a dense grid before the output
		// file exists.
		let mut cursor = HEADER_LENGTH + u64::from(reader.levels_count()) * LEVEL_INDEX_ENTRY_LENGTH;
		let mut level_index = LevelIndex::new_empty(reader.levels_count());
		let mut table_ranges: Vec<ByteRange> = Vec::with_capacity(reader.levels().len());
		for source in reader.levels() {
			for (index, tile) in source.tiles.iter().enumerate() {
				geometry.slot_position(index, &tile.coord)?;
			}
			let range = ByteRange::new(cursor, geometry.table_length(source.level, source.tiles.len() as u64));
			level_index.set(source.level, range);
			table_ranges.push(range);
			cursor += range.length;
		}

		// Plan the payload region.
		let payload_start = cursor;
		let mut tables: Vec<TileIndex> = Vec::with_capacity(reader.levels().len());
		for source in reader.levels() {
			let mut slots = Vec::with_capacity(source.tiles.len());
			for tile in &source.tiles {
				slots.push(TileSlot {
					coord: tile.coord,
					range: ByteRange::new(cursor, tile.size),
				});
				cursor += tile.size;
			}
			tables.push(TileIndex::from_slots(source.level, slots));
		}

		// Single forward pass: header, level index, tile tables, payload.
		let mut writer = DataWriterFile::from_path(path)?;
		writer.append(&header.to_blob()?)?;
		writer.append(&level_index.to_blob()?)?;
		for table in &tables {
			writer.append(&table.to_blob(&geometry)?)?;
		}
		ensure!(
			writer.position()? == payload_start,
			"index region ends at byte {} instead of {payload_start}",
			writer.position()?
		);

		let mut progress = get_progress_bar("packing tiles", reader.count_tiles());
		let mut patches: Vec<u64> = Vec::new();

		for (level_position, source) in reader.levels().iter().enumerate() {
			let table = &tables[level_position];
			for (index, (tile, slot)) in source.tiles.iter().zip(table.iter()).enumerate() {
				match fs::read(&tile.path) {
					Ok(bytes) if bytes.len() as u64 == slot.range.length => {
						writer.append(&Blob::from(bytes))?;
					}
					result => {
						match result {
							Ok(bytes) => warn!(
								"dropping tile {}: size of {:?} changed from {} to {} bytes",
								slot.coord,
								tile.path,
								slot.range.length,
								bytes.len()
							),
							Err(err) => warn!("dropping tile {}: {err}", slot.coord),
						}
						// Keep the planned layout: fill the reserved bytes and
						// remember the entry to patch to "absent".
						writer.append(&Blob::new_sized(slot.range.length as usize))?;
						patches.push(
							table_ranges[level_position].offset
								+ geometry.slot_position(index, &slot.coord)? * geometry.entry_length(),
						);
					}
				}
				progress.inc(1);
			}
		}

		for entry_offset in &patches {
			writer.write_at(*entry_offset, &Blob::new_sized(geometry.entry_length() as usize))?;
		}
		progress.finish();
		writer.finish()?;

		if !patches.is_empty() {
			warn!("dropped {} of {} tiles", patches.len(), reader.count_tiles());
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tilemap::types::MAGIC;
	use assert_fs::{fixture::FileWriteStr, fixture::PathChild, TempDir};

	#[test]
	fn container_layout_matches_the_plan() -> Result<()> {
		let dir = TempDir::new()?;
		dir.child("0_0_0.jpg").write_str("root tile")?;
		dir.child("1_1_1.jpg").write_str("deep")?;

		let reader = DirectoryTilesReader::open_path(dir.path())?;
		let path = dir.child("out.tilemap");
		TileMapWriter::write_to_path(&reader, path.path(), &WriterConfig::default())?;

		let bytes = fs::read(path.path())?;
		// header + 2 level index entries + 2 compact entries + payloads
		assert_eq!(bytes.len() as u64, 32 + 2 * 16 + 2 * 24 + 9 + 4);
		assert_eq!(&bytes[0..14], MAGIC);
		assert!(bytes.ends_with(b"root tiledeep"));
		Ok(())
	}

	#[test]
	fn dense_overflow_leaves_no_output_file() -> Result<()> {
		let dir = TempDir::new()?;
		dir.child("3_3_2.jpg").write_str("does not fit")?;

		let reader = DirectoryTilesReader::open_path(dir.path())?;
		let path = dir.child("out.tilemap");
		let config = WriterConfig {
			geometry: TableGeometry::Dense { block_side: 2 },
		};

		assert!(TileMapWriter::write_to_path(&reader, path.path(), &config).is_err());
		assert!(!path.path().exists());
		Ok(())
	}
}
