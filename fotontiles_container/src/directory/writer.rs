//! Extracting a container back into loose tile files.

use super::tile_file_name;
use crate::tilemap::{TileMapReader, TileSlot};
use anyhow::{Context, Result};
use fotontiles_core::progress::get_progress_bar;
use log::warn;
use std::{fs, path::Path};

/// Writes the tiles of a [`TileMapReader`] into a directory.
pub struct DirectoryTilesWriter {}

impl DirectoryTilesWriter {
	/// Extracts every contained tile into `dir`, creating it if necessary.
	///
	/// Extraction is best-effort: a tile whose index entry is corrupt or
	/// whose file cannot be written is reported and skipped, and the
	/// remaining tiles are still extracted.
	pub fn write_to_path(reader: &mut TileMapReader, dir: &Path) -> Result<()> {
		log::trace!("extract into {dir:?}");

		fs::create_dir_all(dir).with_context(|| format!("creating directory {dir:?}"))?;
		let format = reader.tile_format();

		let slots: Vec<TileSlot> = reader.levels().iter().flat_map(|table| table.iter().cloned()).collect();

		let mut progress = get_progress_bar("extracting tiles", slots.len() as u64);
		let mut skipped: u64 = 0;

		for slot in &slots {
			let written = reader.read_slot(slot).and_then(|blob| {
				fs::write(dir.join(tile_file_name(&slot.coord, format)), blob.as_slice()).map_err(Into::into)
			});
			if let Err(err) = written {
				warn!("skipping tile {}: {err:#}", slot.coord);
				skipped += 1;
			}
			progress.inc(1);
		}
		progress.finish();

		if skipped > 0 {
			warn!("{skipped} of {} tiles could not be extracted", slots.len());
		}
		Ok(())
	}
}
