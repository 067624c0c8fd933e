//! Per-level tile tables mapping slots to payload byte ranges.
//!
//! Every slot carries its own coordinate in memory, regardless of the table
//! geometry on disk; only the serialization differs (see
//! [`TableGeometry`]). A slot whose range has `length == 0` means "tile
//! absent" and is never materialized.

use super::TableGeometry;
use anyhow::{ensure, Result};
use byteorder::{BigEndian as BE, ByteOrder};
use fotontiles_core::io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob};
use fotontiles_core::{Blob, ByteRange, TileCoord};

/// One present tile: its coordinate and its payload location.
#[derive(Clone, Debug, PartialEq)]
pub struct TileSlot {
	/// The tile coordinate.
	pub coord: TileCoord,
	/// The absolute byte range of the tile payload.
	pub range: ByteRange,
}

/// The tile table of one level.
#[derive(Debug, PartialEq)]
pub struct TileIndex {
	level: u8,
	slots: Vec<TileSlot>,
}

impl TileIndex {
	/// Creates an empty table for `level`.
	pub fn new_empty(level: u8) -> TileIndex {
		TileIndex { level, slots: Vec::new() }
	}

	/// Creates a table from prepared slots.
	pub fn from_slots(level: u8, slots: Vec<TileSlot>) -> TileIndex {
		TileIndex { level, slots }
	}

	/// Returns the zoom level this table belongs to.
	pub fn level(&self) -> u8 {
		self.level
	}

	/// Returns the number of present tiles.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// Returns `true` if the level holds no tiles.
	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Iterates the slots in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, TileSlot> {
		self.slots.iter()
	}

	/// Serializes the table in the given geometry.
	pub fn to_blob(&self, geometry: &TableGeometry) -> Result<Blob> {
		match geometry {
			TableGeometry::Compact => {
				let mut writer = ValueWriterBlob::new_be();
				for slot in &self.slots {
					writer.write_u32(slot.coord.x)?;
					writer.write_u32(slot.coord.y)?;
					writer.write_range(&slot.range)?;
				}
				Ok(writer.into_blob())
			}
			TableGeometry::Dense { .. } => {
				let mut blob = Blob::new_sized(geometry.table_length(self.level, self.slots.len() as u64) as usize);
				for (index, slot) in self.slots.iter().enumerate() {
					let start = (geometry.slot_position(index, &slot.coord)? * geometry.entry_length()) as usize;
					let entry = &mut blob.as_mut_slice()[start..start + 16];
					BE::write_u64(&mut entry[0..8], slot.range.offset);
					BE::write_u64(&mut entry[8..16], slot.range.length);
				}
				Ok(blob)
			}
		}
	}

	/// Parses a serialized table of `level` in the given geometry.
	///
	/// Entries with an invalid coordinate are reported and dropped; the rest
	/// of the table stays usable.
	pub fn from_blob(blob: &Blob, geometry: &TableGeometry, level: u8) -> Result<TileIndex> {
		let mut slots = Vec::new();
		match geometry {
			TableGeometry::Compact => {
				ensure!(
					blob.len() % geometry.entry_length() == 0,
					"tile table length ({}) of level {level} is not a multiple of {}",
					blob.len(),
					geometry.entry_length()
				);
				let mut reader = ValueReaderSlice::new_be(blob.as_slice());
				while reader.has_remaining() {
					let x = reader.read_u32()?;
					let y = reader.read_u32()?;
					let range = reader.read_range()?;
					if range.is_empty() {
						continue;
					}
					match TileCoord::new(x, y, level) {
						Ok(coord) => slots.push(TileSlot { coord, range }),
						Err(err) => log::warn!("dropping tile table entry of level {level}: {err:#}"),
					}
				}
			}
			TableGeometry::Dense { .. } => {
				let expected = geometry.table_length(level, 0);
				ensure!(
					blob.len() == expected,
					"tile table of level {level} should be {expected} bytes long, but is {} bytes long",
					blob.len()
				);
				let mut reader = ValueReaderSlice::new_be(blob.as_slice());
				let mut slot = 0u64;
				while reader.has_remaining() {
					let range = reader.read_range()?;
					if !range.is_empty() {
						let coord = geometry.coord_at_slot(level, slot)?;
						slots.push(TileSlot { coord, range });
					}
					slot += 1;
				}
			}
		}
		Ok(TileIndex { level, slots })
	}
}
