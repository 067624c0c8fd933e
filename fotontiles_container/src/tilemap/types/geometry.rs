//! Tile table geometries and their shared slot derivation.
//!
//! The writer and the reader both resolve slot positions through this module,
//! so the mapping between table positions and tile coordinates exists exactly
//! once per container version.

use anyhow::{bail, ensure, Result};
use fotontiles_core::{level_side, TileCoord};

/// Byte length of one compact entry: `x: u32, y: u32, offset: u64, size: u64`.
pub const COMPACT_ENTRY_LENGTH: u64 = 24;
/// Byte length of one dense entry: `offset: u64, size: u64`.
pub const DENSE_ENTRY_LENGTH: u64 = 16;

const COMPACT_TAG: u8 = 0x00;
const DENSE_TAG: u8 = 0x01;

/// The geometry of a level's tile table, recorded in the container header.
///
/// `Compact` is the canonical geometry: one entry per present tile, each
/// carrying its own coordinates, so sparse levels cost only the tiles they
/// actually hold. `Dense` stores a full positional grid of
/// `side = min(2^level, block_side)` slots per axis; it only fits pyramids
/// whose levels stay within the block side and fails loudly otherwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableGeometry {
	Compact,
	Dense { block_side: u32 },
}

impl TableGeometry {
	/// Returns the geometry tag stored in the container header.
	pub fn as_tag(&self) -> u8 {
		match self {
			TableGeometry::Compact => COMPACT_TAG,
			TableGeometry::Dense { .. } => DENSE_TAG,
		}
	}

	/// Parses the geometry tag and block side stored in the container header.
	pub fn from_tag(tag: u8, block_side: u64) -> Result<TableGeometry> {
		Ok(match tag {
			COMPACT_TAG => TableGeometry::Compact,
			DENSE_TAG => {
				ensure!(
					block_side >= 1 && block_side <= u64::from(u32::MAX),
					"invalid dense block side: {block_side}"
				);
				TableGeometry::Dense {
					block_side: block_side as u32,
				}
			}
			value => bail!("unknown index geometry value: {value}"),
		})
	}

	/// Returns the block side for the header field; 0 for the compact geometry.
	pub fn block_side_or_0(&self) -> u64 {
		match self {
			TableGeometry::Compact => 0,
			TableGeometry::Dense { block_side } => u64::from(*block_side),
		}
	}

	/// Returns the byte length of one table entry.
	pub fn entry_length(&self) -> u64 {
		match self {
			TableGeometry::Compact => COMPACT_ENTRY_LENGTH,
			TableGeometry::Dense { .. } => DENSE_ENTRY_LENGTH,
		}
	}

	/// Returns the slot count along one axis of a dense level table.
	pub fn dense_side(&self, level: u8) -> u32 {
		match self {
			TableGeometry::Compact => 0,
			TableGeometry::Dense { block_side } => (*block_side).min(level_side(level)),
		}
	}

	/// Returns the byte length of a level's table holding `tile_count` tiles.
	pub fn table_length(&self, level: u8, tile_count: u64) -> u64 {
		match self {
			TableGeometry::Compact => tile_count * COMPACT_ENTRY_LENGTH,
			TableGeometry::Dense { .. } => {
				let side = u64::from(self.dense_side(level));
				side * side * DENSE_ENTRY_LENGTH
			}
		}
	}

	/// Returns the slot position of a tile within its level table.
	///
	/// Compact tables are positional by insertion order; dense tables derive
	/// the position from the coordinate.
	///
	/// # Errors
	/// Fails if a coordinate does not fit the dense grid of its level.
	pub fn slot_position(&self, insertion_index: usize, coord: &TileCoord) -> Result<u64> {
		match self {
			TableGeometry::Compact => Ok(insertion_index as u64),
			TableGeometry::Dense { .. } => {
				let side = self.dense_side(coord.level);
				ensure!(
					coord.x < side && coord.y < side,
					"tile {coord} does not fit a dense {side}x{side} table, use a larger block side or the compact geometry"
				);
				Ok(u64::from(coord.y) * u64::from(side) + u64::from(coord.x))
			}
		}
	}

	/// Returns the coordinate addressed by a dense slot position.
	///
	/// This is the exact inverse of [`slot_position`](Self::slot_position)
	/// for the dense geometry; compact entries carry their coordinates
	/// explicitly and never derive them.
	pub fn coord_at_slot(&self, level: u8, slot: u64) -> Result<TileCoord> {
		match self {
			TableGeometry::Compact => bail!("compact table entries carry their own coordinates"),
			TableGeometry::Dense { .. } => {
				let side = u64::from(self.dense_side(level));
				ensure!(slot < side * side, "slot {slot} outside the {side}x{side} table of level {level}");
				TileCoord::new((slot % side) as u32, (slot / side) as u32, level)
			}
		}
	}
}
