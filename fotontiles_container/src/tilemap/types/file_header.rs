//! The container file header.
//!
//! 32 bytes at offset 0, all multi-byte integers big-endian:
//!
//! ```text
//! magic + version   b"fotontiles_v01"   14 bytes
//! tile format tag   u8                   1 byte
//! geometry tag      u8                   1 byte
//! levels_count      u64                  8 bytes
//! block_side_or_0   u64                  8 bytes
//! ```
//!
//! Everything the reader needs to locate the index region is derived from
//! these fields alone.

use super::{TableGeometry, LEVEL_INDEX_ENTRY_LENGTH};
use crate::error::ContainerError;
use anyhow::{bail, ensure, Context, Result};
use fotontiles_core::io::{DataReaderFile, ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob};
use fotontiles_core::{Blob, ByteRange, TileFormat};

/// The magic bytes every container starts with; bumped on layout changes.
pub const MAGIC: &[u8; 14] = b"fotontiles_v01";

/// Total header length in bytes.
pub const HEADER_LENGTH: u64 = 32;

/// Upper bound on `levels_count` (zoom levels are `0..=31`).
pub const MAX_LEVELS: u64 = 32;

/// The parsed header of a tilemap container.
#[derive(Debug, PartialEq)]
pub struct FileHeader {
	/// The image format shared by all contained tiles.
	pub tile_format: TileFormat,
	/// The tile table geometry of this container.
	pub geometry: TableGeometry,
	/// One more than the deepest zoom level, including hole levels.
	pub levels_count: u8,
}

impl FileHeader {
	/// Creates a new `FileHeader`.
	///
	/// # Errors
	/// Returns an error if `levels_count` is outside `1..=32`.
	pub fn new(tile_format: TileFormat, geometry: TableGeometry, levels_count: u8) -> Result<FileHeader> {
		ensure!(
			levels_count >= 1 && u64::from(levels_count) <= MAX_LEVELS,
			"levels_count ({levels_count}) must be within 1..={MAX_LEVELS}"
		);
		Ok(FileHeader {
			tile_format,
			geometry,
			levels_count,
		})
	}

	/// Reads and parses the header at the start of a container file.
	pub fn from_reader(reader: &mut DataReaderFile) -> Result<FileHeader> {
		let blob = reader
			.read_range(&ByteRange::new(0, HEADER_LENGTH))
			.context("reading the container header")?;
		FileHeader::from_blob(&blob)
	}

	/// Serializes the header.
	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_be();
		writer.write_slice(MAGIC)?;
		writer.write_u8(self.tile_format.as_tag())?;
		writer.write_u8(self.geometry.as_tag())?;
		writer.write_u64(u64::from(self.levels_count))?;
		writer.write_u64(self.geometry.block_side_or_0())?;

		if writer.position()? != HEADER_LENGTH {
			bail!(
				"header should be {HEADER_LENGTH} bytes long, but is {} bytes long",
				writer.position()?
			);
		}
		Ok(writer.into_blob())
	}

	/// Parses a serialized header.
	///
	/// # Errors
	/// Returns [`ContainerError::UnsupportedVersion`] on an unknown magic or
	/// version tag, and plain errors on unknown format/geometry tags or an
	/// implausible level count.
	pub fn from_blob(blob: &Blob) -> Result<FileHeader> {
		ensure!(
			blob.len() == HEADER_LENGTH,
			"a container header must be {HEADER_LENGTH} bytes long"
		);

		let mut reader = ValueReaderSlice::new_be(blob.as_slice());
		let magic = reader.read_blob(MAGIC.len() as u64)?;
		if magic.as_slice() != MAGIC {
			bail!(ContainerError::UnsupportedVersion {
				found: String::from_utf8_lossy(magic.as_slice()).into_owned(),
			});
		}

		let tile_format = TileFormat::from_tag(reader.read_u8()?)?;
		let geometry_tag = reader.read_u8()?;
		let levels_count = reader.read_u64()?;
		let block_side = reader.read_u64()?;

		ensure!(
			levels_count >= 1 && levels_count <= MAX_LEVELS,
			"implausible levels_count in header: {levels_count}"
		);
		let geometry = TableGeometry::from_tag(geometry_tag, block_side)?;

		Ok(FileHeader {
			tile_format,
			geometry,
			levels_count: levels_count as u8,
		})
	}

	/// Returns the byte range of the level index, derived from the header alone.
	pub fn level_index_range(&self) -> ByteRange {
		ByteRange::new(HEADER_LENGTH, u64::from(self.levels_count) * LEVEL_INDEX_ENTRY_LENGTH)
	}
}
