//! Tile image formats recognized by the container.
//!
//! The container stores raw tile bytes and never decodes them; the format is
//! only recorded so extracted files get their original extension back.

use anyhow::{bail, Result};

/// The image codec of the tiles in a container, identified by file extension.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum TileFormat {
	PNG,
	JPG,
	WEBP,
}

impl TileFormat {
	/// Maps a file extension (without the dot) to a `TileFormat`.
	pub fn from_extension(extension: &str) -> Option<TileFormat> {
		match extension.to_ascii_lowercase().as_str() {
			"png" => Some(TileFormat::PNG),
			"jpg" | "jpeg" => Some(TileFormat::JPG),
			"webp" => Some(TileFormat::WEBP),
			_ => None,
		}
	}

	/// Returns the canonical file extension (without the dot).
	pub fn as_extension(&self) -> &str {
		match self {
			TileFormat::PNG => "png",
			TileFormat::JPG => "jpg",
			TileFormat::WEBP => "webp",
		}
	}

	/// Returns the byte tag stored in the container header.
	pub fn as_tag(&self) -> u8 {
		match self {
			TileFormat::PNG => 0x10,
			TileFormat::JPG => 0x11,
			TileFormat::WEBP => 0x12,
		}
	}

	/// Parses the byte tag stored in the container header.
	pub fn from_tag(tag: u8) -> Result<TileFormat> {
		Ok(match tag {
			0x10 => TileFormat::PNG,
			0x11 => TileFormat::JPG,
			0x12 => TileFormat::WEBP,
			value => bail!("unknown tile format value: {value}"),
		})
	}
}
