//! A thin wrapper around `Vec<u8>` used as the unit of binary data.
//!
//! Tile payloads, index tables and headers are all moved around as [`Blob`]s,
//! which keeps the io traits free of raw `Vec<u8>` plumbing.

use std::fmt::Debug;

/// Owned binary data.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Creates a zero-filled `Blob` of the given size.
	pub fn new_sized(length: usize) -> Blob {
		Blob(vec![0u8; length])
	}

	/// Returns the data as a byte slice.
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	/// Returns the data as a mutable byte slice.
	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		&mut self.0
	}

	/// Consumes the `Blob` and returns the underlying vector.
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the length in bytes.
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	/// Returns `true` if the `Blob` contains no bytes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(vec: Vec<u8>) -> Blob {
		Blob(vec)
	}
}

impl From<&[u8]> for Blob {
	fn from(slice: &[u8]) -> Blob {
		Blob(slice.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(array: &[u8; N]) -> Blob {
		Blob(array.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(text: &str) -> Blob {
		Blob(text.as_bytes().to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({} bytes)", self.0.len())
	}
}
