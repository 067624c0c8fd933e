//! A no-op progress indicator for non-terminal environments.

use super::ProgressTrait;

/// Swallows all progress updates.
#[derive(Default)]
pub struct ProgressDrain {}

impl ProgressDrain {
	/// Creates a new drain.
	pub fn new() -> ProgressDrain {
		ProgressDrain {}
	}
}

impl ProgressTrait for ProgressDrain {
	fn inc(&mut self, _value: u64) {}

	fn set_position(&mut self, _value: u64) {}

	fn finish(&mut self) {}
}
