//! A minimal terminal progress bar: message, counts and percentage.

use super::ProgressTrait;
use std::io::{self, Write};

/// Renders progress to stderr, redrawing only when the percentage changes.
pub struct ProgressBar {
	message: String,
	len: u64,
	pos: u64,
	drawn_percent: Option<u64>,
}

impl ProgressBar {
	/// Creates a bar with a message and a maximum value.
	pub fn new(message: &str, max_value: u64) -> ProgressBar {
		let mut bar = ProgressBar {
			message: message.to_string(),
			len: max_value.max(1),
			pos: 0,
			drawn_percent: None,
		};
		bar.redraw();
		bar
	}

	fn redraw(&mut self) {
		let pos = self.pos.min(self.len);
		let percent = pos * 100 / self.len;
		if self.drawn_percent == Some(percent) {
			return;
		}
		self.drawn_percent = Some(percent);

		let mut stderr = io::stderr();
		let _ = write!(
			stderr,
			"\r\x1b[2K{}: {}/{} ({percent:>3}%)",
			self.message, pos, self.len
		);
		let _ = stderr.flush();
	}
}

impl ProgressTrait for ProgressBar {
	fn inc(&mut self, value: u64) {
		self.pos = self.pos.saturating_add(value);
		self.redraw();
	}

	fn set_position(&mut self, value: u64) {
		self.pos = value;
		self.redraw();
	}

	fn finish(&mut self) {
		self.pos = self.len;
		self.drawn_percent = None;
		self.redraw();
		let _ = writeln!(io::stderr());
	}
}
