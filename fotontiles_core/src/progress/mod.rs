//! Progress reporting for long-running tile passes.
//!
//! The bar is hand-rolled on purpose, so the core crate stays free of
//! terminal dependencies. When stderr is not a terminal (tests, pipelines,
//! cron jobs) the factory returns a no-op drain instead.

mod progress_bar;
mod progress_drain;

pub use progress_bar::ProgressBar;
pub use progress_drain::ProgressDrain;

use std::io::IsTerminal;

/// The interface shared by all progress indicators.
pub trait ProgressTrait: Send {
	/// Advances the position by `value`.
	fn inc(&mut self, value: u64);

	/// Sets the absolute position.
	fn set_position(&mut self, value: u64);

	/// Completes the indicator and releases the terminal line.
	fn finish(&mut self);
}

/// Creates a progress bar, or a silent drain when stderr is not a terminal.
pub fn get_progress_bar(message: &str, max_value: u64) -> Box<dyn ProgressTrait> {
	if std::io::stderr().is_terminal() {
		Box::new(ProgressBar::new(message, max_value))
	} else {
		Box::new(ProgressDrain::new())
	}
}
