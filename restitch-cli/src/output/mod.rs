//! Output formatting module

use anyhow::Result;
use restitch_core::Piece;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and emit a single piece
    fn format_piece(&mut self, index: usize, piece: &Piece) -> Result<()>;

    /// Finalize output (e.g., close a JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
