//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use restitch_core::Piece;
use std::io::Write;

/// Text formatter - one piece per line, tagged with its role
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_piece(&mut self, _index: usize, piece: &Piece) -> Result<()> {
        let tag = if piece.is_overlap() {
            "overlap"
        } else {
            "unique"
        };
        writeln!(self.writer, "[{tag}] {}", piece.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
