//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use restitch_core::Piece;
use std::io::Write;

/// Markdown formatter - the merged document with overlap runs emphasized
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document: String,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document: String::new(),
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_piece(&mut self, _index: usize, piece: &Piece) -> Result<()> {
        if piece.is_overlap() {
            self.document.push_str("**");
            self.document.push_str(&piece.text);
            self.document.push_str("**");
        } else {
            self.document.push_str(&piece.text);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "{}", self.document)?;
        self.writer.flush()?;
        Ok(())
    }
}
