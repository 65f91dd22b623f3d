//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use restitch_core::{Piece, PieceRole};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs pieces as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pieces: Vec<PieceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct PieceData {
    /// Position of the piece in the output sequence
    pub index: usize,
    /// The piece text
    pub text: String,
    /// Role of the piece
    pub role: PieceRole,
    /// Length of the text in characters
    pub chars: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pieces: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_piece(&mut self, index: usize, piece: &Piece) -> Result<()> {
        self.pieces.push(PieceData {
            index,
            text: piece.text.clone(),
            role: piece.role,
            chars: piece.text.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.pieces)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
