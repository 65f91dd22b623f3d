//! Labeled output pieces

/// Classification of an output piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceRole {
    /// Text contributed by exactly one segment
    Unique,
    /// Text shared by two adjacent segments, emitted once
    Overlap,
}

/// One piece of the reconciled output
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    /// The piece text; empty only for Unique pieces
    pub text: String,
    /// Whether the text is unique to one segment or shared
    pub role: PieceRole,
}

impl Piece {
    /// Creates a unique piece
    pub fn unique(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: PieceRole::Unique,
        }
    }

    /// Creates an overlap piece
    pub fn overlap(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: PieceRole::Overlap,
        }
    }

    /// Returns true for overlap pieces
    pub fn is_overlap(&self) -> bool {
        self.role == PieceRole::Overlap
    }
}
