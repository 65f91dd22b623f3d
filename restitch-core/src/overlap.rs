//! Pairwise overlap detection between adjacent segments

/// The longest shared text between two adjacent segments
///
/// Describes the longest string that is simultaneously a suffix of the
/// left segment and a prefix of the right segment of one adjacent pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overlap {
    /// Overlap length in characters (Unicode scalar values)
    pub chars: usize,
    /// The shared text; `text.len()` gives the same length in bytes
    pub text: String,
}

impl Overlap {
    /// Zero-length descriptor, the fallback when nothing matches
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true when the pair shares no text
    pub fn is_none(&self) -> bool {
        self.chars == 0
    }
}

/// Detects the longest suffix of `left` that equals a prefix of `right`.
///
/// Candidate lengths run from zero to the character length of the shorter
/// string, inclusive; identical strings therefore overlap over their full
/// length. Comparison is exact, case- and whitespace-sensitive. Total over
/// all inputs: either string being empty yields the zero descriptor.
pub fn overlap(left: &str, right: &str) -> Overlap {
    let left_cuts = char_cuts(left);
    let right_cuts = char_cuts(right);
    let left_chars = left_cuts.len() - 1;
    let right_chars = right_cuts.len() - 1;

    let mut best = Overlap::none();

    // Scan the full candidate range and keep the largest match. A short
    // accidental match below the true longest must not win, so the scan
    // never returns early.
    for len in 1..=left_chars.min(right_chars) {
        let suffix = &left[left_cuts[left_chars - len]..];
        let prefix = &right[..right_cuts[len]];
        if suffix == prefix {
            best = Overlap {
                chars: len,
                text: suffix.to_string(),
            };
        }
    }

    best
}

/// Computes the overlap descriptor for every adjacent pair in `segments`.
///
/// N segments yield N-1 descriptors; descriptor `i` depends only on
/// segments `i` and `i+1`. Sequences of length zero or one yield nothing.
pub fn scan<S: AsRef<str>>(segments: &[S]) -> Vec<Overlap> {
    segments
        .windows(2)
        .map(|pair| overlap(pair[0].as_ref(), pair[1].as_ref()))
        .collect()
}

/// Byte offsets of every character boundary in `s`, including both ends.
fn char_cuts(s: &str) -> Vec<usize> {
    s.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_overlap() {
        let result = overlap("hello world", "world peace");
        assert_eq!(result.chars, 5);
        assert_eq!(result.text, "world");
    }

    #[test]
    fn test_no_overlap() {
        let result = overlap("abc", "def");
        assert!(result.is_none());
        assert_eq!(result.text, "");
    }

    #[test]
    fn test_identical_strings_overlap_fully() {
        let result = overlap("same", "same");
        assert_eq!(result.chars, 4);
        assert_eq!(result.text, "same");
    }

    #[test]
    fn test_empty_strings() {
        assert!(overlap("", "abc").is_none());
        assert!(overlap("abc", "").is_none());
        assert!(overlap("", "").is_none());
    }

    #[test]
    fn test_largest_match_wins() {
        // "a" matches at length 1, but the true overlap is "aba".
        let result = overlap("xaba", "abaya");
        assert_eq!(result.chars, 3);
        assert_eq!(result.text, "aba");
    }

    #[test]
    fn test_direction_matters() {
        // "world" is a prefix of the left and a suffix of the right,
        // which is the wrong direction for a left-to-right scan.
        assert!(overlap("world peace", "hello world").is_none());
    }

    #[test]
    fn test_multibyte_overlap() {
        let result = overlap("火災注意", "注意事項");
        assert_eq!(result.chars, 2);
        assert_eq!(result.text, "注意");
    }

    #[test]
    fn test_shorter_right_segment() {
        let result = overlap("abcdef", "def");
        assert_eq!(result.chars, 3);
        assert_eq!(result.text, "def");
    }

    #[test]
    fn test_scan_adjacent_pairs() {
        let segments = ["hello world", "world peace", "peace talks"];
        let overlaps = scan(&segments);

        assert_eq!(overlaps.len(), 2);
        assert_eq!(overlaps[0].text, "world");
        assert_eq!(overlaps[1].text, "peace");
    }

    #[test]
    fn test_scan_short_sequences() {
        assert!(scan::<&str>(&[]).is_empty());
        assert!(scan(&["onlyone"]).is_empty());
    }
}
