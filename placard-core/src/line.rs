//! Fixed-width segmentation of an incoming message into LCD rows.

use heapless::Vec;

use crate::{LCD_COLUMNS, MESSAGE_CAPACITY};

/// The two 16-character rows mapped to the physical lines of the LCD.
///
/// Invariant: neither row ever holds more than [`LCD_COLUMNS`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinePair {
    top: Vec<u8, LCD_COLUMNS>,
    bottom: Vec<u8, LCD_COLUMNS>,
}

impl LinePair {
    /// Create an empty pair (both rows blank)
    pub const fn new() -> Self {
        Self {
            top: Vec::new(),
            bottom: Vec::new(),
        }
    }

    /// Partition a message into the two display rows.
    ///
    /// The first 16 bytes fill the top row, the next 16 the bottom row.
    /// Anything past 32 bytes is dropped; a message that fits on the top
    /// row leaves the bottom row empty.
    pub fn split(input: &[u8]) -> Self {
        let top_end = input.len().min(LCD_COLUMNS);
        let bottom_end = input.len().min(MESSAGE_CAPACITY);

        let mut pair = Self::new();
        // Cannot fail: both slices are bounded to LCD_COLUMNS above
        let _ = pair.top.extend_from_slice(&input[..top_end]);
        if input.len() > LCD_COLUMNS {
            let _ = pair.bottom.extend_from_slice(&input[LCD_COLUMNS..bottom_end]);
        }
        pair
    }

    /// Content of the top row
    pub fn top(&self) -> &[u8] {
        &self.top
    }

    /// Content of the bottom row
    pub fn bottom(&self) -> &[u8] {
        &self.bottom
    }

    /// Total number of bytes that will be rendered
    pub fn len(&self) -> usize {
        self.top.len() + self.bottom.len()
    }

    /// True when both rows are blank
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_message_fills_top_row_only() {
        let pair = LinePair::split(b"CPU: 42%");
        assert_eq!(pair.top(), b"CPU: 42%");
        assert_eq!(pair.bottom(), b"");
    }

    #[test]
    fn long_message_wraps_to_bottom_row() {
        let input = b"CPU temp: 55.2C  Fan: 1200rpm";
        let pair = LinePair::split(input);
        assert_eq!(pair.top(), b"CPU temp: 55.2C ");
        assert_eq!(pair.bottom(), b" Fan: 1200rpm");
        assert_eq!(pair.len(), input.len());
    }

    #[test]
    fn oversized_message_is_truncated() {
        let input = [b'X'; 40];
        let pair = LinePair::split(&input);
        assert_eq!(pair.top(), &[b'X'; 16]);
        assert_eq!(pair.bottom(), &[b'X'; 16]);
        assert_eq!(pair.len(), 32);
    }

    #[test]
    fn empty_message_leaves_both_rows_blank() {
        let pair = LinePair::split(b"");
        assert!(pair.is_empty());
        assert_eq!(pair.top(), b"");
        assert_eq!(pair.bottom(), b"");
    }

    #[test]
    fn exactly_sixteen_bytes_stays_on_top_row() {
        let input = [b'a'; 16];
        let pair = LinePair::split(&input);
        assert_eq!(pair.top(), &input);
        assert_eq!(pair.bottom(), b"");
    }

    #[test]
    fn exactly_thirty_two_bytes_loses_nothing() {
        let input: std::vec::Vec<u8> = (0u8..32).collect();
        let pair = LinePair::split(&input);
        assert_eq!(pair.top(), &input[..16]);
        assert_eq!(pair.bottom(), &input[16..]);
        assert_eq!(pair.len(), 32);
    }

    #[test]
    fn thirty_third_byte_is_dropped() {
        let mut input: std::vec::Vec<u8> = (0u8..32).collect();
        input.push(0xFF);
        let pair = LinePair::split(&input);
        assert_eq!(pair, LinePair::split(&input[..32]));
        assert!(!pair.bottom().contains(&0xFF));
    }

    #[test]
    fn split_is_idempotent() {
        let input = b"same message twice";
        assert_eq!(LinePair::split(input), LinePair::split(input));
    }

    proptest! {
        #[test]
        fn rows_never_exceed_the_column_limit(input in proptest::collection::vec(any::<u8>(), 0..128)) {
            let pair = LinePair::split(&input);
            prop_assert!(pair.top().len() <= LCD_COLUMNS);
            prop_assert!(pair.bottom().len() <= LCD_COLUMNS);
        }

        #[test]
        fn short_inputs_survive_intact(input in proptest::collection::vec(any::<u8>(), 0..=32)) {
            let pair = LinePair::split(&input);
            prop_assert_eq!(pair.len(), input.len());
            prop_assert_eq!(pair.top(), &input[..input.len().min(LCD_COLUMNS)]);
            if input.len() > LCD_COLUMNS {
                prop_assert_eq!(pair.bottom(), &input[LCD_COLUMNS..]);
            }
        }

        #[test]
        fn oversized_inputs_keep_the_first_thirty_two_bytes(
            input in proptest::collection::vec(any::<u8>(), 33..200)
        ) {
            let pair = LinePair::split(&input);
            prop_assert_eq!(pair.top(), &input[..16]);
            prop_assert_eq!(pair.bottom(), &input[16..32]);
        }
    }
}
