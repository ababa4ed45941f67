//! Tests for the ICQ fixed-width decoder

mod decoder_tests;

/// Build an 80-column line by writing values into fixed byte ranges
pub fn build_line(fields: &[(std::ops::Range<usize>, &str)]) -> String {
    let mut line = " ".repeat(80);
    for (range, value) in fields {
        assert!(value.len() <= range.end - range.start, "field too wide");
        line.replace_range(range.start..range.start + value.len(), value);
    }
    line
}
