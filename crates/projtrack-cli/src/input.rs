//! Line-based console input

use std::io::{self, BufRead};

/// Reads one line at a time from a buffered source.
///
/// Owns the input cursor; interactive components receive this handle
/// explicitly instead of reaching for ambient console state.
pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    /// Create a new line reader over any buffered source
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read exactly one line.
    ///
    /// Returns `Ok(None)` only at end-of-input. The line terminator is
    /// stripped; any other leading or trailing whitespace is preserved.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.inner.read_line(&mut line)? == 0 {
            return Ok(None); // EOF
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> LineReader<Cursor<Vec<u8>>> {
        LineReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_reads_one_line_at_a_time() {
        let mut input = reader("first\nsecond\n");
        assert_eq!(input.read_line().unwrap(), Some("first".to_string()));
        assert_eq!(input.read_line().unwrap(), Some("second".to_string()));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn test_none_only_at_end_of_input() {
        let mut input = reader("");
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut input = reader("\n");
        assert_eq!(input.read_line().unwrap(), Some(String::new()));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn test_preserves_surrounding_whitespace() {
        let mut input = reader("  padded  \n");
        assert_eq!(input.read_line().unwrap(), Some("  padded  ".to_string()));
    }

    #[test]
    fn test_strips_crlf_terminator() {
        let mut input = reader("windows\r\n");
        assert_eq!(input.read_line().unwrap(), Some("windows".to_string()));
    }

    #[test]
    fn test_final_line_without_terminator() {
        let mut input = reader("last");
        assert_eq!(input.read_line().unwrap(), Some("last".to_string()));
        assert_eq!(input.read_line().unwrap(), None);
    }
}
