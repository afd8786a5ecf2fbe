//! Reply line classification
//!
//! Shared framing helpers used by every reply grammar: reading one line
//! from the stream, splitting a status line into code and remainder, and
//! stripping the outer quotes the protocol puts around words and
//! descriptions.

use std::io::BufRead;

use crate::error::Result;

/// Status codes consumed by the client
pub mod status {
    /// n databases present
    pub const DATABASES_FOLLOW: u16 = 110;
    /// n strategies available
    pub const STRATEGIES_FOLLOW: u16 = 111;
    /// database information follows
    pub const INFO_FOLLOWS: u16 = 112;
    /// n definitions retrieved
    pub const DEFINITIONS_FOLLOW: u16 = 150;
    /// one definition block follows
    pub const DEFINITION_FOLLOWS: u16 = 151;
    /// n matches found
    pub const MATCHES_FOLLOW: u16 = 152;
    /// welcome banner
    pub const BANNER: u16 = 220;
    /// server closing connection
    pub const CLOSING: u16 = 221;
    /// command complete
    pub const COMMAND_COMPLETE: u16 = 250;
    /// invalid database (negative reply, not an error)
    pub const INVALID_DATABASE: u16 = 550;
    /// no match (negative reply, not an error)
    pub const NO_MATCH: u16 = 552;
}

/// A classified status line: three-digit code plus the remaining text
///
/// Transient parsing artifact; not retained after the reply block is
/// consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Three-digit status code
    pub code: u16,
    /// Remainder of the line after the code and separating space
    pub text: String,
}

impl Reply {
    /// Classify a line as a status line
    ///
    /// Returns `None` for body/data lines: anything that does not start
    /// with exactly three ASCII digits followed by a space or end of line.
    pub fn parse(line: &str) -> Option<Reply> {
        let bytes = line.as_bytes();
        if bytes.len() < 3 || !bytes[..3].iter().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match bytes.get(3) {
            None | Some(b' ') => {}
            Some(_) => return None,
        }
        let code = line[..3].parse().ok()?;
        let text = line.get(4..).unwrap_or("").to_string();
        Some(Reply { code, text })
    }

    /// The original line, reassembled for error messages
    pub fn line(&self) -> String {
        if self.text.is_empty() {
            format!("{:03}", self.code)
        } else {
            format!("{:03} {}", self.code, self.text)
        }
    }
}

/// Read one line from the stream, stripping the trailing CRLF or LF
///
/// Returns `Ok(None)` at end of stream.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Strip exactly one leading and one trailing double quote
///
/// No other unescaping is performed; the protocol grammar observed here
/// has no richer escaping.
pub fn strip_quotes(token: &str) -> &str {
    let token = token.strip_prefix('"').unwrap_or(token);
    token.strip_suffix('"').unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_parse_status_line() {
        let reply = Reply::parse("150 2 definitions retrieved").unwrap();
        assert_eq!(reply.code, 150);
        assert_eq!(reply.text, "2 definitions retrieved");
    }

    #[test]
    fn test_parse_bare_code() {
        let reply = Reply::parse("250").unwrap();
        assert_eq!(reply.code, 250);
        assert_eq!(reply.text, "");
        assert_eq!(reply.line(), "250");
    }

    #[test]
    fn test_body_lines_are_not_status_lines() {
        assert_eq!(Reply::parse("feline mammal"), None);
        assert_eq!(Reply::parse("25"), None);
        assert_eq!(Reply::parse("2500 oddity"), None);
        assert_eq!(Reply::parse("1a0 nope"), None);
        assert_eq!(Reply::parse(""), None);
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut cursor = Cursor::new(b"220 hello\r\nbody\n".to_vec());
        assert_eq!(read_line(&mut cursor).unwrap().unwrap(), "220 hello");
        assert_eq!(read_line(&mut cursor).unwrap().unwrap(), "body");
        assert_eq!(read_line(&mut cursor).unwrap(), None);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"cat\""), "cat");
        assert_eq!(strip_quotes("cat"), "cat");
        assert_eq!(strip_quotes("\"cat"), "cat");
        assert_eq!(strip_quotes("\"a \\\"b\\\" c\""), "a \\\"b\\\" c");
        assert_eq!(strip_quotes("\""), "");
    }
}
