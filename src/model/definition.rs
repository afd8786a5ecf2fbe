//! Definition records
//!
//! One definition block as streamed by the server in a DEFINE reply.

/// A single word definition returned by the server
///
/// Body lines are appended in arrival order while the parser consumes the
/// definition block; the value is not modified afterwards. Lines are never
/// reordered or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    word: String,
    database: String,
    lines: Vec<String>,
}

impl Definition {
    /// Create an empty definition for a headword from a given database
    pub fn new(word: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            database: database.into(),
            lines: Vec::new(),
        }
    }

    /// Append one body line (line terminators already stripped)
    pub fn append_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The headword as returned by the server
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Name of the database this definition came from
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Body lines in arrival order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full definition text, lines joined with newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
