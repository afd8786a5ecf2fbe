//! Command definitions
//!
//! Represents the commands the client sends, and renders their exact
//! wire form.

use std::fmt;

/// A command to send to the server
///
/// The `Display` implementation produces the wire line without the
/// trailing CRLF; the transport appends the terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch all definitions of a word from a database
    Define { database: String, word: String },

    /// Fetch approximate matches for a word using a strategy
    Match {
        database: String,
        strategy: String,
        word: String,
    },

    /// List the databases the server offers
    ShowDatabases,

    /// List the matching strategies the server supports
    ShowStrategies,

    /// Fetch free-form metadata about one database
    ShowInfo { database: String },

    /// End the session
    Quit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Define { database, word } => write!(f, "DEFINE {} {}", database, word),
            Command::Match {
                database,
                strategy,
                word,
            } => write!(f, "MATCH {} {} {}", database, strategy, word),
            Command::ShowDatabases => write!(f, "SHOW DATABASES"),
            Command::ShowStrategies => write!(f, "SHOW STRAT"),
            Command::ShowInfo { database } => write!(f, "SHOW INFO {}", database),
            Command::Quit => write!(f, "QUIT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_wire_form() {
        let cmd = Command::Define {
            database: "*".to_string(),
            word: "cat".to_string(),
        };
        assert_eq!(cmd.to_string(), "DEFINE * cat");
    }

    #[test]
    fn test_match_wire_form() {
        let cmd = Command::Match {
            database: "!".to_string(),
            strategy: "prefix".to_string(),
            word: "ca".to_string(),
        };
        assert_eq!(cmd.to_string(), "MATCH ! prefix ca");
    }

    #[test]
    fn test_show_wire_forms() {
        assert_eq!(Command::ShowDatabases.to_string(), "SHOW DATABASES");
        assert_eq!(Command::ShowStrategies.to_string(), "SHOW STRAT");
        assert_eq!(
            Command::ShowInfo {
                database: "wn".to_string()
            }
            .to_string(),
            "SHOW INFO wn"
        );
        assert_eq!(Command::Quit.to_string(), "QUIT");
    }
}
