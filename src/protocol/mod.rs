//! Protocol Module
//!
//! Defines the client side of the DICT wire protocol (RFC 2229 subset):
//! command encoding and the reply-parsing state machine.
//!
//! ## Wire Format
//!
//! Plain-text lines terminated by CRLF. Every server reply line either
//! begins with a three-digit status code followed by a space, or is a
//! free-form body/data line with no numeric prefix. A reply block ends at
//! a `250` line; the handshake and QUIT exchanges are single-line.
//!
//! ### Commands
//! - `DEFINE <database> <word>`
//! - `MATCH <database> <strategy> <word>`
//! - `SHOW DATABASES`
//! - `SHOW STRAT`
//! - `SHOW INFO <database>`
//! - `QUIT`
//!
//! ### Status Codes Consumed
//! ```text
//! 110   n databases present
//! 111   n strategies available
//! 112   database information follows
//! 150   n definitions retrieved
//! 151   definition follows ("word" database "description")
//! 152   n matches found
//! 220   welcome banner
//! 221   closing connection
//! 250   command complete
//! 550   invalid database     (negative, not an error)
//! 552   no match             (negative, not an error)
//! ```

mod command;
mod parser;
mod reply;

pub use command::Command;
pub use parser::{
    parse_banner, parse_database_info, parse_databases, parse_definitions, parse_matches,
    parse_strategies,
};
pub use reply::{read_line, status, strip_quotes, Reply};
