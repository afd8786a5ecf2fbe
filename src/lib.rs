//! # dictum
//!
//! A client for the DICT dictionary lookup protocol (RFC 2229 subset):
//! - List databases and matching strategies on a server
//! - Fetch word definitions and approximate-match word lists
//! - Fetch free-form database metadata
//! - Explicit connection state machine with typed errors
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Caller                                │
//! │              (CLI, UI, application code)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ query operations
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Session                                │
//! │     (state machine, one command in flight at a time)         │
//! └──────────┬──────────────────────────────▲───────────────────┘
//!            │ command lines                │ structured results
//!            ▼                              │
//!   ┌─────────────┐   reply lines   ┌──────┴──────┐
//!   │  Transport  │────────────────▶│Reply Parser │
//!   │ (TCP lines) │                 │ (grammars)  │
//!   └─────────────┘                 └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use dictum::{Database, Session};
//!
//! fn main() -> dictum::Result<()> {
//!     let mut session = Session::connect("dict.org", 2628)?;
//!     let all = Database::new(Database::ALL, "");
//!     for definition in session.definitions("coffee", &all)? {
//!         println!("[{}] {}", definition.database(), definition.text());
//!     }
//!     session.close();
//!     Ok(())
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod model;
pub mod net;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::{Config, DEFAULT_PORT};
pub use error::{DictError, Result};
pub use model::{Database, Definition, MatchingStrategy};
pub use net::{Session, SessionState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dictum
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
