//! Network Module
//!
//! The TCP line transport and the session state machine built on it.
//!
//! ## Architecture
//! - One transport per session, scope-owned
//! - Strictly half-duplex: one command in flight at a time
//! - Blocking reads; timeouts are a pass-through socket option

mod session;
mod transport;

pub use session::{Session, SessionState};
pub use transport::Transport;
