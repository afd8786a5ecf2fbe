//! Error types for dictum
//!
//! Provides a unified error type for all client operations.

use thiserror::Error;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Unified error type for DICT client operations
///
/// Negative server replies (no match, invalid database) are not errors;
/// the query operations return empty results for those.
#[derive(Debug, Error)]
pub enum DictError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// The TCP connection could not be established
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Connected, but the welcome banner was missing or carried the wrong
    /// status code
    #[error("Handshake failed: {0}")]
    Handshake(String),

    /// An operation was attempted on a session that is not connected
    #[error("Session is not connected")]
    NotConnected,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// A server reply violated the expected grammar for the command in flight
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// I/O failure during read or write, not otherwise classified
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
