//! Session
//!
//! Owns the transport, sequences one command at a time, and exposes the
//! query operations. The protocol is strictly half-duplex request/reply;
//! `&mut self` on every operation is what serializes access, so sharing a
//! session across threads requires external mutual exclusion.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::error::{DictError, Result};
use crate::model::{Database, Definition, MatchingStrategy};
use crate::protocol::{
    parse_banner, parse_database_info, parse_databases, parse_definitions, parse_matches,
    parse_strategies, Command,
};

use super::transport::Transport;

/// Connection state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, not yet opened
    Disconnected,
    /// TCP connect and handshake in progress
    Connecting,
    /// Handshake complete, commands may be issued
    Connected,
    /// Transport released; the session cannot be reused
    Closed,
}

/// A client session with a DICT server
///
/// Created disconnected; [`open`](Session::open) performs the TCP connect
/// and the 220 welcome handshake. Exactly one session per transport. The
/// transport is released on [`close`](Session::close) and on drop, on
/// every path including failed handshakes.
#[derive(Debug)]
pub struct Session {
    config: Config,
    transport: Option<Transport>,
    state: SessionState,
}

impl Session {
    /// Create a new, disconnected session
    pub fn new(config: Config) -> Self {
        Self {
            config,
            transport: None,
            state: SessionState::Disconnected,
        }
    }

    /// Connect and handshake in one step
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let mut session = Session::new(Config::builder().host(host).port(port).build());
        session.open()?;
        Ok(session)
    }

    /// Open the connection and consume the welcome banner
    ///
    /// Requires the banner to carry status 220. Connection failures
    /// surface as [`DictError::Connection`], everything after the socket
    /// is up as [`DictError::Handshake`]; either way the session ends up
    /// Closed with no transport held. Sessions are single-use: opening
    /// anything but a fresh session is an error.
    pub fn open(&mut self) -> Result<()> {
        if self.state != SessionState::Disconnected {
            return Err(DictError::Protocol(
                "open is only valid on a fresh session".to_string(),
            ));
        }
        self.state = SessionState::Connecting;

        let mut transport = match Transport::connect(&self.config.host, self.config.port) {
            Ok(t) => t,
            Err(e) => {
                self.state = SessionState::Closed;
                return Err(e);
            }
        };

        let setup = transport
            .set_timeouts(self.config.read_timeout_ms, self.config.write_timeout_ms)
            .and_then(|_| parse_banner(transport.reader_mut()));

        match setup {
            Ok(banner) => {
                tracing::debug!("Server banner from {}: {}", transport.peer_addr(), banner);
                self.transport = Some(transport);
                self.state = SessionState::Connected;
                Ok(())
            }
            Err(e) => {
                transport.close();
                self.state = SessionState::Closed;
                Err(e)
            }
        }
    }

    /// Send QUIT and release the transport
    ///
    /// Valid from any state and idempotent. The QUIT exchange is best
    /// effort; the server's bye line carries nothing the client needs, so
    /// every error during shutdown is swallowed.
    pub fn close(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            if self.state == SessionState::Connected {
                let _ = transport.write_line(&Command::Quit.to_string());
                let _ = transport.read_line();
            }
            transport.close();
        }
        self.state = SessionState::Closed;
    }

    /// Retrieve all definitions for a word
    ///
    /// `database` may be a concrete database, [`Database::ALL`] (`*`) or
    /// [`Database::FIRST`] (`!`). A no-match or invalid-database reply
    /// yields an empty list.
    pub fn definitions(&mut self, word: &str, database: &Database) -> Result<Vec<Definition>> {
        let command = Command::Define {
            database: database.name().to_string(),
            word: word.to_string(),
        };
        let transport = self.exchange(&command)?;
        parse_definitions(transport.reader_mut())
    }

    /// Retrieve approximate matches for a word pattern
    ///
    /// The result preserves first-occurrence order and never contains
    /// duplicates. A no-match reply yields an empty list.
    pub fn matches(
        &mut self,
        word: &str,
        strategy: &MatchingStrategy,
        database: &Database,
    ) -> Result<Vec<String>> {
        let command = Command::Match {
            database: database.name().to_string(),
            strategy: strategy.name().to_string(),
            word: word.to_string(),
        };
        let transport = self.exchange(&command)?;
        parse_matches(transport.reader_mut())
    }

    /// Retrieve the databases the server offers, keyed by name
    pub fn databases(&mut self) -> Result<BTreeMap<String, Database>> {
        let transport = self.exchange(&Command::ShowDatabases)?;
        parse_databases(transport.reader_mut())
    }

    /// Retrieve the matching strategies the server supports
    pub fn strategies(&mut self) -> Result<Vec<MatchingStrategy>> {
        let transport = self.exchange(&Command::ShowStrategies)?;
        parse_strategies(transport.reader_mut())
    }

    /// Retrieve free-form metadata about a database
    pub fn database_info(&mut self, database: &Database) -> Result<String> {
        let command = Command::ShowInfo {
            database: database.name().to_string(),
        };
        let transport = self.exchange(&command)?;
        parse_database_info(transport.reader_mut())
    }

    /// Hostname this session was configured with
    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// Port this session was configured with
    pub fn port(&self) -> u16 {
        self.config.port
    }

    /// Current connection state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether commands may currently be issued
    pub fn is_connected(&self) -> bool {
        self.state == SessionState::Connected
    }

    /// Write one command line and hand back the transport for its reply
    ///
    /// Fails with [`DictError::NotConnected`] outside the Connected state,
    /// without touching the transport. Reaching the write implies the
    /// previous reply block was consumed to its terminating line, so at
    /// most one command is ever outstanding.
    fn exchange(&mut self, command: &Command) -> Result<&mut Transport> {
        if self.state != SessionState::Connected {
            return Err(DictError::NotConnected);
        }
        let transport = self.transport.as_mut().ok_or(DictError::NotConnected)?;
        tracing::debug!("Sending to {}: {}", transport.peer_addr(), command);
        transport.write_line(&command.to_string())?;
        Ok(transport)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}
