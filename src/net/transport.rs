//! Line Transport
//!
//! A bidirectional, line-oriented byte stream over TCP.

use std::io::{BufReader, BufWriter, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use crate::error::{DictError, Result};
use crate::protocol::read_line;

/// A connected line stream to a DICT server
///
/// Writes are flushed immediately; the protocol requires the server to
/// see each command promptly. Reads block until a full line arrives,
/// unless a socket timeout is configured.
#[derive(Debug)]
pub struct Transport {
    /// TCP stream reader (buffered, handed to the reply parsers)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered per line)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,

    /// False once the stream has been shut down
    open: bool,
}

impl Transport {
    /// Connect to a server
    ///
    /// Resolution and connection failures surface as
    /// [`DictError::Connection`].
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port))
            .map_err(|e| DictError::Connection(format!("{}:{}: {}", host, port, e)))?;

        // Disable Nagle's algorithm for low latency
        stream
            .set_nodelay(true)
            .map_err(|e| DictError::Connection(format!("{}:{}: {}", host, port, e)))?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| format!("{}:{}", host, port));

        // Clone stream for separate read/write handles
        let read_stream = stream
            .try_clone()
            .map_err(|e| DictError::Connection(format!("{}:{}: {}", host, port, e)))?;

        tracing::debug!("Connected to {}", peer_addr);

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
            peer_addr,
            open: true,
        })
    }

    /// Configure socket timeouts (0 = block indefinitely)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        let read_stream = self.reader.get_ref();
        let write_stream = self.writer.get_ref();

        if read_ms > 0 {
            read_stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            write_stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Read one line, stripping the terminator; `Ok(None)` at end of stream
    pub fn read_line(&mut self) -> Result<Option<String>> {
        read_line(&mut self.reader)
    }

    /// Write one command line, terminated with CRLF, and flush
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\r\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// The buffered reader, for the reply parsers
    pub fn reader_mut(&mut self) -> &mut BufReader<TcpStream> {
        &mut self.reader
    }

    /// Shut down the stream, releasing the connection
    ///
    /// Idempotent and error-free; all shutdown failures are swallowed so
    /// callers can invoke this speculatively during error unwinding.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        let _ = self.writer.flush();
        let _ = self.writer.get_ref().shutdown(Shutdown::Both);
        self.open = false;
        tracing::debug!("Closed connection to {}", self.peer_addr);
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        self.close();
    }
}
