//! Audit trail emitter.
//!
//! Every packet received, command decoded, and response sent becomes one
//! line with an ISO-8601-millisecond timestamp prefix, duplicated to
//! every configured sink (a session log file and the console in the
//! default wiring). Sinks are plain ordered byte-stream consumers;
//! flushing discipline is theirs. A sink write failure never interrupts
//! decoding - it is swallowed and reported once per session through
//! `tracing`.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use unicode_width::UnicodeWidthStr;

use crate::command::Command;
use crate::error::{AuditError, Result};
use crate::response::Response;

/// Column width of the mnemonic field in CMD records.
const MNEMONIC_WIDTH: usize = 12;

/// Column width of the display-name field in CMD records.
///
/// Display names are CJK, so padding counts display columns, not chars.
const DISPLAY_WIDTH: usize = 25;

/// Ordered collection of audit sinks with shared failure accounting.
pub struct AuditLog {
    sinks: Vec<Box<dyn Write + Send>>,
    warned: bool,
}

impl AuditLog {
    /// Open the standard session sinks: a log file under `logs/` plus
    /// the console.
    ///
    /// The file is `logs/escpos_YYYYMMDD_HHMMSS.log` (local time), UTF-8,
    /// append-only; the directory is created if missing.
    pub fn session() -> Result<Self> {
        Self::session_in("logs")
    }

    /// Like [`session`](Self::session), with a caller-chosen directory.
    pub fn session_in(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| AuditError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let name = Local::now().format("escpos_%Y%m%d_%H%M%S.log").to_string();
        let path: PathBuf = dir.join(name);
        let file = File::options()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| AuditError::CreateFile {
                path: path.clone(),
                source,
            })?;

        Ok(Self::with_sinks(vec![
            Box::new(file),
            Box::new(io::stdout()),
        ]))
    }

    /// Build an audit log over caller-supplied sinks.
    pub fn with_sinks(sinks: Vec<Box<dyn Write + Send>>) -> Self {
        Self {
            sinks,
            warned: false,
        }
    }

    /// An audit log that drops every record. Useful in tests.
    pub fn discard() -> Self {
        Self::with_sinks(Vec::new())
    }

    /// Session-start record, written once from the decoder constructor.
    pub(crate) fn startup(&mut self) {
        let line = format!("{} LOG  decoder session started", timestamp());
        self.write_line(&line);
    }

    /// PKT record, written once per `feed` call before decoding.
    pub(crate) fn packet(&mut self, bytes: &[u8]) {
        let line = format!(
            "{} PKT  received {} bytes: {}",
            timestamp(),
            bytes.len(),
            hex(bytes),
        );
        self.write_line(&line);
    }

    /// CMD record for one decoded command.
    pub(crate) fn command(&mut self, command: &Command) {
        let line = format!(
            "{} CMD  {} {} {} | {}",
            timestamp(),
            pad(command.mnemonic, MNEMONIC_WIDTH),
            pad(command.display_name, DISPLAY_WIDTH),
            command.params,
            hex(&command.raw),
        );
        self.write_line(&line);
    }

    /// RSP record for one response byte string.
    pub(crate) fn response(&mut self, response: &Response) {
        let line = format!(
            "{} RSP  → response {} | {}",
            timestamp(),
            response.description,
            hex(response.bytes),
        );
        self.write_line(&line);
    }

    fn write_line(&mut self, line: &str) {
        let mut failed = false;
        for sink in &mut self.sinks {
            if sink.write_all(line.as_bytes()).is_err() || sink.write_all(b"\n").is_err() {
                failed = true;
            }
        }
        if failed && !self.warned {
            self.warned = true;
            tracing::warn!("audit sink write failed; further failures suppressed");
        }
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

/// Space-separated lowercase hex dump.
fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Pad to a display-column width, CJK-aware.
fn pad(text: &str, width: usize) -> String {
    let mut out = String::from(text);
    for _ in text.width()..width {
        out.push(' ');
    }
    out
}
