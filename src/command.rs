//! Decoded command model and ESC/POS byte constants.
//!
//! A [`Command`] is the decoder's unit of output: one recognised ESC/POS
//! instruction, one run of printable text, or one malformed byte sequence.

pub mod table;

use std::fmt;

use chrono::{DateTime, Local};

/// Escape character - starts most ESC/POS commands.
pub const ESC: u8 = 0x1B;

/// Group Separator - starts GS commands.
pub const GS: u8 = 0x1D;

/// File Separator - starts FS (Kanji mode) commands.
pub const FS: u8 = 0x1C;

/// Data Link Escape - starts real-time commands.
pub const DLE: u8 = 0x10;

/// End of Transmission - used in real-time status commands.
pub const EOT: u8 = 0x04;

/// Enquiry - used in real-time request commands.
pub const ENQ: u8 = 0x05;

/// Device Control 4 - used in real-time output commands.
pub const DC4: u8 = 0x14;

/// Line Feed.
pub const LF: u8 = 0x0A;

/// Form Feed.
pub const FF: u8 = 0x0C;

/// Carriage Return.
pub const CR: u8 = 0x0D;

/// Horizontal Tab.
pub const HT: u8 = 0x09;

/// Mnemonic carried by malformed command records.
pub const MALFORMED: &str = "MALFORMED";

/// Mnemonic carried by text-run command records.
pub const TEXT: &str = "TEXT";

/// Returns `true` for the bytes that introduce a structured command.
pub const fn is_prefix(byte: u8) -> bool {
    matches!(byte, ESC | GS | DLE | FS)
}

/// Parameter bytes of a decoded command.
///
/// Structured commands carry their raw parameter bytes. TEXT commands
/// carry the decoded string form; the undecoded bytes stay available in
/// [`Command::raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Params {
    /// Parameter bytes of a structured command (may be empty).
    Bytes(Vec<u8>),
    /// Decoded form of a text run.
    Text(String),
}

impl Params {
    /// Parameter bytes, if this is a structured command.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Params::Bytes(bytes) => Some(bytes),
            Params::Text(_) => None,
        }
    }

    /// First parameter byte, if any.
    ///
    /// Most status queries dispatch on a single `n` parameter.
    pub fn first(&self) -> Option<u8> {
        self.bytes().and_then(|bytes| bytes.first().copied())
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Params::Bytes(bytes) => {
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Params::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// One decoded ESC/POS instruction, text run, or malformed sequence.
///
/// The concatenation of `raw` over all commands emitted from a stream,
/// in order, plus any bytes still pending in the decoder, equals the
/// input byte-for-byte. No byte is lost, duplicated, or reordered.
#[derive(Debug, Clone)]
pub struct Command {
    /// Wall-clock moment the command finished decoding.
    pub timestamp: DateTime<Local>,
    /// Short canonical form, e.g. `ESC @`, `DLE EOT`, `TEXT`.
    pub mnemonic: &'static str,
    /// Human-readable description in the emulator's UI language.
    pub display_name: &'static str,
    /// Parameter bytes, or the decoded string for TEXT.
    pub params: Params,
    /// The exact byte sequence that made up this command.
    pub raw: Vec<u8>,
}

impl Command {
    /// Build a record for a recognised command.
    pub(crate) fn decoded(spec: &'static table::CommandSpec, params: Vec<u8>, raw: Vec<u8>) -> Self {
        Self {
            timestamp: Local::now(),
            mnemonic: spec.mnemonic,
            display_name: spec.display_name,
            params: Params::Bytes(params),
            raw,
        }
    }

    /// Build a record for a run of printable text.
    pub(crate) fn text(decoded: String, raw: Vec<u8>) -> Self {
        Self {
            timestamp: Local::now(),
            mnemonic: TEXT,
            display_name: "打印文本",
            params: Params::Text(decoded),
            raw,
        }
    }

    /// Build a record for a byte sequence the decoder could not parse.
    ///
    /// `raw` carries every byte consumed by the failed attempt.
    pub(crate) fn malformed(params: Vec<u8>, raw: Vec<u8>) -> Self {
        Self {
            timestamp: Local::now(),
            mnemonic: MALFORMED,
            display_name: "无法识别的指令",
            params: Params::Bytes(params),
            raw,
        }
    }

    /// Whether this record marks a malformed byte sequence.
    pub fn is_malformed(&self) -> bool {
        self.mnemonic == MALFORMED
    }

    /// Whether this record is a text run.
    pub fn is_text(&self) -> bool {
        self.mnemonic == TEXT
    }
}
