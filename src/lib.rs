//! BT-B36 thermal printer emulation core.
//!
//! This crate is the ESC/POS streaming decoder and response generator at
//! the heart of a BLE receipt-printer emulator impersonating a BT-B36.
//! A client pushes opaque byte bursts over a write characteristic; the
//! decoder parses them as an ESC/POS command stream even when commands
//! are fragmented across transport packets, produces an audit trail of
//! every command, and synthesizes the status bytes the client expects in
//! reply to query commands.
//!
//! # Quick Start
//!
//! ```ignore
//! use btb36::prelude::*;
//!
//! // One decoder per client session; logs to logs/escpos_*.log + console.
//! let mut decoder = Decoder::new(AuditLog::session()?);
//!
//! // Invoked from the BLE write callback:
//! let outcome = decoder.feed(&payload);
//! for payload in outcome.notify_payloads() {
//!     notify_characteristic.enqueue(payload);
//! }
//!
//! // On disconnect:
//! decoder.flush();
//! decoder.reset();
//! ```
//!
//! # Architecture
//!
//! The crate is organized into layers:
//!
//! - **Command layer** (`command` module): decoded command model and the
//!   static opcode catalogue with parameter-length policies
//! - **Decoder layer** (`decoder` module): incremental state machine
//!   with carry-over buffer and text accumulator
//! - **Response layer** (`response` module): scripted status replies
//! - **Audit layer** (`audit` module): PKT/CMD/RSP record emission
//! - **BLE constants** (`ble` module): UUIDs and names for the
//!   transport collaborator
//!
//! # Fragmentation
//!
//! ESC/POS has no framing, and BLE writes split commands at arbitrary
//! byte boundaries. The decoder consumes bytes one at a time and parks
//! partial commands in a carry-over buffer:
//!
//! ```ignore
//! let first = decoder.feed(&[0x1B]);        // no command yet
//! let second = decoder.feed(&[0x40]);       // ESC @ completes here
//! assert_eq!(second.commands[0].mnemonic, "ESC @");
//! ```
//!
//! # Status Queries
//!
//! Query commands get the canned replies this printer family returns:
//!
//! ```ignore
//! let outcome = decoder.feed(&[0x10, 0x04, 0x01]);  // DLE EOT 1
//! assert_eq!(outcome.responses[0].bytes, &[0x16]);  // printer online
//! ```
//!
//! Everything else follows the caller contract implemented by
//! [`FeedOutcome::notify_payloads`](decoder::FeedOutcome::notify_payloads):
//! well-formed commands without a scripted reply get one default ACK,
//! malformed-only bursts get nothing.

#![warn(missing_docs)]

pub mod audit;
pub mod ble;
pub mod command;
pub mod decoder;
pub mod error;
pub mod response;
pub mod text;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use btb36::prelude::*;
/// ```
pub mod prelude {
    pub use crate::audit::AuditLog;
    pub use crate::command::{Command, Params};
    pub use crate::decoder::{Decoder, FeedOutcome};
    pub use crate::response::Response;
}

// Re-export commonly used types at crate root
pub use audit::AuditLog;
pub use command::{Command, Params};
pub use decoder::{Decoder, FeedOutcome};
pub use error::AuditError;
pub use response::Response;
