//! Scripted status responses.
//!
//! A pure rule table from one decoded command to the status bytes the
//! client expects on the notify characteristic. The byte values for
//! `DLE EOT` are empirical for this printer family and are preserved
//! verbatim; they are not traceable to a published ESC/POS reference.

use crate::command::Command;

/// One canned response byte string with its audit description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    /// Audit-trail description in the emulator's UI language.
    pub description: &'static str,
    /// The bytes to deliver on the notify characteristic.
    pub bytes: &'static [u8],
}

const fn response(description: &'static str, bytes: &'static [u8]) -> Response {
    Response {
        description,
        bytes,
    }
}

/// Produce the scripted responses for a decoded command.
///
/// Commands without a scripted response return an empty list; the
/// caller falls back to the default ACK per the BLE contract (see
/// [`FeedOutcome::notify_payloads`](crate::decoder::FeedOutcome::notify_payloads)).
/// MALFORMED commands never produce a response.
pub fn respond(command: &Command) -> Vec<Response> {
    if command.is_malformed() {
        return Vec::new();
    }

    let n = command.params.first();
    let scripted = match (command.mnemonic, n) {
        ("DLE EOT", Some(1)) => Some(response("打印机在线", &[0x16])),
        ("DLE EOT", Some(2)) => Some(response("脱机状态正常", &[0x12])),
        ("DLE EOT", Some(3)) => Some(response("无错误", &[0x12])),
        ("DLE EOT", Some(4)) => Some(response("纸张充足", &[0x12])),
        ("GS I", Some(1)) => Some(response("型号标识", b"BT-B36")),
        ("GS I", Some(2)) => Some(response("打印机类型", &[0x02])),
        ("GS I", Some(3)) => Some(response("固件版本", b"0.1.3")),
        ("GS r", Some(1)) => Some(response("纸张状态正常", &[0x00])),
        ("GS r", Some(2)) => Some(response("钱箱状态正常", &[0x00])),
        ("ESC v", _) => Some(response("纸张传感器正常", &[0x00])),
        // GS a enables automatic status back; logged, never answered.
        _ => None,
    };

    scripted.into_iter().collect()
}
