//! Streaming ESC/POS decoder.
//!
//! ESC/POS is a stream-oriented binary protocol with no framing: commands
//! are a mix of fixed-length, length-prefixed, and sentinel-terminated
//! forms, and a BLE client fragments them across write packets at
//! arbitrary byte boundaries. The decoder therefore consumes input one
//! byte at a time, parks partially decoded commands in a carry-over
//! buffer, and resumes on the next [`feed`](Decoder::feed) exactly as if
//! the concatenated input had arrived in one burst.
//!
//! `feed` is total: any byte sequence returns normally. Unknown opcodes
//! and invalid modes become MALFORMED records; truncated commands simply
//! wait for more bytes. The decoder performs no I/O beyond appending to
//! its audit sink and never suspends.

use std::mem;

use crate::audit::AuditLog;
use crate::ble;
use crate::command::table::{self, CommandSpec, ParamPolicy};
use crate::command::{self, Command};
use crate::response::{self, Response};
use crate::text;

/// Parser position within the command stream.
///
/// The variant payloads carry exactly the bytes accumulated for the
/// command being decoded, so the invariant "carry-over holds at least
/// the bytes of the pending command" is visible in the type.
#[derive(Debug)]
enum ParserState {
    /// Start state; printable bytes, controls, or prefixes may arrive.
    Idle,
    /// Saw `0x1B`; awaiting the second opcode byte.
    EscPrefix,
    /// Saw `0x1D`.
    GsPrefix,
    /// Saw `0x10`.
    DlePrefix,
    /// Saw `0x1C`.
    FsPrefix,
    /// Inside a command whose parameter count is known in advance.
    FixedParam {
        spec: &'static CommandSpec,
        needed: usize,
        collected: Vec<u8>,
    },
    /// Inside a command whose length depends on bytes already seen or
    /// on a terminator.
    VariableParam {
        spec: &'static CommandSpec,
        phase: VarPhase,
        collected: Vec<u8>,
    },
}

/// Progress through a variable-length parameter block.
#[derive(Debug, Clone, Copy)]
enum VarPhase {
    /// Collecting header bytes until the data length can be computed.
    Header,
    /// Known number of data bytes remaining.
    Data { remaining: usize },
    /// Consuming bytes until (and including) a NUL sentinel.
    Sentinel,
}

/// Outcome of a single header byte while in [`VarPhase::Header`].
enum HeaderStep {
    /// Header incomplete; keep collecting.
    NeedMore,
    /// Header complete; this many data bytes follow.
    Data(usize),
    /// Header complete; data runs until a NUL sentinel.
    Sentinel,
    /// Header complete and the command carries no further bytes.
    Complete,
    /// Header invalid; the consumed bytes become a MALFORMED record.
    Malformed,
}

/// Everything one [`Decoder::feed`] call produced, in emission order.
#[derive(Debug, Default)]
pub struct FeedOutcome {
    /// Commands whose final byte arrived in this burst.
    pub commands: Vec<Command>,
    /// Scripted status responses, in the order their triggers decoded.
    pub responses: Vec<Response>,
}

impl FeedOutcome {
    /// Payloads to enqueue on the notify characteristic.
    ///
    /// Scripted responses are delivered verbatim. When there are none
    /// and at least one well-formed command was decoded, the client
    /// expects a single default ACK. Malformed-only and empty bursts
    /// get nothing.
    pub fn notify_payloads(&self) -> Vec<Vec<u8>> {
        if !self.responses.is_empty() {
            return self.responses.iter().map(|r| r.bytes.to_vec()).collect();
        }
        if self.commands.iter().any(|c| !c.is_malformed()) {
            return vec![vec![ble::DEFAULT_ACK]];
        }
        Vec::new()
    }
}

/// Incremental ESC/POS decoder for one client session.
///
/// Carry-over, text accumulator, and parser state persist across `feed`
/// calls for the lifetime of the session; [`reset`](Decoder::reset)
/// discards them on disconnect. One decoder per session; `feed` must not
/// be invoked concurrently on the same instance (a documented
/// precondition, not enforced internally).
pub struct Decoder {
    state: ParserState,
    /// Bytes consumed since the last emission, pending command assembly.
    carry: Vec<u8>,
    /// Printable bytes accumulated toward a TEXT record.
    text: Vec<u8>,
    audit: AuditLog,
}

impl Decoder {
    /// Create a decoder writing its audit trail to `audit`.
    ///
    /// Writes a session-start record.
    pub fn new(mut audit: AuditLog) -> Self {
        audit.startup();
        Self {
            state: ParserState::Idle,
            carry: Vec::new(),
            text: Vec::new(),
            audit,
        }
    }

    /// Decode one burst of bytes.
    ///
    /// Total over any input. Commands are emitted in the order their
    /// final byte was consumed; a text flush always precedes the command
    /// that triggered it. Bytes of a command still in flight when the
    /// burst ends stay in the carry-over buffer for the next call.
    pub fn feed(&mut self, bytes: &[u8]) -> FeedOutcome {
        self.audit.packet(bytes);
        let mut out = FeedOutcome::default();
        for &byte in bytes {
            self.step(byte, &mut out);
        }
        out
    }

    /// Discard carry-over, text accumulator, and parser state.
    ///
    /// The next `feed` begins fresh, as on a newly constructed decoder.
    pub fn reset(&mut self) {
        let dropped = self.carry.len() + self.text.len();
        if dropped > 0 {
            tracing::debug!(dropped, "decoder reset with pending bytes");
        }
        self.state = ParserState::Idle;
        self.carry.clear();
        self.text.clear();
    }

    /// Force-emit any pending text run.
    ///
    /// The state machine never flushes trailing text on its own, because
    /// a later `feed` may extend the run. Call this on session teardown
    /// so trailing text still reaches the audit trail.
    pub fn flush(&mut self) -> Option<Command> {
        let mut out = FeedOutcome::default();
        self.flush_text(&mut out);
        out.commands.pop()
    }

    /// Bytes held for a partially decoded command.
    pub fn pending(&self) -> &[u8] {
        &self.carry
    }

    /// Printable bytes accumulated toward an unflushed TEXT run.
    pub fn pending_text(&self) -> &[u8] {
        &self.text
    }

    fn step(&mut self, byte: u8, out: &mut FeedOutcome) {
        let state = mem::replace(&mut self.state, ParserState::Idle);
        self.state = match state {
            ParserState::Idle => self.idle(byte, out),
            ParserState::EscPrefix => self.opcode(command::ESC, byte, out),
            ParserState::GsPrefix => self.opcode(command::GS, byte, out),
            ParserState::DlePrefix => self.opcode(command::DLE, byte, out),
            ParserState::FsPrefix => self.opcode(command::FS, byte, out),
            ParserState::FixedParam {
                spec,
                needed,
                mut collected,
            } => {
                self.carry.push(byte);
                collected.push(byte);
                if collected.len() == needed {
                    self.emit(spec, collected, out);
                    ParserState::Idle
                } else {
                    ParserState::FixedParam {
                        spec,
                        needed,
                        collected,
                    }
                }
            }
            ParserState::VariableParam {
                spec,
                phase,
                mut collected,
            } => {
                self.carry.push(byte);
                collected.push(byte);
                self.advance_variable(spec, phase, collected, out)
            }
        };
    }

    /// Idle-state classification: prefix, catalogued control, or text.
    fn idle(&mut self, byte: u8, out: &mut FeedOutcome) -> ParserState {
        if command::is_prefix(byte) {
            self.flush_text(out);
            self.carry.push(byte);
            return match byte {
                command::ESC => ParserState::EscPrefix,
                command::GS => ParserState::GsPrefix,
                command::DLE => ParserState::DlePrefix,
                _ => ParserState::FsPrefix,
            };
        }
        if let Some(spec) = table::control(byte) {
            self.flush_text(out);
            self.carry.push(byte);
            self.emit(spec, Vec::new(), out);
            return ParserState::Idle;
        }
        // Printable bytes and uncatalogued controls accumulate as text.
        self.text.push(byte);
        ParserState::Idle
    }

    /// Second opcode byte after a prefix: commit to a policy or bail.
    fn opcode(&mut self, prefix: u8, byte: u8, out: &mut FeedOutcome) -> ParserState {
        self.carry.push(byte);
        let Some(spec) = table::lookup(prefix, byte) else {
            self.emit_malformed(Vec::new(), out);
            return ParserState::Idle;
        };
        match spec.policy {
            ParamPolicy::Fixed(0) => {
                self.emit(spec, Vec::new(), out);
                ParserState::Idle
            }
            ParamPolicy::Fixed(needed) => ParserState::FixedParam {
                spec,
                needed,
                collected: Vec::new(),
            },
            ParamPolicy::TerminatedByNul => ParserState::VariableParam {
                spec,
                phase: VarPhase::Sentinel,
                collected: Vec::new(),
            },
            _ => ParserState::VariableParam {
                spec,
                phase: VarPhase::Header,
                collected: Vec::new(),
            },
        }
    }

    fn advance_variable(
        &mut self,
        spec: &'static CommandSpec,
        phase: VarPhase,
        collected: Vec<u8>,
        out: &mut FeedOutcome,
    ) -> ParserState {
        match phase {
            VarPhase::Sentinel => {
                if collected.last() == Some(&0x00) {
                    self.emit(spec, collected, out);
                    ParserState::Idle
                } else {
                    ParserState::VariableParam {
                        spec,
                        phase,
                        collected,
                    }
                }
            }
            VarPhase::Data { remaining } => {
                let remaining = remaining - 1;
                if remaining == 0 {
                    self.emit_variable(spec, collected, out);
                    ParserState::Idle
                } else {
                    ParserState::VariableParam {
                        spec,
                        phase: VarPhase::Data { remaining },
                        collected,
                    }
                }
            }
            VarPhase::Header => match header_step(spec.policy, &collected) {
                HeaderStep::NeedMore => ParserState::VariableParam {
                    spec,
                    phase: VarPhase::Header,
                    collected,
                },
                HeaderStep::Sentinel => ParserState::VariableParam {
                    spec,
                    phase: VarPhase::Sentinel,
                    collected,
                },
                HeaderStep::Data(0) | HeaderStep::Complete => {
                    self.emit_variable(spec, collected, out);
                    ParserState::Idle
                }
                HeaderStep::Data(remaining) => ParserState::VariableParam {
                    spec,
                    phase: VarPhase::Data { remaining },
                    collected,
                },
                HeaderStep::Malformed => {
                    self.emit_malformed(collected, out);
                    ParserState::Idle
                }
            },
        }
    }

    /// Emit a variable-policy command, separating opcode from parameters.
    fn emit_variable(&mut self, spec: &'static CommandSpec, mut collected: Vec<u8>, out: &mut FeedOutcome) {
        // The third opcode byte of GS v 0 / GS ( L rides in the collected
        // buffer; it belongs to the mnemonic, not the parameters.
        if matches!(
            spec.policy,
            ParamPolicy::GsVZeroRaster | ParamPolicy::GsParenL
        ) {
            collected.remove(0);
        }
        self.emit(spec, collected, out);
    }

    fn emit(&mut self, spec: &'static CommandSpec, params: Vec<u8>, out: &mut FeedOutcome) {
        let raw = mem::take(&mut self.carry);
        self.finish(Command::decoded(spec, params, raw), out);
    }

    fn emit_malformed(&mut self, params: Vec<u8>, out: &mut FeedOutcome) {
        let raw = mem::take(&mut self.carry);
        self.finish(Command::malformed(params, raw), out);
    }

    fn flush_text(&mut self, out: &mut FeedOutcome) {
        if self.text.is_empty() {
            return;
        }
        let raw = mem::take(&mut self.text);
        let decoded = text::decode_receipt_text(&raw);
        self.finish(Command::text(decoded, raw), out);
    }

    /// Audit the command, generate its responses, hand both to the caller.
    fn finish(&mut self, command: Command, out: &mut FeedOutcome) {
        self.audit.command(&command);
        let responses = response::respond(&command);
        for r in &responses {
            self.audit.response(r);
        }
        out.commands.push(command);
        out.responses.extend(responses);
    }
}

fn le_u16(lo: u8, hi: u8) -> usize {
    usize::from(lo) | (usize::from(hi) << 8)
}

/// Per-policy header interpretation, applied after each header byte.
fn header_step(policy: ParamPolicy, collected: &[u8]) -> HeaderStep {
    match policy {
        ParamPolicy::EscStarBitImage => {
            if collected.len() < 3 {
                return HeaderStep::NeedMore;
            }
            let n = le_u16(collected[1], collected[2]);
            match collected[0] {
                0 | 1 => HeaderStep::Data(n),
                32 | 33 => HeaderStep::Data(n * 3),
                _ => HeaderStep::Malformed,
            }
        }
        ParamPolicy::GsVZeroRaster => {
            if collected[0] != b'0' {
                return HeaderStep::Malformed;
            }
            if collected.len() < 6 {
                return HeaderStep::NeedMore;
            }
            let x = le_u16(collected[2], collected[3]);
            let y = le_u16(collected[4], collected[5]);
            HeaderStep::Data(x * y)
        }
        ParamPolicy::GsParenL => {
            if collected[0] != b'L' {
                return HeaderStep::Malformed;
            }
            if collected.len() < 3 {
                return HeaderStep::NeedMore;
            }
            HeaderStep::Data(le_u16(collected[1], collected[2]))
        }
        ParamPolicy::GsKBarcode => match collected[0] {
            0..=6 => HeaderStep::Sentinel,
            _ if collected.len() < 2 => HeaderStep::NeedMore,
            _ => HeaderStep::Data(usize::from(collected[1])),
        },
        ParamPolicy::GsVCut => match collected[0] {
            0 | 1 | 48 | 49 => HeaderStep::Complete,
            65 | 66 => HeaderStep::Data(1),
            _ => HeaderStep::Malformed,
        },
        // Fixed and NUL-terminated commands never park in Header.
        ParamPolicy::Fixed(_) | ParamPolicy::TerminatedByNul => HeaderStep::Complete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Params;

    fn decoder() -> Decoder {
        Decoder::new(AuditLog::discard())
    }

    fn mnemonics(out: &FeedOutcome) -> Vec<&'static str> {
        out.commands.iter().map(|c| c.mnemonic).collect()
    }

    #[test]
    fn initialize_decodes() {
        let mut d = decoder();
        let out = d.feed(&[0x1B, 0x40]);
        assert_eq!(mnemonics(&out), ["ESC @"]);
        assert_eq!(out.commands[0].raw, vec![0x1B, 0x40]);
        assert_eq!(out.commands[0].params, Params::Bytes(Vec::new()));
        assert!(d.pending().is_empty());
    }

    #[test]
    fn fixed_parameter_collects() {
        let mut d = decoder();
        let out = d.feed(&[0x1B, 0x61, 0x01]);
        assert_eq!(mnemonics(&out), ["ESC a"]);
        assert_eq!(out.commands[0].params, Params::Bytes(vec![0x01]));
    }

    #[test]
    fn command_split_across_feeds() {
        let mut d = decoder();
        assert!(d.feed(&[0x1B]).commands.is_empty());
        assert_eq!(d.pending(), &[0x1B]);

        let out = d.feed(&[0x40]);
        assert_eq!(mnemonics(&out), ["ESC @"]);
        assert_eq!(out.commands[0].raw, vec![0x1B, 0x40]);
        assert!(d.pending().is_empty());
    }

    #[test]
    fn text_flushes_before_trigger() {
        let mut d = decoder();
        let out = d.feed(b"Hi\x0A");
        assert_eq!(mnemonics(&out), ["TEXT", "LF"]);
        assert_eq!(out.commands[0].raw, b"Hi".to_vec());
        assert_eq!(out.commands[0].params, Params::Text("Hi".into()));
        assert_eq!(out.commands[1].raw, vec![0x0A]);
    }

    #[test]
    fn text_pends_at_end_of_burst() {
        let mut d = decoder();
        let out = d.feed(b"Hello");
        assert!(out.commands.is_empty());
        assert_eq!(d.pending_text(), b"Hello");

        // A prefix in the next burst flushes the run first.
        let out = d.feed(&[0x1B, 0x40]);
        assert_eq!(mnemonics(&out), ["TEXT", "ESC @"]);
    }

    #[test]
    fn uncatalogued_control_is_text() {
        let mut d = decoder();
        let out = d.feed(&[0x07, b'!', 0x0A]); // BEL is not a command
        assert_eq!(mnemonics(&out), ["TEXT", "LF"]);
        assert_eq!(out.commands[0].raw, vec![0x07, b'!']);
    }

    #[test]
    fn unknown_opcode_is_malformed() {
        let mut d = decoder();
        let out = d.feed(&[0x1B, 0xFF]);
        assert_eq!(mnemonics(&out), ["MALFORMED"]);
        assert_eq!(out.commands[0].raw, vec![0x1B, 0xFF]);
        assert!(out.responses.is_empty());
        assert!(d.pending().is_empty());
    }

    #[test]
    fn decoding_resumes_after_malformed() {
        let mut d = decoder();
        let out = d.feed(&[0x1D, 0x00, 0x1B, 0x40]);
        assert_eq!(mnemonics(&out), ["MALFORMED", "ESC @"]);
    }

    #[test]
    fn nul_terminated_tab_positions() {
        let mut d = decoder();
        let out = d.feed(&[0x1B, 0x44, 8, 16, 24, 0x00]);
        assert_eq!(mnemonics(&out), ["ESC D"]);
        assert_eq!(out.commands[0].params, Params::Bytes(vec![8, 16, 24, 0x00]));
    }

    #[test]
    fn unterminated_tab_positions_pend_forever() {
        let mut d = decoder();
        assert!(d.feed(&[0x1B, 0x44, 8, 16]).commands.is_empty());
        assert!(d.feed(&[24, 32]).commands.is_empty());
        assert_eq!(d.pending(), &[0x1B, 0x44, 8, 16, 24, 32]);
    }

    #[test]
    fn bit_image_eight_dot_length() {
        // ESC * m=0: data length is n
        let mut d = decoder();
        let mut burst = vec![0x1B, 0x2A, 0, 4, 0];
        burst.extend_from_slice(&[0xAA; 4]);
        let out = d.feed(&burst);
        assert_eq!(mnemonics(&out), ["ESC *"]);
        assert_eq!(out.commands[0].raw, burst);
    }

    #[test]
    fn bit_image_twenty_four_dot_length() {
        // ESC * m=33: data length is n * 3
        let mut d = decoder();
        let mut burst = vec![0x1B, 0x2A, 33, 2, 0];
        burst.extend_from_slice(&[0x55; 6]);
        let out = d.feed(&burst);
        assert_eq!(mnemonics(&out), ["ESC *"]);
        assert!(d.pending().is_empty());
    }

    #[test]
    fn bit_image_bad_mode_is_malformed() {
        let mut d = decoder();
        let out = d.feed(&[0x1B, 0x2A, 7, 4, 0]);
        assert_eq!(mnemonics(&out), ["MALFORMED"]);
        // Full header captured, zero data bytes consumed.
        assert_eq!(out.commands[0].raw, vec![0x1B, 0x2A, 7, 4, 0]);
    }

    #[test]
    fn raster_image_decodes() {
        let mut d = decoder();
        let mut burst = vec![0x1D, 0x76, 0x30, 0, 2, 0, 3, 0];
        burst.extend_from_slice(&[0xFF; 6]);
        let out = d.feed(&burst);
        assert_eq!(mnemonics(&out), ["GS v 0"]);
        // Params exclude the '0' opcode byte.
        let Params::Bytes(params) = &out.commands[0].params else {
            panic!("raster params should be bytes");
        };
        assert_eq!(&params[..5], &[0, 2, 0, 3, 0]);
        assert_eq!(params.len(), 5 + 6);
    }

    #[test]
    fn raster_zero_height_emits_immediately() {
        let mut d = decoder();
        let out = d.feed(&[0x1D, 0x76, 0x30, 0, 2, 0, 0, 0]);
        assert_eq!(mnemonics(&out), ["GS v 0"]);
        assert!(d.pending().is_empty());

        // Decoder is back in Idle and keeps working.
        let out = d.feed(&[0x1B, 0x40]);
        assert_eq!(mnemonics(&out), ["ESC @"]);
    }

    #[test]
    fn raster_without_zero_byte_is_malformed() {
        let mut d = decoder();
        let out = d.feed(&[0x1D, 0x76, 0x31]);
        assert_eq!(mnemonics(&out), ["MALFORMED"]);
        assert_eq!(out.commands[0].raw, vec![0x1D, 0x76, 0x31]);
    }

    #[test]
    fn graphics_data_length_prefixed() {
        let mut d = decoder();
        let mut burst = vec![0x1D, 0x28, 0x4C, 3, 0];
        burst.extend_from_slice(&[1, 2, 3]);
        let out = d.feed(&burst);
        assert_eq!(mnemonics(&out), ["GS ( L"]);
        assert_eq!(out.commands[0].params, Params::Bytes(vec![3, 0, 1, 2, 3]));
    }

    #[test]
    fn paren_function_other_than_l_is_malformed() {
        let mut d = decoder();
        let out = d.feed(&[0x1D, 0x28, 0x6B]); // GS ( k is not catalogued
        assert_eq!(mnemonics(&out), ["MALFORMED"]);
    }

    #[test]
    fn barcode_format_a_is_nul_terminated() {
        let mut d = decoder();
        let out = d.feed(&[0x1D, 0x6B, 4, b'1', b'2', b'3', 0x00]);
        assert_eq!(mnemonics(&out), ["GS k"]);
        assert_eq!(
            out.commands[0].params,
            Params::Bytes(vec![4, b'1', b'2', b'3', 0x00])
        );
    }

    #[test]
    fn barcode_format_b_is_length_prefixed() {
        let mut d = decoder();
        let out = d.feed(&[0x1D, 0x6B, 73, 3, b'A', 0x00, b'B']);
        assert_eq!(mnemonics(&out), ["GS k"]);
        // The embedded NUL is data, not a terminator, in format B.
        assert_eq!(
            out.commands[0].params,
            Params::Bytes(vec![73, 3, b'A', 0x00, b'B'])
        );
    }

    #[test]
    fn cut_without_feed_byte() {
        let mut d = decoder();
        let out = d.feed(&[0x1D, 0x56, 1]);
        assert_eq!(mnemonics(&out), ["GS V"]);
        assert_eq!(out.commands[0].params, Params::Bytes(vec![1]));
    }

    #[test]
    fn cut_with_feed_byte() {
        let mut d = decoder();
        let out = d.feed(&[0x1D, 0x56, 66, 5]);
        assert_eq!(mnemonics(&out), ["GS V"]);
        assert_eq!(out.commands[0].params, Params::Bytes(vec![66, 5]));
    }

    #[test]
    fn cut_bad_mode_is_malformed() {
        let mut d = decoder();
        let out = d.feed(&[0x1D, 0x56, 7]);
        assert_eq!(mnemonics(&out), ["MALFORMED"]);
        assert_eq!(out.commands[0].raw, vec![0x1D, 0x56, 7]);
    }

    #[test]
    fn status_query_produces_response() {
        let mut d = decoder();
        let out = d.feed(&[0x10, 0x04, 0x01]);
        assert_eq!(mnemonics(&out), ["DLE EOT"]);
        assert_eq!(out.responses.len(), 1);
        assert_eq!(out.responses[0].bytes, &[0x16]);
    }

    #[test]
    fn empty_feed_is_a_noop() {
        let mut d = decoder();
        let out = d.feed(&[]);
        assert!(out.commands.is_empty());
        assert!(out.responses.is_empty());
        assert!(d.pending().is_empty());
        assert!(d.pending_text().is_empty());
    }

    #[test]
    fn reset_discards_pending_command() {
        let mut d = decoder();
        d.feed(&[0x1B, 0x44, 1, 2]); // unterminated ESC D
        d.reset();
        assert!(d.pending().is_empty());

        let out = d.feed(&[0x1B, 0x40]);
        assert_eq!(mnemonics(&out), ["ESC @"]);
    }

    #[test]
    fn reset_discards_pending_text() {
        let mut d = decoder();
        d.feed(b"tail");
        d.reset();
        assert!(d.pending_text().is_empty());

        // Nothing left to flush afterwards.
        let out = d.feed(&[0x0A]);
        assert_eq!(mnemonics(&out), ["LF"]);
    }

    #[test]
    fn flush_emits_pending_text() {
        let mut d = decoder();
        d.feed(b"trailing");
        let flushed = d.flush().expect("pending text should flush");
        assert!(flushed.is_text());
        assert_eq!(flushed.raw, b"trailing".to_vec());
        assert!(d.pending_text().is_empty());
        assert!(d.flush().is_none());
    }

    #[test]
    fn notify_payloads_scripted() {
        let mut d = decoder();
        let out = d.feed(&[0x10, 0x04, 0x01]);
        assert_eq!(out.notify_payloads(), vec![vec![0x16]]);
    }

    #[test]
    fn notify_payloads_default_ack() {
        let mut d = decoder();
        let out = d.feed(&[0x1B, 0x40]);
        assert_eq!(out.notify_payloads(), vec![vec![0x00]]);
    }

    #[test]
    fn notify_payloads_malformed_only_gets_nothing() {
        let mut d = decoder();
        let out = d.feed(&[0x1B, 0xFF]);
        assert!(out.notify_payloads().is_empty());
    }

    #[test]
    fn gbk_text_decodes_in_stream() {
        let mut d = decoder();
        let out = d.feed(&[0xC4, 0xE3, 0xBA, 0xC3, 0x0A]); // "你好" + LF
        assert_eq!(mnemonics(&out), ["TEXT", "LF"]);
        assert_eq!(out.commands[0].params, Params::Text("你好".into()));
        assert_eq!(out.commands[0].raw, vec![0xC4, 0xE3, 0xBA, 0xC3]);
    }
}
