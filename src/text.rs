//! Text decoding for receipt text runs.
//!
//! The companion apps that drive this printer family send receipt text
//! as GBK; some newer builds send UTF-8. The decoder tries GBK first,
//! then UTF-8, and falls back to Latin-1, which maps every byte and
//! therefore always succeeds. A decode only wins if it produced no
//! replacement characters.

use encoding_rs::GBK;

/// Decode a run of printable bytes into its string form.
///
/// The raw bytes are kept on the command record regardless of which
/// decode wins, so nothing is lost if the guess was wrong.
pub fn decode_receipt_text(bytes: &[u8]) -> String {
    let (decoded, _, had_errors) = GBK.decode(bytes);
    if !had_errors {
        return decoded.into_owned();
    }

    if let Ok(utf8) = std::str::from_utf8(bytes) {
        return utf8.to_owned();
    }

    bytes.iter().map(|&b| b as char).collect()
}
