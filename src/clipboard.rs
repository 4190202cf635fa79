//! Copy text to the system clipboard through the terminal (OSC 52).
//!
//! The sequence is written straight to the terminal, which forwards the
//! payload to the host clipboard. Inside tmux the sequence is wrapped in a
//! DCS passthrough so it reaches the outer terminal.

use std::io::Write;
use std::time::{Duration, Instant};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::Result;

/// Payload size most terminals accept for a single OSC 52 write.
pub const MAX_PAYLOAD: usize = 74_994;

/// How long the "Copied" acknowledgement stays visible.
pub const ACK_DURATION: Duration = Duration::from_secs(2);

/// OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

/// Wrap `seq` for tmux: `ESC P tmux; <seq with ESC doubled> ESC \`.
fn tmux_passthrough(seq: &str) -> String {
    let mut out = String::with_capacity(seq.len() + 10);
    out.push_str("\x1bPtmux;");
    for ch in seq.chars() {
        if ch == '\x1b' {
            out.push('\x1b');
        }
        out.push(ch);
    }
    out.push_str("\x1b\\");
    out
}

/// Write `text` to the clipboard via `writer`.
///
/// Returns the number of base64 bytes sent. Payloads above [`MAX_PAYLOAD`]
/// are rejected as `InvalidInput`.
pub fn copy_to<W: Write>(writer: &mut W, text: &str, in_tmux: bool) -> Result<usize> {
    let seq = osc52_sequence(text);
    let payload = seq.len() - "\x1b]52;c;\x07".len();
    if payload > MAX_PAYLOAD {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("clipboard payload of {payload} bytes exceeds {MAX_PAYLOAD}"),
        )
        .into());
    }
    let seq = if in_tmux { tmux_passthrough(&seq) } else { seq };
    writer.write_all(seq.as_bytes())?;
    writer.flush()?;
    tracing::debug!(bytes = payload, tmux = in_tmux, "copied to clipboard");
    Ok(payload)
}

/// Copy `text` through the controlling terminal.
pub fn copy(text: &str) -> Result<usize> {
    let in_tmux = std::env::var_os("TMUX").is_some();
    copy_to(&mut std::io::stdout(), text, in_tmux)
}

/// Short-lived acknowledgement after a successful copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyNotice {
    copied_at: Instant,
}

impl CopyNotice {
    pub fn new(copied_at: Instant) -> Self {
        Self { copied_at }
    }

    /// Visible for [`ACK_DURATION`] after the copy.
    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.copied_at) < ACK_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_encodes_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn test_copy_writes_sequence() {
        let mut out = Vec::new();
        let sent = copy_to(&mut out, "batch:\n  timeout: 10s", false).unwrap();
        let expected = osc52_sequence("batch:\n  timeout: 10s");
        assert_eq!(out, expected.as_bytes());
        assert_eq!(sent, STANDARD.encode("batch:\n  timeout: 10s").len());
    }

    #[test]
    fn test_tmux_doubles_escapes() {
        let mut out = Vec::new();
        copy_to(&mut out, "hi", true).unwrap();
        let expected = b"\x1bPtmux;\x1b\x1b]52;c;aGk=\x07\x1b\\".to_vec();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let mut out = Vec::new();
        let big = "x".repeat(MAX_PAYLOAD);
        assert!(copy_to(&mut out, &big, false).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_notice_expires_after_two_seconds() {
        let start = Instant::now();
        let notice = CopyNotice::new(start);
        assert!(notice.is_active(start));
        assert!(notice.is_active(start + Duration::from_millis(1999)));
        assert!(!notice.is_active(start + Duration::from_secs(2)));
        assert!(!notice.is_active(start + Duration::from_secs(10)));
    }
}
