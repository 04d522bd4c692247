//! # Typewriter Output
//!
//! File: cli/src/common/ui/typewriter.rs
//! Author: Christi Mahu
//!
//! Writes text one `char` at a time, flushing after each so the effect is
//! visible on a terminal.
//!
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Delay between characters used by the chatbot.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(30);

/// Writes `text` to `out` one character at a time, sleeping `delay` after
/// each. A zero delay writes the whole string at once.
pub fn type_out<W: Write>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        out.write_all(text.as_bytes())?;
        return out.flush();
    }

    let mut buf = [0u8; 4];
    for ch in text.chars() {
        out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        out.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_out_writes_full_text() {
        let mut out = Vec::new();
        type_out(&mut out, "Hi there! 👋", Duration::from_millis(1)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hi there! 👋");
    }

    #[test]
    fn test_type_out_without_delay() {
        let mut out = Vec::new();
        type_out(&mut out, "• bullet", Duration::ZERO).unwrap();
        assert_eq!(out, "• bullet".as_bytes());
    }
}
