//! Audible cues: the terminal bell

use std::io::{self, Write};

const BELL: u8 = 0x07;

/// Ring the bell `count` times on `out`
pub fn ring<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    if count == 0 {
        return Ok(());
    }
    out.write_all(&vec![BELL; count])?;
    out.flush()
}

/// Ring the bell on stdout; a failing terminal only costs the sound
pub fn ring_stdout(count: usize) {
    if let Err(e) = ring(&mut io::stdout().lock(), count) {
        log::warn!("Failed to ring bell: {}", e);
    }
}
