use std::io::{self, Write};

/// Write rendered text to stdout exactly as produced
pub fn print_raw(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}
