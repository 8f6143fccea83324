//! Memory Trace Reader.
//!
//! This module turns a trace file into the address sequence a hierarchy replays. It performs:
//! 1. **Line parsing:** Each non-blank line is `<access-type> <hex-address> [ignored...]`.
//! 2. **Address decoding:** Hexadecimal, with an optional `0x`/`0X` prefix, full 64-bit range.
//! 3. **Ordering:** Addresses come out exactly in file order.
//!
//! The access type is required but not interpreted; write policies are not modeled.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::TraceError;

/// Parses one trace line.
///
/// # Arguments
///
/// * `line_no` - 1-based line number, used in errors.
/// * `line` - Raw line text.
///
/// # Returns
///
/// `Ok(None)` for a blank line, `Ok(Some(addr))` for a valid entry.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<u64>, TraceError> {
    let mut fields = line.split_whitespace();
    let Some(_access) = fields.next() else {
        return Ok(None);
    };
    let raw = fields
        .next()
        .ok_or(TraceError::MissingField { line: line_no })?;
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    let bad = || TraceError::BadAddress {
        line: line_no,
        value: raw.to_owned(),
    };
    // from_str_radix would also take a leading sign.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad());
    }
    u64::from_str_radix(digits, 16).map(Some).map_err(|_| bad())
}

/// Parses a whole trace held in memory.
pub fn parse_trace(text: &str) -> Result<Vec<u64>, TraceError> {
    let mut addrs = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(addr) = parse_line(i + 1, line)? {
            addrs.push(addr);
        }
    }
    Ok(addrs)
}

/// Reads and parses a trace file.
///
/// # Arguments
///
/// * `path` - Path to the trace file.
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<u64>, TraceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let addrs = parse_trace(&text)?;
    debug!(path = %path.display(), entries = addrs.len(), "loaded trace");
    Ok(addrs)
}
