//! Point lookups in `tools.ini` files.
//!
//! The format is line oriented: `key = value` or `key=value`, full-line
//! comments starting with `;` or `#`, blank lines ignored. There are no
//! sections, quoting or continuation lines. The first matching line wins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::trace;

const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Look up `key` in the file at `path`.
///
/// A missing or unreadable file yields `None`. The returned value is trimmed
/// and may be empty if the matching line has nothing after `=`.
pub fn lookup(path: &Path, key: &str) -> Option<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "tool table not readable");
            return None;
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                if let Some(value) = match_line(&line, key) {
                    return Some(value.to_string());
                }
            }
            Err(e) => {
                trace!(path = %path.display(), error = %e, "tool table read aborted");
                return None;
            }
        }
    }
}

/// Same matching rules as [`lookup`], over text already in memory.
pub fn lookup_str(text: &str, key: &str) -> Option<String> {
    text.lines()
        .find_map(|line| match_line(line, key))
        .map(str::to_string)
}

fn match_line<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let trimmed = line.trim_matches(WHITESPACE);
    if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
        return None;
    }
    if key.is_empty() {
        return None;
    }

    // Matched against the raw line so `php` never claims `php8 = ...`.
    let rest = line.strip_prefix(key)?;
    let whole_token = rest.starts_with('=') || (rest.starts_with(' ') && rest.contains('='));
    if !whole_token {
        return None;
    }

    let (_, value) = line.split_once('=')?;
    Some(value.trim_matches(WHITESPACE))
}
