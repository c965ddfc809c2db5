// src/utils.rs
use std::io::{self, Write as _};

/// Rewrites the current console line in place, for progress updates that
/// should not scroll the terminal.
pub fn status_line(content: &str) {
    print!("\r\x1b[K\t{content}");
    let _ = io::stdout().flush();
}

/// Formats an integer with thousands separators: 1234567 -> "1,234,567".
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
