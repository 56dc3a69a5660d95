//! Human-readable byte sizes

use dirguard_core::{Error, Result};

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Parse a byte count such as `512`, `10K`, `5MiB` or `2g`.
///
/// Suffixes are binary multiples and case-insensitive.
pub fn parse_size(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(split);

    if digits.is_empty() {
        return Err(Error::configuration(format!(
            "please give a numeric value for the size limit, got '{input}'"
        )));
    }
    let value: u64 = digits
        .parse()
        .map_err(|_| Error::configuration(format!("size '{input}' is too large")))?;

    let shift = match suffix.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 0,
        "k" | "kb" | "kib" => 10,
        "m" | "mb" | "mib" => 20,
        "g" | "gb" | "gib" => 30,
        "t" | "tb" | "tib" => 40,
        other => {
            return Err(Error::configuration(format!(
                "unknown size suffix '{other}' in '{input}'"
            )))
        }
    };

    value
        .checked_mul(1u64 << shift)
        .ok_or_else(|| Error::configuration(format!("size '{input}' is too large")))
}

/// Render a byte count for diagnostics, e.g. `1.5 MiB`.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
