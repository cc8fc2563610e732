//! Content views, one per projection output type
//!
//! These are the pluggable output-type handlers: each gets the decoded
//! output fields and draws into the pane's content area. Interactions are
//! emitted as commands, same as the rest of the visual tree.

pub mod dir_list;
pub mod image;
pub mod markdown;
pub mod text;

/// Human-readable byte size, e.g. "1.4 MB"
pub(crate) fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn formats_bytes_and_scaled_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(1_572_864), "1.5 MB");
    }
}
