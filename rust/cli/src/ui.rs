//! Small helpers for consistent terminal output across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// `label: value` with the label padded so columns line up.
pub fn field_line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<14}{}", format!("{label}:"), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        let mut buf = Vec::new();
        write_error(&mut buf, "boom").unwrap();
        display_warning(&mut buf, "careful").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\nWARNING: careful\n");
    }

    #[test]
    fn field_lines_align() {
        assert_eq!(field_line("Pot", "6.00"), "Pot:          6.00");
        assert_eq!(field_line("Hands", 3), "Hands:        3");
    }
}
