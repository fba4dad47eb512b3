//! Styled terminal output.

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Print a fatal or per-command error to stderr.
pub fn error(message: &str) {
    eprintln!("{RED}error: {message}{RESET}");
}

pub fn success(message: &str) {
    println!("{GREEN}{message}{RESET}");
}

pub fn notice(message: &str) {
    println!("{YELLOW}{message}{RESET}");
}

pub fn heading(message: &str) {
    println!("{BOLD}{message}{RESET}");
}

/// Format a model size: GB above one gibibyte, MB otherwise.
pub fn human_size(bytes: u64) -> String {
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    let bytes = bytes as f64;
    if bytes > GIB {
        format!("{:.2} GB", bytes / GIB)
    } else {
        format!("{:.2} MB", bytes / MIB)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sizes_above_a_gibibyte_use_gb() {
        assert_eq!(human_size(4_200_000_000), "3.91 GB");
    }

    #[test]
    fn smaller_sizes_use_mb() {
        assert_eq!(human_size(524_288_000), "500.00 MB");
        assert_eq!(human_size(0), "0.00 MB");
    }
}
