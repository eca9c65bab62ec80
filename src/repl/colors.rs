//! ANSI color helpers for terminal output

/// ANSI escape codes
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

use ansi::*;

use crate::progress::ProgressTier;

pub fn heading(msg: &str) -> String {
    format!("{}{}{}{}", BOLD, MAGENTA, msg, RESET)
}

pub fn success(msg: &str) -> String {
    format!("{}{}{}", GREEN, msg, RESET)
}

pub fn error(msg: &str) -> String {
    format!("{}{}{}", RED, msg, RESET)
}

pub fn warning(msg: &str) -> String {
    format!("{}{}{}", YELLOW, msg, RESET)
}

pub fn status(msg: &str) -> String {
    format!("{}{}{}", GRAY, msg, RESET)
}

pub fn quote(msg: &str) -> String {
    format!("{}{}\"{}\"{}", DIM, ITALIC, msg, RESET)
}

/// Progress ring color: cyan, then magenta, then green
pub fn tier(msg: &str, tier: ProgressTier) -> String {
    let color = match tier {
        ProgressTier::Low => CYAN,
        ProgressTier::Mid => MAGENTA,
        ProgressTier::High => GREEN,
    };
    format!("{}{}{}{}", BOLD, color, msg, RESET)
}

/// Horizontal separator line
pub fn separator(width: usize) -> String {
    format!("{}{}{}", DIM, "─".repeat(width), RESET)
}

/// Fixed-width percentage bar
pub fn meter(value: u32, width: usize) -> String {
    let filled = (value.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter() {
        assert_eq!(meter(0, 10), "░░░░░░░░░░");
        assert_eq!(meter(100, 10), "██████████");
        assert_eq!(meter(150, 4), "████");
        assert_eq!(meter(50, 4), "██░░");
    }

    #[test]
    fn test_wrappers_reset() {
        assert!(success("ok").ends_with(RESET));
        assert!(error("no").contains("no"));
    }
}
