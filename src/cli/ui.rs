//! Small rendering helpers shared by the command views.

/// Width of the block progress bars in status and goal views.
pub const BAR_WIDTH: usize = 30;

/// Renders a filled/empty block bar. The fill is clamped at 100% so
/// over-budget rows still draw a full bar rather than overflowing.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (width as f64 * ratio) as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// Half-percent scaled bar used in the category breakdown, mirroring the
/// report's one-block-per-two-percent convention.
pub fn share_bar(share_percent: f64) -> String {
    let blocks = (share_percent.clamp(0.0, 100.0) / 2.0) as usize;
    "█".repeat(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_clamps_at_one_hundred_percent() {
        assert_eq!(progress_bar(150.0, 10), "█".repeat(10));
        assert_eq!(progress_bar(100.0, 10), "█".repeat(10));
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(progress_bar(50.0, 10), format!("{}{}", "█".repeat(5), "░".repeat(5)));
        assert_eq!(progress_bar(0.0, 10), "░".repeat(10));
        assert_eq!(progress_bar(-10.0, 10), "░".repeat(10));
    }

    #[test]
    fn share_bar_uses_one_block_per_two_percent() {
        assert_eq!(share_bar(50.0), "█".repeat(25));
        assert_eq!(share_bar(1.9), "");
    }
}
