/// Fixed-width progress meter in the `[####----]` style.
///
/// `percentage` is 0..=100; anything outside is pinned. Fill is truncated,
/// not rounded, so the meter never shows a cell the countdown has not
/// actually earned.
pub fn meter(percentage: f64, width: usize, unicode: bool) -> String {
    let ratio = (percentage / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);
    let (fill_glyph, empty_glyph) = if unicode { ("█", "░") } else { ("#", "-") };
    format!("[{}{}]", fill_glyph.repeat(filled), empty_glyph.repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_endpoints() {
        assert_eq!(meter(0.0, 10, false), "[----------]");
        assert_eq!(meter(100.0, 10, false), "[##########]");
    }

    #[test]
    fn test_meter_partial_fill_truncates() {
        assert_eq!(meter(50.0, 10, false), "[#####-----]");
        // 33.33% of 3 cells is 0.99 cells: not yet a full cell.
        assert_eq!(meter(33.33, 3, false), "[---]");
    }

    #[test]
    fn test_meter_unicode_glyphs() {
        assert_eq!(meter(50.0, 4, true), "[██░░]");
    }

    #[test]
    fn test_meter_pins_out_of_range_values() {
        assert_eq!(meter(250.0, 4, false), "[####]");
        assert_eq!(meter(-10.0, 4, false), "[----]");
    }
}
