use eframe::egui::Color32;
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Qualitative palette
// ---------------------------------------------------------------------------

/// Ten-color qualitative palette for categorical series.
///
/// Fixed, not derived from the data: a category keeps its color for as long
/// as its first-seen rank is stable, and the wheel restarts after ten.
pub const QUALITATIVE: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4), // blue
    Color32::from_rgb(0xff, 0x7f, 0x0e), // orange
    Color32::from_rgb(0x2c, 0xa0, 0x2c), // green
    Color32::from_rgb(0xd6, 0x27, 0x28), // red
    Color32::from_rgb(0x94, 0x67, 0xbd), // purple
    Color32::from_rgb(0x8c, 0x56, 0x4b), // brown
    Color32::from_rgb(0xe3, 0x77, 0xc2), // pink
    Color32::from_rgb(0x7f, 0x7f, 0x7f), // gray
    Color32::from_rgb(0xbc, 0xbd, 0x22), // olive
    Color32::from_rgb(0x17, 0xbe, 0xcf), // cyan
];

/// Color for the `index`-th category in first-seen order.
pub fn palette_color(index: usize) -> Color32 {
    QUALITATIVE[index % QUALITATIVE.len()]
}

/// The same color in plotters' terms, for the PNG export path.
pub fn to_rgb(color: Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn first_ten_colors_are_distinct() {
        let unique: BTreeSet<_> = (0..10).map(|i| palette_color(i).to_array()).collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn palette_cycles_past_ten() {
        assert_eq!(palette_color(10), palette_color(0));
        assert_eq!(palette_color(23), palette_color(3));
    }

    #[test]
    fn rgb_conversion_keeps_channels() {
        let rgb = to_rgb(QUALITATIVE[0]);
        assert_eq!((rgb.0, rgb.1, rgb.2), (0x1f, 0x77, 0xb4));
    }
}
