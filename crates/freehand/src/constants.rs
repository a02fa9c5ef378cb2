use crate::types::SizeToken;

/// Base pixel width per size token. Strictly increasing s < m < l < xl.
pub const SIZE_WIDTHS: [f32; 4] = [18.0, 24.0, 36.0, 44.0];

/// Multiplier applied to the base width table.
pub const WIDTH_SCALE: f32 = 1.12;

/// Opacity for the overlay draw layer (above other canvas content).
pub const OVERLAY_OPACITY: f32 = 0.35;

/// Opacity for the underlay draw layer (beneath other canvas content).
pub const UNDERLAY_OPACITY: f32 = 0.20;

/// Radius of the ambient render dot for degenerate strokes.
/// The visual size comes from the stroked centerline width, not this radius.
pub const RENDER_DOT_RADIUS: f32 = 0.1;

/// Pressure assigned to samples that carry no pressure of their own.
pub const NEUTRAL_PRESSURE: f32 = 0.5;

/// Fraction of the base width the single-point jitter may add.
pub const JITTER_FRACTION: f32 = 1.0 / 6.0;

/// Effective stroke width for a size token.
pub fn stroke_width(size: SizeToken) -> f32 {
    SIZE_WIDTHS[size as usize] * WIDTH_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_strictly_increasing() {
        let widths = [
            stroke_width(SizeToken::S),
            stroke_width(SizeToken::M),
            stroke_width(SizeToken::L),
            stroke_width(SizeToken::Xl),
        ];
        for pair in widths.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_width_applies_scale() {
        assert_eq!(stroke_width(SizeToken::M), 24.0 * WIDTH_SCALE);
    }
}
