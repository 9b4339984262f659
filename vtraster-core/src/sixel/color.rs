//! Color-space conversions used by the Sixel color introducer (`#Pu;Px;Py;Pz`).
//! Both functions return packed `0x00RRGGBB`; callers force full alpha when
//! writing the result into a palette slot.

/// Converts three percentages (0..=100, clamped) to an 8-bit-per-channel RGB
/// value: `round(v * 255 / 100)` per channel. Integer-only (rounds via
/// `+ 50` before truncating division) so this can be used in `const` contexts
/// such as [`super::palette::DEFAULT_COLORS`].
pub const fn color_from_rgb100(r: i32, g: i32, b: i32) -> u32 {
    const fn scale(v: i32) -> u32 {
        let clamped = if v < 0 { 0 } else if v > 100 { 100 } else { v };
        ((clamped * 255 + 50) / 100) as u32
    }
    (scale(r) << 16) | (scale(g) << 8) | scale(b)
}

/// Converts hue (degrees, wraps modulo 360), lightness, and saturation
/// (percentages, clamped 0..=100) to RGB using the standard HLS-to-RGB
/// formula (equivalent to CSS `hsl()` with lightness/saturation as fractions,
/// hue 0 = red).
///
/// Some DEC terminal HLS implementations rotate the hue origin (0 = blue,
/// 120 = red, 240 = green) instead. The real `Utils::ColorFromHLS` this is
/// grounded on wasn't available to inspect, and the governing color-
/// conversion contract here calls for the standard (CSS-equivalent) mapping,
/// so that is what this function implements; it is not the DEC-rotated
/// variant.
pub fn color_from_hls(h: i32, l: i32, s: i32) -> u32 {
    let h = h.rem_euclid(360) as f64 / 360.0;
    let l = (l.clamp(0, 100) as f64) / 100.0;
    let s = (s.clamp(0, 100) as f64) / 100.0;

    if s == 0.0 {
        let v = (l * 255.0).round() as u32;
        return (v << 16) | (v << 8) | v;
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    let to_byte = |v: f64| ((v * 255.0).round() as u32).min(255);
    (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb100_full_white() {
        assert_eq!(color_from_rgb100(100, 100, 100), 0x00FFFFFF);
    }

    #[test]
    fn rgb100_black() {
        assert_eq!(color_from_rgb100(0, 0, 0), 0x00000000);
    }

    #[test]
    fn rgb100_clamps_out_of_range() {
        assert_eq!(color_from_rgb100(200, -5, 50), color_from_rgb100(100, 0, 50));
    }

    #[test]
    fn hls_zero_saturation_is_gray() {
        let v = color_from_hls(180, 50, 0);
        let r = (v >> 16) & 0xFF;
        let g = (v >> 8) & 0xFF;
        let b = v & 0xFF;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn hls_red_hue() {
        // h=0, l=50%, s=100% -> pure red
        assert_eq!(color_from_hls(0, 50, 100), 0x00FF0000);
    }
}
