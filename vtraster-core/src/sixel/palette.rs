//! The sixel color table: size, reserved sentinel slots, and the default
//! 16-color VT340-style seed table used to backfill unset entries.

use super::color::color_from_rgb100;

/// One past the highest ordinary palette index; `TRANSPARENT` and
/// `BACKGROUND` occupy the two slots beyond it. 1024 color registers, the
/// conventional sixel palette size used by terminal sixel implementations
/// (mlterm, xterm's `sixelColors` default), comfortably below
/// `MAX_PARAMETER_VALUE` so an out-of-range `#Pc` index can actually clamp
/// into the `TRANSPARENT` slot rather than saturating at the parameter limit
/// first.
pub const PALETTE_SIZE: usize = 1024;
/// Reserved slot for fully transparent sixel cells. Always `0x00FF00FF`.
pub const TRANSPARENT: usize = PALETTE_SIZE;
/// Reserved slot backing `palette_zero_is_background`'s substitution of
/// index 0.
pub const BACKGROUND: usize = PALETTE_SIZE + 1;
/// Total color table size: ordinary palette slots plus the two reserved ones.
pub const COLOR_TABLE_SIZE: usize = PALETTE_SIZE + 2;

pub const TRANSPARENT_COLOR: u32 = 0x00FF00FF;

/// The VT340 default 16-color table, reproduced from the historical
/// reference implementation's `s_defaultColorTable`.
pub const DEFAULT_COLORS: [u32; 16] = [
    color_from_rgb100(0, 0, 0),    // 0 Black
    color_from_rgb100(20, 20, 80), // 1 Blue
    color_from_rgb100(80, 13, 13), // 2 Red
    color_from_rgb100(20, 80, 20), // 3 Green
    color_from_rgb100(80, 20, 80), // 4 Magenta
    color_from_rgb100(20, 80, 80), // 5 Cyan
    color_from_rgb100(80, 80, 20), // 6 Yellow
    color_from_rgb100(53, 53, 53), // 7 Gray 50%
    color_from_rgb100(26, 26, 26), // 8 Gray 25%
    color_from_rgb100(33, 33, 60), // 9 Blue*
    color_from_rgb100(60, 26, 26), // 10 Red*
    color_from_rgb100(33, 60, 33), // 11 Green*
    color_from_rgb100(60, 33, 60), // 12 Magenta*
    color_from_rgb100(33, 60, 60), // 13 Cyan*
    color_from_rgb100(60, 60, 33), // 14 Yellow*
    color_from_rgb100(80, 80, 80), // 15 Gray 75%
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_and_background_are_the_last_two_slots() {
        assert_eq!(TRANSPARENT, PALETTE_SIZE);
        assert_eq!(BACKGROUND, PALETTE_SIZE + 1);
        assert_eq!(COLOR_TABLE_SIZE, TRANSPARENT + 2);
    }

    #[test]
    fn default_colors_has_sixteen_entries() {
        assert_eq!(DEFAULT_COLORS.len(), 16);
    }
}
