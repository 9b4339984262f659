use std::sync::atomic::{AtomicU64, Ordering};

use crate::{BitPattern, PackedGlyphStrip, ScaleError, Size, scale};

const VERSION: u16 = 0x0300;
const WEIGHT_NORMAL: u16 = 400;
const CHARSET_OEM: u8 = 0xFF;
const PITCH_FIXED_FAMILY_DONTCARE: u8 = 0x01 /* FIXED_PITCH */ | 0x00 /* FF_DONTCARE */;
const FLAGS_FIXED_1COLOR: u32 = 0x0001 /* DFF_FIXED */ | 0x0010 /* DFF_1COLOR */;

const GLYPH_ENTRY_SIZE: usize = 2 /* width */ + 4 /* offset */;
const FACE_NAME_SIZE: usize = 32;
/// Size of the fixed-layout header, matching the historical Windows 3.0
/// `FONTINFO` struct (`#pragma pack(push, 1)`), reproduced field-for-field:
/// `sizeof(FONTINFO)` is 148 bytes (ends with `dfColorPointer` @128 and
/// `dfReserved1[4]` @132..148).
const HEADER_SIZE: usize = 148;

static FACE_NAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A complete in-memory binary font resource: header + glyph offset table +
/// face name + packed bitmap payload, laid out exactly as the historical
/// 1-byte-packed Windows raster font resource format expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontResourceImage {
    buffer: Vec<u8>,
    face_name_offset: usize,
    bitmap_offset: usize,
}

impl FontResourceImage {
    /// Builds the resource by scaling `bit_pattern` to `target_size`
    /// (applying `centering_hint`), for `char_count` glyphs starting at
    /// `first_char`. `char_count` is clamped to 256 by the caller
    /// ([`crate::FontResourceImage::build`]'s contract mirrors
    /// `FontResource`'s constructor clamp).
    ///
    /// # Errors
    ///
    /// Propagates [`ScaleError`] from the underlying [`crate::scale`] call.
    pub fn build(
        bit_pattern: &BitPattern,
        target_size: Size,
        centering_hint: i32,
        first_char: u8,
        char_count: usize,
    ) -> Result<Self, ScaleError> {
        let char_count = char_count.min(256);
        let glyph_bytes_per_char = PackedGlyphStrip::strip_bytes_per_glyph(target_size);

        let glyph_table_size = GLYPH_ENTRY_SIZE * char_count;
        let face_name_offset = HEADER_SIZE + glyph_table_size;
        let bitmap_offset = face_name_offset + FACE_NAME_SIZE;
        let bitmap_size = glyph_bytes_per_char * char_count;
        let total_size = bitmap_offset + bitmap_size;

        let mut buffer = vec![0u8; total_size];

        write_u16(&mut buffer, 0, VERSION);
        write_u32(&mut buffer, 2, total_size as u32);
        // copyright[60] @ 6, type @ 66: left zeroed.
        write_u16(&mut buffer, 83, WEIGHT_NORMAL);
        buffer[85] = CHARSET_OEM;
        write_u16(&mut buffer, 86, target_size.width as u16);
        write_u16(&mut buffer, 88, target_size.height as u16);
        buffer[90] = PITCH_FIXED_FAMILY_DONTCARE;
        write_u16(&mut buffer, 91, target_size.width as u16);
        write_u16(&mut buffer, 93, target_size.width as u16);
        buffer[95] = first_char;
        buffer[96] = first_char.wrapping_add(char_count.saturating_sub(1) as u8);
        // dfDefaultChar @ 97, dfBreakChar @ 98, dfWidthBytes @ 99, dfDevice @ 101: left zeroed.
        write_u32(&mut buffer, 105, face_name_offset as u32); // dfFace
        // dfBitsPointer @ 109: left zeroed.
        write_u32(&mut buffer, 113, bitmap_offset as u32); // dfBitsOffset
        // dfReserved @ 117: left zeroed.
        write_u32(&mut buffer, 118, FLAGS_FIXED_1COLOR); // dfFlags

        for i in 0..char_count {
            let entry_offset = HEADER_SIZE + i * GLYPH_ENTRY_SIZE;
            let glyph_offset = bitmap_offset + i * glyph_bytes_per_char;
            write_u16(&mut buffer, entry_offset, target_size.width as u16);
            write_u32(&mut buffer, entry_offset + 2, glyph_offset as u32);
        }

        let counter = FACE_NAME_COUNTER.fetch_add(1, Ordering::Relaxed);
        let face_name = format!("WTRASTERFONT{counter:016X}");
        buffer[face_name_offset..face_name_offset + face_name.len()]
            .copy_from_slice(face_name.as_bytes());

        let strip = scale(bit_pattern, target_size, centering_hint)?;
        buffer[bitmap_offset..bitmap_offset + bitmap_size].copy_from_slice(strip.bytes());

        Ok(Self { buffer, face_name_offset, bitmap_offset })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn total_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn bitmap_offset(&self) -> usize {
        self.bitmap_offset
    }

    /// The generated `WTRASTERFONTxxxxxxxxxxxxxxxx` face name.
    pub fn face_name(&self) -> &str {
        let end = self.buffer[self.face_name_offset..]
            .iter()
            .position(|&b| b == 0)
            .map(|p| self.face_name_offset + p)
            .unwrap_or(self.buffer.len());
        std::str::from_utf8(&self.buffer[self.face_name_offset..end]).unwrap_or_default()
    }
}

fn write_u16(buffer: &mut [u8], offset: usize, value: u16) {
    buffer[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn write_u32(buffer: &mut [u8], offset: usize, value: u32) {
    buffer[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_pattern() -> BitPattern {
        BitPattern::new(vec![0xFF00u16; 12], Size::new(8, 12), 1)
    }

    #[test]
    fn total_size_matches_region_layout() {
        let image = FontResourceImage::build(&simple_pattern(), Size::new(8, 12), 0, 0x20, 1)
            .unwrap();
        let expected =
            HEADER_SIZE + GLYPH_ENTRY_SIZE * 1 + FACE_NAME_SIZE + 1 * 12;
        assert_eq!(image.total_size(), expected);
        assert_eq!(
            u32::from_le_bytes(image.as_bytes()[2..6].try_into().unwrap()) as usize,
            expected
        );
    }

    #[test]
    fn bitmap_offset_follows_face_name_region() {
        let image = FontResourceImage::build(&simple_pattern(), Size::new(8, 12), 0, 0x20, 1)
            .unwrap();
        let face_name_offset =
            u32::from_le_bytes(image.as_bytes()[105..109].try_into().unwrap()) as usize;
        assert_eq!(image.bitmap_offset(), face_name_offset + FACE_NAME_SIZE);
    }

    #[test]
    fn consecutive_builds_generate_distinct_face_names() {
        let a = FontResourceImage::build(&simple_pattern(), Size::new(8, 12), 0, 0x20, 1).unwrap();
        let b = FontResourceImage::build(&simple_pattern(), Size::new(8, 12), 0, 0x20, 1).unwrap();
        assert_ne!(a.face_name(), b.face_name());
        assert!(a.face_name().starts_with("WTRASTERFONT"));
    }

    #[test]
    fn every_glyph_offset_lies_within_the_bitmap_region() {
        let pattern = BitPattern::new(vec![0xFF00u16; 12 * 4], Size::new(8, 12), 4);
        let image = FontResourceImage::build(&pattern, Size::new(8, 12), 0, 0x20, 4).unwrap();
        for i in 0..4 {
            let entry_offset = HEADER_SIZE + i * GLYPH_ENTRY_SIZE;
            let offset = u32::from_le_bytes(
                image.as_bytes()[entry_offset + 2..entry_offset + 6]
                    .try_into()
                    .unwrap(),
            ) as usize;
            assert!(offset >= image.bitmap_offset());
            assert!(offset < image.total_size());
        }
    }

    #[test]
    fn char_count_is_clamped_to_256() {
        let pattern = BitPattern::new(vec![0xFF00u16; 12 * 300], Size::new(8, 12), 300);
        let image = FontResourceImage::build(&pattern, Size::new(8, 12), 0, 0x20, 300).unwrap();
        let expected = HEADER_SIZE + GLYPH_ENTRY_SIZE * 256 + FACE_NAME_SIZE + 256 * 12;
        assert_eq!(image.total_size(), expected);
    }
}
