use crate::Size;

/// The scaled bitmap output layout: for each glyph, for each 8-pixel-wide
/// strip left to right, for each target scanline top to bottom, one byte of
/// 8 pixels packed MSB-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedGlyphStrip {
    bytes: Vec<u8>,
    target_size: Size,
    char_count: usize,
}

impl PackedGlyphStrip {
    pub(crate) fn new(bytes: Vec<u8>, target_size: Size, char_count: usize) -> Self {
        Self { bytes, target_size, char_count }
    }

    pub fn target_size(&self) -> Size {
        self.target_size
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes needed per glyph: `ceil(width / 8) * height`.
    pub fn strip_bytes_per_glyph(target_size: Size) -> usize {
        (target_size.width as usize).div_ceil(8) * target_size.height as usize
    }

    /// The packed bytes belonging to glyph `index`.
    pub fn glyph_bytes(&self, index: usize) -> &[u8] {
        let per_glyph = Self::strip_bytes_per_glyph(self.target_size);
        let start = index * per_glyph;
        &self.bytes[start..start + per_glyph]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
