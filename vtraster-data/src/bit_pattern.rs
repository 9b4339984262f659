use crate::Size;

/// A source bit-pattern font: one 16-bit word per scanline, MSB-first, bit
/// `1 << 15` is the leftmost pixel. Read-only input to [`crate::scale`] and
/// the output of [`crate::generate_block_glyphs`].
///
/// The pattern covers `char_count` consecutive glyphs, each occupying
/// `source_size.height` consecutive words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPattern {
    words: Vec<u16>,
    source_size: Size,
    char_count: usize,
}

impl BitPattern {
    /// Builds a bit pattern from `words`, which must contain exactly
    /// `source_size.height * char_count` entries.
    ///
    /// # Panics
    ///
    /// Panics if `words.len()` does not match `source_size.height * char_count`.
    pub fn new(words: Vec<u16>, source_size: Size, char_count: usize) -> Self {
        let expected = source_size.height as usize * char_count;
        assert_eq!(
            words.len(),
            expected,
            "bit pattern has {} words, expected {expected} ({char_count} glyphs of height {})",
            words.len(),
            source_size.height,
        );

        Self { words, source_size, char_count }
    }

    pub fn source_size(&self) -> Size {
        self.source_size
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }

    /// The scanlines belonging to glyph `index`, top to bottom.
    pub fn glyph_scanlines(&self, index: usize) -> &[u16] {
        let height = self.source_size.height as usize;
        let start = index * height;
        &self.words[start..start + height]
    }
}
