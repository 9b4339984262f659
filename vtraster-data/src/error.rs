/// Errors produced by the bit-pattern scaler and block-glyph generator.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    /// `source_size.width` exceeded the 16-bit-word limit of `BitPattern`.
    #[error("source width {0} exceeds the 16-pixel-per-scanline limit")]
    SourceTooWide(i32),

    /// `target_size.width` exceeded the 16-bit-word limit the scaler can emit.
    #[error("target width {0} exceeds the 16-pixel-per-scanline limit")]
    TargetTooWide(i32),

    /// `char_count` was zero; there is nothing to scale.
    #[error("char_count must be at least 1")]
    EmptyCharset,
}
