//! Pure-data primitives for legacy raster font resources: a bit-pattern
//! scaler faithful to the historical Windows `.FNT` resize algorithm, a
//! Unicode block/shade/quadrant glyph synthesizer, and the byte-exact binary
//! layout of the resulting font resource.
//!
//! This crate has no host dependency and performs no I/O; [`vtraster-core`]
//! builds on top of it to manage a live font resource against a host
//! collaborator.

mod bit_pattern;
mod block_glyph;
mod error;
mod font_resource_image;
mod glyph_strip;
mod scaler;
mod size;

pub use bit_pattern::BitPattern;
pub use block_glyph::{FIRST_CHAR as BLOCK_GLYPH_FIRST_CHAR, GLYPH_COUNT as BLOCK_GLYPH_COUNT, generate as generate_block_glyphs};
pub use error::ScaleError;
pub use font_resource_image::FontResourceImage;
pub use glyph_strip::PackedGlyphStrip;
pub use scaler::scale;
pub use size::Size;
