//! Stateful host-facing engine on top of [`vtraster_data`]'s pure bit-pattern
//! primitives: a [`FontResource`] that builds and registers a scaled raster
//! font against a host-provided [`GlyphHost`], and a [`sixel::SixelParser`]
//! that decodes a DEC Sixel byte stream into a dense RGBA buffer.

mod error;
mod font_resource;
pub mod sixel;

pub use error::Error;
pub use font_resource::{FontResource, GlyphDescriptor, GlyphHost};
pub use sixel::{OutputSize, SixelParser};
