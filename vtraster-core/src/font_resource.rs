//! Owns the lifetime of a built raster font resource against a host font
//! subsystem: builds the binary image on demand, registers it, and holds
//! whatever handles the host hands back.

use vtraster_data::{BitPattern, FontResourceImage, Size};

const DRCS_CHAR_COUNT: usize = 96;
const DEFAULT_FIRST_CHAR: u8 = 0x20;

/// Describes the glyph a host should create after registering a
/// [`FontResourceImage`]'s memory-resident font resource.
#[derive(Debug, Clone)]
pub struct GlyphDescriptor {
    pub height: i32,
    pub width: i32,
    pub charset: u8,
    pub face_name: String,
}

/// The host collaborator a [`FontResource`] registers itself against. The
/// host owns whatever `ResourceHandle`/`GlyphHandle` representation it needs
/// (window-system font objects, a mock in tests, ...); this crate never
/// inspects them beyond holding them.
pub trait GlyphHost {
    type ResourceHandle;
    type GlyphHandle;

    fn register_memory_font(&self, image: &[u8]) -> Option<Self::ResourceHandle>;
    fn create_glyph_from_descriptor(&self, descriptor: &GlyphDescriptor) -> Option<Self::GlyphHandle>;
}

/// Builds and owns an in-memory raster font resource at a given target cell
/// size, scaled from a source [`BitPattern`] via [`vtraster_data::scale`],
/// and the registration/glyph handles a [`GlyphHost`] returns for it.
pub struct FontResource<H: GlyphHost> {
    bit_pattern: BitPattern,
    source_size: Size,
    target_size: Size,
    centering_hint: i32,
    first_char: u8,
    char_count: usize,
    resource_handle: Option<H::ResourceHandle>,
    glyph_handle: Option<H::GlyphHandle>,
}

impl<H: GlyphHost> FontResource<H> {
    pub fn new(
        bit_pattern: BitPattern,
        source_size: Size,
        target_size: Size,
        centering_hint: i32,
        first_char: u8,
        char_count: usize,
    ) -> Self {
        Self {
            bit_pattern,
            source_size,
            target_size,
            centering_hint,
            first_char,
            char_count: char_count.min(256),
            resource_handle: None,
            glyph_handle: None,
        }
    }

    /// Same as [`Self::new`] with `first_char=0x20, char_count=96` (DRCS soft
    /// font defaults).
    pub fn with_defaults(
        bit_pattern: BitPattern,
        source_size: Size,
        target_size: Size,
        centering_hint: i32,
    ) -> Self {
        Self::new(
            bit_pattern,
            source_size,
            target_size,
            centering_hint,
            DEFAULT_FIRST_CHAR,
            DRCS_CHAR_COUNT,
        )
    }

    /// Discards any built handle if `new_size` differs from the current
    /// target size, forcing the next [`Self::as_handle`] call to rebuild.
    pub fn set_target_size(&mut self, new_size: Size) {
        if self.target_size != new_size {
            self.target_size = new_size;
            self.resource_handle = None;
            self.glyph_handle = None;
        }
    }

    /// Lazily builds and registers the resource against `host`, returning
    /// the glyph handle. Returns `None` if a prior build already failed or
    /// the host rejects this one; failure is logged, not propagated.
    pub fn as_handle(&mut self, host: &H) -> Option<&H::GlyphHandle> {
        if self.glyph_handle.is_none() {
            self.build(host);
        }
        self.glyph_handle.as_ref()
    }

    fn build(&mut self, host: &H) {
        let image = match FontResourceImage::build(
            &self.bit_pattern,
            self.target_size,
            self.centering_hint,
            self.first_char,
            self.char_count,
        ) {
            Ok(image) => image,
            Err(err) => {
                tracing::warn!(error = %err, "font resource scaling failed");
                return;
            },
        };

        let Some(resource_handle) = host.register_memory_font(image.as_bytes()) else {
            tracing::warn!("host rejected font resource registration");
            return;
        };

        let descriptor = GlyphDescriptor {
            height: self.target_size.height,
            width: self.target_size.width,
            charset: 0xFF, // OEM_CHARSET
            face_name: image.face_name().to_string(),
        };

        let Some(glyph_handle) = host.create_glyph_from_descriptor(&descriptor) else {
            tracing::warn!("host rejected glyph handle creation");
            self.resource_handle = Some(resource_handle);
            return;
        };

        self.resource_handle = Some(resource_handle);
        self.glyph_handle = Some(glyph_handle);
    }

    pub fn source_size(&self) -> Size {
        self.source_size
    }

    pub fn target_size(&self) -> Size {
        self.target_size
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct MockHost {
        register_fails: bool,
        glyph_fails: bool,
        registrations: Cell<u32>,
    }

    impl MockHost {
        fn new() -> Self {
            Self { register_fails: false, glyph_fails: false, registrations: Cell::new(0) }
        }
    }

    impl GlyphHost for MockHost {
        type GlyphHandle = String;
        type ResourceHandle = u32;

        fn register_memory_font(&self, _image: &[u8]) -> Option<Self::ResourceHandle> {
            if self.register_fails {
                return None;
            }
            let id = self.registrations.get();
            self.registrations.set(id + 1);
            Some(id)
        }

        fn create_glyph_from_descriptor(
            &self,
            descriptor: &GlyphDescriptor,
        ) -> Option<Self::GlyphHandle> {
            if self.glyph_fails {
                return None;
            }
            Some(descriptor.face_name.clone())
        }
    }

    fn source_pattern() -> BitPattern {
        BitPattern::new(vec![0xFF00u16; 12], Size::new(8, 12), 1)
    }

    #[test]
    fn builds_and_returns_a_glyph_handle() {
        let host = MockHost::new();
        let mut resource = FontResource::new(
            source_pattern(),
            Size::new(8, 12),
            Size::new(8, 12),
            0,
            0x20,
            1,
        );
        let handle = resource.as_handle(&host);
        assert!(handle.is_some());
        assert!(handle.unwrap().starts_with("WTRASTERFONT"));
    }

    #[test]
    fn registration_failure_leaves_handle_empty_without_panicking() {
        let host = MockHost { register_fails: true, ..MockHost::new() };
        let mut resource = FontResource::new(
            source_pattern(),
            Size::new(8, 12),
            Size::new(8, 12),
            0,
            0x20,
            1,
        );
        assert!(resource.as_handle(&host).is_none());
    }

    #[test]
    fn glyph_handle_failure_still_keeps_the_registration() {
        let host = MockHost { glyph_fails: true, ..MockHost::new() };
        let mut resource = FontResource::new(
            source_pattern(),
            Size::new(8, 12),
            Size::new(8, 12),
            0,
            0x20,
            1,
        );
        assert!(resource.as_handle(&host).is_none());
        assert!(resource.resource_handle.is_some());
    }

    #[test]
    fn changing_target_size_discards_built_handles() {
        let host = MockHost::new();
        let mut resource = FontResource::new(
            source_pattern(),
            Size::new(8, 12),
            Size::new(8, 12),
            0,
            0x20,
            1,
        );
        resource.as_handle(&host);
        assert!(resource.glyph_handle.is_some());

        resource.set_target_size(Size::new(16, 12));
        assert!(resource.glyph_handle.is_none());
        assert!(resource.resource_handle.is_none());
    }

    #[test]
    fn char_count_above_256_is_clamped() {
        let resource: FontResource<MockHost> = FontResource::new(
            source_pattern(),
            Size::new(8, 12),
            Size::new(8, 12),
            0,
            0x20,
            300,
        );
        assert_eq!(resource.char_count, 256);
    }

    #[test]
    fn with_defaults_uses_drcs_soft_font_range() {
        let resource: FontResource<MockHost> =
            FontResource::with_defaults(source_pattern(), Size::new(8, 12), Size::new(8, 12), 0);
        assert_eq!(resource.first_char, 0x20);
        assert_eq!(resource.char_count, 96);
    }
}
