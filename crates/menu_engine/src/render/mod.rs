//! Rendering collaborators
//!
//! The menu core never rasterizes anything itself. Fonts, textures and the
//! locale table belong to the host and are reached through the narrow
//! traits below, bundled into a [`RenderContext`] that is passed explicitly
//! to every screen.

pub mod locale;
#[cfg(test)]
pub(crate) mod testing;

pub use locale::{Locale, LocaleTable};

use std::collections::HashMap;

use crate::foundation::math::Vec2;

/// Packed 0xRRGGBBAA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Compose a 24-bit RGB constant with an alpha byte
    pub const fn from_rgb_alpha(rgb: u32, alpha: u8) -> Self {
        Self(((rgb & 0x00FF_FFFF) << 8) | alpha as u32)
    }

    /// Alpha channel
    pub const fn alpha(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// RGB channels without alpha
    pub const fn rgb(self) -> u32 {
        self.0 >> 8
    }

    /// Scale the window alpha by an emphasis level (both 0..=255)
    ///
    /// Used for rows where the selected entry is brighter than the rest.
    pub fn scaled_alpha(rgb: u32, alpha: u8, emphasis: u8) -> Self {
        let scaled = (f32::from(alpha) / 255.0) * f32::from(emphasis);
        Self::from_rgb_alpha(rgb, scaled.round().clamp(0.0, 255.0) as u8)
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Text starts at the position
    Left,
    /// Text is centered on the position
    Center,
    /// Text ends at the position
    Right,
}

/// Destination rectangle for a texture draw, centered on `location`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRegion {
    /// Center of the rectangle in pixels
    pub location: Vec2,
    /// Width and height in pixels
    pub dimension: Vec2,
}

impl DrawRegion {
    /// Create a region from center and size
    pub const fn new(location: Vec2, dimension: Vec2) -> Self {
        Self { location, dimension }
    }
}

/// Text renderer supplied by the host
pub trait Font {
    /// Size of `text` when printed at `size`
    fn measure(&self, text: &str, size: f32) -> Vec2;

    /// Print a single line of text
    fn print_line(&mut self, text: &str, align: TextAlign, position: Vec2, size: f32, color: Rgba);
}

/// Drawable image supplied by the host
pub trait Texture {
    /// Set where the next draw lands
    fn set_draw_region(&mut self, region: DrawRegion);

    /// Draw with the given color modulation
    fn draw(&mut self, color: Rgba);
}

/// Images the bundled screens know how to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    /// Full screen background
    Background,
    /// Title screen logo
    TitleLogo,
    /// Caption under the logo
    TitleLabel,
    /// Project link at the bottom of the title screen
    TitleLink,
    /// Launch icon
    IconLaunch,
    /// Cheats icon
    IconCheats,
    /// Options icon
    IconOptions,
    /// About icon
    IconAbout,
    /// Header icon for the about screen
    HeaderAbout,
    /// Header icon for the game list
    HeaderGames,
    /// Backdrop for dialogs
    DialogFrame,
}

/// Shared rendering resources, owned by the frame driver
///
/// Every member may be missing. Screens check what they need once, at
/// construction, and stay disabled if anything was absent.
pub struct RenderContext {
    font: Option<Box<dyn Font>>,
    locale: Option<Box<dyn Locale>>,
    textures: HashMap<TextureId, Box<dyn Texture>>,
    screen_size: Vec2,
}

impl RenderContext {
    /// Create an empty context for a screen of the given size
    pub fn new(screen_size: (f32, f32)) -> Self {
        Self {
            font: None,
            locale: None,
            textures: HashMap::new(),
            screen_size: Vec2::new(screen_size.0, screen_size.1),
        }
    }

    /// Install the font (builder pattern)
    pub fn with_font(mut self, font: Box<dyn Font>) -> Self {
        self.font = Some(font);
        self
    }

    /// Install the locale table (builder pattern)
    pub fn with_locale(mut self, locale: Box<dyn Locale>) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Install a texture (builder pattern)
    pub fn with_texture(mut self, id: TextureId, texture: Box<dyn Texture>) -> Self {
        self.textures.insert(id, texture);
        self
    }

    /// Replace the locale, e.g. once a slow boot path finishes loading it
    pub fn set_locale(&mut self, locale: Box<dyn Locale>) {
        self.locale = Some(locale);
    }

    /// Shared font, if loaded
    pub fn font(&self) -> Option<&dyn Font> {
        self.font.as_deref()
    }

    /// Shared locale lookup, if loaded
    pub fn locale(&self) -> Option<&dyn Locale> {
        self.locale.as_deref()
    }

    /// Look up a localized string, `None` if the locale or the key is missing
    pub fn text(&self, key: &str) -> Option<String> {
        self.locale()?.get_value(key).map(str::to_owned)
    }

    /// Whether every listed texture is installed
    pub fn has_textures(&self, ids: &[TextureId]) -> bool {
        ids.iter().all(|id| self.textures.contains_key(id))
    }

    /// Draw a texture into a region, silently skipping missing ones
    pub fn draw_texture(&mut self, id: TextureId, region: DrawRegion, color: Rgba) {
        if let Some(texture) = self.textures.get_mut(&id) {
            texture.set_draw_region(region);
            texture.draw(color);
        }
    }

    /// Print a line with the shared font, silently skipping when absent
    pub fn print_line(
        &mut self,
        text: &str,
        align: TextAlign,
        position: Vec2,
        size: f32,
        color: Rgba,
    ) {
        if let Some(font) = self.font.as_deref_mut() {
            font.print_line(text, align, position, size, color);
        }
    }

    /// Screen size in pixels
    pub const fn screen_size(&self) -> Vec2 {
        self.screen_size
    }
}
