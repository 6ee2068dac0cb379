//! Recording doubles for rendering collaborators

use std::cell::RefCell;
use std::rc::Rc;

use super::{DrawRegion, Font, LocaleTable, RenderContext, Rgba, TextAlign, Texture, TextureId};
use crate::foundation::math::Vec2;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEntry {
    /// A printed text line
    Text { text: String, color: Rgba },
    /// A texture draw
    Texture { id: TextureId, region: Option<DrawRegion>, color: Rgba },
}

/// Shared log written by the doubles
#[derive(Debug, Clone, Default)]
pub struct DrawLog(Rc<RefCell<Vec<DrawEntry>>>);

impl DrawLog {
    pub fn entries(&self) -> Vec<DrawEntry> {
        self.0.borrow().clone()
    }

    pub fn alphas(&self) -> Vec<u8> {
        self.0
            .borrow()
            .iter()
            .map(|entry| match entry {
                DrawEntry::Text { color, .. } | DrawEntry::Texture { color, .. } => color.alpha(),
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                DrawEntry::Text { text, .. } => Some(text.clone()),
                DrawEntry::Texture { .. } => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, entry: DrawEntry) {
        self.0.borrow_mut().push(entry);
    }
}

struct RecordingFont(DrawLog);

impl Font for RecordingFont {
    fn measure(&self, text: &str, size: f32) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * size * 0.5, size)
    }

    fn print_line(
        &mut self,
        text: &str,
        _align: TextAlign,
        _position: Vec2,
        _size: f32,
        color: Rgba,
    ) {
        self.0.push(DrawEntry::Text { text: text.to_string(), color });
    }
}

struct RecordingTexture {
    id: TextureId,
    region: Option<DrawRegion>,
    log: DrawLog,
}

impl Texture for RecordingTexture {
    fn set_draw_region(&mut self, region: DrawRegion) {
        self.region = Some(region);
    }

    fn draw(&mut self, color: Rgba) {
        self.log.push(DrawEntry::Texture { id: self.id, region: self.region, color });
    }
}

pub const ALL_TEXTURES: [TextureId; 11] = [
    TextureId::Background,
    TextureId::TitleLogo,
    TextureId::TitleLabel,
    TextureId::TitleLink,
    TextureId::IconLaunch,
    TextureId::IconCheats,
    TextureId::IconOptions,
    TextureId::IconAbout,
    TextureId::HeaderAbout,
    TextureId::HeaderGames,
    TextureId::DialogFrame,
];

pub fn test_locale() -> LocaleTable {
    [
        ("GEN_LAUNCH", "Launch"),
        ("GEN_CHEATS", "Cheats"),
        ("GEN_OPTIONS", "Options"),
        ("GEN_ABOUT", "About"),
        ("GEN_GAMES", "Games"),
        ("GEN_CONFIRM", "Confirm"),
        ("GEN_CANCEL", "Cancel"),
        ("ABT_THANKS", "Thanks for using"),
        ("ABT_PROJECT", "Menu Engine"),
        ("ABT_LEARN", "Learn more"),
        ("ABT_CONTRIBUTE", "Contribute"),
        ("ABT_LINK", "example.invalid/menu"),
        ("ABT_CONTRIBUTORS", "Contributors"),
        ("GAM_EMPTY", "No games found"),
        ("DLG_LOAD_CHEATS", "Load cheats for this game?"),
    ]
    .into_iter()
    .fold(LocaleTable::new(), |table, (key, value)| table.with_entry(key, value))
}

/// Context with a font, every texture and the test locale
pub fn full_context(log: &DrawLog) -> RenderContext {
    let ctx = RenderContext::new((1280.0, 720.0))
        .with_font(Box::new(RecordingFont(log.clone())))
        .with_locale(Box::new(test_locale()));

    ALL_TEXTURES.into_iter().fold(ctx, |ctx, id| {
        ctx.with_texture(id, Box::new(RecordingTexture { id, region: None, log: log.clone() }))
    })
}

/// Context with a font and textures but no locale
pub fn context_without_locale(log: &DrawLog) -> RenderContext {
    let ctx = RenderContext::new((1280.0, 720.0)).with_font(Box::new(RecordingFont(log.clone())));

    ALL_TEXTURES.into_iter().fold(ctx, |ctx, id| {
        ctx.with_texture(id, Box::new(RecordingTexture { id, region: None, log: log.clone() }))
    })
}
