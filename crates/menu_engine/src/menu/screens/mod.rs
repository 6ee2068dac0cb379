//! Concrete screens
//!
//! Each screen resolves everything it needs from the [`RenderContext`] when it
//! is constructed. If something is missing the screen keeps no layout and
//! every later draw or pad call returns immediately.

pub mod start;
pub mod about;
pub mod game_list;
pub mod confirm;

pub use start::StartMenu;
pub use about::AboutMenu;
pub use game_list::GameListMenu;
pub use confirm::ConfirmDialog;

use crate::foundation::math::{to_screen, Vec2};
use crate::render::{DrawRegion, RenderContext, Rgba, TextAlign, TextureId};

/// Base tint shared by menu text and artwork
pub const MENU_RGB: u32 = 0xFF_FFFF;

/// Emphasis for the highlighted entry of a row or list
pub const MENU_SELECTED: u8 = 0xFF;

/// Emphasis for entries that are not highlighted
pub const MENU_UNSELECTED: u8 = 0x60;

/// Font sizes as a fraction of screen height
pub mod font_size {
    /// Fine print
    pub const SMALL: f32 = 0.025;
    /// Labels
    pub const MEDIUM: f32 = 0.035;
    /// Headings
    pub const LARGE: f32 = 0.05;
}

/// Wrapping selection over a fixed number of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Cursor on the first of `len` entries
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Selected entry
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there is nothing to select
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move back one entry, wrapping to the last
    pub fn step_back(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Move forward one entry, wrapping to the first
    pub fn step_forward(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

/// Title bar shared by full-screen pages
#[derive(Debug, Clone)]
pub(crate) struct Header {
    icon: TextureId,
    title: String,
    caption: String,
    icon_region: DrawRegion,
    title_at: Vec2,
    caption_at: Vec2,
    rule: DrawRegion,
    size: f32,
}

impl Header {
    pub(crate) fn new(
        ctx: &RenderContext,
        icon: TextureId,
        title: String,
        caption: String,
    ) -> Self {
        let screen = ctx.screen_size();
        let size = font_size::LARGE * screen.y;
        Self {
            icon,
            title,
            caption,
            icon_region: DrawRegion::new(
                to_screen(Vec2::new(0.08, 0.08), screen),
                to_screen(Vec2::new(0.05, 0.07), screen),
            ),
            title_at: to_screen(Vec2::new(0.12, 0.08), screen),
            caption_at: to_screen(Vec2::new(0.92, 0.08), screen),
            rule: DrawRegion::new(
                to_screen(Vec2::new(0.5, 0.13), screen),
                to_screen(Vec2::new(0.84, 0.003), screen),
            ),
            size,
        }
    }

    pub(crate) fn draw(&self, ctx: &mut RenderContext, color: Rgba) {
        ctx.draw_texture(self.icon, self.icon_region, color);
        ctx.print_line(&self.title, TextAlign::Left, self.title_at, self.size, color);
        ctx.print_line(&self.caption, TextAlign::Right, self.caption_at, self.size * 0.6, color);
        ctx.draw_texture(TextureId::DialogFrame, self.rule, color);
    }
}

/// Full screen backdrop behind non-overlay pages
pub(crate) fn draw_background(ctx: &mut RenderContext) {
    let screen = ctx.screen_size();
    let region = DrawRegion::new(screen * 0.5, screen);
    ctx.draw_texture(TextureId::Background, region, Rgba::from_rgb_alpha(MENU_RGB, u8::MAX));
}

/// Resolve every key, or nothing if any is missing
pub(crate) fn lookup_all<const N: usize>(
    ctx: &RenderContext,
    keys: [&str; N],
) -> Option<[String; N]> {
    let mut values: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, key) in values.iter_mut().zip(keys) {
        *slot = ctx.text(key)?;
    }
    Some(values)
}
