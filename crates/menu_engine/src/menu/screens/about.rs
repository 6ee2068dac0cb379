//! Credits page

use super::{draw_background, font_size, lookup_all, Header, MENU_RGB};
use crate::foundation::math::{to_screen, Vec2};
use crate::menu::{DrawFrame, MenuBehavior, Navigator, PadState, WindowId};
use crate::render::{RenderContext, Rgba, TextAlign, TextureId};

const REQUIRED_TEXTURES: [TextureId; 3] = [
    TextureId::Background,
    TextureId::HeaderAbout,
    TextureId::DialogFrame,
];

/// A heading with a smaller line under it
struct LabelPair {
    top: String,
    bottom: String,
    at: Vec2,
    top_size: f32,
    bottom_size: f32,
}

impl LabelPair {
    fn draw(&self, ctx: &mut RenderContext, color: Rgba) {
        let gap = self.bottom_size * 0.25;
        let below = Vec2::new(self.at.x, self.at.y + self.top_size + gap);
        ctx.print_line(&self.top, TextAlign::Center, self.at, self.top_size, color);
        ctx.print_line(&self.bottom, TextAlign::Center, below, self.bottom_size, color);
    }
}

struct AboutLayout {
    header: Header,
    pairs: Vec<LabelPair>,
    contributors_title: String,
    contributors_at: Vec2,
    medium: f32,
    small: f32,
}

impl AboutLayout {
    fn build(ctx: &RenderContext) -> Option<Self> {
        if ctx.font().is_none() || !ctx.has_textures(&REQUIRED_TEXTURES) {
            return None;
        }
        let [title, thanks, project, contribute, learn, link, contributors_title] = lookup_all(
            ctx,
            [
                "GEN_ABOUT",
                "ABT_THANKS",
                "ABT_PROJECT",
                "ABT_CONTRIBUTE",
                "ABT_LEARN",
                "ABT_LINK",
                "ABT_CONTRIBUTORS",
            ],
        )?;

        let screen = ctx.screen_size();
        let large = font_size::LARGE * screen.y;
        let medium = font_size::MEDIUM * screen.y;
        let small = font_size::SMALL * screen.y;
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));

        let pair = |top: String, bottom: String, y: f32, top_size: f32, bottom_size: f32| {
            LabelPair {
                top,
                bottom,
                at: to_screen(Vec2::new(0.5, y), screen),
                top_size,
                bottom_size,
            }
        };

        Some(Self {
            header: Header::new(ctx, TextureId::HeaderAbout, title, version),
            pairs: vec![
                pair(thanks, project, 0.18, large, medium),
                pair(contribute, link.clone(), 0.32, medium, small),
                pair(learn, link, 0.9, medium, small),
            ],
            contributors_title,
            contributors_at: to_screen(Vec2::new(0.5, 0.45), screen),
            medium,
            small,
        })
    }
}

/// Credits page; back closes it
pub struct AboutMenu {
    previous: Option<WindowId>,
    contributors: Vec<String>,
    layout: Option<AboutLayout>,
}

impl AboutMenu {
    /// Create the page; it stays inert if the context is incomplete
    pub fn new(ctx: &RenderContext, previous: Option<WindowId>) -> Self {
        Self {
            previous,
            contributors: Vec::new(),
            layout: AboutLayout::build(ctx),
        }
    }

    /// Names listed under the contributors heading (builder pattern)
    pub fn with_contributors(mut self, names: Vec<String>) -> Self {
        self.contributors = names;
        self
    }
}

impl MenuBehavior for AboutMenu {
    fn name(&self) -> &'static str {
        "about"
    }

    fn previous_id(&self) -> Option<WindowId> {
        self.previous
    }

    fn draw(&mut self, frame: &mut DrawFrame<'_>) {
        let Some(layout) = &self.layout else {
            return;
        };
        let color = frame.color(MENU_RGB);
        let ctx = frame.ctx();

        draw_background(ctx);
        layout.header.draw(ctx, color);
        for pair in &layout.pairs {
            pair.draw(ctx, color);
        }

        let mut at = layout.contributors_at;
        ctx.print_line(&layout.contributors_title, TextAlign::Center, at, layout.medium, color);
        at.y += layout.medium * 1.25;
        for name in &self.contributors {
            ctx.print_line(name, TextAlign::Center, at, layout.small, color);
            at.y += layout.small * 1.25;
        }
    }

    fn handle_pad(&mut self, _port: u32, pad: PadState, nav: &mut Navigator<'_>) {
        if self.layout.is_none() {
            return;
        }

        if pad.back() {
            nav.close_self();
        }
    }

    fn is_ready(&self) -> bool {
        self.layout.is_some()
    }
}
