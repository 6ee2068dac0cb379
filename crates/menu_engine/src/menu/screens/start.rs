//! Title screen
//!
//! A row of icons navigated with left/right. Confirm opens the screen bound
//! to the highlighted icon.

use super::{
    draw_background, font_size, lookup_all, Cursor, MENU_RGB, MENU_SELECTED, MENU_UNSELECTED,
};
use crate::foundation::math::{to_screen, Vec2};
use crate::menu::screens::{AboutMenu, GameListMenu};
use crate::menu::{DrawFrame, MenuBehavior, Navigator, PadState, WindowId, WindowState};
use crate::render::{DrawRegion, RenderContext, Rgba, TextAlign, TextureId};

/// Icons on the title screen, in row order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartItem {
    /// Return to the system menu
    Launch,
    /// Browse games to pick cheats for
    Cheats,
    /// Settings
    Options,
    /// Credits
    About,
}

impl StartItem {
    /// Row order
    pub const ALL: [Self; 4] = [Self::Launch, Self::Cheats, Self::Options, Self::About];

    const fn texture(self) -> TextureId {
        match self {
            Self::Launch => TextureId::IconLaunch,
            Self::Cheats => TextureId::IconCheats,
            Self::Options => TextureId::IconOptions,
            Self::About => TextureId::IconAbout,
        }
    }

    const fn label_key(self) -> &'static str {
        match self {
            Self::Launch => "GEN_LAUNCH",
            Self::Cheats => "GEN_CHEATS",
            Self::Options => "GEN_OPTIONS",
            Self::About => "GEN_ABOUT",
        }
    }
}

const REQUIRED_TEXTURES: [TextureId; 8] = [
    TextureId::Background,
    TextureId::TitleLogo,
    TextureId::TitleLabel,
    TextureId::TitleLink,
    TextureId::IconLaunch,
    TextureId::IconCheats,
    TextureId::IconOptions,
    TextureId::IconAbout,
];

struct Icon {
    texture: TextureId,
    label: String,
    region: DrawRegion,
    label_at: Vec2,
}

struct StartLayout {
    logo: DrawRegion,
    label: DrawRegion,
    link: DrawRegion,
    icons: Vec<Icon>,
    icon_font: f32,
}

impl StartLayout {
    fn build(ctx: &RenderContext) -> Option<Self> {
        if ctx.font().is_none() || !ctx.has_textures(&REQUIRED_TEXTURES) {
            return None;
        }
        let labels = lookup_all(ctx, StartItem::ALL.map(StartItem::label_key))?;

        let screen = ctx.screen_size();
        let icon_size = to_screen(Vec2::new(0.09, 0.075), screen);
        let logo = DrawRegion::new(
            to_screen(Vec2::new(0.5, 0.25), screen),
            to_screen(Vec2::new(0.6, 0.1), screen),
        );
        let label = DrawRegion::new(
            Vec2::new(screen.x * 0.5, logo.location.y + logo.dimension.y * 0.5 + screen.y * 0.03),
            to_screen(Vec2::new(0.42, 0.025), screen),
        );

        let icons = StartItem::ALL
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(slot, (item, label))| {
                let x = 0.3 + 0.4 * slot as f32 / 3.0;
                let center = to_screen(Vec2::new(x, 0.6), screen);
                Icon {
                    texture: item.texture(),
                    label,
                    region: DrawRegion::new(center, icon_size),
                    label_at: Vec2::new(center.x, center.y + icon_size.y * 0.75),
                }
            })
            .collect();

        Some(Self {
            logo,
            label,
            link: DrawRegion::new(
                to_screen(Vec2::new(0.5, 0.96), screen),
                to_screen(Vec2::new(0.3, 0.02), screen),
            ),
            icons,
            icon_font: font_size::MEDIUM * screen.y,
        })
    }
}

/// Title screen with a wrapping icon row
pub struct StartMenu {
    previous: Option<WindowId>,
    cursor: Cursor,
    games: Vec<String>,
    layout: Option<StartLayout>,
}

impl StartMenu {
    /// Create the screen; it stays inert if the context is incomplete
    pub fn new(ctx: &RenderContext, previous: Option<WindowId>) -> Self {
        Self {
            previous,
            cursor: Cursor::new(StartItem::ALL.len()),
            games: Vec::new(),
            layout: StartLayout::build(ctx),
        }
    }

    /// Titles listed when the cheats icon is confirmed (builder pattern)
    pub fn with_games(mut self, games: Vec<String>) -> Self {
        self.games = games;
        self
    }

    /// Highlighted icon index
    pub const fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    /// Highlighted icon
    pub const fn selected(&self) -> StartItem {
        StartItem::ALL[self.cursor.index()]
    }

    fn activate(&self, nav: &mut Navigator<'_>) {
        let parent = Some(nav.window_id());
        let child: Box<dyn MenuBehavior> = match self.selected() {
            StartItem::Cheats => Box::new(GameListMenu::new(nav.ctx(), parent, self.games.clone())),
            StartItem::About => Box::new(AboutMenu::new(nav.ctx(), parent)),
            StartItem::Launch | StartItem::Options => return,
        };
        nav.open_new(child);
    }
}

impl MenuBehavior for StartMenu {
    fn name(&self) -> &'static str {
        "start"
    }

    fn previous_id(&self) -> Option<WindowId> {
        self.previous
    }

    fn draw(&mut self, frame: &mut DrawFrame<'_>) {
        let Some(layout) = &self.layout else {
            return;
        };
        let alpha = frame.alpha();
        let color = frame.color(MENU_RGB);
        let selected = self.cursor.index();
        let ctx = frame.ctx();

        draw_background(ctx);
        ctx.draw_texture(TextureId::TitleLogo, layout.logo, color);
        ctx.draw_texture(TextureId::TitleLabel, layout.label, color);

        for (slot, icon) in layout.icons.iter().enumerate() {
            let emphasis = if slot == selected { MENU_SELECTED } else { MENU_UNSELECTED };
            let icon_color = Rgba::scaled_alpha(MENU_RGB, alpha, emphasis);
            ctx.draw_texture(icon.texture, icon.region, icon_color);
            ctx.print_line(
                &icon.label,
                TextAlign::Center,
                icon.label_at,
                layout.icon_font,
                icon_color,
            );
        }

        ctx.draw_texture(TextureId::TitleLink, layout.link, color);
    }

    fn handle_pad(&mut self, _port: u32, pad: PadState, nav: &mut Navigator<'_>) {
        if self.layout.is_none() {
            return;
        }

        if pad.left_only() {
            self.cursor.step_back();
        } else if pad.right_only() {
            self.cursor.step_forward();
        } else if pad.confirm() && nav.state() == WindowState::Active {
            self.activate(nav);
        }
    }

    fn is_ready(&self) -> bool {
        self.layout.is_some()
    }
}
