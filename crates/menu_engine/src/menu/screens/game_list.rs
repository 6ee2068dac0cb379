//! Game picker
//!
//! Up/down walk the list, confirm asks before loading cheats for the title.

use super::{
    draw_background, font_size, lookup_all, ConfirmDialog, Cursor, Header, MENU_RGB,
    MENU_SELECTED, MENU_UNSELECTED,
};
use crate::foundation::math::{to_screen, Vec2};
use crate::menu::{DrawFrame, MenuBehavior, Navigator, PadState, WindowId, WindowState};
use crate::render::{RenderContext, Rgba, TextAlign, TextureId};

/// Rows shown at once
pub const VISIBLE_ROWS: usize = 8;

const REQUIRED_TEXTURES: [TextureId; 3] = [
    TextureId::Background,
    TextureId::HeaderGames,
    TextureId::DialogFrame,
];

struct ListLayout {
    header: Header,
    empty: String,
    first_row: Vec2,
    row_height: f32,
    row_font: f32,
}

impl ListLayout {
    fn build(ctx: &RenderContext, count: usize) -> Option<Self> {
        if ctx.font().is_none() || !ctx.has_textures(&REQUIRED_TEXTURES) {
            return None;
        }
        let [title, empty] = lookup_all(ctx, ["GEN_GAMES", "GAM_EMPTY"])?;

        let screen = ctx.screen_size();
        let row_font = font_size::MEDIUM * screen.y;
        Some(Self {
            header: Header::new(ctx, TextureId::HeaderGames, title, count.to_string()),
            empty,
            first_row: to_screen(Vec2::new(0.12, 0.2), screen),
            row_height: row_font * 1.6,
            row_font,
        })
    }
}

/// Scrolling list of game titles
pub struct GameListMenu {
    previous: Option<WindowId>,
    titles: Vec<String>,
    cursor: Cursor,
    layout: Option<ListLayout>,
}

impl GameListMenu {
    /// Create the list; it stays inert if the context is incomplete
    pub fn new(ctx: &RenderContext, previous: Option<WindowId>, titles: Vec<String>) -> Self {
        Self {
            previous,
            cursor: Cursor::new(titles.len()),
            layout: ListLayout::build(ctx, titles.len()),
            titles,
        }
    }

    /// Highlighted title, if the list is not empty
    pub fn selected(&self) -> Option<&str> {
        self.titles.get(self.cursor.index()).map(String::as_str)
    }

    /// First row shown so the cursor stays on screen
    fn scroll_offset(&self) -> usize {
        let index = self.cursor.index();
        let max_offset = self.titles.len().saturating_sub(VISIBLE_ROWS);
        index.saturating_sub(VISIBLE_ROWS / 2).min(max_offset)
    }

    fn confirm_selected(&self, nav: &mut Navigator<'_>) {
        let Some(title) = self.selected() else {
            return;
        };

        let chosen = title.to_string();
        let dialog = ConfirmDialog::new(nav.ctx(), Some(nav.window_id()), "DLG_LOAD_CHEATS", title)
            .on_confirm(move |_| log::info!("Loading cheats for {chosen}"));
        nav.open_new(Box::new(dialog));
    }
}

impl MenuBehavior for GameListMenu {
    fn name(&self) -> &'static str {
        "game_list"
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
        let offset = self.scroll_offset();
        let selected = self.cursor.index();
        let ctx = frame.ctx();

        draw_background(ctx);
        layout.header.draw(ctx, color);

        if self.titles.is_empty() {
            ctx.print_line(
                &layout.empty,
                TextAlign::Left,
                layout.first_row,
                layout.row_font,
                color,
            );
            return;
        }

        let rows = self.titles.iter().enumerate().skip(offset).take(VISIBLE_ROWS);
        for (row, (index, title)) in rows.enumerate() {
            let emphasis = if index == selected { MENU_SELECTED } else { MENU_UNSELECTED };
            let y = layout.first_row.y + row as f32 * layout.row_height;
            let at = Vec2::new(layout.first_row.x, y);
            let row_color = Rgba::scaled_alpha(MENU_RGB, alpha, emphasis);
            ctx.print_line(title, TextAlign::Left, at, layout.row_font, row_color);
        }
    }

    fn handle_pad(&mut self, _port: u32, pad: PadState, nav: &mut Navigator<'_>) {
        if self.layout.is_none() {
            return;
        }

        if pad.up_only() {
            self.cursor.step_back();
        } else if pad.down_only() {
            self.cursor.step_forward();
        } else if pad.confirm() && nav.state() == WindowState::Active {
            self.confirm_selected(nav);
        } else if pad.back() {
            nav.close_self();
        }
    }

    fn is_ready(&self) -> bool {
        self.layout.is_some()
    }
}
