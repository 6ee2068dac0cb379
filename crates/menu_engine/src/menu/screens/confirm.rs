//! Yes/no prompt drawn over its opener

use super::{font_size, lookup_all, MENU_RGB};
use crate::foundation::math::{to_screen, Vec2};
use crate::menu::{DrawFrame, MenuBehavior, Navigator, PadState, WindowId};
use crate::render::{DrawRegion, RenderContext, TextAlign, TextureId};

/// Runs when the prompt is accepted, before the dialog closes
pub type ConfirmAction = Box<dyn FnOnce(&mut Navigator<'_>)>;

struct DialogLayout {
    frame: DrawRegion,
    prompt: String,
    subject: String,
    hint: String,
    prompt_at: Vec2,
    subject_at: Vec2,
    hint_at: Vec2,
    medium: f32,
    small: f32,
}

impl DialogLayout {
    fn build(ctx: &RenderContext, prompt_key: &str, subject: String) -> Option<Self> {
        if ctx.font().is_none() || !ctx.has_textures(&[TextureId::DialogFrame]) {
            return None;
        }
        let [prompt, confirm, cancel] = lookup_all(ctx, [prompt_key, "GEN_CONFIRM", "GEN_CANCEL"])?;

        let screen = ctx.screen_size();
        Some(Self {
            frame: DrawRegion::new(
                to_screen(Vec2::new(0.5, 0.5), screen),
                to_screen(Vec2::new(0.5, 0.3), screen),
            ),
            prompt,
            subject,
            hint: format!("{confirm} / {cancel}"),
            prompt_at: to_screen(Vec2::new(0.5, 0.42), screen),
            subject_at: to_screen(Vec2::new(0.5, 0.5), screen),
            hint_at: to_screen(Vec2::new(0.5, 0.6), screen),
            medium: font_size::MEDIUM * screen.y,
            small: font_size::SMALL * screen.y,
        })
    }
}

/// Overlay asking the user to accept or cancel
pub struct ConfirmDialog {
    previous: Option<WindowId>,
    on_confirm: Option<ConfirmAction>,
    layout: Option<DialogLayout>,
}

impl ConfirmDialog {
    /// Create a dialog showing the localized `prompt_key` and a subject line
    pub fn new(
        ctx: &RenderContext,
        previous: Option<WindowId>,
        prompt_key: &str,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            previous,
            on_confirm: None,
            layout: DialogLayout::build(ctx, prompt_key, subject.into()),
        }
    }

    /// Action run when the prompt is accepted (builder pattern)
    pub fn on_confirm(mut self, action: impl FnOnce(&mut Navigator<'_>) + 'static) -> Self {
        self.on_confirm = Some(Box::new(action));
        self
    }
}

impl MenuBehavior for ConfirmDialog {
    fn name(&self) -> &'static str {
        "confirm"
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

        ctx.draw_texture(TextureId::DialogFrame, layout.frame, color);
        ctx.print_line(&layout.prompt, TextAlign::Center, layout.prompt_at, layout.medium, color);
        ctx.print_line(&layout.subject, TextAlign::Center, layout.subject_at, layout.medium, color);
        ctx.print_line(&layout.hint, TextAlign::Center, layout.hint_at, layout.small, color);
    }

    fn handle_pad(&mut self, _port: u32, pad: PadState, nav: &mut Navigator<'_>) {
        if self.layout.is_none() {
            return;
        }

        if pad.confirm() {
            if let Some(action) = self.on_confirm.take() {
                action(nav);
            }
            nav.close_self();
        } else if pad.back() {
            nav.close_self();
        }
    }

    fn is_submenu(&self) -> bool {
        true
    }

    fn is_ready(&self) -> bool {
        self.layout.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{WindowManager, WindowState, MENU_ANIMATION_DURATION};
    use crate::render::testing::{full_context, DrawLog};
    use std::cell::Cell;
    use std::rc::Rc;

    const D: f32 = MENU_ANIMATION_DURATION;

    fn open_dialog(manager: &mut WindowManager, dialog: ConfirmDialog) -> WindowId {
        let id = manager.add_window(Box::new(dialog));
        manager.open_window(id).unwrap();
        manager.tick(D);
        id
    }

    #[test]
    fn test_confirm_runs_action_once_and_closes() {
        let log = DrawLog::default();
        let ctx = full_context(&log);
        let mut manager = WindowManager::default();
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let dialog = ConfirmDialog::new(&ctx, None, "DLG_LOAD_CHEATS", "Game")
            .on_confirm(move |_| counter.set(counter.get() + 1));
        let id = open_dialog(&mut manager, dialog);

        manager.dispatch_pad(0, PadState::CROSS, &ctx);
        assert_eq!(runs.get(), 1);
        assert_eq!(manager.state(id), Some(WindowState::Closing));
    }

    #[test]
    fn test_back_closes_without_action() {
        let log = DrawLog::default();
        let ctx = full_context(&log);
        let mut manager = WindowManager::default();
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let dialog = ConfirmDialog::new(&ctx, None, "DLG_LOAD_CHEATS", "Game")
            .on_confirm(move |_| counter.set(counter.get() + 1));
        let id = open_dialog(&mut manager, dialog);

        manager.dispatch_pad(0, PadState::CIRCLE, &ctx);
        assert_eq!(runs.get(), 0);
        assert_eq!(manager.state(id), Some(WindowState::Closing));
    }

    #[test]
    fn test_unknown_prompt_disables_dialog() {
        let log = DrawLog::default();
        let ctx = full_context(&log);
        let dialog = ConfirmDialog::new(&ctx, None, "NO_SUCH_KEY", "Game");
        assert!(!dialog.is_ready());
        assert!(dialog.is_submenu());
    }

    #[test]
    fn test_draws_over_opener() {
        let log = DrawLog::default();
        let mut ctx = full_context(&log);
        let mut manager = WindowManager::default();
        let about = crate::menu::screens::AboutMenu::new(&ctx, None);
        let parent = manager.add_window(Box::new(about));
        manager.open_window(parent).unwrap();
        manager.tick(D);
        let dialog = ConfirmDialog::new(&ctx, Some(parent), "DLG_LOAD_CHEATS", "Game");
        let dialog = open_dialog(&mut manager, dialog);

        assert_eq!(manager.draw_chain(&mut ctx, 0.0), vec![parent, dialog]);
        let texts = log.texts();
        assert_eq!(texts.last().map(String::as_str), Some("Confirm / Cancel"));
    }
}
