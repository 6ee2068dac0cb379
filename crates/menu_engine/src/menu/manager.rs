//! Window Manager
//!
//! Owns every registered window, advances their fades, decides which ones
//! are drawn and which one receives input.

use thiserror::Error;

use super::behavior::{MenuBehavior, NavRequest, Navigator};
use super::{PadState, Window, WindowId, WindowState, MENU_ANIMATION_DURATION};
use crate::config::MenuConfig;
use crate::events::{Event, EventArg, EventSystem, EventType};
use crate::render::RenderContext;

/// Navigation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// The id is not (or no longer) registered; nothing was changed
    #[error("Window {0} is not registered")]
    NotFound(WindowId),
}

/// Central window management system
///
/// Focus follows the most recent successful `open_window` and falls back to
/// the closed window's opener when a window is destroyed. Input is only
/// delivered while the focused window is `Active`, so a window that is still
/// fading in, or the opener it covers, never sees pad input.
pub struct WindowManager {
    /// Registered windows in insertion order
    windows: Vec<Window>,

    /// Next window id, never reused
    next_id: u64,

    /// Window that receives input once it is Active
    focus: Option<WindowId>,

    /// Fade length in seconds
    animation_duration: f32,

    /// Accumulated tick time, used to stamp events
    clock: f64,

    /// Lifecycle notifications
    events: EventSystem,

    /// Requests queued by a behavior during input handling
    requests: Vec<NavRequest>,
}

impl WindowManager {
    /// Create a manager with a given fade length
    pub fn new(animation_duration: f32) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 0,
            focus: None,
            animation_duration,
            clock: 0.0,
            events: EventSystem::new(),
            requests: Vec::new(),
        }
    }

    /// Create a manager from configuration
    pub fn from_config(config: &MenuConfig) -> Self {
        Self::new(config.animation_duration)
    }

    /// Register a window and return its id. Visibility is unchanged.
    pub fn add_window(&mut self, behavior: Box<dyn MenuBehavior>) -> WindowId {
        let id = self.allocate_id();
        self.insert(id, behavior);
        id
    }

    /// Start fading a window in and make it the focus target
    ///
    /// A window that is closing resumes fading in from its current opacity.
    /// Opening or Active windows are left alone.
    pub fn open_window(&mut self, id: WindowId) -> Result<(), WindowError> {
        let duration = self.animation_duration;
        let window = self.window_mut(id)?;
        if !window.animation_mut().begin_open(duration) {
            log::debug!("Window {id} already visible, open ignored");
            return Ok(());
        }

        log::debug!("Window {id} opening");
        self.emit(EventType::WindowOpening, id, WindowState::Opening);
        self.set_focus(Some(id));
        Ok(())
    }

    /// Start fading a window out; it is destroyed once the fade completes
    ///
    /// Windows that are already closing or were never opened are left alone.
    pub fn close_window(&mut self, id: WindowId) -> Result<(), WindowError> {
        let duration = self.animation_duration;
        let window = self.window_mut(id)?;
        if !window.animation_mut().begin_close(duration) {
            log::debug!("Window {id} not visible, close ignored");
            return Ok(());
        }

        log::debug!("Window {id} closing");
        self.emit(EventType::WindowClosing, id, WindowState::Closing);
        Ok(())
    }

    /// Advance every window's fade and destroy windows that finished closing
    pub fn tick(&mut self, delta_time: f32) {
        self.clock += f64::from(delta_time.max(0.0));
        let duration = self.animation_duration;

        let mut transitions = Vec::new();
        for window in &mut self.windows {
            if let Some(state) = window.animation_mut().advance(delta_time, duration) {
                transitions.push((window.id(), state));
            }
        }

        for (id, state) in transitions {
            match state {
                WindowState::Active => {
                    log::info!("Window {id} active");
                    self.emit(EventType::WindowActivated, id, state);
                }
                WindowState::Inactive => self.remove(id),
                WindowState::Opening | WindowState::Closing => {}
            }
        }
    }

    /// Deliver one pad sample to the focused window
    ///
    /// Returns whether a window received it. Requests the behavior made are
    /// applied before this returns.
    pub fn dispatch_pad(&mut self, port: u32, pad: PadState, ctx: &RenderContext) -> bool {
        let Some(id) = self.focused() else {
            return false;
        };
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let window = &mut self.windows[index];
        let mut nav =
            Navigator::new(id, window.state(), ctx, &mut self.next_id, &mut self.requests);
        window.behavior_mut().handle_pad(port, pad, &mut nav);

        self.apply_requests();
        true
    }

    /// Draw the visible chain, deepest ancestor first
    ///
    /// Returns the ids in the order they were drawn.
    pub fn draw_chain(&mut self, ctx: &mut RenderContext, delta_time: f32) -> Vec<WindowId> {
        let chain = self.visible_chain();
        let duration = self.animation_duration;

        for id in &chain {
            if let Some(index) = self.index_of(*id) {
                self.windows[index].draw(ctx, delta_time, duration);
            }
        }

        log::trace!("Drew {} window(s)", chain.len());
        chain
    }

    /// Windows that would be drawn this frame, deepest ancestor first
    ///
    /// Starts at the focus target and keeps adding openers while the window
    /// above them is a submenu. Inactive windows are skipped.
    pub fn visible_chain(&self) -> Vec<WindowId> {
        let mut chain = Vec::new();
        let Some(mut current) = self.focus.and_then(|id| self.get(id)) else {
            return chain;
        };

        loop {
            if current.state() != WindowState::Inactive {
                chain.push(current.id());
            }

            // A malformed previous_id loop must not spin forever
            if !current.is_submenu() || chain.len() > self.windows.len() {
                break;
            }
            match current.previous_id().and_then(|prev| self.get(prev)) {
                Some(opener) if !chain.contains(&opener.id()) => current = opener,
                _ => break,
            }
        }

        chain.reverse();
        chain
    }

    /// Window that receives input this frame, if any
    pub fn focused(&self) -> Option<WindowId> {
        self.focus
            .filter(|id| self.state(*id) == Some(WindowState::Active))
    }

    /// Window that will receive input once it is Active
    pub const fn focus_target(&self) -> Option<WindowId> {
        self.focus
    }

    /// Look up a registered window
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    /// Whether an id is registered
    pub fn contains(&self, id: WindowId) -> bool {
        self.index_of(id).is_some()
    }

    /// State of a registered window
    pub fn state(&self, id: WindowId) -> Option<WindowState> {
        self.get(id).map(Window::state)
    }

    /// Registered ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.iter().map(Window::id)
    }

    /// Registered windows in insertion order
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Number of registered windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no window is registered
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Fade length in seconds
    pub const fn animation_duration(&self) -> f32 {
        self.animation_duration
    }

    /// Event system reference
    pub const fn events(&self) -> &EventSystem {
        &self.events
    }

    /// Event system mutable reference, for registering handlers
    pub fn events_mut(&mut self) -> &mut EventSystem {
        &mut self.events
    }

    /// Deliver queued lifecycle events
    pub fn dispatch_events(&mut self) {
        self.events.dispatch();
    }

    fn allocate_id(&mut self) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, id: WindowId, behavior: Box<dyn MenuBehavior>) {
        let window = Window::new(id, behavior);
        log::info!(
            "Added window {id} ({}), opened from {:?}",
            window.behavior().name(),
            window.previous_id()
        );
        if !window.behavior().is_ready() {
            log::warn!(
                "Window {id} ({}) is missing resources and will not respond",
                window.behavior().name()
            );
        }

        let mut event = Event::new(EventType::WindowAdded, self.clock)
            .with_arg("window_id", EventArg::Window(id))
            .with_arg("state", EventArg::State(window.state()));
        if let Some(previous) = window.previous_id() {
            event = event.with_arg("previous_id", EventArg::Window(previous));
        }
        self.events.send(event);

        self.windows.push(window);
    }

    fn remove(&mut self, id: WindowId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let window = self.windows.remove(index);
        let previous = window.previous_id();
        log::info!("Removed window {id} ({})", window.behavior().name());
        drop(window);

        let mut event = Event::new(EventType::WindowRemoved, self.clock)
            .with_arg("window_id", EventArg::Window(id))
            .with_arg("state", EventArg::State(WindowState::Inactive));
        if let Some(previous) = previous {
            event = event.with_arg("previous_id", EventArg::Window(previous));
        }
        self.events.send(event);

        if self.focus == Some(id) {
            let restored = previous.filter(|prev| self.contains(*prev));
            self.set_focus(restored);
        }
    }

    fn set_focus(&mut self, focus: Option<WindowId>) {
        if self.focus == focus {
            return;
        }
        log::debug!("Focus {:?} -> {:?}", self.focus, focus);
        self.focus = focus;

        let mut event = Event::new(EventType::FocusChanged, self.clock);
        if let Some(id) = focus {
            event = event.with_arg("window_id", EventArg::Window(id));
            if let Some(state) = self.state(id) {
                event = event.with_arg("state", EventArg::State(state));
            }
        }
        self.events.send(event);
    }

    fn apply_requests(&mut self) {
        for request in std::mem::take(&mut self.requests) {
            let result = match request {
                NavRequest::Add(id, behavior) => {
                    self.insert(id, behavior);
                    Ok(())
                }
                NavRequest::Open(id) => self.open_window(id),
                NavRequest::Close(id) => self.close_window(id),
            };
            if let Err(err) = result {
                log::warn!("Dropped navigation request: {err}");
            }
        }
    }

    fn emit(&mut self, event_type: EventType, id: WindowId, state: WindowState) {
        self.events.send(
            Event::new(event_type, self.clock)
                .with_arg("window_id", EventArg::Window(id))
                .with_arg("state", EventArg::State(state)),
        );
    }

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id() == id)
    }

    fn window_mut(&mut self, id: WindowId) -> Result<&mut Window, WindowError> {
        self.windows
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or(WindowError::NotFound(id))
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(MENU_ANIMATION_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventHandler;
    use std::cell::RefCell;
    use std::rc::Rc;

    const D: f32 = MENU_ANIMATION_DURATION;

    type Action = Box<dyn FnMut(PadState, &mut Navigator<'_>)>;

    /// Behavior that records what reaches it
    struct Probe {
        label: &'static str,
        previous: Option<WindowId>,
        submenu: bool,
        log: Rc<RefCell<Vec<String>>>,
        on_pad: Option<Action>,
    }

    impl Probe {
        fn new(
            label: &'static str,
            previous: Option<WindowId>,
            log: &Rc<RefCell<Vec<String>>>,
        ) -> Self {
            Self { label, previous, submenu: false, log: log.clone(), on_pad: None }
        }

        fn submenu(mut self) -> Self {
            self.submenu = true;
            self
        }

        fn on_pad(mut self, action: impl FnMut(PadState, &mut Navigator<'_>) + 'static) -> Self {
            self.on_pad = Some(Box::new(action));
            self
        }
    }

    impl MenuBehavior for Probe {
        fn name(&self) -> &'static str {
            self.label
        }

        fn previous_id(&self) -> Option<WindowId> {
            self.previous
        }

        fn draw(&mut self, frame: &mut crate::menu::DrawFrame<'_>) {
            self.log.borrow_mut().push(format!("draw {} {}", self.label, frame.alpha()));
        }

        fn handle_pad(&mut self, port: u32, pad: PadState, nav: &mut Navigator<'_>) {
            self.log.borrow_mut().push(format!("pad {} {port}", self.label));
            if let Some(action) = self.on_pad.as_mut() {
                action(pad, nav);
            }
        }

        fn is_submenu(&self) -> bool {
            self.submenu
        }
    }

    fn ctx() -> RenderContext {
        RenderContext::new((640.0, 480.0))
    }

    fn log() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn open_active(manager: &mut WindowManager, behavior: Probe) -> WindowId {
        let id = manager.add_window(Box::new(behavior));
        manager.open_window(id).unwrap();
        manager.tick(D);
        id
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let log = log();
        let mut manager = WindowManager::default();
        let a = manager.add_window(Box::new(Probe::new("a", None, &log)));
        let b = manager.add_window(Box::new(Probe::new("b", None, &log)));
        assert!(b > a);

        manager.open_window(b).unwrap();
        manager.close_window(b).unwrap();
        manager.tick(D);
        assert!(!manager.contains(b));

        let c = manager.add_window(Box::new(Probe::new("c", None, &log)));
        assert!(c > b);
        assert_eq!(manager.ids().collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn test_add_does_not_change_visibility() {
        let log = log();
        let mut manager = WindowManager::default();
        let id = manager.add_window(Box::new(Probe::new("a", None, &log)));
        assert_eq!(manager.state(id), Some(WindowState::Inactive));
        assert_eq!(manager.focus_target(), None);
        manager.tick(1.0);
        assert_eq!(manager.state(id), Some(WindowState::Inactive));
        assert!(manager.contains(id));
    }

    #[test]
    fn test_round_trip_open_then_close() {
        let log = log();
        let mut manager = WindowManager::default();
        let id = manager.add_window(Box::new(Probe::new("a", None, &log)));

        manager.open_window(id).unwrap();
        assert_eq!(manager.state(id), Some(WindowState::Opening));
        manager.tick(D);
        assert_eq!(manager.state(id), Some(WindowState::Active));
        assert_eq!(manager.get(id).unwrap().animation_elapsed(), 0.0);

        manager.close_window(id).unwrap();
        assert_eq!(manager.state(id), Some(WindowState::Closing));
        manager.tick(D);
        assert!(!manager.contains(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let mut manager = WindowManager::default();
        assert_eq!(manager.open_window(WindowId(9)), Err(WindowError::NotFound(WindowId(9))));
        assert_eq!(manager.close_window(WindowId(9)), Err(WindowError::NotFound(WindowId(9))));
        assert_eq!(manager.focus_target(), None);
    }

    #[test]
    fn test_states_only_follow_the_cycle() {
        let log = log();
        let mut manager = WindowManager::default();
        let id = manager.add_window(Box::new(Probe::new("a", None, &log)));

        // Closing an inactive window is a no-op
        manager.close_window(id).unwrap();
        assert_eq!(manager.state(id), Some(WindowState::Inactive));

        manager.open_window(id).unwrap();
        let mut seen = vec![manager.state(id).unwrap()];
        for _ in 0..20 {
            manager.tick(D / 7.0);
            let state = manager.state(id).unwrap();
            if seen.last() != Some(&state) {
                seen.push(state);
            }
        }
        // Active holds until asked to close
        assert_eq!(seen, vec![WindowState::Opening, WindowState::Active]);

        manager.open_window(id).unwrap();
        assert_eq!(manager.state(id), Some(WindowState::Active));
    }

    #[test]
    fn test_reopen_while_closing_cancels_removal() {
        let log = log();
        let mut manager = WindowManager::default();
        let id = open_active(&mut manager, Probe::new("a", None, &log));

        manager.close_window(id).unwrap();
        manager.tick(D * 0.5);
        manager.open_window(id).unwrap();
        assert_eq!(manager.state(id), Some(WindowState::Opening));
        let alpha = manager.get(id).unwrap().opacity(D);
        assert!((126..=129).contains(&alpha), "alpha {alpha}");

        manager.tick(D);
        assert_eq!(manager.state(id), Some(WindowState::Active));
    }

    #[test]
    fn test_input_only_reaches_active_focus() {
        let log = log();
        let mut manager = WindowManager::default();
        let ctx = ctx();
        let id = manager.add_window(Box::new(Probe::new("a", None, &log)));

        assert!(!manager.dispatch_pad(0, PadState::CROSS, &ctx));
        manager.open_window(id).unwrap();
        assert!(!manager.dispatch_pad(0, PadState::CROSS, &ctx));
        assert_eq!(manager.focused(), None);

        manager.tick(D);
        assert_eq!(manager.focused(), Some(id));
        assert!(manager.dispatch_pad(1, PadState::CROSS, &ctx));
        assert_eq!(*log.borrow(), vec!["pad a 1".to_string()]);

        manager.close_window(id).unwrap();
        assert!(!manager.dispatch_pad(0, PadState::CROSS, &ctx));
    }

    #[test]
    fn test_child_covers_parent_then_restores_it() {
        let log = log();
        let mut manager = WindowManager::default();
        let ctx = ctx();
        let parent = open_active(&mut manager, Probe::new("parent", None, &log));

        let child = manager.add_window(Box::new(Probe::new("child", Some(parent), &log)));
        manager.open_window(child).unwrap();

        // Parent is covered while the child fades in
        assert_eq!(manager.focused(), None);
        assert!(!manager.dispatch_pad(0, PadState::CROSS, &ctx));
        manager.tick(D);
        assert_eq!(manager.focused(), Some(child));

        manager.close_window(child).unwrap();
        manager.tick(D);
        assert!(!manager.contains(child));
        assert_eq!(manager.state(parent), Some(WindowState::Active));
        assert_eq!(manager.focused(), Some(parent));
        assert!(manager.dispatch_pad(0, PadState::empty(), &ctx));
    }

    #[test]
    fn test_closing_root_leaves_nothing_focused() {
        let log = log();
        let mut manager = WindowManager::default();
        let root = open_active(&mut manager, Probe::new("root", None, &log));
        let other = open_active(&mut manager, Probe::new("other", None, &log));
        assert_eq!(manager.focused(), Some(other));

        manager.close_window(other).unwrap();
        manager.tick(D);
        assert_eq!(manager.focused(), None);
        assert_eq!(manager.focus_target(), None);
        assert!(manager.contains(root));
    }

    #[test]
    fn test_closing_child_of_removed_parent_leaves_nothing_focused() {
        let log = log();
        let mut manager = WindowManager::default();
        let parent = open_active(&mut manager, Probe::new("parent", None, &log));
        let child = open_active(&mut manager, Probe::new("child", Some(parent), &log));

        manager.close_window(parent).unwrap();
        manager.tick(D);
        assert!(!manager.contains(parent));
        assert_eq!(manager.focused(), Some(child));

        manager.close_window(child).unwrap();
        manager.tick(D);
        assert_eq!(manager.focused(), None);
        assert!(manager.is_empty());
    }

    #[test]
    fn test_submenu_chain_draws_parent_first() {
        let log = log();
        let mut manager = WindowManager::default();
        let mut ctx = ctx();
        let a = open_active(&mut manager, Probe::new("a", None, &log));
        let b = open_active(&mut manager, Probe::new("b", Some(a), &log).submenu());

        let drawn = manager.draw_chain(&mut ctx, 0.016);
        assert_eq!(drawn, vec![a, b]);
        assert_eq!(*log.borrow(), vec!["draw a 255".to_string(), "draw b 255".to_string()]);
    }

    #[test]
    fn test_non_submenu_replaces_chain() {
        let log = log();
        let mut manager = WindowManager::default();
        let mut ctx = ctx();
        let a = open_active(&mut manager, Probe::new("a", None, &log));
        let b = open_active(&mut manager, Probe::new("b", Some(a), &log));

        assert_eq!(manager.draw_chain(&mut ctx, 0.016), vec![b]);
    }

    #[test]
    fn test_chain_stops_at_first_non_submenu() {
        let log = log();
        let mut manager = WindowManager::default();
        let a = open_active(&mut manager, Probe::new("a", None, &log));
        let b = open_active(&mut manager, Probe::new("b", Some(a), &log));
        let c = open_active(&mut manager, Probe::new("c", Some(b), &log).submenu());
        let d = open_active(&mut manager, Probe::new("d", Some(c), &log).submenu());

        assert_eq!(manager.visible_chain(), vec![b, c, d]);
    }

    #[test]
    fn test_chain_while_fading_in() {
        let log = log();
        let mut manager = WindowManager::default();
        let mut ctx = ctx();
        let a = open_active(&mut manager, Probe::new("a", None, &log));
        let b = manager.add_window(Box::new(Probe::new("b", Some(a), &log).submenu()));
        manager.open_window(b).unwrap();
        manager.tick(D * 0.5);

        assert_eq!(manager.draw_chain(&mut ctx, 0.0), vec![a, b]);
        let entries = log.borrow();
        assert_eq!(entries[0], "draw a 255");
        assert!(entries[1].starts_with("draw b "));
        assert_ne!(entries[1], "draw b 255");
    }

    #[test]
    fn test_nothing_drawn_without_focus() {
        let log = log();
        let mut manager = WindowManager::default();
        let mut ctx = ctx();
        manager.add_window(Box::new(Probe::new("a", None, &log)));
        assert!(manager.draw_chain(&mut ctx, 0.016).is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_behavior_opens_child_with_own_id() {
        let log = log();
        let mut manager = WindowManager::default();
        let ctx = ctx();
        let child_log = log.clone();
        let root = open_active(
            &mut manager,
            Probe::new("root", None, &log).on_pad(move |pad, nav| {
                if pad.confirm() {
                    let child = Probe::new("child", Some(nav.window_id()), &child_log);
                    nav.open_new(Box::new(child));
                }
            }),
        );

        assert!(manager.dispatch_pad(0, PadState::CROSS, &ctx));
        assert_eq!(manager.len(), 2);
        let child = manager.ids().last().unwrap();
        assert_eq!(manager.get(child).unwrap().previous_id(), Some(root));
        assert_eq!(manager.state(child), Some(WindowState::Opening));
        assert_eq!(manager.focus_target(), Some(child));
    }

    #[test]
    fn test_behavior_closes_itself() {
        let log = log();
        let mut manager = WindowManager::default();
        let ctx = ctx();
        let id = open_active(
            &mut manager,
            Probe::new("a", None, &log).on_pad(|pad, nav| {
                if pad.back() {
                    nav.close_self();
                }
            }),
        );

        manager.dispatch_pad(0, PadState::CIRCLE, &ctx);
        assert_eq!(manager.state(id), Some(WindowState::Closing));
    }

    #[test]
    fn test_bad_request_from_behavior_is_dropped() {
        let log = log();
        let mut manager = WindowManager::default();
        let ctx = ctx();
        let id = open_active(
            &mut manager,
            Probe::new("a", None, &log).on_pad(|_, nav| nav.open_window(WindowId(999))),
        );

        assert!(manager.dispatch_pad(0, PadState::CROSS, &ctx));
        assert_eq!(manager.state(id), Some(WindowState::Active));
        assert_eq!(manager.len(), 1);
    }

    struct Collect(Rc<RefCell<Vec<(EventType, Option<WindowId>)>>>);

    impl EventHandler for Collect {
        fn on_event(&mut self, event: &Event) -> bool {
            self.0.borrow_mut().push((event.event_type, event.get_window_id()));
            false
        }
    }

    #[test]
    fn test_lifecycle_events_in_order() {
        let log = log();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut manager = WindowManager::default();
        for event_type in [
            EventType::WindowAdded,
            EventType::WindowOpening,
            EventType::WindowActivated,
            EventType::WindowClosing,
            EventType::WindowRemoved,
            EventType::FocusChanged,
        ] {
            manager.events_mut().register_handler(event_type, Box::new(Collect(seen.clone())));
        }

        let id = open_active(&mut manager, Probe::new("a", None, &log));
        manager.close_window(id).unwrap();
        manager.tick(D);
        manager.dispatch_events();

        assert_eq!(
            *seen.borrow(),
            vec![
                (EventType::WindowAdded, Some(id)),
                (EventType::WindowOpening, Some(id)),
                (EventType::FocusChanged, Some(id)),
                (EventType::WindowActivated, Some(id)),
                (EventType::WindowClosing, Some(id)),
                (EventType::WindowRemoved, Some(id)),
                (EventType::FocusChanged, None),
            ]
        );
        assert_eq!(manager.events().pending(), 0);
    }

    #[test]
    fn test_duration_from_config() {
        let config = MenuConfig::default().with_animation_duration(1.0);
        let log = log();
        let mut manager = WindowManager::from_config(&config);
        assert_eq!(manager.animation_duration(), 1.0);

        let id = manager.add_window(Box::new(Probe::new("a", None, &log)));
        manager.open_window(id).unwrap();
        manager.tick(0.5);
        assert_eq!(manager.state(id), Some(WindowState::Opening));
        manager.tick(0.5);
        assert_eq!(manager.state(id), Some(WindowState::Active));
    }
}
