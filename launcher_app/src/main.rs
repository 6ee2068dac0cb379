//! Launcher demo application
//!
//! Drives the menu engine headless: screens "draw" into the log and a
//! scripted pad session walks through every bundled screen.

mod script;
mod terminal;

use menu_engine::foundation::logging;
use menu_engine::prelude::*;
use thiserror::Error;

use script::Script;
use terminal::{TerminalFont, TerminalTexture};

const DEFAULT_LOCALE: &str = "launcher_app/assets/en.toml";
const SESSION_LIMIT_SECS: f32 = 30.0;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Navigation call on a window that is gone
    #[error("Window error: {0}")]
    Window(#[from] WindowError),
}

const TEXTURES: [TextureId; 11] = [
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

fn build_context(config: &MenuConfig, locale_path: &str) -> RenderContext {
    let mut context =
        RenderContext::new(config.screen_size).with_font(Box::new(TerminalFont::default()));
    for id in TEXTURES {
        context = context.with_texture(id, Box::new(TerminalTexture::new(id)));
    }

    match LocaleTable::load_from_file(locale_path) {
        Ok(table) => context.with_locale(Box::new(table)),
        Err(e) => {
            log::warn!("Locale {locale_path} unavailable ({e}); screens will stay inert");
            context
        }
    }
}

fn run() -> Result<(), AppError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => MenuConfig::load_from_file(&path)?,
        None => MenuConfig::default(),
    };
    let locale_path = args.next().unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    logging::init_with_level(&config.log_level);
    log::info!("Starting launcher demo...");

    let context = build_context(&config, &locale_path);
    let mut driver = FrameDriver::new(config, context)?;

    let games = vec![
        "Ratchet & Clank".to_string(),
        "Jak and Daxter".to_string(),
        "Sly Cooper".to_string(),
    ];
    let root = driver.open_root(|ctx| Box::new(StartMenu::new(ctx, None).with_games(games)))?;
    log::info!("Title screen opened as window {root}");

    let mut script = Script::walkthrough(driver.config().animation_duration);
    let target_fps = driver.config().target_fps;
    let mut timer = Timer::new();
    let mut closing_root = false;

    while !driver.is_idle() {
        timer.update();
        let delta = timer.delta_time();

        let pads = script.advance(delta);
        let report = driver.frame(delta, &pads);
        if let Some(id) = report.input_to {
            log::debug!("Pad input went to window {id}");
        }

        // Once the walkthrough is back on the title screen, fade it out to end the session
        let manager = driver.manager();
        if script.finished()
            && !closing_root
            && manager.focus_target() == Some(root)
            && manager.state(root) == Some(WindowState::Active)
        {
            driver.manager_mut().close_window(root)?;
            closing_root = true;
        }

        if timer.total_time() > SESSION_LIMIT_SECS {
            log::warn!("Session limit reached after {} frames", driver.frame_count());
            break;
        }

        if let Some(rest) = target_fps.and_then(|fps| timer.remaining_frame_budget(fps)) {
            std::thread::sleep(rest);
        }
    }

    log::info!("Session finished after {} frames", driver.frame_count());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("Launcher failed: {e}");
        eprintln!("Launcher failed: {e}");
        std::process::exit(1);
    }
}
