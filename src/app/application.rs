//! Application - App Initialization and Window Management
//!
//! Main entry point for the gallery application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use gpui_component::{Root, ThemeMode};
use tracing::{info, warn};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::UiConfig;
use crate::theme::Theme;

actions!(vivid, [Quit]);

/// Load configuration, falling back to defaults when it cannot be read
fn load_config() -> UiConfig {
    match UiConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            UiConfig::default()
        }
    }
}

/// Run the component gallery
pub fn run_gallery() -> anyhow::Result<()> {
    let config = load_config();

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        Theme::init(ThemeMode::from(config.theme), cx);

        // Initialize global entities
        let entities = AppEntities::init(config, cx);
        cx.set_global(entities.clone());

        if let Err(e) = open_main_window(entities, cx) {
            tracing::error!("Failed to open main window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}

fn open_main_window(entities: AppEntities, cx: &mut App) -> anyhow::Result<()> {
    let bounds = Bounds::centered(
        None,
        gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
        cx,
    );
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from("Vivid UI Gallery")),
            appears_transparent: false,
            traffic_light_position: None,
        }),
        ..Default::default()
    };

    cx.open_window(window_options, |window, cx| {
        let workspace = cx.new(|cx| Workspace::new(entities, cx));
        cx.new(|cx| Root::new(workspace, window, cx))
    })?;

    info!("Main window opened");
    Ok(())
}
