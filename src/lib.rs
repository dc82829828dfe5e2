// Input handler module for pointer-driven drag and resize
#[path = "inputHandler/mod.rs"]
pub mod input_handler;

// Window state management module
pub mod state;

// Desktop shell: launcher and taskbar
pub mod desktop;

pub mod config;
pub mod errors;
pub mod logging;

// Tauri command surface
#[cfg(feature = "desktop")]
mod commands;

pub use config::WmConfig;
pub use errors::{Result, WmError};
pub use state::window::{
    AppData, AppType, Geometry, Position, Size, Viewport, WindowEntity, WindowId, WindowSpec,
};
pub use state::{WindowManager, WindowSnapshot};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use std::sync::Mutex;
    use tauri::Manager;
    use tracing::{info, warn};

    logging::init();

    let config = WmConfig::from_env().unwrap_or_else(|e| {
        warn!("{}, using default window manager config", e);
        WmConfig::default()
    });

    tauri::Builder::default()
        .manage(Mutex::new(WindowManager::new(config)))
        .setup(|app| {
            // Seed the viewport from the main webview; the frontend keeps it current
            if let Some(window) = app.get_webview_window("main") {
                let scale = window.scale_factor()?;
                let size = window.inner_size()?.to_logical::<f64>(scale);
                let state = app.state::<Mutex<WindowManager>>();
                if let Ok(mut manager) = state.lock() {
                    manager.set_viewport(Viewport::new(size.width, size.height));
                }
            }
            info!("window manager initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Window lifecycle
            commands::create_window,
            commands::launch_application,
            commands::launch_by_query,
            commands::open_file,
            commands::close_window,
            commands::minimize_window,
            commands::maximize_window,
            commands::restore_window,
            commands::focus_window,
            commands::clear_focus,
            commands::activate_taskbar_entry,
            // Window content
            commands::update_window_position,
            commands::update_window_size,
            commands::update_window_data,
            commands::update_window_title,
            // Pointer gestures
            commands::pointer_down_drag,
            commands::pointer_down_resize,
            commands::pointer_move,
            commands::pointer_up,
            commands::handle_pointer,
            commands::set_viewport,
            // Queries
            commands::get_windows,
            commands::get_visible_windows,
            commands::get_window,
            commands::get_active_window,
            commands::get_taskbar,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
