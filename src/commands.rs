// Tauri commands exposing the window manager to the frontend

use crate::desktop::{self, TaskbarEntry};
use crate::errors::WmError;
use crate::input_handler::{Point, PointerEvent, ResizeEdge};
use crate::state::window::{
    AppData, AppType, Position, Size, Viewport, WindowEntity, WindowId, WindowSpec,
};
use crate::state::{WindowManager, WindowSnapshot};
use std::sync::{Mutex, MutexGuard};
use tauri::{AppHandle, Emitter, State};

/// Emitted with the new snapshot after every committed transition
pub const WINDOWS_CHANGED: &str = "windows-changed";

fn lock(state: &Mutex<WindowManager>) -> Result<MutexGuard<'_, WindowManager>, WmError> {
    state
        .lock()
        .map_err(|e| WmError::LockPoisoned(e.to_string()))
}

fn publish(app: &AppHandle, manager: &WindowManager, changed: bool) -> Result<(), WmError> {
    if changed {
        app.emit(WINDOWS_CHANGED, manager.snapshot())
            .map_err(|e| WmError::Emit(e.to_string()))?;
    }
    Ok(())
}

/// Run one transition and publish the result if it changed anything
fn transition<F>(app: &AppHandle, state: &Mutex<WindowManager>, op: F) -> Result<bool, String>
where
    F: FnOnce(&mut WindowManager) -> bool,
{
    let mut manager = lock(state).map_err(|e| e.to_string())?;
    let changed = op(&mut *manager);
    publish(app, &manager, changed).map_err(|e| e.to_string())?;
    Ok(changed)
}

// ===== Window Lifecycle Commands =====

#[tauri::command]
pub fn create_window(
    spec: WindowSpec,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<WindowId, String> {
    let mut manager = lock(&state).map_err(|e| e.to_string())?;
    let id = manager.create_window(spec);
    publish(&app, &manager, true).map_err(|e| e.to_string())?;
    Ok(id)
}

#[tauri::command]
pub fn launch_application(
    app_type: AppType,
    data: Option<AppData>,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<WindowId, String> {
    let mut manager = lock(&state).map_err(|e| e.to_string())?;
    let id = desktop::launch_application(&mut manager, app_type, data);
    publish(&app, &manager, true).map_err(|e| e.to_string())?;
    Ok(id)
}

#[tauri::command]
pub fn launch_by_query(
    query: String,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<WindowId, String> {
    let mut manager = lock(&state).map_err(|e| e.to_string())?;
    let id = desktop::launch_by_query(&mut manager, &query).map_err(|e| e.to_string())?;
    publish(&app, &manager, true).map_err(|e| e.to_string())?;
    Ok(id)
}

#[tauri::command]
pub fn open_file(
    path: String,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<WindowId, String> {
    let mut manager = lock(&state).map_err(|e| e.to_string())?;
    let id = desktop::open_file(&mut manager, &path);
    publish(&app, &manager, true).map_err(|e| e.to_string())?;
    Ok(id)
}

#[tauri::command]
pub fn close_window(
    id: WindowId,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.close_window(&id))
}

#[tauri::command]
pub fn minimize_window(
    id: WindowId,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.minimize_window(&id))
}

#[tauri::command]
pub fn maximize_window(
    id: WindowId,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.maximize_window(&id))
}

#[tauri::command]
pub fn restore_window(
    id: WindowId,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.restore_window(&id))
}

#[tauri::command]
pub fn focus_window(
    id: WindowId,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.focus_window(&id))
}

/// Click on the empty desktop
#[tauri::command]
pub fn clear_focus(app: AppHandle, state: State<Mutex<WindowManager>>) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.clear_focus())
}

#[tauri::command]
pub fn activate_taskbar_entry(
    id: WindowId,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| desktop::activate_taskbar_entry(wm, &id))
}

// ===== Window Content Commands =====

#[tauri::command]
pub fn update_window_position(
    id: WindowId,
    position: Position,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.update_window_position(&id, position))
}

#[tauri::command]
pub fn update_window_size(
    id: WindowId,
    size: Size,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.update_window_size(&id, size))
}

#[tauri::command]
pub fn update_window_data(
    id: WindowId,
    data: AppData,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.update_window_data(&id, data))
}

#[tauri::command]
pub fn update_window_title(
    id: WindowId,
    title: String,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.update_window_title(&id, title))
}

// ===== Pointer Commands =====

#[tauri::command]
pub fn pointer_down_drag(
    id: WindowId,
    x: f64,
    y: f64,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    let mut manager = lock(&state).map_err(|e| e.to_string())?;
    Ok(manager.begin_drag(&id, Point::new(x, y)))
}

/// `edge` is the handle tag the frontend renders ("n", "se", ...)
#[tauri::command]
pub fn pointer_down_resize(
    id: WindowId,
    edge: String,
    x: f64,
    y: f64,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    let edge = ResizeEdge::from_str(&edge)
        .ok_or_else(|| WmError::InvalidResizeEdge(edge.clone()).to_string())?;
    let mut manager = lock(&state).map_err(|e| e.to_string())?;
    Ok(manager.begin_resize(&id, edge, Point::new(x, y)))
}

#[tauri::command]
pub fn pointer_move(
    x: f64,
    y: f64,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.pointer_move(Point::new(x, y)))
}

#[tauri::command]
pub fn pointer_up(state: State<Mutex<WindowManager>>) -> Result<bool, String> {
    let mut manager = lock(&state).map_err(|e| e.to_string())?;
    Ok(manager.pointer_up())
}

/// Single entry point for frontends that batch pointer input as events
#[tauri::command]
pub fn handle_pointer(
    event: PointerEvent,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.handle_pointer(event))
}

#[tauri::command]
pub fn set_viewport(
    width: f64,
    height: f64,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    transition(&app, &state, |wm| wm.set_viewport(Viewport::new(width, height)))
}

// ===== Query Commands =====

#[tauri::command]
pub fn get_windows(state: State<Mutex<WindowManager>>) -> Result<WindowSnapshot, String> {
    let manager = lock(&state).map_err(|e| e.to_string())?;
    Ok(manager.snapshot())
}

#[tauri::command]
pub fn get_visible_windows(
    state: State<Mutex<WindowManager>>,
) -> Result<Vec<WindowEntity>, String> {
    let manager = lock(&state).map_err(|e| e.to_string())?;
    Ok(manager.visible_windows().into_iter().cloned().collect())
}

#[tauri::command]
pub fn get_window(
    id: WindowId,
    state: State<Mutex<WindowManager>>,
) -> Result<Option<WindowEntity>, String> {
    let manager = lock(&state).map_err(|e| e.to_string())?;
    Ok(manager.get_window(&id).cloned())
}

#[tauri::command]
pub fn get_active_window(
    state: State<Mutex<WindowManager>>,
) -> Result<Option<WindowEntity>, String> {
    let manager = lock(&state).map_err(|e| e.to_string())?;
    Ok(manager.get_active_window().cloned())
}

#[tauri::command]
pub fn get_taskbar(state: State<Mutex<WindowManager>>) -> Result<Vec<TaskbarEntry>, String> {
    let manager = lock(&state).map_err(|e| e.to_string())?;
    Ok(desktop::taskbar_entries(&manager.snapshot()))
}
