// Taskbar model derived from the committed window snapshot

use super::launcher::app_icon;
use crate::state::window::WindowId;
use crate::state::{WindowManager, WindowSnapshot};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub icon: &'static str,
    pub is_minimized: bool,
    pub is_active: bool,
}

/// One entry per open window, in the order they were opened
pub fn taskbar_entries(snapshot: &WindowSnapshot) -> Vec<TaskbarEntry> {
    snapshot
        .windows()
        .iter()
        .map(|w| TaskbarEntry {
            id: w.id.clone(),
            title: w.title.clone(),
            icon: app_icon(w.app_type),
            is_minimized: w.is_minimized,
            is_active: w.is_active,
        })
        .collect()
}

/// Taskbar button click: minimized windows come back, others are focused
pub fn activate_taskbar_entry(wm: &mut WindowManager, id: &WindowId) -> bool {
    let is_minimized = match wm.get_window(id) {
        Some(window) => window.is_minimized,
        None => return false,
    };

    if is_minimized {
        wm.restore_window(id)
    } else {
        wm.focus_window(id)
    }
}
