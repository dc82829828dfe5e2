// Desktop shell layer on top of the window manager
// Launches applications and derives the taskbar from window snapshots

pub mod launcher;
pub mod taskbar;

pub use launcher::{app_for_query, launch_application, launch_by_query, open_file};
pub use taskbar::{activate_taskbar_entry, taskbar_entries, TaskbarEntry};
