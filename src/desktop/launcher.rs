// Application launcher: titles, default geometry and cascading

use crate::errors::{Result, WmError};
use crate::state::window::{AppData, AppType, Size, WindowId, WindowSpec};
use crate::state::WindowManager;
use tracing::{info, warn};

/// Offset between successive launched windows
const CASCADE_STEP: f64 = 30.0;
const CASCADE_ORIGIN: f64 = 100.0;

/// Where files opened from the explorer land
const OPEN_FILE_ORIGIN: f64 = 150.0;

pub fn app_title(app_type: AppType) -> &'static str {
    match app_type {
        AppType::FileExplorer => "File Explorer",
        AppType::TextEditor => "Text Editor",
        AppType::Terminal => "Terminal",
        AppType::AiAssistant => "AI Assistant",
        AppType::ProfileSettings => "Profile Settings",
        AppType::Browser => "Browser",
        AppType::RecycleBin => "Recycle Bin",
    }
}

pub fn default_size(app_type: AppType) -> Size {
    match app_type {
        AppType::FileExplorer => Size::new(800.0, 600.0),
        AppType::TextEditor => Size::new(700.0, 500.0),
        AppType::Terminal => Size::new(650.0, 400.0),
        AppType::AiAssistant => Size::new(600.0, 500.0),
        _ => Size::new(700.0, 500.0),
    }
}

/// Icon name the taskbar and desktop render for an application
pub fn app_icon(app_type: AppType) -> &'static str {
    match app_type {
        AppType::FileExplorer => "folder",
        AppType::TextEditor => "file-text",
        AppType::Terminal => "terminal",
        AppType::AiAssistant => "bot",
        AppType::Browser => "globe",
        AppType::RecycleBin => "trash",
        AppType::ProfileSettings => "user",
    }
}

/// Map a start-menu search to an application by keyword
pub fn app_for_query(query: &str) -> Option<AppType> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    // Keywords match the start of a whole word
    let words: Vec<&str> = query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let matches = |keywords: &[&str]| {
        keywords
            .iter()
            .any(|k| words.iter().any(|w| w.starts_with(k)))
    };
    if matches(&["file", "explorer"]) {
        Some(AppType::FileExplorer)
    } else if matches(&["text", "editor"]) {
        Some(AppType::TextEditor)
    } else if matches(&["terminal", "cmd"]) {
        Some(AppType::Terminal)
    } else if matches(&["ai", "assistant"]) {
        Some(AppType::AiAssistant)
    } else if matches(&["browser", "web"]) {
        Some(AppType::Browser)
    } else if matches(&["recycle", "trash"]) {
        Some(AppType::RecycleBin)
    } else if matches(&["profile", "settings"]) {
        Some(AppType::ProfileSettings)
    } else {
        None
    }
}

/// Open a new window for `app_type`, cascaded from the windows already open.
/// A payload for a different application is replaced by an empty one.
pub fn launch_application(
    wm: &mut WindowManager,
    app_type: AppType,
    data: Option<AppData>,
) -> WindowId {
    let data = match data {
        Some(data) if data.app_type() == app_type => data,
        Some(data) => {
            warn!(
                "launch of {:?} got a {:?} payload, starting empty",
                app_type,
                data.app_type()
            );
            AppData::empty(app_type)
        }
        None => AppData::empty(app_type),
    };

    let offset = CASCADE_ORIGIN + wm.snapshot().len() as f64 * CASCADE_STEP;
    let size = default_size(app_type);
    let spec = WindowSpec::new(app_title(app_type), data)
        .at(offset, offset)
        .sized(size.width, size.height);

    let id = wm.create_window(spec);
    info!("launched {} ({})", app_title(app_type), id);
    id
}

/// Open a file from the virtual file system in a text editor.
/// The path is carried opaquely in the payload.
pub fn open_file(wm: &mut WindowManager, path: &str) -> WindowId {
    let name = path.rsplit('/').find(|s| !s.is_empty()).unwrap_or(path);
    let size = default_size(AppType::TextEditor);
    let spec = WindowSpec::new(
        format!("{} - {}", app_title(AppType::TextEditor), name),
        AppData::TextEditor {
            file_path: Some(path.to_string()),
            saved: false,
        },
    )
    .at(OPEN_FILE_ORIGIN, OPEN_FILE_ORIGIN)
    .sized(size.width, size.height);

    let id = wm.create_window(spec);
    info!("opened {} in text editor ({})", path, id);
    id
}

/// Launch whatever application a search query names
pub fn launch_by_query(wm: &mut WindowManager, query: &str) -> Result<WindowId> {
    let app_type =
        app_for_query(query).ok_or_else(|| WmError::UnknownApplication(query.to_string()))?;
    Ok(launch_application(wm, app_type, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::window::Position;

    #[test]
    fn test_launch_cascades() {
        let mut wm = WindowManager::default();
        let first = launch_application(&mut wm, AppType::FileExplorer, None);
        let second = launch_application(&mut wm, AppType::Terminal, None);

        let first = wm.get_window(&first).unwrap();
        assert_eq!(first.title, "File Explorer");
        assert_eq!(first.position, Position::new(100.0, 100.0));
        assert_eq!(first.size, Size::new(800.0, 600.0));

        let second = wm.get_window(&second).unwrap();
        assert_eq!(second.position, Position::new(130.0, 130.0));
        assert_eq!(second.size, Size::new(650.0, 400.0));
        assert!(second.is_active);
    }

    #[test]
    fn test_launch_drops_mismatched_payload() {
        let mut wm = WindowManager::default();
        let id = launch_application(
            &mut wm,
            AppType::Browser,
            Some(AppData::Terminal {
                cwd: Some("/home".into()),
            }),
        );
        let win = wm.get_window(&id).unwrap();
        assert_eq!(win.app_type, AppType::Browser);
        assert_eq!(win.data, AppData::Browser { initial_url: None });
    }

    #[test]
    fn test_open_file_uses_file_name() {
        let mut wm = WindowManager::default();
        let id = open_file(&mut wm, "/home/user/notes.txt");
        let win = wm.get_window(&id).unwrap();
        assert_eq!(win.title, "Text Editor - notes.txt");
        assert_eq!(win.position, Position::new(150.0, 150.0));
        assert_eq!(
            win.data,
            AppData::TextEditor {
                file_path: Some("/home/user/notes.txt".into()),
                saved: false,
            }
        );
    }

    #[test]
    fn test_query_matching() {
        assert_eq!(app_for_query("File Explorer"), Some(AppType::FileExplorer));
        assert_eq!(app_for_query("  cmd "), Some(AppType::Terminal));
        assert_eq!(app_for_query("editor"), Some(AppType::TextEditor));
        assert_eq!(app_for_query("assistant"), Some(AppType::AiAssistant));
        assert_eq!(app_for_query("web"), Some(AppType::Browser));
        assert_eq!(app_for_query("trash"), Some(AppType::RecycleBin));
        assert_eq!(app_for_query("Profile Settings"), Some(AppType::ProfileSettings));
        assert_eq!(app_for_query("solitaire"), None);
        assert_eq!(app_for_query(""), None);
    }

    #[test]
    fn test_launch_by_unknown_query() {
        let mut wm = WindowManager::default();
        let err = launch_by_query(&mut wm, "solitaire").unwrap_err();
        assert!(matches!(err, WmError::UnknownApplication(_)));
        assert!(wm.snapshot().is_empty());

        let id = launch_by_query(&mut wm, "terminal").unwrap();
        assert_eq!(wm.get_window(&id).unwrap().app_type, AppType::Terminal);
    }
}
