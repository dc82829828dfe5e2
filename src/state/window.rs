use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque window identifier, stable for the window's lifetime
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-left corner of a window in screen-space pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pin the top edge to the visible screen
    pub fn below_top(self) -> Self {
        Self {
            x: self.x,
            y: self.y.max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Floor both dimensions at `min`
    pub fn at_least(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// Host viewport (browser window) dimensions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub position: Position,
    pub size: Size,
}

/// Which application renders a window's content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppType {
    FileExplorer,
    TextEditor,
    Terminal,
    AiAssistant,
    ProfileSettings,
    Browser,
    RecycleBin,
}

impl AppType {
    pub const ALL: [AppType; 7] = [
        AppType::FileExplorer,
        AppType::TextEditor,
        AppType::Terminal,
        AppType::AiAssistant,
        AppType::ProfileSettings,
        AppType::Browser,
        AppType::RecycleBin,
    ];
}

/// Per-application payload handed to the content renderer.
///
/// The window manager never interprets these fields; it only keeps the
/// variant fixed for the window's lifetime so `app_type` cannot drift.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "appType",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum AppData {
    FileExplorer {
        #[serde(default)]
        path: Option<String>,
    },
    TextEditor {
        #[serde(default)]
        file_path: Option<String>,
        #[serde(default)]
        saved: bool,
    },
    Terminal {
        #[serde(default)]
        cwd: Option<String>,
    },
    AiAssistant,
    ProfileSettings,
    Browser {
        #[serde(default)]
        initial_url: Option<String>,
    },
    RecycleBin,
}

impl AppData {
    /// Payload with nothing set for the given application
    pub fn empty(app_type: AppType) -> Self {
        match app_type {
            AppType::FileExplorer => AppData::FileExplorer { path: None },
            AppType::TextEditor => AppData::TextEditor {
                file_path: None,
                saved: false,
            },
            AppType::Terminal => AppData::Terminal { cwd: None },
            AppType::AiAssistant => AppData::AiAssistant,
            AppType::ProfileSettings => AppData::ProfileSettings,
            AppType::Browser => AppData::Browser { initial_url: None },
            AppType::RecycleBin => AppData::RecycleBin,
        }
    }

    pub fn app_type(&self) -> AppType {
        match self {
            AppData::FileExplorer { .. } => AppType::FileExplorer,
            AppData::TextEditor { .. } => AppType::TextEditor,
            AppData::Terminal { .. } => AppType::Terminal,
            AppData::AiAssistant => AppType::AiAssistant,
            AppData::ProfileSettings => AppType::ProfileSettings,
            AppData::Browser { .. } => AppType::Browser,
            AppData::RecycleBin => AppType::RecycleBin,
        }
    }

    /// Merge an update from the owning application.
    /// Fields set in `update` override ours. Returns false (and leaves the
    /// payload untouched) when `update` belongs to a different application.
    pub fn merge(&mut self, update: AppData) -> bool {
        match (self, update) {
            (AppData::FileExplorer { path }, AppData::FileExplorer { path: new_path }) => {
                if new_path.is_some() {
                    *path = new_path;
                }
                true
            }
            (
                AppData::TextEditor { file_path, saved },
                AppData::TextEditor {
                    file_path: new_path,
                    saved: new_saved,
                },
            ) => {
                if new_path.is_some() {
                    *file_path = new_path;
                }
                *saved = new_saved;
                true
            }
            (AppData::Terminal { cwd }, AppData::Terminal { cwd: new_cwd }) => {
                if new_cwd.is_some() {
                    *cwd = new_cwd;
                }
                true
            }
            (AppData::Browser { initial_url }, AppData::Browser { initial_url: new_url }) => {
                if new_url.is_some() {
                    *initial_url = new_url;
                }
                true
            }
            (AppData::AiAssistant, AppData::AiAssistant)
            | (AppData::ProfileSettings, AppData::ProfileSettings)
            | (AppData::RecycleBin, AppData::RecycleBin) => true,
            _ => false,
        }
    }
}

/// Request accepted by `WindowManager::create_window`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSpec {
    pub title: String,
    pub data: AppData,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub min_size: Option<Size>,
}

impl WindowSpec {
    pub fn new(title: impl Into<String>, data: AppData) -> Self {
        Self {
            title: title.into(),
            data,
            position: None,
            size: None,
            min_size: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    pub fn min_size(mut self, width: f64, height: f64) -> Self {
        self.min_size = Some(Size::new(width, height));
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowEntity {
    pub id: WindowId,                 // Unique UUID
    pub title: String,                // Window Title
    pub app_type: AppType,            // Fixed by the payload variant
    pub position: Position,
    pub size: Size,
    pub min_size: Size,
    pub z_index: u32,                 // Stacking order, higher paints on top
    pub is_active: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    #[serde(skip)]
    pub(crate) saved_geometry: Option<Geometry>, // Captured when maximizing
    pub data: AppData,
}

impl WindowEntity {
    pub fn geometry(&self) -> Geometry {
        Geometry {
            position: self.position,
            size: self.size,
        }
    }

    pub(crate) fn set_geometry(&mut self, geometry: Geometry) {
        self.position = geometry.position;
        self.size = geometry.size;
    }

    /// Rendered and reachable by the pointer
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_floor() {
        let min = Size::new(300.0, 200.0);
        assert_eq!(Size::new(100.0, 500.0).at_least(min), Size::new(300.0, 500.0));
        assert_eq!(Size::new(400.0, 50.0).at_least(min), Size::new(400.0, 200.0));
        assert_eq!(Position::new(-20.0, -5.0).below_top(), Position::new(-20.0, 0.0));
    }

    #[test]
    fn test_payload_merge_same_app() {
        let mut data = AppData::TextEditor {
            file_path: Some("/home/user/notes.txt".into()),
            saved: false,
        };
        let update = AppData::TextEditor {
            file_path: None,
            saved: true,
        };
        assert!(data.merge(update));
        assert_eq!(
            data,
            AppData::TextEditor {
                file_path: Some("/home/user/notes.txt".into()),
                saved: true,
            }
        );
    }

    #[test]
    fn test_payload_merge_rejects_other_app() {
        let mut data = AppData::Terminal { cwd: Some("/".into()) };
        let before = data.clone();
        assert!(!data.merge(AppData::Browser {
            initial_url: Some("https://example.com".into())
        }));
        assert_eq!(data, before);
    }

    #[test]
    fn test_payload_wire_format() {
        let data: AppData =
            serde_json::from_str(r#"{"appType":"textEditor","filePath":"/home/user/readme.txt"}"#)
                .unwrap();
        assert_eq!(data.app_type(), AppType::TextEditor);
        assert_eq!(
            data,
            AppData::TextEditor {
                file_path: Some("/home/user/readme.txt".into()),
                saved: false,
            }
        );

        let unit: AppData = serde_json::from_str(r#"{"appType":"aiAssistant"}"#).unwrap();
        assert_eq!(unit, AppData::AiAssistant);
    }

    #[test]
    fn test_empty_payload_matches_type() {
        for app in AppType::ALL {
            assert_eq!(AppData::empty(app).app_type(), app);
        }
    }
}
