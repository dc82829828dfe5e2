// Core data structures for pointer gestures

use crate::state::window::{Position, Size, WindowId};
use serde::{Deserialize, Serialize};

/// Pointer location in screen-space pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to this point
    pub fn delta_from(&self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Edge or corner a resize was started from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdge {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeEdge {
    /// Parse from the frontend's handle tag ("n", "se", ...)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" => Some(ResizeEdge::N),
            "s" => Some(ResizeEdge::S),
            "e" => Some(ResizeEdge::E),
            "w" => Some(ResizeEdge::W),
            "ne" => Some(ResizeEdge::NE),
            "nw" => Some(ResizeEdge::NW),
            "se" => Some(ResizeEdge::SE),
            "sw" => Some(ResizeEdge::SW),
            _ => None,
        }
    }

    pub fn north(&self) -> bool {
        matches!(self, ResizeEdge::N | ResizeEdge::NE | ResizeEdge::NW)
    }

    pub fn south(&self) -> bool {
        matches!(self, ResizeEdge::S | ResizeEdge::SE | ResizeEdge::SW)
    }

    pub fn east(&self) -> bool {
        matches!(self, ResizeEdge::E | ResizeEdge::NE | ResizeEdge::SE)
    }

    pub fn west(&self) -> bool {
        matches!(self, ResizeEdge::W | ResizeEdge::NW | ResizeEdge::SW)
    }
}

/// The one gesture the pointer can be driving
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        window_id: WindowId,
        /// Pointer position relative to the window's top-left corner
        offset: (f64, f64),
    },
    Resizing {
        window_id: WindowId,
        edge: ResizeEdge,
        last_pointer: Point,
    },
}

impl Gesture {
    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { window_id, .. } | Gesture::Resizing { window_id, .. } => {
                Some(window_id)
            }
        }
    }
}

/// Pointer input routed through the window manager
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PointerEvent {
    /// Press on a title bar
    DragStart { window_id: WindowId, pointer: Point },
    /// Press on a resize handle
    ResizeStart {
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: Point,
    },
    Move { pointer: Point },
    Up,
}

/// New geometry computed for one pointer move
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryUpdate {
    pub size: Option<Size>,
    pub position: Option<Position>,
}
