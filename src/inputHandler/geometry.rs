// Drag and resize math for pointer gestures

use super::types::{Gesture, GeometryUpdate, Point, ResizeEdge};
use crate::state::window::{Geometry, Position, Size, WindowEntity, WindowId};

/// Tracks the active pointer gesture and turns pointer moves into geometry
pub struct GeometryEngine {
    gesture: Gesture,
}

impl GeometryEngine {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Window the current gesture is driving
    pub fn target(&self) -> Option<&WindowId> {
        self.gesture.window_id()
    }

    pub fn is_targeting(&self, id: &WindowId) -> bool {
        self.target() == Some(id)
    }

    /// Title-bar press. Maximized or hidden windows can't be dragged.
    pub fn begin_drag(&mut self, window: &WindowEntity, pointer: Point) -> bool {
        if window.is_maximized || window.is_minimized {
            return false;
        }
        self.gesture = Gesture::Dragging {
            window_id: window.id.clone(),
            offset: (pointer.x - window.position.x, pointer.y - window.position.y),
        };
        true
    }

    /// Resize-handle press
    pub fn begin_resize(
        &mut self,
        window: &WindowEntity,
        edge: ResizeEdge,
        pointer: Point,
    ) -> bool {
        if window.is_maximized || window.is_minimized {
            return false;
        }
        self.gesture = Gesture::Resizing {
            window_id: window.id.clone(),
            edge,
            last_pointer: pointer,
        };
        true
    }

    /// Compute the target window's geometry for a pointer move.
    /// `window` must be the gesture's target.
    pub fn pointer_move(
        &mut self,
        window: &WindowEntity,
        pointer: Point,
    ) -> Option<GeometryUpdate> {
        if window.is_maximized || !self.is_targeting(&window.id) {
            return None;
        }

        match &mut self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging { offset, .. } => Some(GeometryUpdate {
                size: None,
                position: Some(drag_position(pointer, *offset)),
            }),
            Gesture::Resizing {
                edge, last_pointer, ..
            } => {
                // Deltas are incremental, measured from the previous move
                let delta = pointer.delta_from(*last_pointer);
                *last_pointer = pointer;

                let current = window.geometry();
                let next = resize(current, window.min_size, *edge, delta);
                Some(GeometryUpdate {
                    size: Some(next.size),
                    position: (next.position != current.position).then_some(next.position),
                })
            }
        }
    }

    /// Pointer up. Returns whether a gesture was in progress.
    pub fn release(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.gesture), Gesture::Idle)
    }
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// New top-left corner for a drag; the top edge never leaves the screen
pub fn drag_position(pointer: Point, offset: (f64, f64)) -> Position {
    Position::new(pointer.x - offset.0, pointer.y - offset.1).below_top()
}

/// Apply one incremental pointer delta to `geometry` for the given edge.
///
/// Width and height are clamped to `min_size` first. West and north edges
/// then shift the origin by exactly the amount the dimension changed, so a
/// window pinned at its minimum stays put instead of drifting. Growing
/// through the top of the screen stops at `y = 0`.
pub fn resize(geometry: Geometry, min_size: Size, edge: ResizeEdge, delta: (f64, f64)) -> Geometry {
    let (dx, dy) = delta;
    let Geometry {
        mut position,
        mut size,
    } = geometry;

    if edge.east() {
        size.width = (size.width + dx).max(min_size.width);
    }
    if edge.south() {
        size.height = (size.height + dy).max(min_size.height);
    }
    if edge.west() {
        let width = (size.width - dx).max(min_size.width);
        position.x += size.width - width;
        size.width = width;
    }
    if edge.north() {
        let height = (size.height - dy).max(min_size.height);
        let y = position.y + (size.height - height);
        if y < 0.0 {
            // Bottom edge stays where it is
            size.height += position.y;
            position.y = 0.0;
        } else {
            position.y = y;
            size.height = height;
        }
    }

    Geometry { position, size }
}
