use self::focus::ZOrder;
use self::maximize::MaximizeController;
use self::window::{AppData, Position, Size, Viewport, WindowEntity, WindowId, WindowSpec};
use crate::config::WmConfig;
use crate::input_handler::{GeometryEngine, GeometryUpdate, Point, PointerEvent, ResizeEdge};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace, warn};

pub mod focus;
pub mod maximize;
pub mod window;

/// Immutable view of the window collection at one point in time.
/// Every committed transition produces a fresh snapshot; old ones stay valid.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSnapshot {
    generation: u64,
    windows: Arc<[WindowEntity]>,
}

impl WindowSnapshot {
    fn new(generation: u64, windows: Vec<WindowEntity>) -> Self {
        Self {
            generation,
            windows: windows.into(),
        }
    }

    /// Bumped once per committed transition
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All open windows in creation order
    pub fn windows(&self) -> &[WindowEntity] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowEntity> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn active(&self) -> Option<&WindowEntity> {
        self.windows.iter().find(|w| w.is_active)
    }

    /// Non-minimized windows in paint order (ascending z)
    pub fn visible(&self) -> Vec<&WindowEntity> {
        let mut visible: Vec<_> = self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    fn index_of(&self, id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == id)
    }
}

/// Owns the window collection and every transition on it.
///
/// All mutators are total: an unknown id, a gesture event with nothing to
/// drive, or out-of-range geometry never errors. Each returns whether a new
/// snapshot was committed so the host only publishes real changes.
pub struct WindowManager {
    config: WmConfig,
    snapshot: WindowSnapshot,
    z_order: ZOrder,
    maximize: MaximizeController,
    geometry: GeometryEngine,
}

impl WindowManager {
    pub fn new(config: WmConfig) -> Self {
        Self {
            snapshot: WindowSnapshot::new(0, Vec::new()),
            z_order: ZOrder::new(config.initial_z_index),
            maximize: MaximizeController::new(config.viewport, config.taskbar_height),
            geometry: GeometryEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    /// Current committed snapshot
    pub fn snapshot(&self) -> WindowSnapshot {
        self.snapshot.clone()
    }

    pub fn get_window(&self, id: &WindowId) -> Option<&WindowEntity> {
        self.snapshot.get(id)
    }

    pub fn get_active_window(&self) -> Option<&WindowEntity> {
        self.snapshot.active()
    }

    pub fn visible_windows(&self) -> Vec<&WindowEntity> {
        self.snapshot.visible()
    }

    pub fn viewport(&self) -> Viewport {
        self.maximize.viewport()
    }

    /// Swap in the next collection as a new snapshot
    fn commit(&mut self, windows: Vec<WindowEntity>) {
        self.snapshot = WindowSnapshot::new(self.snapshot.generation + 1, windows);
    }

    /// Working copy of the collection plus the index of `id`
    fn checkout(&self, id: &WindowId) -> Option<(Vec<WindowEntity>, usize)> {
        let index = self.snapshot.index_of(id)?;
        Some((self.snapshot.windows.to_vec(), index))
    }

    pub fn create_window(&mut self, spec: WindowSpec) -> WindowId {
        let min_size = spec.min_size.unwrap_or(self.config.min_size);
        let window = WindowEntity {
            id: WindowId::new(),
            title: spec.title,
            app_type: spec.data.app_type(),
            position: spec
                .position
                .unwrap_or(self.config.default_position)
                .below_top(),
            size: spec.size.unwrap_or(self.config.default_size).at_least(min_size),
            min_size,
            z_index: self.z_order.allocate(),
            is_active: true,
            is_minimized: false,
            is_maximized: false,
            saved_geometry: None,
            data: spec.data,
        };
        let id = window.id.clone();

        let mut windows = self.snapshot.windows.to_vec();
        for other in windows.iter_mut() {
            other.is_active = false;
        }
        debug!(
            "created window {} ({:?}) z={}",
            id, window.app_type, window.z_index
        );
        windows.push(window);
        self.commit(windows);

        id
    }

    pub fn close_window(&mut self, id: &WindowId) -> bool {
        let Some((mut windows, index)) = self.checkout(id) else {
            trace!("close ignored, unknown window {}", id);
            return false;
        };

        let closed = windows.remove(index);
        if self.geometry.is_targeting(id) {
            self.geometry.release();
        }
        if closed.is_active {
            let successor = focus::reassign(&mut windows, &mut self.z_order);
            debug!(
                "closed active window {}, focus -> {:?}",
                id,
                successor.map(|i| windows[i].id.to_string())
            );
        } else {
            debug!("closed window {}", id);
        }

        self.commit(windows);
        true
    }

    pub fn minimize_window(&mut self, id: &WindowId) -> bool {
        let Some((mut windows, index)) = self.checkout(id) else {
            trace!("minimize ignored, unknown window {}", id);
            return false;
        };
        if windows[index].is_minimized {
            return false;
        }

        if windows[index].is_maximized {
            self.maximize.restore(&mut windows[index]);
        }
        let was_active = windows[index].is_active;
        windows[index].is_minimized = true;
        windows[index].is_active = false;

        if self.geometry.is_targeting(id) {
            self.geometry.release();
        }
        if was_active {
            focus::reassign(&mut windows, &mut self.z_order);
        }

        debug!("minimized window {}", id);
        self.commit(windows);
        true
    }

    /// Toggle between maximized and the geometry saved before maximizing
    pub fn maximize_window(&mut self, id: &WindowId) -> bool {
        let Some((mut windows, index)) = self.checkout(id) else {
            trace!("maximize ignored, unknown window {}", id);
            return false;
        };

        let window = &mut windows[index];
        window.is_minimized = false;
        self.maximize.toggle(window);
        debug!("window {} maximized={}", id, window.is_maximized);

        if self.geometry.is_targeting(id) {
            self.geometry.release();
        }
        self.commit(windows);
        true
    }

    /// Un-minimize and bring to front
    pub fn restore_window(&mut self, id: &WindowId) -> bool {
        let Some((mut windows, index)) = self.checkout(id) else {
            trace!("restore ignored, unknown window {}", id);
            return false;
        };

        let was_minimized = std::mem::replace(&mut windows[index].is_minimized, false);
        let raised = focus::raise(&mut windows, index, &mut self.z_order);
        if !was_minimized && !raised {
            return false;
        }

        debug!("restored window {} z={}", id, windows[index].z_index);
        self.commit(windows);
        true
    }

    pub fn focus_window(&mut self, id: &WindowId) -> bool {
        let Some((mut windows, index)) = self.checkout(id) else {
            trace!("focus ignored, unknown window {}", id);
            return false;
        };
        if windows[index].is_minimized {
            warn!("focus ignored, window {} is minimized", id);
            return false;
        }
        if !focus::raise(&mut windows, index, &mut self.z_order) {
            return false;
        }

        debug!("focused window {} z={}", id, windows[index].z_index);
        self.commit(windows);
        true
    }

    /// Background click: nothing is active, stacking stays as it is
    pub fn clear_focus(&mut self) -> bool {
        if self.snapshot.active().is_none() {
            return false;
        }
        let mut windows = self.snapshot.windows.to_vec();
        for window in windows.iter_mut() {
            window.is_active = false;
        }
        debug!("cleared focus");
        self.commit(windows);
        true
    }

    pub fn update_window_position(&mut self, id: &WindowId, position: Position) -> bool {
        self.apply_geometry(
            id,
            GeometryUpdate {
                size: None,
                position: Some(position),
            },
        )
    }

    pub fn update_window_size(&mut self, id: &WindowId, size: Size) -> bool {
        self.apply_geometry(
            id,
            GeometryUpdate {
                size: Some(size),
                position: None,
            },
        )
    }

    /// Commit size and position together. Maximized windows are left alone;
    /// the minimum size and the top edge are re-asserted.
    fn apply_geometry(&mut self, id: &WindowId, update: GeometryUpdate) -> bool {
        let Some((mut windows, index)) = self.checkout(id) else {
            return false;
        };
        let window = &mut windows[index];
        if window.is_maximized {
            trace!("geometry update ignored, window {} is maximized", id);
            return false;
        }

        let before = window.geometry();
        if let Some(size) = update.size {
            window.size = size.at_least(window.min_size);
        }
        if let Some(position) = update.position {
            window.position = position.below_top();
        }
        if window.geometry() == before {
            return false;
        }

        self.commit(windows);
        true
    }

    /// Merge an application payload update. A payload for a different
    /// application is dropped.
    pub fn update_window_data(&mut self, id: &WindowId, data: AppData) -> bool {
        let Some((mut windows, index)) = self.checkout(id) else {
            return false;
        };
        let window = &mut windows[index];
        if !window.data.merge(data) {
            warn!(
                "payload update for window {} ignored, window belongs to {:?}",
                id, window.app_type
            );
            return false;
        }

        self.commit(windows);
        true
    }

    pub fn update_window_title(&mut self, id: &WindowId, title: impl Into<String>) -> bool {
        let Some((mut windows, index)) = self.checkout(id) else {
            return false;
        };
        let title = title.into();
        if windows[index].title == title {
            return false;
        }
        windows[index].title = title;
        self.commit(windows);
        true
    }

    /// Record the host viewport. Maximized windows are only re-fitted when
    /// the config asks for it; otherwise the next maximize picks it up.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if self.maximize.viewport() == viewport {
            return false;
        }
        self.maximize.set_viewport(viewport);
        debug!("viewport {}x{}", viewport.width, viewport.height);

        if !self.config.refit_maximized_on_resize {
            return false;
        }
        let mut windows = self.snapshot.windows.to_vec();
        let mut changed = false;
        for window in windows.iter_mut() {
            changed |= self.maximize.refit(window);
        }
        if changed {
            self.commit(windows);
        }
        changed
    }

    pub fn begin_drag(&mut self, id: &WindowId, pointer: Point) -> bool {
        match self.snapshot.get(id) {
            Some(window) => self.geometry.begin_drag(window, pointer),
            None => false,
        }
    }

    pub fn begin_resize(&mut self, id: &WindowId, edge: ResizeEdge, pointer: Point) -> bool {
        match self.snapshot.get(id) {
            Some(window) => self.geometry.begin_resize(window, edge, pointer),
            None => false,
        }
    }

    /// Drive the active gesture. Returns true when geometry changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(target) = self.geometry.target().cloned() else {
            return false;
        };
        let Some(window) = self.snapshot.get(&target) else {
            // Closed mid-gesture
            self.geometry.release();
            return false;
        };
        let Some(update) = self.geometry.pointer_move(window, pointer) else {
            return false;
        };
        self.apply_geometry(&target, update)
    }

    /// End the active gesture, if any
    pub fn pointer_up(&mut self) -> bool {
        self.geometry.release()
    }

    /// Route one pointer event. Returns true when a snapshot was committed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::DragStart { window_id, pointer } => {
                self.begin_drag(&window_id, pointer);
                false
            }
            PointerEvent::ResizeStart {
                window_id,
                edge,
                pointer,
            } => {
                self.begin_resize(&window_id, edge, pointer);
                false
            }
            PointerEvent::Move { pointer } => self.pointer_move(pointer),
            PointerEvent::Up => {
                self.pointer_up();
                false
            }
        }
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WmConfig::default())
    }
}
