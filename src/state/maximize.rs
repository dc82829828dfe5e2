// Maximize/restore toggling with saved geometry

use super::window::{Geometry, Position, Size, Viewport, WindowEntity};

/// Computes the full-screen geometry and moves windows in and out of it.
#[derive(Debug, Clone)]
pub struct MaximizeController {
    viewport: Viewport,
    taskbar_height: f64,
}

impl MaximizeController {
    pub fn new(viewport: Viewport, taskbar_height: f64) -> Self {
        Self {
            viewport,
            taskbar_height,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Full viewport minus the taskbar, never below the window's minimum
    pub fn target(&self, min_size: Size) -> Geometry {
        Geometry {
            position: Position::new(0.0, 0.0),
            size: Size::new(
                self.viewport.width,
                self.viewport.height - self.taskbar_height,
            )
            .at_least(min_size),
        }
    }

    /// Flip between normal and maximized
    pub fn toggle(&self, window: &mut WindowEntity) {
        if window.is_maximized {
            self.restore(window);
        } else {
            self.maximize(window);
        }
    }

    pub fn maximize(&self, window: &mut WindowEntity) {
        let target = self.target(window.min_size);
        // A double maximize must not overwrite the real saved geometry
        if window.geometry() != target {
            window.saved_geometry = Some(window.geometry());
        }
        window.set_geometry(target);
        window.is_maximized = true;
    }

    /// Leave maximized state. Geometry is only touched if some was saved.
    pub fn restore(&self, window: &mut WindowEntity) {
        if let Some(saved) = window.saved_geometry.take() {
            window.set_geometry(saved);
        }
        window.is_maximized = false;
    }

    /// Snap an already-maximized window to the current viewport.
    /// Returns false when it already fits.
    pub fn refit(&self, window: &mut WindowEntity) -> bool {
        let target = self.target(window.min_size);
        if !window.is_maximized || window.geometry() == target {
            return false;
        }
        window.set_geometry(target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::window::{AppData, AppType, WindowId};

    fn window(x: f64, y: f64, width: f64, height: f64) -> WindowEntity {
        WindowEntity {
            id: WindowId::new(),
            title: "Browser".into(),
            app_type: AppType::Browser,
            position: Position::new(x, y),
            size: Size::new(width, height),
            min_size: Size::new(300.0, 200.0),
            z_index: 101,
            is_active: true,
            is_minimized: false,
            is_maximized: false,
            saved_geometry: None,
            data: AppData::Browser { initial_url: None },
        }
    }

    #[test]
    fn test_maximize_then_restore() {
        let controller = MaximizeController::new(Viewport::new(1280.0, 800.0), 50.0);
        let mut win = window(100.0, 100.0, 500.0, 400.0);

        controller.toggle(&mut win);
        assert!(win.is_maximized);
        assert_eq!(win.position, Position::new(0.0, 0.0));
        assert_eq!(win.size, Size::new(1280.0, 750.0));

        controller.toggle(&mut win);
        assert!(!win.is_maximized);
        assert_eq!(win.position, Position::new(100.0, 100.0));
        assert_eq!(win.size, Size::new(500.0, 400.0));
        assert!(win.saved_geometry.is_none());
    }

    #[test]
    fn test_double_maximize_keeps_saved_geometry() {
        let controller = MaximizeController::new(Viewport::new(1280.0, 800.0), 50.0);
        let mut win = window(40.0, 60.0, 640.0, 480.0);

        controller.maximize(&mut win);
        controller.maximize(&mut win);
        controller.restore(&mut win);

        assert_eq!(win.position, Position::new(40.0, 60.0));
        assert_eq!(win.size, Size::new(640.0, 480.0));
    }

    #[test]
    fn test_restore_without_saved_geometry_is_noop() {
        let controller = MaximizeController::new(Viewport::new(1280.0, 800.0), 50.0);
        let mut win = window(0.0, 0.0, 1280.0, 750.0);
        win.is_maximized = true;

        controller.restore(&mut win);
        assert!(!win.is_maximized);
        assert_eq!(win.size, Size::new(1280.0, 750.0));
    }

    #[test]
    fn test_target_respects_min_size() {
        let controller = MaximizeController::new(Viewport::new(200.0, 180.0), 50.0);
        let target = controller.target(Size::new(300.0, 200.0));
        assert_eq!(target.size, Size::new(300.0, 200.0));
    }

    #[test]
    fn test_refit_only_touches_maximized() {
        let mut controller = MaximizeController::new(Viewport::new(1280.0, 800.0), 50.0);
        let mut maximized = window(10.0, 10.0, 400.0, 300.0);
        let mut normal = window(10.0, 10.0, 400.0, 300.0);
        controller.maximize(&mut maximized);

        controller.set_viewport(Viewport::new(1920.0, 1080.0));
        assert!(controller.refit(&mut maximized));
        assert!(!controller.refit(&mut normal));
        assert_eq!(maximized.size, Size::new(1920.0, 1030.0));
        assert_eq!(normal.size, Size::new(400.0, 300.0));
    }
}
