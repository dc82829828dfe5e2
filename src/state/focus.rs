// Stacking order and active-window selection

use super::window::WindowEntity;
use tracing::warn;

/// Highest starting value that leaves room for `u32::MAX / 2` allocations
pub const MAX_INITIAL_Z_INDEX: u32 = u32::MAX / 2;

/// Monotonic z-index allocator. Values are never handed out twice.
#[derive(Debug, Clone)]
pub struct ZOrder {
    current: u32,
}

impl ZOrder {
    /// `initial` sits below the first allocation and is capped at
    /// `MAX_INITIAL_Z_INDEX`
    pub fn new(initial: u32) -> Self {
        Self {
            current: initial.min(MAX_INITIAL_Z_INDEX),
        }
    }

    pub fn allocate(&mut self) -> u32 {
        match self.current.checked_add(1) {
            Some(next) => self.current = next,
            None => warn!("z-index space exhausted, reusing {}", self.current),
        }
        self.current
    }

    /// Highest value handed out so far
    pub fn current(&self) -> u32 {
        self.current
    }
}

/// Index of the highest-z visible window, the successor when the active
/// window goes away
pub fn replacement(windows: &[WindowEntity]) -> Option<usize> {
    windows
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_visible())
        .max_by_key(|(_, w)| w.z_index)
        .map(|(i, _)| i)
}

/// True when `windows[index]` is already the active window on top
pub fn is_top_active(windows: &[WindowEntity], index: usize) -> bool {
    let target = &windows[index];
    target.is_active && windows.iter().all(|w| w.z_index <= target.z_index)
}

/// Make `windows[index]` the only active window and put it on top.
/// Returns false when it already was.
pub fn raise(windows: &mut [WindowEntity], index: usize, z_order: &mut ZOrder) -> bool {
    if is_top_active(windows, index) {
        return false;
    }

    let z_index = z_order.allocate();
    for (i, window) in windows.iter_mut().enumerate() {
        window.is_active = i == index;
    }
    windows[index].z_index = z_index;
    true
}

/// Hand focus to the best remaining candidate, if any
pub fn reassign(windows: &mut [WindowEntity], z_order: &mut ZOrder) -> Option<usize> {
    for window in windows.iter_mut() {
        window.is_active = false;
    }
    let index = replacement(windows)?;
    raise(windows, index, z_order);
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::window::{AppData, AppType, Position, Size, WindowId};

    fn window(z_index: u32, is_active: bool, is_minimized: bool) -> WindowEntity {
        WindowEntity {
            id: WindowId::new(),
            title: format!("z{}", z_index),
            app_type: AppType::Terminal,
            position: Position::new(0.0, 0.0),
            size: Size::new(300.0, 200.0),
            min_size: Size::new(300.0, 200.0),
            z_index,
            is_active,
            is_minimized,
            is_maximized: false,
            saved_geometry: None,
            data: AppData::Terminal { cwd: None },
        }
    }

    #[test]
    fn test_allocation_starts_above_initial() {
        let mut z = ZOrder::new(100);
        assert_eq!(z.allocate(), 101);
        assert_eq!(z.allocate(), 102);
        assert_eq!(z.current(), 102);
    }

    #[test]
    fn test_initial_value_is_capped() {
        let mut z = ZOrder::new(u32::MAX);
        assert_eq!(z.current(), MAX_INITIAL_Z_INDEX);
        assert_eq!(z.allocate(), MAX_INITIAL_Z_INDEX + 1);
        assert!(z.allocate() > MAX_INITIAL_Z_INDEX + 1);
    }

    #[test]
    fn test_replacement_skips_minimized() {
        let windows = vec![
            window(101, false, false),
            window(103, false, true),
            window(102, false, false),
        ];
        assert_eq!(replacement(&windows), Some(2));

        let hidden = vec![window(101, false, true)];
        assert_eq!(replacement(&hidden), None);
    }

    #[test]
    fn test_raise_is_idempotent_for_top_window() {
        let mut z = ZOrder::new(102);
        let mut windows = vec![window(101, false, false), window(102, true, false)];

        assert!(!raise(&mut windows, 1, &mut z));
        assert_eq!(z.current(), 102);

        assert!(raise(&mut windows, 0, &mut z));
        assert_eq!(windows[0].z_index, 103);
        assert!(windows[0].is_active);
        assert!(!windows[1].is_active);
    }

    #[test]
    fn test_reassign_with_nothing_visible() {
        let mut z = ZOrder::new(101);
        let mut windows = vec![window(101, true, true)];
        assert_eq!(reassign(&mut windows, &mut z), None);
        assert!(!windows[0].is_active);
        assert_eq!(z.current(), 101);
    }
}
