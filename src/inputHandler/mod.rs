// Input handler module for pointer-driven window gestures
// Handles title-bar drags and edge/corner resizes with screen-space clamping

pub mod geometry;
pub mod types;

pub use geometry::GeometryEngine;
pub use types::*;
