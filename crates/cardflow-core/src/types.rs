//! Navigation snapshot types

use serde::{Deserialize, Serialize};

/// Position of a scene in the ordered stack.
///
/// Non-negative; consecutive scenes differ by exactly 1.0. The live
/// position signal interpolates continuously between these values
/// during a transition.
pub type SceneIndex = f64;

/// One navigable unit (screen/card) in the ordered stack
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// This scene's position in the stack
    pub index: SceneIndex,
}

impl Scene {
    pub const fn new(index: SceneIndex) -> Self {
        Self { index }
    }
}

/// The host navigator's current focus
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Index of the currently focused scene
    pub index: SceneIndex,
}

impl NavigationState {
    pub const fn new(index: SceneIndex) -> Self {
        Self { index }
    }
}

/// Measured container dimensions in caller-defined logical units.
///
/// `is_measured == false` means the dimensions are not yet trustworthy
/// (pre-first-render); profile functions fall back to a static style
/// until the host has completed a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub is_measured: bool,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    /// A layout whose dimensions have been determined by the host.
    pub const fn measured(width: f64, height: f64) -> Self {
        Self {
            is_measured: true,
            width,
            height,
        }
    }

    /// A layout awaiting its first measure pass. Dimensions are zero
    /// and must not be read.
    pub const fn unmeasured() -> Self {
        Self {
            is_measured: false,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Reading direction of the host UI.
///
/// Injected by the host on every call rather than read from a
/// process-wide flag, so a runtime direction change is picked up
/// immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// True for right-to-left layouts.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::RightToLeft)
    }
}
