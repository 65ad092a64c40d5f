//! Built-in card-stack transition profiles
//!
//! Each profile is a pure function from a navigation snapshot to a
//! `StyleDescriptor`. While the container layout is unmeasured every
//! profile returns the static fallback style instead of a mapping.

use crate::range::RangeMapping;
use crate::style::{StyleDescriptor, StyleValue};
use cardflow_core::{CardflowError, Direction, Layout, NavigationState, Result, Scene, SceneIndex};

/// Translation applied to unfocused scenes before layout is measured.
/// Large enough to guarantee the scene is off-screen and non-interactive
/// without relying on opacity alone.
const OFFSCREEN_TRANSLATE: f64 = 1_000_000.0;

/// Extra width added to the horizontal slide so the card's edge shadow
/// fully exits the screen before the card disappears.
const SHADOW_MARGIN: f64 = 30.0;

/// Vertical rise of the fade-from-bottom profile, in logical units.
/// Fixed regardless of measured height.
const FADE_RISE: f64 = 50.0;

/// Input domain for every animated profile, relative to the scene's own
/// index. The 0.99 breakpoint snaps opacity/position just before the
/// scene fully departs, giving a crisper hand-off than a linear fade
/// across the whole unit interval.
fn transition_input_range(index: SceneIndex) -> Vec<f64> {
    vec![index - 1.0, index, index + 0.99, index + 1.0]
}

fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CardflowError::NonFiniteDimension { field, value })
    }
}

/// Static style used while the initial layout isn't measured yet.
///
/// The focused scene is shown in place; every other scene is fully
/// transparent and moved far off-screen. A hard cutover, not an
/// interpolation.
pub fn for_initial(navigation: &NavigationState, scene: &Scene) -> StyleDescriptor {
    let focused = navigation.index == scene.index;
    let opacity = if focused { 1.0 } else { 0.0 };
    let translate = if focused { 0.0 } else { OFFSCREEN_TRANSLATE };
    StyleDescriptor {
        opacity: StyleValue::Fixed(opacity),
        translate_x: StyleValue::Fixed(translate),
        translate_y: StyleValue::Fixed(translate),
    }
}

/// Standard iOS-style slide in from the side.
///
/// Slides in from the trailing edge for the current reading direction;
/// `direction` is read fresh from the caller on every invocation so a
/// runtime direction change mirrors the next frame.
pub fn for_horizontal(
    layout: &Layout,
    navigation: &NavigationState,
    scene: &Scene,
    direction: Direction,
) -> Result<StyleDescriptor> {
    if !layout.is_measured {
        return Ok(for_initial(navigation, scene));
    }

    let width = require_finite("width", layout.width)? + SHADOW_MARGIN;
    let input = transition_input_range(scene.index);

    let translate_x = if direction.is_rtl() {
        vec![-width, 0.0, 10.0, 10.0]
    } else {
        vec![width, 0.0, -10.0, -10.0]
    };

    Ok(StyleDescriptor {
        opacity: RangeMapping::new(input.clone(), vec![1.0, 1.0, 0.3, 0.0])?.into(),
        translate_x: RangeMapping::new(input, translate_x)?.into(),
        translate_y: StyleValue::Fixed(0.0),
    })
}

/// Standard iOS-style slide in from the bottom (used for modals).
pub fn for_vertical(
    layout: &Layout,
    navigation: &NavigationState,
    scene: &Scene,
) -> Result<StyleDescriptor> {
    if !layout.is_measured {
        return Ok(for_initial(navigation, scene));
    }

    let height = require_finite("height", layout.height)?;
    let input = transition_input_range(scene.index);

    Ok(StyleDescriptor {
        opacity: RangeMapping::new(input.clone(), vec![1.0, 1.0, 0.3, 0.0])?.into(),
        translate_x: StyleValue::Fixed(0.0),
        translate_y: RangeMapping::new(input, vec![height, 0.0, 0.0, 0.0])?.into(),
    })
}

/// Standard Android-style fade in from the bottom.
///
/// Unlike `for_vertical` the rise is a fixed 50 logical units rather
/// than the measured height, and the fade is symmetric on both sides of
/// focus.
pub fn for_fade_from_bottom_android(
    layout: &Layout,
    navigation: &NavigationState,
    scene: &Scene,
) -> Result<StyleDescriptor> {
    if !layout.is_measured {
        return Ok(for_initial(navigation, scene));
    }

    require_finite("height", layout.height)?;
    let input = transition_input_range(scene.index);

    Ok(StyleDescriptor {
        opacity: RangeMapping::new(input.clone(), vec![0.0, 1.0, 1.0, 0.0])?.into(),
        translate_x: StyleValue::Fixed(0.0),
        translate_y: RangeMapping::new(input, vec![FADE_RISE, 0.0, 0.0, 0.0])?.into(),
    })
}

/// Whether this profile family's animated property set (opacity,
/// translateX, translateY) can be handed off to an accelerated native
/// compositor. Unconditionally true; the parameter exists for interface
/// symmetry with profile families where verticality matters.
pub fn can_use_native_driver(_is_vertical: bool) -> bool {
    true
}
