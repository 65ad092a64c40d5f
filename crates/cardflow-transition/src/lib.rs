//! Progress-to-style mapping for card-stack navigation transitions
//!
//! Provides two layers:
//! - **Mapping**: a declarative piecewise-linear breakpoint mapping
//!   (`RangeMapping`) plus pure evaluation, clamped at both ends
//! - **Profiles**: the card-stack transition styles (horizontal slide,
//!   vertical slide, fade-from-bottom) built on top of it, along with a
//!   registry for resolving profiles by name and a TOML loader for
//!   host-defined custom profiles
//!
//! Every function here is a pure function of its inputs; the host owns
//! the position signal, layout measurement, and rendering.

pub mod card;
pub mod loader;
pub mod range;
pub mod registry;
pub mod style;

pub use card::{
    can_use_native_driver, for_fade_from_bottom_android, for_horizontal, for_initial, for_vertical,
};
pub use loader::{load_profile_from_file, load_profile_from_str, OutputValue, ProfileDef, TrackDef};
pub use range::RangeMapping;
pub use registry::TransitionRegistry;
pub use style::{SampledStyle, StyleDescriptor, StyleValue};
