//! Named profile resolution — built-ins plus host-registered customs

use crate::card::{for_fade_from_bottom_android, for_horizontal, for_vertical};
use crate::loader::ProfileDef;
use crate::style::StyleDescriptor;
use cardflow_core::{CardflowError, Direction, Layout, NavigationState, Result, Scene};
use std::collections::HashMap;

/// Names the built-in profiles resolve under.
pub const HORIZONTAL: &str = "horizontal";
pub const VERTICAL: &str = "vertical";
pub const FADE_FROM_BOTTOM: &str = "fade_from_bottom";

/// Profile registry — resolves transition profiles by name.
///
/// The built-in profile names are always available; custom profiles can
/// be registered on top and shadow a built-in of the same name.
pub struct TransitionRegistry {
    profiles: HashMap<String, ProfileDef>,
}

impl TransitionRegistry {
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Register a custom profile. Overwrites any existing profile with
    /// the same name. The profile must already be validated.
    pub fn add_profile(&mut self, profile: ProfileDef) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Look up a custom profile by name.
    pub fn get_profile(&self, name: &str) -> Option<&ProfileDef> {
        self.profiles.get(name)
    }

    /// Check if a name resolves, either to a custom or built-in profile.
    pub fn has_profile(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
            || matches!(name, HORIZONTAL | VERTICAL | FADE_FROM_BOTTOM)
    }

    /// Number of registered custom profiles.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Resolve a profile by name and build the style descriptor for one
    /// scene. Custom profiles take precedence over built-ins.
    pub fn resolve(
        &self,
        name: &str,
        layout: &Layout,
        navigation: &NavigationState,
        scene: &Scene,
        direction: Direction,
    ) -> Result<StyleDescriptor> {
        if let Some(profile) = self.profiles.get(name) {
            return profile.instantiate(layout, navigation, scene, direction);
        }
        match name {
            HORIZONTAL => for_horizontal(layout, navigation, scene, direction),
            VERTICAL => for_vertical(layout, navigation, scene),
            FADE_FROM_BOTTOM => for_fade_from_bottom_android(layout, navigation, scene),
            _ => Err(CardflowError::ProfileNotFound(name.to_string())),
        }
    }
}

impl Default for TransitionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
