//! TOML-based custom transition profile loading
//!
//! Hosts can define their own transition profiles declaratively instead
//! of writing profile functions. A profile file names the profile and
//! describes one track per animated field; each track lists breakpoint
//! offsets relative to the scene's own index and the output value at
//! each offset. Outputs may reference the measured layout so a profile
//! can slide by container width or height.

use crate::card::for_initial;
use crate::range::RangeMapping;
use crate::style::{StyleDescriptor, StyleValue};
use cardflow_core::{CardflowError, Direction, Layout, NavigationState, Result, Scene};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One output value of a custom track, resolved against the measured
/// layout at instantiation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputValue {
    /// A plain number in logical units
    Literal { value: f64 },
    /// `layout.width * scale + offset`
    Width {
        #[serde(default = "default_scale")]
        scale: f64,
        #[serde(default)]
        offset: f64,
    },
    /// `layout.height * scale + offset`
    Height {
        #[serde(default = "default_scale")]
        scale: f64,
        #[serde(default)]
        offset: f64,
    },
}

fn default_scale() -> f64 {
    1.0
}

impl OutputValue {
    fn resolve(&self, layout: &Layout) -> Result<f64> {
        let resolved = match self {
            OutputValue::Literal { value } => *value,
            OutputValue::Width { scale, offset } => {
                if !layout.width.is_finite() {
                    return Err(CardflowError::NonFiniteDimension {
                        field: "width",
                        value: layout.width,
                    });
                }
                layout.width * scale + offset
            }
            OutputValue::Height { scale, offset } => {
                if !layout.height.is_finite() {
                    return Err(CardflowError::NonFiniteDimension {
                        field: "height",
                        value: layout.height,
                    });
                }
                layout.height * scale + offset
            }
        };
        Ok(resolved)
    }
}

/// One animated field of a custom profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackDef {
    /// Constant value, shorthand `fixed = 0.0`
    Fixed { fixed: f64 },
    /// Breakpoint ramp relative to the scene's index
    Ramp {
        offsets: Vec<f64>,
        values: Vec<OutputValue>,
        /// Negate resolved outputs under right-to-left direction
        #[serde(default)]
        mirrored: bool,
    },
}

impl TrackDef {
    /// Constant-zero track, the default for absent translate tracks.
    pub fn zero() -> Self {
        TrackDef::Fixed { fixed: 0.0 }
    }

    /// Constant-one track, the default for an absent opacity track.
    pub fn opaque() -> Self {
        TrackDef::Fixed { fixed: 1.0 }
    }

    fn validate(&self, profile: &str, track: &str) -> Result<()> {
        let TrackDef::Ramp { offsets, values, .. } = self else {
            return Ok(());
        };
        if offsets.is_empty() || values.is_empty() {
            return Err(CardflowError::ProfileError(format!(
                "Profile '{}' track '{}' has no breakpoints",
                profile, track
            )));
        }
        if offsets.len() != values.len() {
            return Err(CardflowError::BreakpointLengthMismatch {
                input: offsets.len(),
                output: values.len(),
            });
        }
        for i in 1..offsets.len() {
            let (prev, next) = (offsets[i - 1], offsets[i]);
            if !(next >= prev) {
                return Err(CardflowError::NonMonotonicBreakpoints {
                    index: i,
                    prev,
                    next,
                });
            }
        }
        Ok(())
    }

    fn instantiate(
        &self,
        layout: &Layout,
        scene: &Scene,
        direction: Direction,
    ) -> Result<StyleValue> {
        match self {
            TrackDef::Fixed { fixed } => Ok(StyleValue::Fixed(*fixed)),
            TrackDef::Ramp {
                offsets,
                values,
                mirrored,
            } => {
                let input: Vec<f64> = offsets.iter().map(|o| scene.index + o).collect();
                let mut output = Vec::with_capacity(values.len());
                for value in values {
                    let mut resolved = value.resolve(layout)?;
                    if *mirrored && direction.is_rtl() {
                        resolved = -resolved;
                    }
                    output.push(resolved);
                }
                Ok(RangeMapping::new(input, output)?.into())
            }
        }
    }
}

/// A host-defined transition profile, loadable from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDef {
    /// Name the profile is registered and resolved under
    pub name: String,
    #[serde(default = "TrackDef::opaque")]
    pub opacity: TrackDef,
    #[serde(default = "TrackDef::zero")]
    pub translate_x: TrackDef,
    #[serde(default = "TrackDef::zero")]
    pub translate_y: TrackDef,
}

impl ProfileDef {
    /// Check every precondition, naming the violated one on failure.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CardflowError::ProfileError(
                "Profile has an empty name".to_string(),
            ));
        }
        self.opacity.validate(&self.name, "opacity")?;
        self.translate_x.validate(&self.name, "translate_x")?;
        self.translate_y.validate(&self.name, "translate_y")?;
        Ok(())
    }

    /// Build the style descriptor for one scene.
    ///
    /// Same contract as the built-in profiles: an unmeasured layout
    /// returns the static fallback, and direction is read fresh from
    /// the caller on every call.
    pub fn instantiate(
        &self,
        layout: &Layout,
        navigation: &NavigationState,
        scene: &Scene,
        direction: Direction,
    ) -> Result<StyleDescriptor> {
        if !layout.is_measured {
            return Ok(for_initial(navigation, scene));
        }
        Ok(StyleDescriptor {
            opacity: self.opacity.instantiate(layout, scene, direction)?,
            translate_x: self.translate_x.instantiate(layout, scene, direction)?,
            translate_y: self.translate_y.instantiate(layout, scene, direction)?,
        })
    }
}

/// Load a transition profile from a `.profile.toml` file.
///
/// The file format mirrors the `ProfileDef` struct:
/// ```toml
/// name = "slide_up_fast"
///
/// [translate_y]
/// offsets = [-1.0, 0.0, 1.0]
/// values = [{ type = "Height" },
///           { type = "Literal", value = 0.0 },
///           { type = "Literal", value = 0.0 }]
/// ```
pub fn load_profile_from_file(path: &Path) -> Result<ProfileDef> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CardflowError::ProfileError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    load_profile_from_str(&content)
}

/// Parse and validate a transition profile from a TOML string.
pub fn load_profile_from_str(content: &str) -> Result<ProfileDef> {
    let profile: ProfileDef = toml::from_str(content)?;
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_profile() {
        let toml_str = r#"
name = "slide_up_fast"

[translate_y]
offsets = [-1.0, 0.0, 1.0]
values = [{ type = "Height" },
          { type = "Literal", value = 0.0 },
          { type = "Literal", value = 0.0 }]
"#;
        let profile = load_profile_from_str(toml_str).unwrap();
        assert_eq!(profile.name, "slide_up_fast");
        // Absent tracks take their defaults
        assert_eq!(profile.opacity, TrackDef::opaque());
        assert_eq!(profile.translate_x, TrackDef::zero());
    }

    #[test]
    fn instantiated_profile_resolves_layout_references() {
        let toml_str = r#"
name = "slide_up_fast"

[translate_y]
offsets = [-1.0, 0.0, 1.0]
values = [{ type = "Height", scale = 0.5 },
          { type = "Literal", value = 0.0 },
          { type = "Literal", value = 0.0 }]
"#;
        let profile = load_profile_from_str(toml_str).unwrap();
        let layout = Layout::measured(320.0, 600.0);
        let nav = NavigationState::new(2.0);
        let scene = Scene::new(2.0);

        let style = profile
            .instantiate(&layout, &nav, &scene, Direction::LeftToRight)
            .unwrap();
        assert_eq!(style.sample(1.0).translate_y, 300.0);
        assert_eq!(style.sample(2.0).translate_y, 0.0);
        assert_eq!(style.sample(2.0).opacity, 1.0);
    }

    #[test]
    fn mirrored_track_negates_under_rtl() {
        let toml_str = r#"
name = "slide_side"

[translate_x]
mirrored = true
offsets = [-1.0, 0.0]
values = [{ type = "Width", offset = 30.0 },
          { type = "Literal", value = 0.0 }]
"#;
        let profile = load_profile_from_str(toml_str).unwrap();
        let layout = Layout::measured(320.0, 600.0);
        let nav = NavigationState::new(1.0);
        let scene = Scene::new(1.0);

        let ltr = profile
            .instantiate(&layout, &nav, &scene, Direction::LeftToRight)
            .unwrap();
        assert_eq!(ltr.sample(0.0).translate_x, 350.0);

        let rtl = profile
            .instantiate(&layout, &nav, &scene, Direction::RightToLeft)
            .unwrap();
        assert_eq!(rtl.sample(0.0).translate_x, -350.0);
    }

    #[test]
    fn fixed_shorthand_accepted() {
        let toml_str = r#"
name = "dimmed"

[opacity]
fixed = 0.5
"#;
        let profile = load_profile_from_str(toml_str).unwrap();
        assert_eq!(profile.opacity, TrackDef::Fixed { fixed: 0.5 });
    }

    #[test]
    fn unmeasured_layout_falls_back() {
        let toml_str = r#"
name = "slide_side"

[translate_x]
offsets = [-1.0, 0.0]
values = [{ type = "Width" }, { type = "Literal", value = 0.0 }]
"#;
        let profile = load_profile_from_str(toml_str).unwrap();
        let nav = NavigationState::new(0.0);
        let scene = Scene::new(1.0);

        let style = profile
            .instantiate(&Layout::unmeasured(), &nav, &scene, Direction::LeftToRight)
            .unwrap();
        assert_eq!(style, for_initial(&nav, &scene));
    }

    #[test]
    fn reject_non_monotonic_offsets() {
        let toml_str = r#"
name = "bad"

[opacity]
offsets = [0.0, 1.0, 0.5]
values = [{ type = "Literal", value = 0.0 },
          { type = "Literal", value = 1.0 },
          { type = "Literal", value = 0.0 }]
"#;
        let err = load_profile_from_str(toml_str).unwrap_err();
        assert!(matches!(
            err,
            CardflowError::NonMonotonicBreakpoints { index: 2, .. }
        ));
    }

    #[test]
    fn reject_length_mismatch() {
        let toml_str = r#"
name = "bad"

[opacity]
offsets = [0.0, 1.0]
values = [{ type = "Literal", value = 0.0 }]
"#;
        let err = load_profile_from_str(toml_str).unwrap_err();
        assert!(matches!(
            err,
            CardflowError::BreakpointLengthMismatch { input: 2, output: 1 }
        ));
    }

    #[test]
    fn reject_empty_name() {
        let toml_str = r#"
name = ""
"#;
        let err = load_profile_from_str(toml_str).unwrap_err();
        assert!(matches!(err, CardflowError::ProfileError(_)));
    }
}
