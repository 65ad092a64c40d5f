//! Style descriptor types — the output contract with the rendering host

use crate::range::RangeMapping;
use serde::{Deserialize, Serialize};

/// One animatable style field: either a static number or a live
/// breakpoint mapping the host re-evaluates against its position signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Fixed(f64),
    Range(RangeMapping),
}

impl StyleValue {
    /// Evaluate this field at a position snapshot.
    pub fn sample(&self, position: f64) -> f64 {
        match self {
            StyleValue::Fixed(v) => *v,
            StyleValue::Range(mapping) => mapping.evaluate(position),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Fixed(v)
    }
}

impl From<RangeMapping> for StyleValue {
    fn from(mapping: RangeMapping) -> Self {
        StyleValue::Range(mapping)
    }
}

/// The style a profile computes for one scene: opacity plus a 2D
/// translation. Fields may be static or position-driven mappings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub opacity: StyleValue,
    pub translate_x: StyleValue,
    pub translate_y: StyleValue,
}

impl StyleDescriptor {
    /// Resolve every field at a position snapshot.
    ///
    /// Hosts that evaluate the mappings themselves (driving a compositor
    /// directly from the descriptor) never need this; it exists for
    /// hosts that consume concrete numbers per frame.
    pub fn sample(&self, position: f64) -> SampledStyle {
        SampledStyle {
            opacity: self.opacity.sample(position),
            translate_x: self.translate_x.sample(position),
            translate_y: self.translate_y.sample(position),
        }
    }
}

/// A fully resolved style at one position snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampledStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_value_samples_unchanged() {
        let v = StyleValue::Fixed(0.25);
        assert_eq!(v.sample(-10.0), 0.25);
        assert_eq!(v.sample(10.0), 0.25);
    }

    #[test]
    fn range_value_agrees_with_mapping() {
        let mapping = RangeMapping::new(vec![0.0, 1.0], vec![0.0, 100.0]).unwrap();
        let v = StyleValue::from(mapping.clone());
        assert_eq!(v.sample(0.5), mapping.evaluate(0.5));
        assert_eq!(v.sample(0.5), 50.0);
    }

    #[test]
    fn descriptor_samples_all_fields() {
        let descriptor = StyleDescriptor {
            opacity: StyleValue::Fixed(1.0),
            translate_x: RangeMapping::new(vec![0.0, 1.0], vec![320.0, 0.0])
                .unwrap()
                .into(),
            translate_y: StyleValue::Fixed(0.0),
        };
        let sampled = descriptor.sample(0.5);
        assert_eq!(sampled.opacity, 1.0);
        assert_eq!(sampled.translate_x, 160.0);
        assert_eq!(sampled.translate_y, 0.0);
    }
}
