//! Cardflow Core - Foundational types for the cardflow transition engine
//!
//! This crate provides the types the transition crates depend on:
//! - `Scene`, `NavigationState`, `Layout` - navigation snapshot types
//! - `Direction` - reading-direction flag, injected per call
//! - Error types and Result alias

mod error;
mod types;

pub use error::{CardflowError, Result};
pub use types::{Direction, Layout, NavigationState, Scene, SceneIndex};
