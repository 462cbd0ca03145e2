//! Sprig: a retained-mode UI element tree scripted from embedded Lua.
//!
//! Sprig keeps a tree of UI elements in an arena owned by a [`UiEngine`],
//! and exposes that tree to Lua scripts through a [`ScriptHost`]. Drawing is
//! delegated to an external [`Painter`], so the crate carries no rendering
//! backend of its own.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`UiEngine`] - The element arena, root list and construction dispatch
//! - [`ScriptHost`] - The Lua runtime and the `ui` scripting API
//! - [`Painter`] - The trait implemented by rendering collaborators
//!
//! # Module Organization
//!
//! - [`element`] - Element attributes and the closed set of variants
//! - [`registry`] - Tree ownership and mutation
//! - [`script`] - Script execution and bindings
//! - [`paint`] - The drawing boundary
//! - [`config`] - Host configuration
//! - [`dump`] - Text rendering of the tree

#![warn(missing_docs)]

pub mod color;
pub mod config;
pub mod dump;
pub mod element;
pub mod error;
pub mod paint;
pub mod registry;
pub mod script;
/// Testing utilities.
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use color::Color;
pub use config::{HostConfig, LuaLibrary};
pub use element::{Arg, Attributes, Button, Element, ElementKind, Frame, TextLabel, VariantTag};
pub use error::{Error, Result, ScriptError, ScriptErrorKind};
pub use paint::{Painter, TextAlign};
pub use registry::{Diagnostic, DiagnosticKind, ElementId, EngineId, UiEngine};
pub use script::{CancelToken, ElementHandle, ScriptHost};
pub use sprig_geom as geom;
