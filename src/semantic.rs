//! Semantic diagram model types.
//!
//! This module contains the transient in-memory representation of an
//! architecture diagram before it is lowered to Graphviz DOT.
//!
//! # Pipeline Position
//!
//! ```text
//! Architecture description (architecture module)
//!     ↓ construct + validate
//! Semantic Model (these types) - validated node and relation references
//!     ↓ export::dot
//! DOT Graph
//!     ↓ export::graphviz
//! PNG / SVG
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - Core diagram structures: [`Diagram`], [`Cluster`]
//! - [`element`] - Diagram elements: [`Node`], [`Relation`], [`ServiceKind`], [`LineStyle`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
