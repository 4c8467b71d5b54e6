// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Component: the component-side glue over [`canopy_validation`].
//!
//! Where `canopy_validation` is a self-contained per-graph engine, this
//! crate wires graphs into a UI:
//!
//! - [`flags`]: the standard flags every component shares (styles, size
//!   constraints, layout, ...) plus the default [`flags::BUBBLING`] and
//!   [`flags::CASCADING`] propagation sets.
//! - [`Component`]: one validation graph plus its propagation
//!   configuration; [`Validatable`] is the trait face of it.
//! - [`ComponentTree`]: the arena of components, routing invalidation up
//!   (bubbling) and down (cascading) the hierarchy, synchronously.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_component::{Component, ComponentTree, Validatable, flags};
//! use canopy_validation::ValidationNode;
//!
//! fn panel() -> Component {
//!     let mut component = Component::new();
//!     let graph = component.graph_mut();
//!     graph.add_node(
//!         ValidationNode::new(flags::STYLES)
//!             .named("styles")
//!             .invalidates(flags::LAYOUT.into_set()),
//!         |_| { /* resolve style rules */ },
//!     ).unwrap();
//!     graph.add_node(
//!         ValidationNode::new(flags::LAYOUT)
//!             .named("layout")
//!             .depends_on(flags::STYLES.into_set()),
//!         |_| { /* position children */ },
//!     ).unwrap();
//!     component
//! }
//!
//! let mut tree = ComponentTree::new();
//! let root = tree.insert(None, panel());
//! let child = tree.insert(Some(root), panel());
//! tree.validate_all()?;
//!
//! // Styles cascade downward by default: restyle the root and the child's
//! // styles (and therefore its layout) go stale with it.
//! tree.invalidate(root, flags::STYLES.into_set());
//! assert!(!tree.is_valid(child, flags::STYLES));
//! assert!(!tree.is_valid(child, flags::LAYOUT));
//! tree.validate_all()?;
//! # Ok::<(), canopy_validation::GraphError>(())
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod component;
pub mod flags;
mod tree;

pub use component::{Component, Validatable};
pub use tree::{ComponentId, ComponentTree};
