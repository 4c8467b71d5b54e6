// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Validation: a bit-flag validation graph for retained-mode UIs.
//!
//! Components in a retained-mode UI derive a lot of state lazily: styles,
//! size constraints, layout, transforms, color, render context. This crate
//! provides the dependency/invalidation engine that decides *when* that
//! derived state must be recomputed and in *what order*:
//!
//! - **Flags** ([`Flag`], [`FlagSet`]): single bits in a 32-bit space, one
//!   per kind of derived state.
//! - **Nodes** ([`ValidationNode`]): one declared unit of computation per
//!   flag, with explicit dependency and dependent masks and an update
//!   callback.
//! - **The graph** ([`ValidationGraph`]): the scheduler. Tracks a single
//!   invalid bitmask, propagates invalidation through dependent edges, and
//!   revalidates in dependency order, each node exactly once per
//!   invalidation cycle.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_validation::{Flag, ValidationGraph, ValidationNode};
//!
//! const STYLES: Flag = Flag::new(0);
//! const SIZE_CONSTRAINTS: Flag = Flag::new(1);
//! const LAYOUT: Flag = Flag::new(2);
//!
//! let mut graph = ValidationGraph::new();
//! graph.add_node(
//!     ValidationNode::new(STYLES)
//!         .named("styles")
//!         .invalidates(SIZE_CONSTRAINTS.into_set()),
//!     |_| { /* recompute styles */ },
//! )?;
//! graph.add_node(
//!     ValidationNode::new(SIZE_CONSTRAINTS)
//!         .named("size_constraints")
//!         .depends_on(STYLES.into_set())
//!         .invalidates(LAYOUT.into_set()),
//!     |_| { /* remeasure */ },
//! )?;
//! graph.add_node(
//!     ValidationNode::new(LAYOUT)
//!         .named("layout")
//!         .depends_on(SIZE_CONSTRAINTS.into_set()),
//!     |_| { /* relayout */ },
//! )?;
//!
//! // Everything starts invalid; the first validation runs all three, in
//! // dependency order.
//! graph.validate_all()?;
//!
//! // A style mutation invalidates the whole chain downstream of it...
//! let changed = graph.invalidate(STYLES.into_set());
//! assert_eq!(graph.describe(changed), "styles,size_constraints,layout");
//!
//! // ...and a second invalidation before the next validate is a no-op.
//! assert!(graph.invalidate(STYLES.into_set()).is_empty());
//! # Ok::<(), canopy_validation::GraphError>(())
//! ```
//!
//! ## Model
//!
//! Dependencies point backward (must be valid first); dependents point
//! forward (must be invalidated together). Both are plain bitmasks on each
//! node, declared explicitly and never inferred, so propagation is a scan
//! over a handful of node entries rather than a traversal of a built
//! adjacency structure. Typical graphs hold 8-16 nodes per component;
//! the flag space is capped at 32 bits and checked at construction.
//!
//! Invalidation is idempotent: flags already invalid contribute nothing,
//! which bounds propagation even when dependent masks form a cycle.
//! Validation scans nodes in insertion order until no targeted flag remains
//! invalid; a pass that makes no progress reports
//! [`GraphError::CyclicDependency`] rather than leaving state silently
//! half-valid.
//!
//! ## Re-entrancy
//!
//! Update callbacks receive the graph's [`ValidationState`] and may
//! invalidate flags (their own included) while a validation pass is
//! running; the pass operates on the live bitmask and picks the new work
//! up. This is how, for example, a layout validator asks for properties to
//! be recomputed mid-pass.
//!
//! Everything is single-threaded and synchronous: "lazy" means
//! deferred-until-validate, not asynchronous.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod error;
mod flag;
mod graph;
mod node;

pub use error::GraphError;
pub use flag::{Flag, FlagSet, FlagSetIter, MAX_FLAGS};
pub use graph::{ValidateCallback, ValidationGraph, ValidationState};
pub use node::ValidationNode;
