// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for graph construction and validation.

use core::fmt;

use crate::flag::{Flag, FlagSet};

/// Errors reported by [`ValidationGraph`](crate::ValidationGraph) and
/// [`Flag`] construction.
///
/// The first three variants are construction-time programmer errors: they
/// indicate a bug in how a component wires its own graph and surface
/// immediately from [`Flag::from_bits`] or
/// [`ValidationGraph::add_node`](crate::ValidationGraph::add_node).
/// [`CyclicDependency`](Self::CyclicDependency) is reported by
/// [`validate`](crate::ValidationGraph::validate) when requested flags can
/// never resolve; a correctly wired graph never produces it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A raw flag value was zero or had more than one bit set.
    InvalidFlag {
        /// The offending raw bits.
        bits: u32,
    },
    /// A node was added for a flag already declared in the graph.
    DuplicateFlag {
        /// The flag that was declared twice.
        flag: Flag,
    },
    /// A node declared dependencies on flags not yet present in the graph.
    ///
    /// Only reported when the node requires all dependencies to be declared
    /// up front (the default). See
    /// [`ValidationNode::allow_forward_references`](crate::ValidationNode::allow_forward_references).
    UnknownDependencies {
        /// The flag of the node being added.
        flag: Flag,
        /// The dependency flags that were not found.
        missing: FlagSet,
    },
    /// `validate` could not make progress on the remaining invalid flags.
    ///
    /// Either the requested flags form a dependency cycle, a dependency was
    /// never declared, or a callback re-invalidates its own flag without end.
    CyclicDependency {
        /// The requested flags that were still invalid when progress stopped.
        remaining: FlagSet,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFlag { bits } => {
                write!(f, "value {bits:#x} is not a single-bit flag")
            }
            Self::DuplicateFlag { flag } => {
                write!(f, "flag {flag:?} is already declared in this graph")
            }
            Self::UnknownDependencies { flag, missing } => {
                write!(
                    f,
                    "node {flag:?} depends on flags not yet declared: {missing:?}"
                )
            }
            Self::CyclicDependency { remaining } => {
                write!(
                    f,
                    "validation cannot make progress; still invalid: {remaining:?}"
                )
            }
        }
    }
}

impl core::error::Error for GraphError {}
