// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node declarations for the validation graph.

use crate::flag::{Flag, FlagSet};

/// Declares one unit of derived computation: a flag, its edges, and how
/// strictly the graph checks them at add time.
///
/// A `ValidationNode` is pure data. Constructing one has no side effects;
/// it only takes part in scheduling once passed to
/// [`ValidationGraph::add_node`](crate::ValidationGraph::add_node) together
/// with its update callback.
///
/// Dependency and dependent masks are inverse edge sets and are declared
/// explicitly, never inferred: if `LAYOUT` depends on `SIZE_CONSTRAINTS`,
/// the `SIZE_CONSTRAINTS` node should list `LAYOUT` in
/// [`invalidates`](Self::invalidates) so invalidation propagates forward.
/// Dependent masks may freely name flags that are added later; dependency
/// masks may only do so for nodes marked
/// [`allow_forward_references`](Self::allow_forward_references).
///
/// # Example
///
/// ```
/// use canopy_validation::{Flag, ValidationNode};
///
/// const SIZE_CONSTRAINTS: Flag = Flag::new(0);
/// const LAYOUT: Flag = Flag::new(1);
///
/// let node = ValidationNode::new(LAYOUT)
///     .named("layout")
///     .depends_on(SIZE_CONSTRAINTS.into_set());
///
/// assert_eq!(node.flag(), LAYOUT);
/// assert!(node.dependencies().contains(SIZE_CONSTRAINTS));
/// assert!(node.dependents().is_empty());
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ValidationNode {
    flag: Flag,
    dependencies: FlagSet,
    dependents: FlagSet,
    name: Option<&'static str>,
    check_all_found: bool,
}

impl ValidationNode {
    /// Creates a node declaration for the given flag.
    ///
    /// Defaults: no dependencies, no dependents, no name, and dependency
    /// flags are required to already exist when the node is added.
    #[must_use]
    pub const fn new(flag: Flag) -> Self {
        Self {
            flag,
            dependencies: FlagSet::EMPTY,
            dependents: FlagSet::EMPTY,
            name: None,
            check_all_found: true,
        }
    }

    /// Declares the flags that must be valid before this node's callback runs.
    #[must_use]
    pub const fn depends_on(mut self, dependencies: FlagSet) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Declares the flags invalidated whenever this node's flag is invalidated.
    ///
    /// These are the inverse edges of [`depends_on`](Self::depends_on),
    /// stored explicitly so invalidation can propagate without a graph
    /// traversal. Bits here may name flags that are added later.
    #[must_use]
    pub const fn invalidates(mut self, dependents: FlagSet) -> Self {
        self.dependents = dependents;
        self
    }

    /// Gives the node a human-readable name, used by
    /// [`describe`](crate::ValidationGraph::describe).
    #[must_use]
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Allows [`depends_on`](Self::depends_on) to reference flags that are
    /// not yet declared in the graph.
    ///
    /// By default, adding a node whose dependencies are not all declared
    /// fails with
    /// [`GraphError::UnknownDependencies`](crate::GraphError::UnknownDependencies),
    /// which catches out-of-order wiring early. Opting out defers the check:
    /// the dependency must still be declared before `validate` can resolve
    /// this node.
    #[must_use]
    pub const fn allow_forward_references(mut self) -> Self {
        self.check_all_found = false;
        self
    }

    /// Returns the flag this node computes.
    #[must_use]
    pub const fn flag(self) -> Flag {
        self.flag
    }

    /// Returns the dependency mask.
    #[must_use]
    pub const fn dependencies(self) -> FlagSet {
        self.dependencies
    }

    /// Returns the dependent mask.
    #[must_use]
    pub const fn dependents(self) -> FlagSet {
        self.dependents
    }

    /// Returns the node's name, if one was set.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        self.name
    }

    pub(crate) const fn check_all_found(self) -> bool {
        self.check_all_found
    }
}
