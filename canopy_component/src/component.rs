// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-component wrapper around a validation graph.

use canopy_validation::{Flag, FlagSet, GraphError, ValidationGraph};

use crate::flags;

/// Capability interface for anything that owns validatable derived state.
///
/// Implemented by [`Component`]; layout drivers and style cascaders work
/// against this trait so they can be tested with lightweight fakes.
pub trait Validatable {
    /// Returns `true` if the flag is currently valid.
    fn is_valid(&self, flag: Flag) -> bool;

    /// Marks flags invalid, propagating through declared dependents.
    /// Returns the flags that actually transitioned.
    fn invalidate(&mut self, flags: FlagSet) -> FlagSet;

    /// Brings the requested flags and their dependencies up to date.
    /// Returns the flags that actually transitioned.
    ///
    /// # Errors
    ///
    /// [`GraphError::CyclicDependency`] if the requested flags can never
    /// resolve.
    fn validate(&mut self, flags: FlagSet) -> Result<FlagSet, GraphError>;

    /// Validates every declared flag.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    fn validate_all(&mut self) -> Result<FlagSet, GraphError> {
        self.validate(FlagSet::ALL)
    }
}

/// One UI component's validation state and propagation configuration.
///
/// Each component owns exactly one [`ValidationGraph`]; graphs are never
/// shared. Cross-component effects (bubbling and cascading) are wired by
/// [`ComponentTree`](crate::ComponentTree) using the three flag sets held
/// here:
///
/// - [`bubbling`](Self::bubbling): child-side flags whose invalidation
///   notifies the parent by invalidating the parent's
///   [`bubble_target`](Self::bubble_target).
/// - [`cascading`](Self::cascading): flags that re-invalidate on every
///   child when they transition on this component.
///
/// The defaults come from [`flags::BUBBLING`], [`flags::SIZE_CONSTRAINTS`],
/// and [`flags::CASCADING`].
///
/// # Example
///
/// ```
/// use canopy_component::{Component, Validatable, flags};
/// use canopy_validation::ValidationNode;
///
/// let mut component = Component::new();
/// component.graph_mut().add_node(
///     ValidationNode::new(flags::LAYOUT).named("layout"),
///     |_| { /* relayout */ },
/// )?;
///
/// assert!(!component.is_valid(flags::LAYOUT));
/// component.validate_all()?;
/// assert!(component.is_valid(flags::LAYOUT));
/// # Ok::<(), canopy_validation::GraphError>(())
/// ```
#[derive(Debug)]
pub struct Component {
    graph: ValidationGraph,
    bubbling: FlagSet,
    bubble_target: Flag,
    cascading: FlagSet,
}

impl Default for Component {
    fn default() -> Self {
        Self::new()
    }
}

impl Component {
    /// Creates a component with an empty graph and default propagation sets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_graph(ValidationGraph::new())
    }

    /// Creates a component around an already-wired graph.
    #[must_use]
    pub fn with_graph(graph: ValidationGraph) -> Self {
        Self {
            graph,
            bubbling: flags::BUBBLING,
            bubble_target: flags::SIZE_CONSTRAINTS,
            cascading: flags::CASCADING,
        }
    }

    /// Returns the component's validation graph.
    #[must_use]
    pub fn graph(&self) -> &ValidationGraph {
        &self.graph
    }

    /// Returns the component's validation graph mutably, for wiring nodes.
    #[must_use]
    pub fn graph_mut(&mut self) -> &mut ValidationGraph {
        &mut self.graph
    }

    /// Returns the flags that bubble to the parent when they transition here.
    #[must_use]
    pub fn bubbling(&self) -> FlagSet {
        self.bubbling
    }

    /// Replaces the bubbling flag set.
    pub fn set_bubbling(&mut self, bubbling: FlagSet) {
        self.bubbling = bubbling;
    }

    /// Returns the parent-side flag invalidated when this component bubbles.
    #[must_use]
    pub fn bubble_target(&self) -> Flag {
        self.bubble_target
    }

    /// Replaces the bubble target flag.
    pub fn set_bubble_target(&mut self, target: Flag) {
        self.bubble_target = target;
    }

    /// Returns the flags that cascade into children when they transition here.
    #[must_use]
    pub fn cascading(&self) -> FlagSet {
        self.cascading
    }

    /// Replaces the cascading flag set.
    pub fn set_cascading(&mut self, cascading: FlagSet) {
        self.cascading = cascading;
    }
}

impl Validatable for Component {
    fn is_valid(&self, flag: Flag) -> bool {
        self.graph.is_valid(flag)
    }

    fn invalidate(&mut self, flags: FlagSet) -> FlagSet {
        self.graph.invalidate(flags)
    }

    fn validate(&mut self, flags: FlagSet) -> Result<FlagSet, GraphError> {
        self.graph.validate(flags)
    }
}
