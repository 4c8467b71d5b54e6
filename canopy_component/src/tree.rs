// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A component tree with bubbling and cascading invalidation.

use alloc::vec::Vec;

use canopy_validation::{Flag, FlagSet, GraphError};
use smallvec::SmallVec;

use crate::component::{Component, Validatable};

/// Handle of a component in a [`ComponentTree`].
///
/// Components live for the life of the tree (they are created once at
/// construction and disposed with the tree), so the handle is a plain
/// index with no generation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ComponentId(u32);

impl ComponentId {
    fn from_index(index: usize) -> Self {
        let Ok(index) = u32::try_from(index) else {
            panic!("component tree is full");
        };
        Self(index)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Entry {
    component: Component,
    parent: Option<ComponentId>,
    children: SmallVec<[ComponentId; 8]>,
}

/// An arena of components wired for cross-component invalidation.
///
/// The tree is the integration layer on top of the per-component
/// [`ValidationGraph`](canopy_validation::ValidationGraph): it owns the
/// parent/child relationships and pushes invalidation across them,
/// synchronously, inside the originating [`invalidate`](Self::invalidate)
/// call:
///
/// - **Bubbling**: when flags in a component's
///   [`bubbling`](Component::bubbling) set actually transition, the
///   parent's [`bubble_target`](Component::bubble_target) is invalidated,
///   and so on up the ancestor chain.
/// - **Cascading**: when flags in a component's
///   [`cascading`](Component::cascading) set transition, the same flags are
///   invalidated on every child, recursively.
///
/// Propagation is speculative-safe: a graph that does not declare a
/// propagated flag silently ignores it, and a flag that is already invalid
/// transitions nothing, which is what bounds re-entry when propagation
/// loops back around.
///
/// # Example
///
/// ```
/// use canopy_component::{Component, ComponentTree, Validatable, flags};
/// use canopy_validation::ValidationNode;
///
/// fn label() -> Component {
///     let mut c = Component::new();
///     c.graph_mut()
///         .add_node(ValidationNode::new(flags::STYLES).named("styles"), |_| {})
///         .unwrap();
///     c
/// }
///
/// let mut tree = ComponentTree::new();
/// let root = tree.insert(None, label());
/// let child = tree.insert(Some(root), label());
/// tree.validate_all()?;
///
/// // Styles cascade: invalidating the root reaches the child too.
/// tree.invalidate(root, flags::STYLES.into_set());
/// assert!(!tree.component(child).is_valid(flags::STYLES));
/// # Ok::<(), canopy_validation::GraphError>(())
/// ```
#[derive(Debug, Default)]
pub struct ComponentTree {
    entries: Vec<Entry>,
}

impl ComponentTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of components in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the tree holds no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a component, optionally under a parent.
    ///
    /// Children are ordered by insertion, which is also the order cascades
    /// and [`validate_all`](Self::validate_all) visit them.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a live id, or if the tree is full.
    pub fn insert(&mut self, parent: Option<ComponentId>, component: Component) -> ComponentId {
        let id = ComponentId::from_index(self.entries.len());
        if let Some(parent) = parent {
            self.entries[parent.index()].children.push(id);
        }
        self.entries.push(Entry {
            component,
            parent,
            children: SmallVec::new(),
        });
        id
    }

    /// Returns the component for `id`.
    #[must_use]
    pub fn component(&self, id: ComponentId) -> &Component {
        &self.entries[id.index()].component
    }

    /// Returns the component for `id` mutably.
    ///
    /// Invalidating through this reference affects only the component's own
    /// graph; use [`ComponentTree::invalidate`] for bubbling/cascading.
    #[must_use]
    pub fn component_mut(&mut self, id: ComponentId) -> &mut Component {
        &mut self.entries[id.index()].component
    }

    /// Returns the parent of `id`, if any.
    #[must_use]
    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.entries[id.index()].parent
    }

    /// Returns the children of `id`, in insertion order.
    #[must_use]
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        &self.entries[id.index()].children
    }

    /// Returns the root components, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.parent.is_none())
            .map(|(i, _)| ComponentId::from_index(i))
    }

    /// Returns `true` if the flag is valid on the given component.
    #[must_use]
    pub fn is_valid(&self, id: ComponentId, flag: Flag) -> bool {
        self.component(id).is_valid(flag)
    }

    /// Invalidates flags on one component and propagates across the tree.
    ///
    /// The component's own graph is invalidated first. If any of its
    /// [`bubbling`](Component::bubbling) flags transitioned, the parent's
    /// [`bubble_target`](Component::bubble_target) is invalidated through
    /// this same method (so bubbling continues upward). Any transitioned
    /// [`cascading`](Component::cascading) flags are then invalidated on
    /// each child, again through this method. All of it happens on the
    /// current call stack, before this returns.
    ///
    /// Returns the flags that transitioned on the component itself (not on
    /// relatives), so callers can react to what actually changed here.
    pub fn invalidate(&mut self, id: ComponentId, flags: FlagSet) -> FlagSet {
        let changed = self.entries[id.index()].component.invalidate(flags);
        if changed.is_empty() {
            return changed;
        }

        let (parent, bubbles, bubble_target, cascade) = {
            let entry = &self.entries[id.index()];
            (
                entry.parent,
                changed.intersects(entry.component.bubbling()),
                entry.component.bubble_target(),
                changed & entry.component.cascading(),
            )
        };

        if bubbles {
            if let Some(parent) = parent {
                self.invalidate(parent, bubble_target.into_set());
            }
        }
        if !cascade.is_empty() {
            let children: SmallVec<[ComponentId; 8]> =
                self.entries[id.index()].children.clone();
            for child in children {
                self.invalidate(child, cascade);
            }
        }
        changed
    }

    /// Validates flags on a single component.
    ///
    /// # Errors
    ///
    /// [`GraphError::CyclicDependency`] if the component's graph cannot
    /// make progress.
    pub fn validate(&mut self, id: ComponentId, flags: FlagSet) -> Result<FlagSet, GraphError> {
        self.entries[id.index()].component.validate(flags)
    }

    /// Validates every component, parents before children.
    ///
    /// Returns the union of flags validated across the tree.
    ///
    /// # Errors
    ///
    /// Stops at the first component whose graph cannot make progress.
    pub fn validate_all(&mut self) -> Result<FlagSet, GraphError> {
        let order = self.depth_first_order();
        let mut validated = FlagSet::EMPTY;
        for id in order {
            validated |= self.entries[id.index()].component.validate_all()?;
        }
        Ok(validated)
    }

    /// Pre-order traversal: each parent before its children, siblings in
    /// insertion order.
    fn depth_first_order(&self) -> Vec<ComponentId> {
        let mut order = Vec::with_capacity(self.entries.len());
        let mut stack: Vec<ComponentId> = self.roots().collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            order.push(id);
            let children = &self.entries[id.index()].children;
            stack.extend(children.iter().rev().copied());
        }
        order
    }
}
