// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validation scheduler: invalidation propagation and dependency-ordered
//! revalidation.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Write as _;

use crate::error::GraphError;
use crate::flag::{Flag, FlagSet};
use crate::node::ValidationNode;

/// Update callback invoked when a node transitions from invalid to valid.
///
/// The callback receives the graph's [`ValidationState`] so it can
/// re-entrantly invalidate flags or query validity while a validation pass
/// is in progress.
pub type ValidateCallback = Box<dyn FnMut(&mut ValidationState)>;

/// Cap on how often a single node may run within one `validate` call.
///
/// A callback that re-invalidates its own flag legitimately runs more than
/// once, but a callback that does so without end would otherwise keep the
/// scan loop alive forever. Exceeding the cap reports
/// [`GraphError::CyclicDependency`].
const MAX_RUNS_PER_NODE: usize = 16;

/// The bookkeeping half of a [`ValidationGraph`]: declared nodes, their
/// edge masks, and the live invalid bitmask.
///
/// Update callbacks receive `&mut ValidationState` rather than the whole
/// graph, so they can invalidate and query mid-pass while the graph itself
/// drives the scan. The invalid mask is a single live bitmask, never a
/// snapshot: flags invalidated from inside a callback are visible to the
/// validation pass that is still running.
#[derive(Debug, Default)]
pub struct ValidationState {
    /// Declared nodes, insertion order = evaluation order within a pass.
    nodes: Vec<ValidationNode>,
    /// Union of all declared node flags.
    declared: FlagSet,
    /// Flags currently invalid. Always a subset of `declared`.
    invalid: FlagSet,
}

impl ValidationState {
    /// Returns the union of all declared node flags.
    #[must_use]
    pub fn declared(&self) -> FlagSet {
        self.declared
    }

    /// Returns the flags currently invalid.
    #[must_use]
    pub fn invalid_flags(&self) -> FlagSet {
        self.invalid
    }

    /// Returns `true` if the flag is currently valid.
    ///
    /// Flags not declared in this graph report valid. Pure query.
    #[must_use]
    pub fn is_valid(&self, flag: Flag) -> bool {
        !self.invalid.contains(flag)
    }

    /// Returns the number of declared nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no nodes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Marks flags invalid and propagates to their declared dependents.
    ///
    /// Flags not declared in this graph are silently ignored, so generic
    /// code may invalidate speculatively without knowing which flags a
    /// given graph declares. Already-invalid flags contribute nothing, which
    /// both makes the call idempotent and bounds propagation even when
    /// dependent masks form a cycle.
    ///
    /// Returns the union of flags that transitioned from valid to invalid
    /// during this call, transitive dependents included.
    pub fn invalidate(&mut self, flags: FlagSet) -> FlagSet {
        let mut total = FlagSet::EMPTY;
        let mut pending = flags;
        loop {
            let newly = pending & self.declared & !self.invalid;
            if newly.is_empty() {
                break;
            }
            self.invalid |= newly;
            total |= newly;

            let mut next = FlagSet::EMPTY;
            for node in &self.nodes {
                if newly.contains(node.flag()) {
                    next |= node.dependents();
                }
            }
            pending = next;
        }
        total
    }

    /// Renders a flag set as a comma-separated list of node names.
    ///
    /// Flags without a [`named`](ValidationNode::named) node render as
    /// `bit(index)`. Intended for logging and test assertions.
    #[must_use]
    pub fn describe(&self, flags: FlagSet) -> String {
        let mut out = String::new();
        for flag in flags {
            if !out.is_empty() {
                out.push(',');
            }
            let name = self
                .nodes
                .iter()
                .find(|node| node.flag() == flag)
                .and_then(|node| node.name());
            match name {
                Some(name) => out.push_str(name),
                None => {
                    let _ = write!(out, "bit({})", flag.index());
                }
            }
        }
        out
    }

    /// Expands `flags` to the transitive closure of declared dependencies.
    ///
    /// Undeclared bits are dropped; a node's undeclared dependencies are
    /// handled by the readiness check in `validate` instead.
    fn dependency_closure(&self, flags: FlagSet) -> FlagSet {
        let mut target = flags & self.declared;
        loop {
            let mut expanded = target;
            for node in &self.nodes {
                if target.contains(node.flag()) {
                    expanded |= node.dependencies();
                }
            }
            expanded &= self.declared;
            if expanded == target {
                return target;
            }
            target = expanded;
        }
    }
}

/// A per-component scheduler for lazily recomputing derived state in
/// dependency order.
///
/// The graph owns an insertion-ordered collection of [`ValidationNode`]s,
/// one update callback per node, and a single invalid bitmask. Components
/// mutate a property, [`invalidate`](Self::invalidate) the affected flag,
/// and later call [`validate`](Self::validate) to run the callbacks of
/// everything that became stale, dependencies first, each exactly once per
/// invalidation cycle.
///
/// Every flag starts invalid, forcing one initial validation pass. All
/// operations are synchronous and single-threaded; re-entrant invalidation
/// from inside a callback is supported and expected.
///
/// # Example
///
/// ```
/// use canopy_validation::{Flag, ValidationGraph, ValidationNode};
///
/// const STYLES: Flag = Flag::new(0);
/// const LAYOUT: Flag = Flag::new(1);
///
/// let mut graph = ValidationGraph::new();
/// graph.add_node(
///     ValidationNode::new(STYLES).named("styles").invalidates(LAYOUT.into_set()),
///     |_| { /* recompute styles */ },
/// )?;
/// graph.add_node(
///     ValidationNode::new(LAYOUT).named("layout").depends_on(STYLES.into_set()),
///     |_| { /* recompute layout */ },
/// )?;
///
/// // New nodes start invalid.
/// assert!(!graph.is_valid(LAYOUT));
///
/// let validated = graph.validate_all()?;
/// assert_eq!(validated, STYLES | LAYOUT);
///
/// // Invalidating styles also invalidates layout, its declared dependent.
/// let changed = graph.invalidate(STYLES.into_set());
/// assert_eq!(changed, STYLES | LAYOUT);
/// assert_eq!(graph.describe(changed), "styles,layout");
/// # Ok::<(), canopy_validation::GraphError>(())
/// ```
///
/// # See Also
///
/// - [`ValidationNode`]: Declares a flag and its edges.
/// - [`ValidationState`]: The bookkeeping handed to callbacks.
/// - [`GraphError`]: Construction and progress failures.
#[derive(Default)]
pub struct ValidationGraph {
    state: ValidationState,
    /// One callback per node, parallel to `state.nodes`.
    validators: Vec<ValidateCallback>,
}

impl ValidationGraph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node and its update callback.
    ///
    /// The new node starts invalid. Nothing retroactive happens to existing
    /// nodes: dependency and dependent wiring is exactly what each node
    /// declared for itself.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateFlag`] if the node's flag is already declared.
    /// - [`GraphError::UnknownDependencies`] if the node requires its
    ///   dependencies to exist (the default) and some do not. Nodes are
    ///   therefore added in dependency order unless they opt into
    ///   [`allow_forward_references`](ValidationNode::allow_forward_references).
    pub fn add_node<F>(&mut self, node: ValidationNode, on_validate: F) -> Result<(), GraphError>
    where
        F: FnMut(&mut ValidationState) + 'static,
    {
        let flag = node.flag();
        if self.state.declared.contains(flag) {
            return Err(GraphError::DuplicateFlag { flag });
        }
        if node.check_all_found() {
            let missing = node.dependencies().difference(self.state.declared);
            if !missing.is_empty() {
                return Err(GraphError::UnknownDependencies { flag, missing });
            }
        }
        self.state.nodes.push(node);
        self.state.declared.insert(flag);
        self.state.invalid.insert(flag);
        self.validators.push(Box::new(on_validate));
        Ok(())
    }

    /// Returns `true` if the flag is currently valid. See
    /// [`ValidationState::is_valid`].
    #[must_use]
    pub fn is_valid(&self, flag: Flag) -> bool {
        self.state.is_valid(flag)
    }

    /// Returns the union of all declared node flags.
    #[must_use]
    pub fn declared(&self) -> FlagSet {
        self.state.declared()
    }

    /// Returns the flags currently invalid.
    #[must_use]
    pub fn invalid_flags(&self) -> FlagSet {
        self.state.invalid_flags()
    }

    /// Returns the number of declared nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns `true` if no nodes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Marks flags invalid and propagates to their declared dependents.
    /// See [`ValidationState::invalidate`].
    pub fn invalidate(&mut self, flags: FlagSet) -> FlagSet {
        self.state.invalidate(flags)
    }

    /// Renders a flag set as a comma-separated list of node names. See
    /// [`ValidationState::describe`].
    #[must_use]
    pub fn describe(&self, flags: FlagSet) -> String {
        self.state.describe(flags)
    }

    /// Validates every declared flag. Equivalent to
    /// `validate(FlagSet::ALL)`.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn validate_all(&mut self) -> Result<FlagSet, GraphError> {
        self.validate(FlagSet::ALL)
    }

    /// Brings the requested flags (and everything they depend on) up to
    /// date, running each stale node's callback in dependency order.
    ///
    /// The requested set is first expanded to its dependency closure, so
    /// validating `LAYOUT` validates `STYLES` first if `LAYOUT` depends on
    /// it. Nodes are then scanned repeatedly in insertion order; a node
    /// runs once its flag is targeted, invalid, and all of its declared
    /// dependencies are valid. Its flag is cleared *before* the callback
    /// runs, so a callback that invalidates its own flag schedules another
    /// run rather than having the mark silently wiped.
    ///
    /// Flags invalidated from inside a callback are picked up by the same
    /// call when targeted, or left for the next `validate` otherwise.
    ///
    /// Returns the union of flags that transitioned from invalid to valid.
    ///
    /// # Errors
    ///
    /// [`GraphError::CyclicDependency`] when a full pass makes no progress
    /// while targeted flags remain invalid (a dependency cycle or a
    /// dependency that was never declared), or when a node exceeds the
    /// per-call run cap by endlessly re-invalidating itself. The graph is
    /// left with those flags still marked invalid rather than silently
    /// reported valid.
    pub fn validate(&mut self, flags: FlagSet) -> Result<FlagSet, GraphError> {
        let target = self.state.dependency_closure(flags);
        let mut validated = FlagSet::EMPTY;
        if (target & self.state.invalid).is_empty() {
            return Ok(validated);
        }

        let run_cap = self.state.nodes.len() * MAX_RUNS_PER_NODE;
        let mut runs = 0_usize;
        loop {
            let mut progress = false;
            for i in 0..self.state.nodes.len() {
                let node = self.state.nodes[i];
                let flag = node.flag();
                if !target.contains(flag) || !self.state.invalid.contains(flag) {
                    continue;
                }
                if node.dependencies().intersects(self.state.invalid) {
                    // A dependency is still stale; a later iteration of this
                    // pass or the next pass will get to it.
                    continue;
                }
                if !node.dependencies().difference(self.state.declared).is_empty() {
                    // Forward-declared dependency that never arrived.
                    continue;
                }
                if runs == run_cap {
                    return Err(GraphError::CyclicDependency {
                        remaining: target & self.state.invalid,
                    });
                }
                runs += 1;
                self.state.invalid.remove(flag);
                (self.validators[i])(&mut self.state);
                validated |= flag;
                progress = true;
            }

            let remaining = target & self.state.invalid;
            if remaining.is_empty() {
                return Ok(validated);
            }
            if !progress {
                return Err(GraphError::CyclicDependency { remaining });
            }
        }
    }
}

// Manual Debug impl since callbacks aren't Debug
impl fmt::Debug for ValidationGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationGraph")
            .field("declared", &self.state.declared)
            .field("invalid", &self.state.invalid)
            .field("nodes", &self.state.nodes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::{Cell, RefCell};

    const ONE: Flag = Flag::new(0);
    const TWO: Flag = Flag::new(1);
    const THREE: Flag = Flag::new(2);
    const FOUR: Flag = Flag::new(3);
    const FIVE: Flag = Flag::new(4);
    const SIX: Flag = Flag::new(5);
    const SEVEN: Flag = Flag::new(6);

    /// Linear + branching graph:
    ///
    /// ```text
    /// ONE <- TWO <- THREE <- FOUR
    ///         ^---- FIVE  <- SIX
    ///         ^---- SEVEN
    /// ```
    fn scenario_nodes() -> [ValidationNode; 7] {
        [
            ValidationNode::new(ONE).named("one").invalidates(TWO.into_set()),
            ValidationNode::new(TWO)
                .named("two")
                .depends_on(ONE.into_set())
                .invalidates(THREE | FIVE | SEVEN),
            ValidationNode::new(THREE)
                .named("three")
                .depends_on(TWO.into_set())
                .invalidates(FOUR.into_set()),
            ValidationNode::new(FOUR).named("four").depends_on(THREE.into_set()),
            ValidationNode::new(FIVE)
                .named("five")
                .depends_on(TWO.into_set())
                .invalidates(SIX.into_set()),
            ValidationNode::new(SIX).named("six").depends_on(FIVE.into_set()),
            ValidationNode::new(SEVEN).named("seven").depends_on(TWO.into_set()),
        ]
    }

    fn scenario_graph() -> ValidationGraph {
        let mut graph = ValidationGraph::new();
        for node in scenario_nodes() {
            graph.add_node(node, |_| {}).unwrap();
        }
        graph
    }

    fn recording_graph() -> (ValidationGraph, Rc<RefCell<Vec<Flag>>>) {
        let log: Rc<RefCell<Vec<Flag>>> = Rc::new(RefCell::new(Vec::new()));
        let mut graph = ValidationGraph::new();
        for node in scenario_nodes() {
            let log = Rc::clone(&log);
            let flag = node.flag();
            graph
                .add_node(node, move |_| log.borrow_mut().push(flag))
                .unwrap();
        }
        (graph, log)
    }

    #[test]
    fn nodes_start_invalid() {
        let graph = scenario_graph();
        for flag in [ONE, TWO, THREE, FOUR, FIVE, SIX, SEVEN] {
            assert!(!graph.is_valid(flag));
        }
        assert_eq!(graph.invalid_flags(), graph.declared());
    }

    #[test]
    fn invalidate_empty_is_noop() {
        let mut graph = scenario_graph();
        graph.validate_all().unwrap();
        let before = graph.invalid_flags();
        assert_eq!(graph.invalidate(FlagSet::EMPTY), FlagSet::EMPTY);
        assert_eq!(graph.invalid_flags(), before);
    }

    #[test]
    fn invalidate_unknown_flags_is_silently_ignored() {
        let mut graph = scenario_graph();
        graph.validate_all().unwrap();
        assert_eq!(graph.invalidate(Flag::new(20).into_set()), FlagSet::EMPTY);
        assert_eq!(graph.invalid_flags(), FlagSet::EMPTY);
    }

    #[test]
    fn invalidate_already_invalid_returns_empty() {
        let mut graph = scenario_graph();
        // Everything starts invalid, so nothing can transition.
        assert_eq!(graph.invalidate(TWO.into_set()), FlagSet::EMPTY);
    }

    #[test]
    fn invalidating_a_branch_invalidates_its_dependents() {
        let mut graph = scenario_graph();
        graph.validate_all().unwrap();

        let changed = graph.invalidate(FIVE.into_set());
        assert_eq!(changed, FIVE | SIX);
        for flag in [ONE, TWO, THREE, FOUR, SEVEN] {
            assert!(graph.is_valid(flag));
        }
        assert!(!graph.is_valid(FIVE));
        assert!(!graph.is_valid(SIX));
    }

    #[test]
    fn invalidating_the_trunk_invalidates_transitively() {
        let mut graph = scenario_graph();
        graph.validate_all().unwrap();
        graph.invalidate(FIVE.into_set());
        graph.validate_all().unwrap();

        let changed = graph.invalidate(TWO.into_set());
        assert_eq!(changed, TWO | THREE | FOUR | FIVE | SIX | SEVEN);
        assert!(graph.is_valid(ONE));
        for flag in [TWO, THREE, FOUR, FIVE, SIX, SEVEN] {
            assert!(!graph.is_valid(flag));
        }
    }

    #[test]
    fn partial_validate_resolves_the_dependency_closure() {
        let mut graph = scenario_graph();
        let validated = graph.validate(THREE | SEVEN).unwrap();
        assert_eq!(validated, ONE | TWO | THREE | SEVEN);
        for flag in [FOUR, FIVE, SIX] {
            assert!(!graph.is_valid(flag));
        }
    }

    #[test]
    fn validate_single_flag_pulls_in_all_ancestors() {
        let mut graph = scenario_graph();
        let validated = graph.validate(FOUR.into_set()).unwrap();
        assert_eq!(validated, ONE | TWO | THREE | FOUR);
    }

    #[test]
    fn unknown_dependency_is_rejected() {
        const EIGHT: Flag = Flag::new(7);
        const NINE: Flag = Flag::new(8);

        let mut graph = scenario_graph();
        let err = graph
            .add_node(ValidationNode::new(EIGHT).depends_on(NINE.into_set()), |_| {})
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownDependencies {
                flag: EIGHT,
                missing: NINE.into_set(),
            }
        );
        // The failed add left no trace.
        assert!(!graph.declared().contains(EIGHT));
        assert_eq!(graph.len(), 7);
    }

    #[test]
    fn duplicate_flag_is_rejected() {
        let mut graph = scenario_graph();
        let err = graph.add_node(ValidationNode::new(TWO), |_| {}).unwrap_err();
        assert_eq!(err, GraphError::DuplicateFlag { flag: TWO });
    }

    #[test]
    fn validate_runs_in_insertion_order() {
        let (mut graph, log) = recording_graph();
        graph.validate_all().unwrap();
        assert_eq!(*log.borrow(), vec![ONE, TWO, THREE, FOUR, FIVE, SIX, SEVEN]);
    }

    #[test]
    fn validate_twice_runs_no_callbacks() {
        let (mut graph, log) = recording_graph();
        graph.validate_all().unwrap();
        log.borrow_mut().clear();

        assert_eq!(graph.validate_all().unwrap(), FlagSet::EMPTY);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn reinvalidated_dependents_recompute_exactly_once() {
        let (mut graph, log) = recording_graph();
        graph.validate_all().unwrap();
        graph.invalidate(TWO.into_set());
        log.borrow_mut().clear();

        let validated = graph.validate_all().unwrap();
        assert_eq!(validated, TWO | THREE | FOUR | FIVE | SIX | SEVEN);
        assert_eq!(*log.borrow(), vec![TWO, THREE, FOUR, FIVE, SIX, SEVEN]);
    }

    #[test]
    fn forward_reference_resolves_when_added_later() {
        const DEPENDENT: Flag = Flag::new(0);
        const LATER: Flag = Flag::new(1);

        let mut graph = ValidationGraph::new();
        graph
            .add_node(
                ValidationNode::new(DEPENDENT)
                    .depends_on(LATER.into_set())
                    .allow_forward_references(),
                |_| {},
            )
            .unwrap();
        graph
            .add_node(ValidationNode::new(LATER).invalidates(DEPENDENT.into_set()), |_| {})
            .unwrap();

        graph.validate_all().unwrap();
        let changed = graph.invalidate(LATER.into_set());
        assert_eq!(changed, LATER | DEPENDENT);
        assert!(!graph.is_valid(DEPENDENT));
        graph.validate_all().unwrap();
        assert!(graph.is_valid(DEPENDENT));
    }

    #[test]
    fn missing_dependency_fails_loudly() {
        const ORPHAN: Flag = Flag::new(0);
        const NEVER_ADDED: Flag = Flag::new(9);

        let mut graph = ValidationGraph::new();
        graph
            .add_node(
                ValidationNode::new(ORPHAN)
                    .depends_on(NEVER_ADDED.into_set())
                    .allow_forward_references(),
                |_| {},
            )
            .unwrap();

        let err = graph.validate_all().unwrap_err();
        assert_eq!(
            err,
            GraphError::CyclicDependency {
                remaining: ORPHAN.into_set(),
            }
        );
        // No silent partial validation: the flag is still invalid.
        assert!(!graph.is_valid(ORPHAN));
    }

    #[test]
    fn dependency_cycle_is_detected() {
        const A: Flag = Flag::new(0);
        const B: Flag = Flag::new(1);

        let mut graph = ValidationGraph::new();
        graph
            .add_node(
                ValidationNode::new(A)
                    .depends_on(B.into_set())
                    .invalidates(B.into_set())
                    .allow_forward_references(),
                |_| {},
            )
            .unwrap();
        graph
            .add_node(
                ValidationNode::new(B)
                    .depends_on(A.into_set())
                    .invalidates(A.into_set()),
                |_| {},
            )
            .unwrap();

        let err = graph.validate_all().unwrap_err();
        assert_eq!(err, GraphError::CyclicDependency { remaining: A | B });
    }

    #[test]
    fn endless_self_invalidation_hits_the_run_cap() {
        const RESTLESS: Flag = Flag::new(0);

        let mut graph = ValidationGraph::new();
        graph
            .add_node(ValidationNode::new(RESTLESS), |state| {
                state.invalidate(RESTLESS.into_set());
            })
            .unwrap();

        let err = graph.validate_all().unwrap_err();
        assert_eq!(
            err,
            GraphError::CyclicDependency {
                remaining: RESTLESS.into_set(),
            }
        );
    }

    #[test]
    fn reentrant_invalidation_is_picked_up_by_the_same_call() {
        const A: Flag = Flag::new(0);
        const B: Flag = Flag::new(1);

        let a_runs = Rc::new(Cell::new(0_u32));
        let b_runs = Rc::new(Cell::new(0_u32));

        let mut graph = ValidationGraph::new();
        {
            let a_runs = Rc::clone(&a_runs);
            graph
                .add_node(
                    ValidationNode::new(A).invalidates(B.into_set()),
                    move |_| a_runs.set(a_runs.get() + 1),
                )
                .unwrap();
        }
        {
            let b_runs = Rc::clone(&b_runs);
            graph
                .add_node(
                    ValidationNode::new(B).depends_on(A.into_set()),
                    move |state| {
                        b_runs.set(b_runs.get() + 1);
                        // On the first run, discover that A needs recomputing.
                        if b_runs.get() == 1 {
                            state.invalidate(A.into_set());
                        }
                    },
                )
                .unwrap();
        }

        let validated = graph.validate_all().unwrap();
        assert_eq!(validated, A | B);
        assert!(graph.is_valid(A));
        assert!(graph.is_valid(B));
        // Both nodes ran twice: once initially, once after the re-entrant
        // invalidation of A cascaded back through B.
        assert_eq!(a_runs.get(), 2);
        assert_eq!(b_runs.get(), 2);
    }

    #[test]
    fn callback_clearing_happens_before_the_run() {
        const SOLO: Flag = Flag::new(0);

        let observed_valid = Rc::new(Cell::new(false));
        let mut graph = ValidationGraph::new();
        {
            let observed_valid = Rc::clone(&observed_valid);
            graph
                .add_node(ValidationNode::new(SOLO), move |state| {
                    observed_valid.set(state.is_valid(SOLO));
                })
                .unwrap();
        }

        graph.validate_all().unwrap();
        assert!(observed_valid.get());
    }

    #[test]
    fn describe_renders_node_names() {
        let graph = scenario_graph();
        assert_eq!(graph.describe(ONE | SEVEN), "one,seven");
        assert_eq!(graph.describe(FlagSet::EMPTY), "");
        assert_eq!(graph.describe(Flag::new(9).into_set()), "bit(9)");
        assert_eq!(graph.describe(ONE | Flag::new(9)), "one,bit(9)");
    }

    #[test]
    fn empty_graph_validates_to_nothing() {
        let mut graph = ValidationGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.validate_all().unwrap(), FlagSet::EMPTY);
    }
}
