// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standard component flags and default propagation sets.
//!
//! The framework reserves bit indices `0..FIRST_APP_INDEX` for the derived
//! state every component shares; the remaining indices up to the 32-bit cap
//! belong to applications via [`app_flag`]. The cap is a hard limit: a
//! component cannot track more validation aspects than there are bits.

use canopy_validation::{Flag, FlagSet, MAX_FLAGS};

/// Style rules assigned to the component.
pub const STYLES: Flag = Flag::new(0);
/// A descendant changed in a way ancestors observe.
pub const HIERARCHY_ASCENDING: Flag = Flag::new(1);
/// An ancestor changed in a way descendants observe.
pub const HIERARCHY_DESCENDING: Flag = Flag::new(2);
/// The measured minimum/maximum size of the component.
pub const SIZE_CONSTRAINTS: Flag = Flag::new(3);
/// Position and size of the component's children.
pub const LAYOUT: Flag = Flag::new(4);
/// The local-to-world transform.
pub const TRANSFORM: Flag = Flag::new(5);
/// The concatenated color tint.
pub const COLOR_TRANSFORM: Flag = Flag::new(6);
/// Whether the component currently receives input.
pub const INTERACTIVITY: Flag = Flag::new(7);
/// The assembled render context handed to the renderer.
pub const RENDER_CONTEXT: Flag = Flag::new(8);

/// First bit index available for application-defined flags.
pub const FIRST_APP_INDEX: u8 = 16;

/// Child-side flags whose invalidation notifies the parent.
///
/// When any of these actually transition on a child, the parent's
/// [bubble target](crate::Component::bubble_target) is invalidated on the
/// same call stack.
pub const BUBBLING: FlagSet = HIERARCHY_ASCENDING.into_set().union(SIZE_CONSTRAINTS.into_set());

/// Parent-side flags that re-invalidate on every child when they transition.
pub const CASCADING: FlagSet = HIERARCHY_DESCENDING
    .into_set()
    .union(STYLES.into_set())
    .union(INTERACTIVITY.into_set());

const NAMES: [(Flag, &str); 9] = [
    (STYLES, "styles"),
    (HIERARCHY_ASCENDING, "hierarchy_ascending"),
    (HIERARCHY_DESCENDING, "hierarchy_descending"),
    (SIZE_CONSTRAINTS, "size_constraints"),
    (LAYOUT, "layout"),
    (TRANSFORM, "transform"),
    (COLOR_TRANSFORM, "color_transform"),
    (INTERACTIVITY, "interactivity"),
    (RENDER_CONTEXT, "render_context"),
];

/// Returns the canonical name of a standard flag, for logging and
/// [`ValidationNode::named`](canopy_validation::ValidationNode::named).
#[must_use]
pub fn flag_name(flag: Flag) -> Option<&'static str> {
    NAMES.iter().find(|(f, _)| *f == flag).map(|(_, name)| *name)
}

/// Creates an application-defined flag at `FIRST_APP_INDEX + offset`.
///
/// # Panics
///
/// Panics if the offset lands outside the 32-bit flag space.
///
/// # Example
///
/// ```
/// use canopy_component::flags;
///
/// const CHART_DATA: canopy_validation::Flag = flags::app_flag(0);
/// assert_eq!(CHART_DATA.index(), 16);
/// ```
#[must_use]
pub const fn app_flag(offset: u8) -> Flag {
    assert!(
        offset < MAX_FLAGS - FIRST_APP_INDEX,
        "app flag offset exceeds the 32-bit flag space"
    );
    Flag::new(FIRST_APP_INDEX + offset)
}
