// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use canopy_component::{Component, ComponentTree, flags};
use canopy_validation::{Flag, FlagSet, ValidationGraph, ValidationNode};

/// A component-sized graph: a linear chain of `n` flags where each node
/// depends on the previous one and invalidates the next.
fn build_chain_graph(n: u8) -> ValidationGraph {
    let mut graph = ValidationGraph::new();
    for i in 0..n {
        let mut node = ValidationNode::new(Flag::new(i));
        if i > 0 {
            node = node.depends_on(Flag::new(i - 1).into_set());
        }
        if i + 1 < n {
            node = node.invalidates(Flag::new(i + 1).into_set());
        }
        graph
            .add_node(node, |_| {})
            .expect("chain nodes are added in dependency order");
    }
    graph
}

/// A graph where one root flag fans out to `n - 1` dependents.
fn build_fanout_graph(n: u8) -> ValidationGraph {
    let root = Flag::new(0);
    let mut leaves = FlagSet::EMPTY;
    for i in 1..n {
        leaves.insert(Flag::new(i));
    }

    let mut graph = ValidationGraph::new();
    graph
        .add_node(ValidationNode::new(root).invalidates(leaves), |_| {})
        .expect("first node");
    for leaf in leaves {
        graph
            .add_node(ValidationNode::new(leaf).depends_on(root.into_set()), |_| {})
            .expect("root is already declared");
    }
    graph
}

fn styled_component() -> Component {
    let mut component = Component::new();
    let graph = component.graph_mut();
    graph
        .add_node(
            ValidationNode::new(flags::STYLES)
                .invalidates(flags::SIZE_CONSTRAINTS.into_set()),
            |_| {},
        )
        .expect("styles");
    graph
        .add_node(
            ValidationNode::new(flags::SIZE_CONSTRAINTS)
                .depends_on(flags::STYLES.into_set())
                .invalidates(flags::LAYOUT.into_set()),
            |_| {},
        )
        .expect("size constraints");
    graph
        .add_node(
            ValidationNode::new(flags::LAYOUT)
                .depends_on(flags::SIZE_CONSTRAINTS.into_set()),
            |_| {},
        )
        .expect("layout");
    component
}

/// A full tree of the given depth and branching factor, every component
/// carrying the standard styles/size/layout chain.
fn build_tree(depth: u32, branching: u32) -> ComponentTree {
    let mut tree = ComponentTree::new();
    let root = tree.insert(None, styled_component());
    let mut frontier = vec![root];
    for _ in 1..depth {
        let mut next = Vec::new();
        for parent in frontier {
            for _ in 0..branching {
                next.push(tree.insert(Some(parent), styled_component()));
            }
        }
        frontier = next;
    }
    tree
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("canopy_validation");
    group.sample_size(50);

    for &n in &[8_u8, 16_u8, 32_u8] {
        group.bench_function(format!("chain_invalidate_root(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut graph = build_chain_graph(n);
                    graph.validate_all().expect("chain has no cycles");
                    graph
                },
                |mut graph| {
                    black_box(graph.invalidate(Flag::new(0).into_set()));
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("chain_invalidate_validate(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut graph = build_chain_graph(n);
                    graph.validate_all().expect("chain has no cycles");
                    graph
                },
                |mut graph| {
                    graph.invalidate(Flag::new(0).into_set());
                    black_box(graph.validate_all().expect("chain has no cycles"));
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("fanout_invalidate_validate(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut graph = build_fanout_graph(n);
                    graph.validate_all().expect("fanout has no cycles");
                    graph
                },
                |mut graph| {
                    graph.invalidate(Flag::new(0).into_set());
                    black_box(graph.validate_all().expect("fanout has no cycles"));
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("redundant_invalidate(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut graph = build_chain_graph(n);
                    graph.validate_all().expect("chain has no cycles");
                    graph.invalidate(Flag::new(0).into_set());
                    graph
                },
                |mut graph| {
                    // Every call after the first is a pure bitmask no-op.
                    for _ in 0..64 {
                        black_box(graph.invalidate(Flag::new(0).into_set()));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("canopy_component");
    group.sample_size(50);

    for &(depth, branching) in &[(4_u32, 4_u32), (6_u32, 2_u32), (8_u32, 2_u32)] {
        group.bench_function(format!("cascade_styles(d={depth},b={branching})"), |b| {
            b.iter_batched(
                || {
                    let mut tree = build_tree(depth, branching);
                    tree.validate_all().expect("tree graphs have no cycles");
                    let root = tree_root(&tree);
                    (tree, root)
                },
                |(mut tree, root)| {
                    black_box(tree.invalidate(root, flags::STYLES.into_set()));
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("bubble_from_leaf(d={depth},b={branching})"), |b| {
            b.iter_batched(
                || {
                    let mut tree = build_tree(depth, branching);
                    tree.validate_all().expect("tree graphs have no cycles");
                    let leaf = deepest_leaf(&tree);
                    (tree, leaf)
                },
                |(mut tree, leaf)| {
                    black_box(tree.invalidate(leaf, flags::SIZE_CONSTRAINTS.into_set()));
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(
            format!("invalidate_validate_all(d={depth},b={branching})"),
            |b| {
                b.iter_batched(
                    || {
                        let mut tree = build_tree(depth, branching);
                        tree.validate_all().expect("tree graphs have no cycles");
                        let root = tree_root(&tree);
                        (tree, root)
                    },
                    |(mut tree, root)| {
                        tree.invalidate(root, flags::STYLES.into_set());
                        black_box(tree.validate_all().expect("tree graphs have no cycles"));
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn tree_root(tree: &ComponentTree) -> canopy_component::ComponentId {
    tree.roots().next().expect("tree has a root")
}

fn deepest_leaf(tree: &ComponentTree) -> canopy_component::ComponentId {
    let mut id = tree_root(tree);
    while let Some(&child) = tree.children(id).first() {
        id = child;
    }
    id
}

criterion_group!(benches, bench_validation, bench_tree);
criterion_main!(benches);
