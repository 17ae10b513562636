use colored::Colorize;
use lazy_static::lazy_static;

use crate::demos::{
    access, copying, creation, iteration, mutation, ordering, query, stack_queue, transform,
    unpack,
};

/// A demonstration routine: owns its sample data, prints its outcome,
/// leaves nothing behind.
pub type Demo = fn();

const SEP: &str = "====================";

lazy_static! {
    /// Ordered usage table driving the runner. Built once at first access,
    /// read-only afterwards.
    pub static ref USAGE_TABLE: Vec<(&'static str, Vec<Demo>)> = vec![
        (
            "Creating vectors",
            vec![
                creation::demo_create_literal as Demo,
                creation::demo_create_collected,
            ],
        ),
        (
            "Indexing & slicing",
            vec![access::demo_index_access as Demo, access::demo_slice_access],
        ),
        ("Growing a vector", vec![mutation::demo_push_extend_insert as Demo]),
        ("Removing elements", vec![mutation::demo_remove_pop_clear as Demo]),
        ("Search & count", vec![query::demo_search_count as Demo]),
        ("Sorting & reversing", vec![ordering::demo_sort_reverse as Demo]),
        ("Derived sequences", vec![transform::demo_map_collect as Demo]),
        (
            "Iterating",
            vec![iteration::demo_enumerate as Demo, iteration::demo_zip],
        ),
        (
            "Shallow & deep copies",
            vec![copying::demo_shallow_deep_copy as Demo],
        ),
        ("Filtering", vec![transform::demo_filter as Demo]),
        ("Stack & queue", vec![stack_queue::demo_stack_queue as Demo]),
        ("Nested vectors", vec![transform::demo_matrix_transpose as Demo]),
        ("Destructuring", vec![unpack::demo_unpacking as Demo]),
        (
            "Membership & aggregates",
            vec![query::demo_membership_aggregate as Demo],
        ),
    ];
}

/// Walk the usage table in declared order: print a titled banner for each
/// group, then run its demos. A panicking demo aborts the whole run.
pub fn run_examples() {
    for (title, demos) in USAGE_TABLE.iter() {
        println!("\n{} {} {}", SEP.cyan(), title.bold(), SEP.cyan());
        for demo in demos {
            demo();
        }
    }
}
