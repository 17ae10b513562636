//! One module per usage theme; each demo builds its own sample data,
//! applies the named operations, and prints the outcome.

pub mod access;
pub mod copying;
pub mod creation;
pub mod iteration;
pub mod mutation;
pub mod ordering;
pub mod query;
pub mod stack_queue;
pub mod transform;
pub mod unpack;
