//! Change computer implementations.
//!
//! [`GraphChangeComputer`] diffs `@graph` nodes by identity and
//! [`ContextChangeComputer`] diffs the `@context` mapping as one
//! pseudo-node.

mod context;
mod graph;

pub use context::ContextChangeComputer;
pub use graph::GraphChangeComputer;
