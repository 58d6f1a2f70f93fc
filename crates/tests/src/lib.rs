//! Cross-crate integration tests for the Prism workspace.
//!
//! These exercise the runtime contracts of the shared state primitives (one
//! state instance per application root, loud misuse failures, persisted
//! preferences) and pin the shipped export graph to the code it describes.

#[cfg(test)]
mod export_graph_tests;
#[cfg(test)]
mod shared_state_tests;
