//! Host-side geometry helpers that never touch graph state.
pub mod grid;
