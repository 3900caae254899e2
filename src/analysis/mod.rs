//! Graph algorithms operating over store handles.
pub mod impact;

pub use impact::affected_downstream;
