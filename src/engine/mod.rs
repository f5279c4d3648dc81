//! High-level operations — edit session and trace engine.

pub mod edit;
pub mod trace;

pub use edit::EditSession;
pub use trace::{Trace, TraceEngine, TraceParams, TraceSummary};
