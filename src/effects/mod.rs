/// Transition presentations and timing.
pub mod transitions;
