// Cohort assignment — which externally-defined user group each author is in.

pub mod assigner;

pub use assigner::{CohortAssigner, CohortId};
