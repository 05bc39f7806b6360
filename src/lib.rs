// Cohortrank: which tokens each user cohort favors, relative to everyone.
//
// This is the library root. Each module corresponds to one stage or concern
// of the ranking run.

pub mod cohorts;
pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod tokenize;
