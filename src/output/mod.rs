// Output formatting — terminal display and report files.

pub mod json;
pub mod terminal;

use crate::cohorts::CohortId;

/// Human-readable cohort label; the fallback cohort is flagged as unassigned.
pub fn cohort_label(cohort: CohortId, fallback: CohortId) -> String {
    if cohort == fallback {
        format!("group {cohort} (unassigned)")
    } else {
        format!("group {cohort}")
    }
}
