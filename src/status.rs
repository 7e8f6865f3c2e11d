// Runner-side statuses and the overall-status policy

/// Outcome of a step or scenario as reported by the test runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Untested,
    Executing,
    Skipped,
    Passed,
    Failed,
    Undefined,
}

/// Reduce the ordered statuses of one test case (one entry per outline
/// example) into a single overall status.
///
/// A failure anywhere dominates, then a still-running entry, then an
/// undefined step. Untested entries are ignored once anything real has
/// happened.
pub fn overall_status(statuses: &[Status]) -> Status {
    let Some(&first) = statuses.first() else {
        return Status::Untested;
    };
    if statuses.iter().all(|&status| status == first) {
        return first;
    }
    if statuses.contains(&Status::Failed) {
        return Status::Failed;
    }
    if statuses.contains(&Status::Executing) {
        return Status::Executing;
    }
    if statuses.contains(&Status::Undefined) {
        return Status::Undefined;
    }
    let evaluated: Vec<Status> = statuses
        .iter()
        .copied()
        .filter(|&status| status != Status::Untested)
        .collect();
    if evaluated.len() == statuses.len() {
        // Only a passed/skipped mix reaches this point. The skip means the
        // case did not run to completion.
        return Status::Skipped;
    }
    overall_status(&evaluated)
}
