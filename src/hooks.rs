// User extension point, invoked once per step verdict

use crate::report::xray::ScenarioResult;
use crate::report::{ScenarioEvent, Verdict};

/// Hook invoked after a step verdict has been applied to the accumulating
/// scenario result.
///
/// Hooks may attach evidence or amend the accumulated result; they cannot
/// veto publishing. For a plain scenario the final comment is set after the
/// hooks ran.
pub trait ResultHook {
    fn on_step_verdict(
        &mut self,
        verdict: &Verdict,
        scenario: &ScenarioEvent,
        result: &mut ScenarioResult,
    );
}

impl<F> ResultHook for F
where
    F: FnMut(&Verdict, &ScenarioEvent, &mut ScenarioResult),
{
    fn on_step_verdict(
        &mut self,
        verdict: &Verdict,
        scenario: &ScenarioEvent,
        result: &mut ScenarioResult,
    ) {
        self(verdict, scenario, result)
    }
}
