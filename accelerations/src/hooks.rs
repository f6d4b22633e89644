/// Callbacks run immediately before and after each derivative evaluation.
/// Collaborators that need to refresh inputs or record outputs around the
/// step implement this; both methods default to doing nothing.
pub trait StepHooks {
    fn pre_step(&mut self) {}

    fn post_step(&mut self) {}
}

/// Hook set that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl StepHooks for NoHooks {}
