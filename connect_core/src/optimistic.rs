/// A piece of view state mutated ahead of backend confirmation.
///
/// `stage` applies the optimistic value, `resolve` commits the confirmed
/// outcome, `abort` rolls back to the last committed value. Reads always
/// see the staged value while a request is in flight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Optimistic<S> {
    committed: S,
    staged: Option<S>,
}

impl<S: Copy> Optimistic<S> {
    pub fn new(committed: S) -> Self {
        Self {
            committed,
            staged: None,
        }
    }

    pub fn get(&self) -> S {
        self.staged.unwrap_or(self.committed)
    }

    /// Apply an optimistic value without committing it.
    pub fn stage(&mut self, next: S) {
        self.staged = Some(next);
    }

    /// Commit the confirmed outcome, discarding whatever was staged.
    pub fn resolve(&mut self, confirmed: S) {
        self.committed = confirmed;
        self.staged = None;
    }

    /// Roll back to the last committed value.
    pub fn abort(&mut self) {
        self.staged = None;
    }

    pub fn is_pending(&self) -> bool {
        self.staged.is_some()
    }
}
