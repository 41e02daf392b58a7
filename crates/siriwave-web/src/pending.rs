/// The callback the browser still owes us, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PendingFrame {
    #[default]
    Idle,
    /// Handle from `requestAnimationFrame`.
    Animation(i32),
    /// Handle from the `setTimeout` fallback.
    Timeout(i32),
}

impl PendingFrame {
    /// Hand over the outstanding request and leave `Idle` behind.
    pub fn take(&mut self) -> PendingFrame {
        std::mem::take(self)
    }

    pub fn is_idle(&self) -> bool {
        *self == PendingFrame::Idle
    }
}
