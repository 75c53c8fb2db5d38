/// Severity of a transient user-facing notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Notice {
    Success,
    Error,
    Info,
}

/// Transient notification sink. Screens report outcomes here; rendering
/// (toasts, terminal lines) lives with the host application.
#[cfg_attr(test, mockall::automock)]
pub trait Notify: Send + Sync {
    fn notify(&self, notice: Notice, message: &str);
}
