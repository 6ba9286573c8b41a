use crate::controller::ControllerContext;

/// Result of evaluating a received hook.
///
/// Abort is a normal, expected termination of the current instance's
/// lifecycle, not an error; any other hook return means continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// Proceed to `process`.
    Continue,
    /// Terminate this instance's lifecycle before `perform`.
    Abort,
}

/// Pre-processing hook resolved at configuration time.
///
/// Exactly one form is active per controller: an inline closure or a bound
/// method reference on the consumer type. The hook runs to completion
/// before the backend is consulted and receives the consumer plus the
/// instance context the closure-less original reached implicitly.
pub enum ReceivedHook<C> {
    /// Deferred block evaluated in the instance's context.
    Block(Box<dyn for<'a> Fn(&mut C, &ControllerContext<'a>) -> HookOutcome + Send + Sync>),
    /// Reference to a method on the consumer type.
    Method(for<'a> fn(&mut C, &ControllerContext<'a>) -> HookOutcome),
}

impl<C> ReceivedHook<C> {
    /// Declare a block-form hook.
    pub fn block<F>(hook: F) -> Self
    where
        F: for<'a> Fn(&mut C, &ControllerContext<'a>) -> HookOutcome + Send + Sync + 'static,
    {
        Self::Block(Box::new(hook))
    }

    /// Declare a method-form hook.
    pub fn method(hook: for<'a> fn(&mut C, &ControllerContext<'a>) -> HookOutcome) -> Self {
        Self::Method(hook)
    }

    pub(crate) fn evaluate(&self, consumer: &mut C, ctx: &ControllerContext<'_>) -> HookOutcome {
        match self {
            Self::Block(hook) => hook(consumer, ctx),
            Self::Method(hook) => hook(consumer, ctx),
        }
    }
}

impl<C> std::fmt::Debug for ReceivedHook<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Block(_) => f.write_str("ReceivedHook::Block"),
            Self::Method(_) => f.write_str("ReceivedHook::Method"),
        }
    }
}
