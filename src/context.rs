//! Per-request execution context.

/// Context handed to every resolver of a single query execution.
///
/// Carries the name of the operation being executed. Nothing reads it for
/// control flow; it is the slot a fuller system would use for deadlines or
/// trace propagation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    operation_name: Option<String>,
}

impl juniper::Context for Context {}

impl Context {
    /// Creates a [`Context`] for executing the given operation.
    pub fn new(operation_name: Option<impl Into<String>>) -> Self {
        Self {
            operation_name: operation_name.map(Into::into),
        }
    }

    /// Name of the operation this context was created for, if any.
    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }
}
