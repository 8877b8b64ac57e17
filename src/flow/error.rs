use thiserror::Error;

/// Errors raised by the flow core.
///
/// Rejected navigation at a page boundary is not an error; it is reported as
/// `CommandResponse::Rejected` or a `false` return from the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Page index {index} is out of range for a flow with {len} pages")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Flow '{key}' has already finished")]
    FlowAlreadyTerminated { key: String },
    #[error("Flow '{key}' has no pages")]
    EmptyFlow { key: String },
    #[error("Identity key must not be blank")]
    InvalidIdentityKey,
    #[error("Unknown flow command: {0}")]
    UnknownCommand(String),
}
