use anyhow::Result;
use inquire::InquireError;

use crate::interact::InteractionError;
use crate::tasks::TaskError;

mod spinner;
mod theme;

pub use spinner::{Spinner, SpinningChat};
pub use theme::Style;

/// Check if the error is a user cancellation/interruption of a prompt.
pub fn is_prompt_cancelled(err: &anyhow::Error) -> bool {
    if let Some(err) = err.downcast_ref::<InquireError>() {
        return matches!(
            err,
            InquireError::OperationCanceled | InquireError::OperationInterrupted
        );
    }
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<InteractionError>(),
            Some(InteractionError::Cancelled)
        ) || matches!(
            cause.downcast_ref::<TaskError>(),
            Some(TaskError::Interaction(InteractionError::Cancelled))
        )
    })
}

/// Wraps a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this function prints a newline
/// to clean up the terminal and returns `Ok(())` instead of propagating the error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e) if is_prompt_cancelled(&e) => {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_prompt_cancellation_ok() {
        let result = handle_prompt_cancellation(|| Ok(()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_operation_canceled() {
        let result = handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_operation_interrupted() {
        let result = handle_prompt_cancellation(|| Err(InquireError::OperationInterrupted.into()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_interaction_cancelled() {
        let result = handle_prompt_cancellation(|| {
            Err(TaskError::Interaction(InteractionError::Cancelled).into())
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_other_error() {
        let result = handle_prompt_cancellation(|| Err(anyhow::anyhow!("Some other error")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Some other error"));
    }

    #[test]
    fn test_end_of_input_is_not_cancellation() {
        let err: anyhow::Error = InteractionError::EndOfInput.into();
        assert!(!is_prompt_cancelled(&err));
    }
}
