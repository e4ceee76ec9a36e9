use crate::ErasedError;

/// Sink for single lines of printer command text.
#[cfg_attr(test, mockall::automock)]
pub trait LineSender {
    fn send_line(&mut self, line: &str) -> Result<(), ErasedError>;
}
