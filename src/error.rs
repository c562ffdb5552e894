// SPDX-License-Identifier: MPL-2.0
use crate::application::port::ServiceError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Service(ServiceError),
    Gui(String),
}

/// Failures surfaced by the interactive workflows.
///
/// Every variant is recoverable: the workflow records it as its visible error
/// and stays ready for the user to try again.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowError {
    /// A local precondition was not met; no service call was made.
    Validation(ValidationError),
    /// The service call failed (transport, status or payload).
    RemoteCall(RemoteAction, ServiceError),
}

/// Local precondition failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `analyze` was requested without a selected file.
    NoFileSelected,
    /// `generate` was requested without at least one top and one bottom.
    EmptyGarmentSelection,
    /// The chosen file could not be read from disk.
    UnreadableFile,
}

/// The remote operation a [`WorkflowError::RemoteCall`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    Analyze,
    GenerateOutfits,
}

impl WorkflowError {
    /// Returns the i18n message key for this error.
    ///
    /// Remote failures map to one message per action regardless of cause.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            WorkflowError::Validation(ValidationError::NoFileSelected) => {
                "error-no-file-selected"
            }
            WorkflowError::Validation(ValidationError::EmptyGarmentSelection) => {
                "error-empty-garment-selection"
            }
            WorkflowError::Validation(ValidationError::UnreadableFile) => "error-unreadable-file",
            WorkflowError::RemoteCall(RemoteAction::Analyze, _) => "error-analysis-failed",
            WorkflowError::RemoteCall(RemoteAction::GenerateOutfits, _) => {
                "error-generation-failed"
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, WorkflowError::Validation(_))
    }
}

impl From<ValidationError> for WorkflowError {
    fn from(err: ValidationError) -> Self {
        WorkflowError::Validation(err)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoFileSelected => write!(f, "no file selected"),
            ValidationError::EmptyGarmentSelection => {
                write!(f, "select at least one top and one bottom")
            }
            ValidationError::UnreadableFile => write!(f, "file could not be read"),
        }
    }
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::Validation(e) => write!(f, "Validation Error: {}", e),
            WorkflowError::RemoteCall(RemoteAction::Analyze, e) => {
                write!(f, "Analysis failed: {}", e)
            }
            WorkflowError::RemoteCall(RemoteAction::GenerateOutfits, e) => {
                write!(f, "Outfit generation failed: {}", e)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Service(e) => write!(f, "Service Error: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ServiceError> for Error {
    fn from(err: ServiceError) -> Self {
        Error::Service(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn service_error_converts_into_crate_error() {
        let err: Error = ServiceError::Status(502).into();
        assert!(matches!(err, Error::Service(ServiceError::Status(502))));
    }

    #[test]
    fn remote_failures_share_one_key_per_action() {
        let transport = WorkflowError::RemoteCall(
            RemoteAction::Analyze,
            ServiceError::Transport("connection refused".into()),
        );
        let malformed = WorkflowError::RemoteCall(
            RemoteAction::Analyze,
            ServiceError::Malformed("missing field".into()),
        );
        assert_eq!(transport.i18n_key(), malformed.i18n_key());
        assert_eq!(transport.i18n_key(), "error-analysis-failed");

        let generation =
            WorkflowError::RemoteCall(RemoteAction::GenerateOutfits, ServiceError::Status(500));
        assert_eq!(generation.i18n_key(), "error-generation-failed");
    }

    #[test]
    fn validation_errors_have_dedicated_keys() {
        let err: WorkflowError = ValidationError::NoFileSelected.into();
        assert!(err.is_validation());
        assert_eq!(err.i18n_key(), "error-no-file-selected");

        let err: WorkflowError = ValidationError::EmptyGarmentSelection.into();
        assert_eq!(err.i18n_key(), "error-empty-garment-selection");
    }
}
