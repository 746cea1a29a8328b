use std::fmt;
use std::path::PathBuf;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use thiserror::Error;

/// Invalid or missing configuration, detected before any work starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {0} is empty")]
    Empty(&'static str),
}

/// Failures that abort the whole run.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not find file {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("could not open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error reading CSV file: {0}")]
    Csv(#[from] csv::Error),
}

impl ImportError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            _ => Self::Open { path, source },
        }
    }
}

/// Failures confined to a single row. The run counts them and moves on.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("required field '{0}' is empty")]
    EmptyField(&'static str),
    /// Unreachable for string-only items; kept so encoding stays fallible in the type.
    #[error("could not encode item: {0}")]
    Encode(#[from] serde_dynamo::Error),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// A failed upsert.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The service received the request and rejected it.
    #[error("{message}")]
    Service {
        kind: ServiceErrorKind,
        code: String,
        message: String,
    },
    /// The request never produced a service response.
    #[error("request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    Throttling,
    Validation,
    ResourceNotFound,
    AccessDenied,
    Other,
}

impl ServiceErrorKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ProvisionedThroughputExceededException"
            | "ThrottlingException"
            | "RequestLimitExceeded" => Self::Throttling,
            "ValidationException" => Self::Validation,
            "ResourceNotFoundException" => Self::ResourceNotFound,
            "AccessDeniedException" | "UnrecognizedClientException" => Self::AccessDenied,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Throttling => "throttling",
            Self::Validation => "validation",
            Self::ResourceNotFound => "resource not found",
            Self::AccessDenied => "access denied",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

impl<R> From<SdkError<PutItemError, R>> for WriteError
where
    R: fmt::Debug + 'static,
{
    fn from(err: SdkError<PutItemError, R>) -> Self {
        match err {
            SdkError::ServiceError(service_err) => {
                let err = service_err.into_err();
                let code = err.code().unwrap_or("Unknown").to_string();
                let message = err
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                Self::Service {
                    kind: ServiceErrorKind::from_code(&code),
                    code,
                    message,
                }
            }
            other => Self::Transport(DisplayErrorContext(&other).to_string()),
        }
    }
}
