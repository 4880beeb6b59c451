//! Backend → UI events and error presentation helpers.

use shared::{domain::ProfileOutcome, error::ServiceError};

use crate::controller::reducer::RequestId;

pub enum UiEvent {
    Info(String),
    BackendUnavailable(String),
    ProfileResolved {
        request: RequestId,
        result: Result<ProfileOutcome, ServiceError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Configuration,
    Transport,
    Service,
    Data,
}

impl From<&ServiceError> for UiErrorCategory {
    fn from(err: &ServiceError) -> Self {
        match err {
            ServiceError::Configuration(_) => Self::Configuration,
            ServiceError::Transport(_) => Self::Transport,
            ServiceError::Backend { .. } => Self::Service,
            ServiceError::EmptyResponse | ServiceError::Malformed(_) => Self::Data,
        }
    }
}

impl UiErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Configuration => "Configuration",
            Self::Transport => "Network",
            Self::Service => "Service",
            Self::Data => "Data",
        }
    }
}

/// Secondary line shown under the generic error message.
pub fn error_detail(err: &ServiceError) -> String {
    format!("[{}] {err}", UiErrorCategory::from(err).label())
}
