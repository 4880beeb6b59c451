//! Backend commands queued from UI to backend worker.

use crate::controller::reducer::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchProfile { request: RequestId, person: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchProfile { .. } => "fetch_profile",
        }
    }
}
