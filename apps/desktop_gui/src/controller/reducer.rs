//! View-state machine: Home → Loading → Content / Error.

use std::sync::Arc;

use shared::{
    dataset::Dataset,
    domain::{Profile, ProfileOutcome},
    error::ServiceError,
};

use crate::controller::events::error_detail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Home,
    Loading,
    Content,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Home {
        category: Option<String>,
    },
    Loading {
        category: String,
        person: String,
        request: RequestId,
    },
    Content {
        category: String,
        outcome: ProfileOutcome,
    },
    Error {
        category: Option<String>,
        message: String,
        detail: String,
    },
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Home { category: None }
    }
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Home { .. } => Phase::Home,
            Self::Loading { .. } => Phase::Loading,
            Self::Content { .. } => Phase::Content,
            Self::Error { .. } => Phase::Error,
        }
    }

    pub fn selected_category(&self) -> Option<&str> {
        match self {
            Self::Home { category } | Self::Error { category, .. } => category.as_deref(),
            Self::Loading { category, .. } | Self::Content { category, .. } => Some(category),
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Content { outcome, .. } => outcome.profile(),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Action {
    SelectCategory(String),
    SelectPerson(String),
    Back,
    Home,
    ProfileResolved {
        request: RequestId,
        result: Result<ProfileOutcome, ServiceError>,
    },
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Self::SelectCategory(_) => "select_category",
            Self::SelectPerson(_) => "select_person",
            Self::Back => "back",
            Self::Home => "home",
            Self::ProfileResolved { .. } => "profile_resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchProfile { request: RequestId, person: String },
}

/// Owns the single view state. Actions that do not apply to the current
/// phase leave it untouched.
pub struct ViewController {
    dataset: Arc<Dataset>,
    state: ViewState,
    next_request: u64,
    error_message: String,
}

impl ViewController {
    pub fn new(dataset: Arc<Dataset>, error_message: impl Into<String>) -> Self {
        Self {
            dataset,
            state: ViewState::default(),
            next_request: 1,
            error_message: error_message.into(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        let action_name = action.name();
        let before = self.state.phase();
        let state = std::mem::take(&mut self.state);
        let (next, effect) = self.transition(state, action);
        self.state = next;
        tracing::debug!(
            action = action_name,
            from = ?before,
            to = ?self.state.phase(),
            category = self.state.selected_category().unwrap_or("-"),
            "view transition"
        );
        effect
    }

    fn transition(&mut self, state: ViewState, action: Action) -> (ViewState, Option<Effect>) {
        match (state, action) {
            (ViewState::Home { category: None }, Action::SelectCategory(label))
                if self.dataset.contains_category(&label) =>
            {
                (
                    ViewState::Home {
                        category: Some(label),
                    },
                    None,
                )
            }
            (ViewState::Home {
                category: Some(category),
            }, Action::SelectPerson(person))
                if self.dataset.contains_person(&category, &person) =>
            {
                let request = RequestId(self.next_request);
                self.next_request += 1;
                let effect = Effect::FetchProfile {
                    request,
                    person: person.clone(),
                };
                (
                    ViewState::Loading {
                        category,
                        person,
                        request,
                    },
                    Some(effect),
                )
            }
            (ViewState::Home { category: Some(_) }, Action::Back) => {
                (ViewState::Home { category: None }, None)
            }
            (
                ViewState::Loading {
                    category,
                    person,
                    request,
                },
                Action::ProfileResolved {
                    request: resolved,
                    result,
                },
            ) if request == resolved => match result {
                Ok(outcome) => (ViewState::Content { category, outcome }, None),
                Err(err) => {
                    tracing::warn!(person = %person, kind = err.kind(), "profile fetch failed: {err}");
                    (
                        ViewState::Error {
                            category: Some(category),
                            message: self.error_message.clone(),
                            detail: error_detail(&err),
                        },
                        None,
                    )
                }
            },
            (ViewState::Content { category, .. }, Action::Back) => (
                ViewState::Home {
                    category: Some(category),
                },
                None,
            ),
            (ViewState::Error { .. }, Action::Back) | (_, Action::Home) => {
                (ViewState::Home { category: None }, None)
            }
            (state, Action::ProfileResolved { request, .. }) => {
                tracing::debug!(request = request.0, "discarding stale profile resolution");
                (state, None)
            }
            (state, ignored) => {
                tracing::debug!(action = ignored.name(), phase = ?state.phase(), "action ignored");
                (state, None)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
