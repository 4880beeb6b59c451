use serde::{Deserialize, Serialize};

/// Reserved `name` value the generation backend returns when it has no safe answer.
pub const INSUFFICIENT_DATA_NAME: &str = "Insufficient Data";

/// Profile block headings, identical in every locale and renderer.
pub const LESSONS_HEADING: &str = "LESSONS FOR THE CEO";
pub const SOURCES_HEADING: &str = "SOURCES";

/// A selectable person within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub company: String,
}

impl CategoryEntry {
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    pub title: String,
    /// Rich markup, rendered by the presentation layer.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub url: String,
}

/// Generated biographical profile as returned by the generation backend.
///
/// Only `name` is required on the wire. The sentinel reply may leave the
/// narrative fields out, and that must still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Affiliations only (companies, brands, works), never role titles.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub dashboard: String,
    #[serde(default)]
    pub lessons: String,
    #[serde(default)]
    pub sections: Vec<ContentSection>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl Profile {
    pub fn is_insufficient(&self) -> bool {
        self.name.trim() == INSUFFICIENT_DATA_NAME
    }
}

/// Successful fetch result. Failure is the `Err` arm of the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOutcome {
    Found(Profile),
    Insufficient,
}

impl ProfileOutcome {
    pub fn from_profile(profile: Profile) -> Self {
        if profile.is_insufficient() {
            Self::Insufficient
        } else {
            Self::Found(profile)
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Found(profile) => Some(profile),
            Self::Insufficient => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::Insufficient)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::Insufficient => "insufficient",
        }
    }
}
