//! Profile with its rich fields flattened once for display.

use shared::{
    domain::{Profile, Reference},
    markup::{flatten, Block},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub number: String,
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedProfile {
    pub name: String,
    pub title: String,
    pub industry: String,
    pub summary: String,
    pub dashboard: Vec<Block>,
    pub sections: Vec<RenderedSection>,
    pub lessons: Vec<Block>,
    pub references: Vec<Reference>,
}

impl RenderedProfile {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            industry: profile.industry.clone(),
            summary: profile.summary.trim().to_string(),
            dashboard: flatten(&profile.dashboard),
            sections: profile
                .sections
                .iter()
                .enumerate()
                .map(|(index, section)| RenderedSection {
                    number: format!("{:02}", index + 1),
                    title: section.title.to_uppercase(),
                    blocks: flatten(&section.content),
                })
                .collect(),
            lessons: flatten(&profile.lessons),
            references: profile.references.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/rendered_tests.rs"]
mod tests;
