//! Terminal rendering for directory listings and profiles.

use std::fmt::Write as _;

use client_core::Locale;
use shared::{
    dataset::Dataset,
    domain::{Profile, LESSONS_HEADING, SOURCES_HEADING},
    markup::to_plain_text,
};

pub fn insufficient_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Th => "ข้อมูลไม่เพียงพอ: ระบบไม่สามารถยืนยันข้อมูลบุคคลนี้ได้อย่างปลอดภัย",
        Locale::En => "Insufficient data: this person could not be verified safely.",
    }
}

pub fn categories(dataset: &Dataset) -> String {
    let mut out = String::new();
    for category in dataset.categories_sorted() {
        let _ = writeln!(out, "{} ({})", category.label, category.entries.len());
    }
    out
}

/// `None` when the category is not in the directory.
pub fn people(dataset: &Dataset, category: &str) -> Option<String> {
    if !dataset.contains_category(category) {
        return None;
    }
    let mut out = String::new();
    for entry in dataset.entries_sorted(category) {
        let _ = writeln!(out, "{} - {}", entry.name, entry.company);
    }
    Some(out)
}

fn push_rich(out: &mut String, markup: &str) {
    let text = to_plain_text(markup);
    if !text.is_empty() {
        out.push_str(&text);
        out.push('\n');
    }
}

pub fn profile(profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.name);
    let _ = writeln!(out, "{}", profile.title);
    if !profile.industry.is_empty() {
        let _ = writeln!(out, "[{}]", profile.industry.to_uppercase());
    }
    out.push('\n');

    if !profile.dashboard.trim().is_empty() {
        push_rich(&mut out, &profile.dashboard);
        out.push('\n');
    }
    if !profile.summary.trim().is_empty() {
        let _ = writeln!(out, "\"{}\"\n", profile.summary.trim());
    }
    for (index, section) in profile.sections.iter().enumerate() {
        let _ = writeln!(out, "{:02} {}", index + 1, section.title.to_uppercase());
        push_rich(&mut out, &section.content);
        out.push('\n');
    }
    if !profile.lessons.trim().is_empty() {
        let _ = writeln!(out, "{LESSONS_HEADING}");
        push_rich(&mut out, &profile.lessons);
        out.push('\n');
    }
    if !profile.references.is_empty() {
        let _ = writeln!(out, "{SOURCES_HEADING}");
        for (index, reference) in profile.references.iter().enumerate() {
            let _ = writeln!(out, "[REF-{}] {} <{}>", index + 1, reference.title, reference.url);
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
