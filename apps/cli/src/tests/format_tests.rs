use super::*;
use shared::{
    dataset::Category,
    domain::{CategoryEntry, ContentSection, Reference},
};

fn tech_dataset() -> Dataset {
    Dataset::new(vec![
        Category {
            label: "tech".to_string(),
            entries: vec![CategoryEntry::new("Bob", "Y"), CategoryEntry::new("Ada", "X")],
        },
        Category {
            label: "Finance".to_string(),
            entries: vec![CategoryEntry::new("Warren", "Berkshire")],
        },
    ])
    .expect("dataset")
}

#[test]
fn categories_are_listed_case_insensitively_with_counts() {
    assert_eq!(categories(&tech_dataset()), "Finance (1)\ntech (2)\n");
}

#[test]
fn people_are_sorted_and_unknown_category_is_none() {
    let dataset = tech_dataset();
    assert_eq!(people(&dataset, "tech").as_deref(), Some("Ada - X\nBob - Y\n"));
    assert!(people(&dataset, "Sports").is_none());
}

#[test]
fn profile_text_follows_reading_order() {
    let text = profile(&Profile {
        name: "Bob".to_string(),
        title: "Y".to_string(),
        industry: "Technology".to_string(),
        summary: " Bob builds Y. ".to_string(),
        dashboard: "<table><tr><th>Metric</th><th>Value</th></tr><tr><td>Founded</td><td>2001</td></tr></table>".to_string(),
        lessons: "<ul><li><strong>Focus</strong> wins</li></ul>".to_string(),
        sections: vec![ContentSection {
            title: "The Origin".to_string(),
            content: "<p>Started &amp; grew</p>".to_string(),
        }],
        references: vec![Reference {
            title: "Official Bio".to_string(),
            url: "https://example.com/bob".to_string(),
        }],
    });

    let positions: Vec<usize> = [
        "Bob\nY\n[TECHNOLOGY]",
        "Metric | Value\nFounded | 2001",
        "\"Bob builds Y.\"",
        "01 THE ORIGIN\nStarted & grew",
        "LESSONS FOR THE CEO\n  • Focus wins",
        "[REF-1] Official Bio <https://example.com/bob>",
    ]
    .iter()
    .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle:?} in {text}")))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn empty_optional_blocks_are_omitted() {
    let text = profile(&Profile {
        name: "Ada".to_string(),
        title: "X".to_string(),
        industry: String::new(),
        summary: String::new(),
        dashboard: String::new(),
        lessons: String::new(),
        sections: Vec::new(),
        references: Vec::new(),
    });
    assert_eq!(text, "Ada\nX\n\n");
}
