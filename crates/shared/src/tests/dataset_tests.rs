use super::*;

fn tech_dataset() -> Dataset {
    Dataset::new(vec![Category {
        label: "Tech".to_string(),
        entries: vec![CategoryEntry::new("Bob", "Y"), CategoryEntry::new("Ada", "X")],
    }])
    .expect("valid dataset")
}

#[test]
fn builtin_dataset_satisfies_invariants() {
    let builtin = Dataset::builtin();
    let revalidated = Dataset::new(builtin.categories.clone()).expect("builtin is valid");
    assert_eq!(revalidated, builtin);
    assert_eq!(builtin.len(), 28);
}

#[test]
fn categories_are_sorted_case_insensitively() {
    let dataset = Dataset::new(vec![
        Category {
            label: "finance".to_string(),
            entries: vec![CategoryEntry::new("A", "a")],
        },
        Category {
            label: "Authors".to_string(),
            entries: vec![CategoryEntry::new("B", "b")],
        },
        Category {
            label: "EV".to_string(),
            entries: vec![CategoryEntry::new("C", "c")],
        },
    ])
    .expect("valid dataset");

    let labels: Vec<&str> = dataset
        .categories_sorted()
        .iter()
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Authors", "EV", "finance"]);
}

#[test]
fn entries_sorted_returns_exactly_the_category_entries() {
    let dataset = Dataset::builtin();
    for category in dataset.categories_sorted() {
        let sorted = dataset.entries_sorted(&category.label);
        assert_eq!(sorted.len(), category.entries.len());
        for entry in &category.entries {
            assert_eq!(sorted.iter().filter(|e| **e == entry).count(), 1);
        }
        assert!(sorted
            .windows(2)
            .all(|pair| display_order(&pair[0].name, &pair[1].name) != Ordering::Greater));
    }
}

#[test]
fn scenario_dataset_lists_ada_before_bob() {
    let dataset = tech_dataset();
    let names: Vec<&str> = dataset
        .entries_sorted("Tech")
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ada", "Bob"]);
    assert!(dataset.contains_person("Tech", "Bob"));
    assert!(!dataset.contains_person("Tech", "Carol"));
    assert!(dataset.entries_sorted("Missing").is_empty());
}

#[test]
fn preview_uses_source_order() {
    let dataset = tech_dataset();
    assert_eq!(dataset.preview_names("Tech", 3), "Bob, Ada");
    assert_eq!(dataset.preview_names("Tech", 1), "Bob");
}

#[test]
fn rejects_empty_category_and_duplicates() {
    let empty = Dataset::new(vec![Category {
        label: "Tech".to_string(),
        entries: Vec::new(),
    }]);
    assert!(matches!(empty, Err(DatasetError::EmptyCategory(label)) if label == "Tech"));

    let duplicate = Dataset::new(vec![
        Category {
            label: "Tech".to_string(),
            entries: vec![CategoryEntry::new("Ada", "X")],
        },
        Category {
            label: "Tech".to_string(),
            entries: vec![CategoryEntry::new("Bob", "Y")],
        },
    ]);
    assert!(matches!(duplicate, Err(DatasetError::DuplicateCategory(_))));

    assert!(matches!(Dataset::new(Vec::new()), Err(DatasetError::Empty)));
}

#[test]
fn loads_dataset_from_json_file_format() {
    let dataset = Dataset::from_json(
        r#"{"categories":[{"label":"Tech","entries":[{"name":"Ada","company":"X"}]}]}"#,
    )
    .expect("parse dataset");
    assert_eq!(dataset.len(), 1);
    assert_eq!(
        dataset.entries("Tech"),
        Some(&[CategoryEntry::new("Ada", "X")][..])
    );

    let err = Dataset::from_json("{\"categories\": 5}").expect_err("bad shape");
    assert!(matches!(err, DatasetError::Parse(_)));
}
