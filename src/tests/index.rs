use super::NavigationIndex;
use crate::error::NavError;
use crate::section::Section;

#[test]
fn test_case_study_layout() {
    let index = NavigationIndex::case_study();
    assert_eq!(index.section_count(), 7);
    assert_eq!(index.section_label(0).unwrap(), "Project Overview");
    assert_eq!(index.section_label(6).unwrap(), "Outcome & Impact");
    assert_eq!(index.subsection_count(0).unwrap(), 5);
    assert_eq!(index.subsection_count(2).unwrap(), 4);
    assert_eq!(index.subsection_label(2, 1).unwrap(), "JTBD");
}

#[test]
fn test_empty_index_rejected() {
    assert!(matches!(
        NavigationIndex::new(Vec::new()),
        Err(NavError::EmptyIndex)
    ));
}

#[test]
fn test_out_of_range_lookups_fail() {
    let index = NavigationIndex::new(vec![
        Section::new("Overview", ["Roles", "Impact"]),
        Section::flat("Outcome"),
    ])
    .unwrap();

    assert!(matches!(
        index.subsection_count(2),
        Err(NavError::SectionOutOfRange { index: 2, count: 2 })
    ));
    assert!(matches!(
        index.section_label(5),
        Err(NavError::SectionOutOfRange { index: 5, count: 2 })
    ));
    assert!(matches!(
        index.subsection_label(0, 2),
        Err(NavError::SubsectionOutOfRange {
            section: 0,
            index: 2,
            count: 2
        })
    ));
    assert!(matches!(
        index.subsection_label(1, 0),
        Err(NavError::SubsectionOutOfRange {
            section: 1,
            index: 0,
            count: 0
        })
    ));
}

#[test]
fn test_without_subsections_keeps_labels() {
    let flat = NavigationIndex::case_study().without_subsections();
    assert_eq!(flat.section_count(), 7);
    assert!(flat.sections().all(|s| !s.has_subsections()));
    assert_eq!(flat.section_label(3).unwrap(), "Ideation & Prototyping");
}

#[test]
fn test_index_serialises_as_json() {
    let index = NavigationIndex::new(vec![Section::new("Overview", ["Roles"])]).unwrap();
    let json = serde_json::to_value(&index).unwrap();
    assert_eq!(json["sections"][0]["label"], "Overview");
    assert_eq!(json["sections"][0]["subsections"][0], "Roles");
}
