use super::Config;
use crate::modal::Presentation;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.visible_menu_items, 5);
    assert_eq!(config.transition_ms, 300);
    assert_eq!(config.expansion_ms, 800);
    assert_eq!(config.projects.len(), 5);
    assert_eq!(config.index().section_count(), 7);
}

#[test]
fn test_sections_override_taxonomy() {
    let config = Config::from_toml(
        r#"
visible_menu_items = 3
transition_ms = 150

[[sections]]
label = "Overview"
subsections = ["Roles", "Impact"]

[[sections]]
label = "Outcome"
"#,
    )
    .unwrap();

    let index = config.index();
    assert_eq!(index.section_count(), 2);
    assert_eq!(index.subsection_label(0, 1).unwrap(), "Impact");
    assert_eq!(index.subsection_count(1).unwrap(), 0);

    let options = config.modal_options(Presentation::Modal);
    assert_eq!(options.visible_menu_items, 3);
    assert_eq!(options.transition, Duration::from_millis(150));
    assert_eq!(options.expansion, Duration::from_millis(800));
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(Config::from_toml("visible_menu_items = \"five\"").is_err());
}

#[test]
fn test_load_from_falls_back_to_defaults() {
    let missing = Config::load_from(Path::new("/nonexistent/casenav.toml"));
    assert_eq!(missing, Config::default());

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "this is [not toml").unwrap();
    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_load_from_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "title = \"HealthRecord AI\"\nexpansion_ms = 0").unwrap();
    let config = Config::load_from(file.path());
    assert_eq!(config.title, "HealthRecord AI");
    assert_eq!(config.expansion_ms, 0);
    assert_eq!(config.visible_menu_items, 5);
}
