#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use lineage_core::errors::ExErrorKind;
use lineage_core::traversal::find_person;
use lineage_core::{resolve_str, rules::validate_tree, Resolution};
use lineage_store::seed::{compute_seed_digest, default_family, import_seed, parse_seed_file};
use tempfile::tempdir;

const SMALL_LOG: &str = "\
HAVE_KID\t-\tKing Shan\tMale
MARRY\tKing Shan\tQueen Anga
HAVE_KID\tQueen Anga\tChit\tMale
HAVE_KID\tQueen Anga\tSatya\tFemale
MARRY\tSatya\tVyan
HAVE_KID\tSatya\tAsva\tMale
";

const SMALL_YAML: &str = r#"
schema_version: 0
family:
  name: Lengaburu
root: { name: King Shan, sex: male }
events:
  - marry: { person: King Shan, spouse: Queen Anga }
  - have_child: { parent: Queen Anga, child: Chit, sex: male }
  - have_child: { parent: Queen Anga, child: Satya, sex: female }
  - marry: { person: Satya, spouse: Vyan }
  - have_child: { parent: Satya, child: Asva, sex: male }
"#;

#[test]
fn test_import_family_log_file() {
    // GIVEN a family log on disk
    let dir = tempdir().unwrap();
    let path = dir.path().join("family.tsv");
    fs::write(&path, SMALL_LOG).unwrap();

    // WHEN importing it
    let imported = import_seed(&path).unwrap();

    // THEN the tree answers queries
    assert_eq!(imported.tree.len(), 6);
    assert_eq!(
        resolve_str(&imported.tree, "Asva", "maternal-uncle").to_string(),
        "Chit"
    );
    assert!(validate_tree(&imported.tree).is_ok());
}

#[test]
fn test_yaml_and_log_of_same_family_agree() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("family.txt");
    let yaml_path = dir.path().join("family.yaml");
    fs::write(&log_path, SMALL_LOG).unwrap();
    fs::write(&yaml_path, SMALL_YAML).unwrap();

    let from_log = import_seed(&log_path).unwrap();
    let from_yaml = import_seed(&yaml_path).unwrap();

    assert_eq!(from_log.digest, from_yaml.digest);
    assert_eq!(from_yaml.family_name.as_deref(), Some("Lengaburu"));
    assert_eq!(
        resolve_str(&from_log.tree, "Chit", "siblings"),
        resolve_str(&from_yaml.tree, "Chit", "siblings")
    );
}

#[test]
fn test_digest_matches_parsed_seed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("family.yml");
    fs::write(&path, SMALL_YAML).unwrap();

    let seed = parse_seed_file(&path).unwrap();
    let imported = import_seed(&path).unwrap();

    assert_eq!(compute_seed_digest(&seed).unwrap(), imported.digest);
    assert_eq!(imported.event_count, seed.events.len());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = import_seed(&dir.path().join("absent.tsv")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Io);
    assert!(err.message().contains("absent.tsv"));
}

#[test]
fn test_rejected_events_are_skipped() {
    // GIVEN a log that marries a person twice and then keeps going
    let dir = tempdir().unwrap();
    let path = dir.path().join("twice.tsv");
    fs::write(
        &path,
        "HAVE_KID\t-\tKing Shan\tMale\nMARRY\tKing Shan\tQueen Anga\nMARRY\tKing Shan\tQueen Ganga\nHAVE_KID\tQueen Anga\tChit\tMale\n",
    )
    .unwrap();

    // WHEN importing
    let imported = import_seed(&path).unwrap();

    // THEN only the second marriage is dropped
    assert_eq!(imported.skipped, vec![2]);
    assert!(find_person(&imported.tree, "Queen Ganga").is_none());
    assert_eq!(
        resolve_str(&imported.tree, "King Shan", "Son"),
        Resolution::Found(vec!["Chit".to_string()])
    );
}

#[test]
fn test_bundled_family_matches_known_relationships() {
    let imported = default_family().unwrap();
    let tree = &imported.tree;

    assert_eq!(resolve_str(tree, "Lika", "daughter").to_string(), "Vila Chika");
    assert_eq!(resolve_str(tree, "Atya", "sister-in-law").to_string(), "Satvy Krpi");
    assert_eq!(resolve_str(tree, "Yodhan", "maternal-aunt").to_string(), "Tritha");
    assert_eq!(resolve_str(tree, "Vasa", "paternal-uncle").to_string(), "Vyas");
}
