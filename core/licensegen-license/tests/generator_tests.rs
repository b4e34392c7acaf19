mod common;

use common::{ADA_KEY, GRACE_KEY, generator, new_year_2024, test_secret};
use licensegen_license::{
    DISPLAY_SIGNATURE_LEN, Identity, IssueDate, LICENSE_VERSION, LicenseError, LicenseGenerator,
    generate,
};
use pretty_assertions::assert_eq;
use regex::Regex;

// ── Fixed vectors ────────────────────────────────────────────────

#[test]
fn ada_lovelace_on_new_year_2024() {
    let key = generator().generate_on("Ada", "Lovelace", "ada@example.com", &new_year_2024());
    assert_eq!(key, ADA_KEY);
}

#[test]
fn grace_hopper_on_last_day_of_1999() {
    let date = IssueDate::from_ymd(1999, 12, 31).unwrap();
    let key = generator().generate_on("Grace", "Hopper", "grace@navy.mil", &date);
    assert_eq!(key, GRACE_KEY);
}

// ── Format ───────────────────────────────────────────────────────

#[test]
fn key_matches_grammar() {
    let pattern = Regex::new(r"^V1-20240101-[A-Z2-7]{1,4}(-[A-Z2-7]{1,4}){0,2}$").unwrap();
    let key = generator().generate_on("Ada", "Lovelace", "ada@example.com", &new_year_2024());
    assert!(pattern.is_match(&key), "{key}");
}

#[test]
fn emits_three_groups_of_four() {
    let key = generator().issue(
        &Identity::new("Ada", "Lovelace", "ada@example.com"),
        &new_year_2024(),
    );
    assert_eq!(key.signature().len(), DISPLAY_SIGNATURE_LEN);
    let groups: Vec<&str> = key.groups().collect();
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.len() == 4));
}

#[test]
fn generate_uses_today_and_current_version() {
    let before = IssueDate::today();
    let key = generator().generate("Ada", "Lovelace", "ada@example.com");
    let after = IssueDate::today();

    let prefix_before = format!("{LICENSE_VERSION}-{before}-");
    let prefix_after = format!("{LICENSE_VERSION}-{after}-");
    assert!(key.starts_with(&prefix_before) || key.starts_with(&prefix_after));
}

#[test]
fn free_function_matches_generator() {
    let secret = test_secret();
    let today = IssueDate::today();
    let key = generate(&secret, "Ada", "Lovelace", "ada@example.com");
    let expected = generator().generate_on("Ada", "Lovelace", "ada@example.com", &today);
    // Only differs if the date rolled over between the two calls.
    if key.contains(today.as_str()) {
        assert_eq!(key, expected);
    }
}

// ── Normalization ────────────────────────────────────────────────

#[test]
fn formatting_differences_do_not_change_key() {
    let date = new_year_2024();
    let messy = generator().generate_on(" Ada ", "LOVELACE", "ADA@EXAMPLE.COM", &date);
    let clean = generator().generate_on("ada", "lovelace", "ada@example.com", &date);
    assert_eq!(messy, clean);
}

#[test]
fn internal_whitespace_runs_collapse() {
    let date = new_year_2024();
    let a = generator().generate_on("Mary  Ann", "Evans", "m@example.com", &date);
    let b = generator().generate_on("mary\tann", "evans", "m@example.com", &date);
    assert_eq!(a, b);
}

#[test]
fn word_boundaries_still_matter() {
    let date = new_year_2024();
    let a = generator().generate_on("Mary Ann", "Evans", "m@example.com", &date);
    let b = generator().generate_on("MaryAnn", "Evans", "m@example.com", &date);
    assert_ne!(a, b);
}

#[test]
fn fields_normalizing_to_empty_still_produce_a_key() {
    let key = generator().generate_on("   ", "\t", "\n", &new_year_2024());
    assert!(key.starts_with("V1-20240101-"));
    assert_eq!(key.len(), "V1-20240101-XXXX-XXXX-XXXX".len());
}

// ── Determinism ──────────────────────────────────────────────────

#[test]
fn same_inputs_same_key() {
    let date = new_year_2024();
    let a = generator().generate_on("Ada", "Lovelace", "ada@example.com", &date);
    let b = generator().generate_on("Ada", "Lovelace", "ada@example.com", &date);
    assert_eq!(a, b);
}

#[test]
fn date_changes_key() {
    let a = generator().generate_on("Ada", "Lovelace", "ada@example.com", &new_year_2024());
    let b = generator().generate_on(
        "Ada",
        "Lovelace",
        "ada@example.com",
        &IssueDate::from_ymd(2024, 1, 2).unwrap(),
    );
    assert_ne!(a[12..], b[12..]);
}

#[test]
fn field_order_matters() {
    let date = new_year_2024();
    let a = generator().generate_on("Ada", "Lovelace", "x@example.com", &date);
    let b = generator().generate_on("Lovelace", "Ada", "x@example.com", &date);
    assert_ne!(a, b);
}

// ── Version override ─────────────────────────────────────────────

#[test]
fn custom_version_is_embedded() {
    let generator = LicenseGenerator::new(test_secret()).with_version("V2").unwrap();
    assert_eq!(generator.version(), "V2");
    let key = generator.generate_on("Ada", "Lovelace", "ada@example.com", &new_year_2024());
    assert!(key.starts_with("V2-20240101-"));
    assert_ne!(key[12..], ADA_KEY[12..]);
}

#[test]
fn unusable_versions_are_rejected() {
    for version in ["", "V-1", "v1", "V 1", "V|1"] {
        let result = LicenseGenerator::new(test_secret()).with_version(version);
        assert!(
            matches!(result, Err(LicenseError::InvalidVersion(_))),
            "{version:?} should be rejected"
        );
    }
}
