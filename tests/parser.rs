//! End-to-end tests over complete language files.

use borr::cli;
use borr::document::Document;
use borr::error::Error;
use borr::registry::ExpanderRegistry;
use borr::version::LangVersion;

use pretty_assertions::assert_eq;

const EN_GB: &str = r#"
# Language file for British English
lang_id = "en_GB"
lang_ver = "v1.0.0"
lang_desc = "British English translations for My Awesome App!"

[start_page]
page_title = "Start Here!"
my_button = "Click me!"

[about_page]
page_title = "About ${app_name}"
about_text[] = "This is my awesome app, written with love!"
about_text[] = "Code for \"${start_page:my_button}\" button copied from StackOverflow"
"#;

#[test]
fn parses_a_complete_language_file() {
    let doc = Document::parse(EN_GB).unwrap();

    assert_eq!(doc.lang_id(), "en_GB");
    assert_eq!(
        doc.lang_description(),
        "British English translations for My Awesome App!"
    );
    assert_eq!(doc.lang_version(), LangVersion::new(1, 0, 0));

    let names: Vec<&str> = doc.sections().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["about_page", "start_page"]);
}

#[test]
fn multiline_field_joins_declarations_in_order() {
    let doc = Document::parse(EN_GB).unwrap();

    let raw = doc.raw_field("about_page", "about_text").unwrap();
    assert_eq!(
        raw,
        "This is my awesome app, written with love!\n\
         Code for \"${start_page:my_button}\" button copied from StackOverflow"
    );
}

#[test]
fn cross_reference_expands_through_sections() {
    let doc = Document::parse(EN_GB).unwrap();
    let registry = ExpanderRegistry::new();

    let text = doc
        .field_with(&registry, "about_page", "about_text")
        .unwrap()
        .unwrap();
    assert!(
        text.contains("Code for \"Click me!\" button"),
        "cross-reference not resolved: {text}"
    );
}

#[test]
fn custom_expander_fills_app_name() {
    let doc = Document::parse(EN_GB).unwrap();
    let registry = ExpanderRegistry::new();
    registry.add("app_name", |_| "My Awesome App".to_string());

    assert_eq!(
        doc.field_with(&registry, "about_page", "page_title")
            .unwrap(),
        Some("About My Awesome App".to_string())
    );
}

#[test]
fn unregistered_variable_becomes_empty() {
    let doc = Document::parse(EN_GB).unwrap();
    let registry = ExpanderRegistry::new();

    assert_eq!(
        doc.field_with(&registry, "about_page", "page_title")
            .unwrap(),
        Some("About ".to_string())
    );
}

#[test]
fn bare_variable_resolves_within_its_own_section() {
    let doc = Document::parse(
        r#"
[greetings]
name = "Ann"
msg = "Hi ${name}"
"#,
    )
    .unwrap();

    assert_eq!(
        doc.field_with(&ExpanderRegistry::new(), "greetings", "msg")
            .unwrap(),
        Some("Hi Ann".to_string())
    );
}

#[test]
fn nested_cross_references_expand_fully() {
    let doc = Document::parse(
        r#"
[a]
inner = "deepest"
middle = "wrapped ${a:inner}"

[b]
outer = "got: ${a:middle}"
"#,
    )
    .unwrap();

    assert_eq!(
        doc.field_with(&ExpanderRegistry::new(), "b", "outer")
            .unwrap(),
        Some("got: wrapped deepest".to_string())
    );
}

#[test]
fn cyclic_cross_references_fail_without_hanging() {
    let doc = Document::parse(
        r#"
[s]
f1 = "${s:f2}"
f2 = "${s:f1}"
"#,
    )
    .unwrap();

    let result = doc.field_with(&ExpanderRegistry::new(), "s", "f1");
    assert!(matches!(result, Err(Error::CyclicExpansion { .. })));

    // The failure is local to the lookup; the raw value is intact and other
    // lookups still work.
    assert_eq!(doc.raw_field("s", "f1"), Some("${s:f2}"));
    assert_eq!(doc.raw_field("s", "f2"), Some("${s:f1}"));
}

#[test]
fn raw_lookup_skips_expansion() {
    let doc = Document::parse(EN_GB).unwrap();

    assert_eq!(
        doc.raw_field("about_page", "page_title"),
        Some("About ${app_name}")
    );
}

#[test]
fn global_registry_is_shared_across_documents() {
    let en = Document::parse("[s]\nfield = \"${parser_test_shared}\"\n").unwrap();
    let de = Document::parse("[s]\nfeld = \"${parser_test_shared}\"\n").unwrap();

    ExpanderRegistry::global().add("parser_test_shared", |_| "both".to_string());

    assert_eq!(en.field("s", "field").unwrap(), Some("both".to_string()));
    assert_eq!(de.field("s", "feld").unwrap(), Some("both".to_string()));

    ExpanderRegistry::global().remove("parser_test_shared");
    assert_eq!(en.field("s", "field").unwrap(), Some(String::new()));
}

#[test]
fn serialize_then_reparse_is_idempotent() {
    let doc = Document::parse(EN_GB).unwrap();

    let reparsed = Document::parse(&doc.to_source()).unwrap();
    assert_eq!(reparsed, doc);
    assert_eq!(reparsed.to_source(), doc.to_source());
}

#[test]
fn read_document_from_disk() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("en_GB.borr");

    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{EN_GB}").unwrap();

    let doc = cli::read_document(&path).unwrap();
    assert_eq!(doc.lang_id(), "en_GB");
}

#[test]
fn read_document_reports_missing_files() {
    let err = cli::read_document(std::path::Path::new("/nonexistent/xx.borr")).unwrap_err();
    assert!(err.to_string().contains("Failed to read language file"));
}

#[test]
fn read_document_reports_parse_failures() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.borr");

    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "lang_ver = \"not.a.version\"\n").unwrap();

    let err = cli::read_document(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse language file"));
    assert_eq!(
        err.downcast::<Error>().unwrap(),
        Error::MalformedVersion("not.a.version".to_string())
    );
}
