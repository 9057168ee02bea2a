//! End-to-end tests for the split pipeline.
//!
//! Each test writes an aggregate document to a temp directory, runs the
//! split service and inspects the produced record documents, including
//! re-parsing them as standalone XML.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use xmlsplit::{split_file, MatchCriteria, SplitError};

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Split `xml` into a fresh temp output directory and return the output
/// document bodies (declaration stripped), sorted for stable comparison.
fn split_to_documents(xml: &str, criteria: MatchCriteria) -> Vec<String> {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("aggregate.xml");
    fs::write(&input, xml).expect("write input");

    let out = dir.path().join("out");
    fs::create_dir(&out).expect("create output dir");

    let report = split_file(&input, criteria, Some(&out)).expect("split succeeds");
    let documents = read_documents(&out);
    assert_eq!(report.documents_written, documents.len());
    documents
}

/// Read all produced documents from `dir`, strip declarations, sort.
fn read_documents(dir: &Path) -> Vec<String> {
    let mut documents: Vec<String> = fs::read_dir(dir)
        .expect("readable dir")
        .map(|entry| {
            let path = entry.expect("dir entry").path();
            assert_eq!(
                path.extension().and_then(|e| e.to_str()),
                Some("xml"),
                "unexpected output file: {}",
                path.display()
            );
            let content = fs::read_to_string(&path).expect("readable output");
            content
                .strip_prefix(XML_DECL)
                .unwrap_or_else(|| panic!("missing XML declaration in {}", path.display()))
                .to_string()
        })
        .collect();
    documents.sort();
    documents
}

fn criteria(
    element: Option<&str>,
    namespace: Option<&str>,
    list: Option<&str>,
    depth: Option<usize>,
) -> MatchCriteria {
    MatchCriteria::resolve(element, namespace, list, depth).expect("valid criteria")
}

#[test]
fn one_document_per_matched_record() {
    let documents = split_to_documents(
        "<root><r>1</r><skip/><r>2</r><r>3</r></root>",
        criteria(Some("r"), None, None, Some(1)),
    );

    assert_eq!(documents, vec!["<r>1</r>", "<r>2</r>", "<r>3</r>"]);
}

#[test]
fn outputs_reparse_with_matching_root_name() {
    // The prefix binding sits on the record element itself, so the copied
    // fragment is self-sufficient. Bindings on ancestors are not fixed up.
    let documents = split_to_documents(
        r#"<root><p:rec xmlns:p="urn:x" a="1"><p:v>x</p:v></p:rec></root>"#,
        criteria(Some("rec"), Some("urn:x"), None, None),
    );

    assert_eq!(documents.len(), 1);
    let doc = roxmltree::Document::parse(&documents[0]).expect("output re-parses standalone");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "rec");
    assert_eq!(root.tag_name().namespace(), Some("urn:x"));
}

#[test]
fn depth_gated_termination_keeps_inner_record_nested() {
    let documents = split_to_documents(
        "<root><r><x><r>inner</r></x></r></root>",
        criteria(Some("r"), None, None, Some(1)),
    );

    assert_eq!(documents, vec!["<r><x><r>inner</r></x></r>"]);
}

#[test]
fn depth_only_matching_splits_every_depth_two_element() {
    let documents = split_to_documents(
        "<root><a><inner1><leaf/></inner1></a><b><inner2/></b></root>",
        criteria(None, None, None, Some(2)),
    );

    assert_eq!(
        documents,
        vec!["<inner1><leaf></leaf></inner1>", "<inner2></inner2>"]
    );
}

#[test]
fn name_list_matching_has_no_implicit_depth() {
    let documents = split_to_documents(
        r#"<root xmlns:a="urn:a"><a:foo>top</a:foo><wrap><bar>deep</bar><a:other/></wrap></root>"#,
        criteria(None, None, Some("urn:a,foo,,bar"), None),
    );

    assert_eq!(documents, vec!["<a:foo>top</a:foo>", "<bar>deep</bar>"]);
}

#[test]
fn no_criteria_defaults_to_root_children() {
    let documents = split_to_documents(
        "<root><a>1</a><b><c>nested</c></b></root>",
        criteria(None, None, None, None),
    );

    assert_eq!(documents, vec!["<a>1</a>", "<b><c>nested</c></b>"]);
}

#[test]
fn matches_inside_extracted_fragment_do_not_split_again() {
    let documents = split_to_documents(
        "<root><r><r>child</r></r><r>plain</r></root>",
        criteria(Some("r"), None, None, None),
    );

    // The depth-2 <r> satisfies the name criteria on its own but is part
    // of an already-extracted fragment.
    assert_eq!(documents, vec!["<r><r>child</r></r>", "<r>plain</r>"]);
}

#[test]
fn truncated_input_fails_and_keeps_completed_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("aggregate.xml");
    fs::write(&input, "<root><r>done</r><r><x>half").expect("write input");

    let out = dir.path().join("out");
    fs::create_dir(&out).expect("create output dir");

    let result = split_file(&input, criteria(Some("r"), None, None, None), Some(&out));

    assert!(result.is_err(), "truncated record must be a structural error");
    assert_eq!(read_documents(&out), vec!["<r>done</r>"]);
}

#[test]
fn malformed_input_is_structural_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("aggregate.xml");
    fs::write(&input, "<root><r></mismatch></r></root>").expect("write input");

    let result = split_file(&input, criteria(Some("r"), None, None, None), None);
    assert!(matches!(
        result,
        Err(SplitError::XmlParse(_) | SplitError::UnterminatedRecord { .. })
    ));
}

#[test]
fn comments_and_processing_instructions_pass_through() {
    let documents = split_to_documents(
        "<root><r><?style here?><!-- keep -->text</r></root>",
        criteria(Some("r"), None, None, None),
    );

    assert_eq!(documents, vec!["<r><?style here?><!-- keep -->text</r>"]);
}

#[test]
fn empty_input_without_root_is_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("aggregate.xml");
    fs::write(&input, "").expect("write input");

    let result = split_file(&input, criteria(None, None, None, None), None);
    assert!(matches!(result, Err(SplitError::MissingRoot)));
}
