use webbrief::extract::extract_text;

/// Tests for the HTML text extractor.
/// These verify the extraction contract: script/style/noscript subtrees are
/// dropped, whitespace runs collapse to single spaces, and the function is a
/// pure function of its input.

#[test]
fn test_output_contains_no_script_or_style_content() {
    let html = r#"<html>
        <head>
            <title>Page</title>
            <style>.hidden { display: none; }</style>
            <script src="app.js"></script>
        </head>
        <body>
            <script>console.log("tracking");</script>
            <h1>Article title</h1>
            <p>First paragraph.</p>
            <style>p { margin: 0; }</style>
            <noscript>Please enable JavaScript</noscript>
        </body>
    </html>"#;

    let text = extract_text(html);

    assert!(
        !text.contains("console.log") && !text.contains("tracking"),
        "Script content must not leak into extracted text: {text:?}"
    );
    assert!(
        !text.contains("display") && !text.contains("margin"),
        "Style content must not leak into extracted text: {text:?}"
    );
    assert!(
        !text.contains("enable JavaScript"),
        "Noscript content must not leak into extracted text: {text:?}"
    );
    assert!(
        text.contains("Article title") && text.contains("First paragraph."),
        "Visible content should be kept: {text:?}"
    );
}

#[test]
fn test_no_run_of_consecutive_whitespace() {
    let html = "<body>\n\n  <p>a\t\tb</p>\n  <div>c \n d</div>\n\n</body>";
    let text = extract_text(html);

    assert!(
        !text.contains("  ") && !text.contains('\n') && !text.contains('\t'),
        "Whitespace runs must collapse to single spaces: {text:?}"
    );
    assert_eq!(text, "a b c d");
}

#[test]
fn test_output_is_trimmed() {
    let html = "<body>   <p>  padded  </p>   </body>";
    let text = extract_text(html);
    assert_eq!(text, "padded");
}

#[test]
fn test_missing_body_yields_empty_string_not_failure() {
    assert_eq!(extract_text(""), "");
    assert_eq!(extract_text("<html><head><title>t</title></head></html>"), "");
    assert_eq!(extract_text("not html at all"), "not html at all");
}

#[test]
fn test_extraction_is_idempotent_over_identical_markup() {
    let html = r#"<body><main><h1>Doc</h1><p>Some   content here.</p>
        <script>var x;</script></main></body>"#;

    let first = extract_text(html);
    let second = extract_text(html);
    assert_eq!(first, second, "Extractor must be deterministic");
}
