//! End-to-end conversions of HTML fragments and hand-built node trees.

#![cfg(feature = "html")]

use domdown::{ConvertOptions, Converter, DomdownError, Node};

fn strict() -> Converter {
    Converter::with_options(ConvertOptions {
        throw_on_error: true,
    })
}

#[test]
fn paragraph_with_strong() {
    let markdown = strict()
        .convert_html("<p>Hello <strong>World</strong></p>")
        .unwrap();
    assert_eq!(markdown, "Hello **World**");
}

#[test]
fn unordered_list() {
    let markdown = strict().convert_html("<ul><li>A</li><li>B</li></ul>").unwrap();
    assert_eq!(markdown, "* A\n* B");
}

#[test]
fn fenced_code_with_language() {
    let markdown = strict()
        .convert_html(r#"<pre><code class="language-go">fmt.Println("hi")</code></pre>"#)
        .unwrap();
    assert_eq!(markdown, "```go\nfmt.Println(\"hi\")\n```");
}

#[test]
fn image_without_src_is_recorded() {
    let mut converter = Converter::new();
    let markdown = converter
        .convert_html(r#"<p>Look: <img alt="nothing"></p>"#)
        .unwrap();
    assert_eq!(markdown, "Look:");
    assert_eq!(converter.errors().len(), 1);
    assert_eq!(converter.errors()[0].node.tag_name(), Some("img"));
    assert_eq!(
        converter.errors()[0].to_string(),
        "Image has no \"src\" attribute: <img alt=\"nothing\">"
    );
}

#[test]
fn image_without_src_aborts_in_strict_mode() {
    let err = strict()
        .convert_html(r#"<p>Look: <img alt="nothing"></p>"#)
        .unwrap_err();
    match err {
        DomdownError::Markup(error) => assert_eq!(error.node.tag_name(), Some("img")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn article_with_mixed_blocks() {
    let html = r#"
        <article>
            <h1>Writers</h1>
            <p>Some <em>notable</em> writers, see <a href="https://example.com/list" title="List">the list</a>.</p>
            <table>
                <thead><tr><th>Born</th><th>Name</th></tr></thead>
                <tbody>
                    <tr><td>1899</td><td>Ernest Hemingway</td></tr>
                    <tr><td>1949</td><td>Axel Honneth</td></tr>
                </tbody>
            </table>
            <ol>
                <li>Red
                    <ul><li>Garnet</li><li>Ruby</li></ul>
                </li>
                <li>Green</li>
            </ol>
            <dl>
                <dt>DOM</dt><dd>Document Object Model</dd>
            </dl>
        </article>
    "#;

    let markdown = strict().convert_html(html).unwrap();
    assert_eq!(
        markdown,
        "# Writers\n\n\
         Some _notable_ writers, see [the list](https://example.com/list \"List\").\n\n\
         |Born|Name|\n|---|---|\n|1899|Ernest Hemingway|\n|1949|Axel Honneth|\n\n\
         1. Red\n    * Garnet\n    * Ruby\n2. Green\n\n\
         DOM\n:   Document Object Model"
    );
}

#[test]
fn table_rows_without_sections() {
    let html = "<table><tr><th>a</th><th>b</th></tr><tr><td>1</td><td>2</td></tr></table>";
    let markdown = strict().convert_html(html).unwrap();
    assert_eq!(markdown, "|a|b|\n|---|---|\n|1|2|");
}

#[test]
fn code_block_language_from_wrapping_div() {
    let html = "<div class=\"highlight language-sh\"><pre>\nls -la<br>pwd\n</pre></div>";
    let markdown = strict().convert_html(html).unwrap();
    assert_eq!(markdown, "```sh\nls -la\npwd\n```");
}

#[test]
fn unknown_tags_are_reported_in_document_order() {
    let html = "<section><p>One</p><aside>Two</aside></section><p><mark>Three</mark></p>";

    let mut converter = Converter::new();
    let markdown = converter.convert_html(html).unwrap();
    assert_eq!(markdown, "One\n\nTwo\n\nThree");

    let tags: Vec<_> = converter
        .errors()
        .iter()
        .filter_map(|e| e.node.tag_name())
        .collect();
    assert_eq!(tags, vec!["section", "aside", "mark"]);

    let err = strict().convert_html(html).unwrap_err();
    assert!(matches!(err, DomdownError::Markup(ref e) if e.node.tag_name() == Some("section")));
}

#[test]
fn structural_errors_abort_regardless_of_options() {
    let mut converter = Converter::new();
    let err = converter.convert_html("<h2> </h2>").unwrap_err();
    assert!(matches!(err, DomdownError::Markdown(_)));
}

#[test]
fn converter_is_reusable() {
    let mut converter = Converter::new();
    let first = Node::element("h2").with_child(Node::text("First"));
    let second = Node::element("p").with_child(Node::text("Second"));

    assert_eq!(converter.convert(&first).unwrap(), "## First");
    assert_eq!(converter.convert(&second).unwrap(), "Second");
    assert!(converter.errors().is_empty());
}
