use leftover_chef::{extract_html, extract_html_with_options, Error, Options};

fn page(title: &str, body: &str) -> String {
    format!("<html><head><title>{title}</title></head><body>{body}</body></html>")
}

#[test]
fn extract_returns_title_and_article_text() {
    let html = page("Hi", &format!("<article><p>{}</p></article>", "x".repeat(60)));

    let result = extract_html(&html);
    match result {
        Ok(article) => {
            assert_eq!(article.title, "Hi");
            assert_eq!(article.text, "x".repeat(60));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_fails_when_only_ads_are_present() {
    let html = page(
        "Ads",
        r#"<div class="ads">Buy now, buy now, limited offer, buy now, buy now, buy now!</div>"#,
    );

    assert_eq!(extract_html(&html), Err(Error::ExtractionTooShort));
}

#[test]
fn extract_fails_on_empty_document() {
    assert_eq!(extract_html(""), Err(Error::ExtractionTooShort));
}

#[test]
fn extract_removes_noise_inside_the_main_node() {
    let body = format!(
        r#"<article>
             <p>{}</p>
             <aside><p>ASIDE_TEXT that is long enough to be a block</p></aside>
             <div class="promo"><p>PROMO_TEXT that is long enough to be a block</p></div>
             <script>var SCRIPT_TEXT = "long enough to be a block of text";</script>
           </article>"#,
        "Readable paragraph. ".repeat(4)
    );

    let article = extract_html(&page("Noise", &body)).unwrap();
    assert!(article.text.starts_with("Readable paragraph."));
    assert!(!article.text.contains("ASIDE_TEXT"));
    assert!(!article.text.contains("PROMO_TEXT"));
    assert!(!article.text.contains("SCRIPT_TEXT"));
}

#[test]
fn extract_prefers_higher_scoring_candidate_before_early_exit() {
    let body = format!(
        r#"<article><p>{}</p></article><div class="content"><p>{}</p></div>"#,
        "a".repeat(50),
        "b".repeat(900)
    );

    let article = extract_html(&page("Scores", &body)).unwrap();
    assert_eq!(article.text, "b".repeat(900));
}

#[test]
fn extract_stops_at_first_candidate_above_early_exit_score() {
    let body = format!(
        r#"<article><p>{}</p></article><div class="content"><p>{}</p></div>"#,
        "a".repeat(850),
        "b".repeat(2000)
    );

    let article = extract_html(&page("Early exit", &body)).unwrap();
    assert_eq!(article.text, "a".repeat(850));
}

#[test]
fn extract_keeps_first_candidate_on_equal_scores() {
    let body = format!(
        "<article><p>{}</p></article><article><p>{}</p></article>",
        "first ".repeat(12),
        "other ".repeat(12)
    );

    let article = extract_html(&page("Ties", &body)).unwrap();
    assert!(article.text.starts_with("first"));
    assert!(!article.text.contains("other"));
}

#[test]
fn extract_supports_role_main_and_id_selectors() {
    let role = page(
        "Role",
        &format!(r#"<div role="main"><p>{}</p></div>"#, "ROLE_MAIN ".repeat(6)),
    );
    assert!(extract_html(&role).unwrap().text.contains("ROLE_MAIN"));

    let id = page(
        "Id",
        &format!(r#"<div id="content"><p>{}</p></div>"#, "ID_CONTENT ".repeat(6)),
    );
    assert!(extract_html(&id).unwrap().text.contains("ID_CONTENT"));
}

#[test]
fn extract_falls_back_to_body_without_candidates() {
    let body = format!(
        "<nav>NAV_TEXT NAV_TEXT NAV_TEXT NAV_TEXT NAV_TEXT</nav><div><p>{}</p></div>",
        "BODY_TEXT ".repeat(6)
    );

    let article = extract_html(&page("Body", &body)).unwrap();
    assert!(article.text.contains("BODY_TEXT"));
    assert!(!article.text.contains("NAV_TEXT"));
}

#[test]
fn extract_uses_whole_node_text_without_keep_tags() {
    let body = format!("<article><div>{}</div></article>", "z".repeat(60));

    let article = extract_html(&page("Divs", &body)).unwrap();
    assert_eq!(article.text, "z".repeat(60));
}

#[test]
fn extract_drops_short_blocks_and_joins_the_rest() {
    let body = r"<main>
        <h1>Short heading</h1>
        <p>The first paragraph is comfortably long enough.</p>
        <p>tiny</p>
        <ul><li>A list item that is also long enough to stay.</li></ul>
    </main>";

    let article = extract_html(&page("Blocks", body)).unwrap();
    assert_eq!(
        article.text,
        "The first paragraph is comfortably long enough.\n\nA list item that is also long enough to stay."
    );
}

#[test]
fn extract_emits_nested_keep_tags_separately() {
    let quote = "A quoted paragraph long enough to keep.";
    let body = format!("<article><blockquote><p>{quote}</p></blockquote><p>{}</p></article>", "y".repeat(40));

    let article = extract_html(&page("Nested", &body)).unwrap();
    assert_eq!(article.text, format!("{quote}\n\n{quote}\n\n{}", "y".repeat(40)));
}

#[test]
fn extract_keeps_preformatted_line_breaks() {
    let body = "<article><pre>fn main() {\n    println!(\"leftovers\");\n}\n</pre><p>Paragraph text following the code sample.</p></article>";

    let article = extract_html(&page("Code", body)).unwrap();
    assert!(article.text.starts_with("fn main() {\nprintln!(\"leftovers\");\n}"));
}

#[test]
fn extract_caps_title_and_text_length() {
    let html = page(&"T".repeat(300), &format!("<article><p>{}</p></article>", "w".repeat(9000)));

    let article = extract_html(&html).unwrap();
    assert_eq!(article.title.chars().count(), 160);
    assert_eq!(article.text.chars().count(), 5000);
}

#[test]
fn extract_title_missing_is_empty() {
    let html = format!("<html><body><article><p>{}</p></article></body></html>", "x".repeat(60));
    assert_eq!(extract_html(&html).unwrap().title, "");
}

#[test]
fn extract_title_inside_svg_is_still_read() {
    let html = format!(
        "<html><body><svg><title>Icon</title></svg><article><p>{}</p></article></body></html>",
        "x".repeat(60)
    );
    assert_eq!(extract_html(&html).unwrap().title, "Icon");
}

#[test]
fn extract_with_options_honours_custom_thresholds() {
    let html = page("Custom", "<article><p>just twenty characters</p></article>");
    assert_eq!(extract_html(&html), Err(Error::ExtractionTooShort));

    let options = Options {
        min_text_chars: 10,
        min_block_chars: 5,
        ..Options::default()
    };
    let article = extract_html_with_options(&html, &options).unwrap();
    assert_eq!(article.text, "just twenty characters");
}
