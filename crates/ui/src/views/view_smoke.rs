use super::test_harness::{ViewKind, setup_view_harness};

#[test]
fn home_view_renders_the_count_prompt() {
    let mut harness = setup_view_harness(ViewKind::Home, false);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("How many questions would you like to be asked about US State Capitals?"),
        "missing prompt in {html}"
    );
    assert!(
        html.contains("Enter a number 1-50 (inclusive):"),
        "missing instructions in {html}"
    );
    assert!(
        html.contains("live from Wikipedia"),
        "missing data origin in {html}"
    );
}

#[test]
fn home_view_surfaces_fallback_ranks() {
    let mut harness = setup_view_harness(ViewKind::Home, true);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("built-in table"),
        "missing fallback notice in {html}"
    );
}

#[test]
fn session_view_renders_the_first_question() {
    let mut harness = setup_view_harness(ViewKind::Session(3), false);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Question 1: What is the capital of"),
        "missing question in {html}"
    );
    assert!(
        html.contains("most populous state in the US"),
        "missing rank hint in {html}"
    );
    assert!(html.contains("Check Answer"), "missing submit in {html}");
}
