use std::time::Duration;

use flashcard_core::builtin::english_russian;
use flashcard_core::{Card, Deck, SessionIntent};

use super::test_harness::{setup_view_harness, two_card_deck};
use crate::vm::Locale;

fn assert_contains(html: &str, expected: &str) {
    assert!(html.contains(expected), "missing {expected} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_renders_first_card() {
    let harness = setup_view_harness(two_card_deck(), Locale::English);
    let html = harness.render();

    assert_contains(&html, "1 of 2");
    assert_contains(&html, "Communication");
    assert_contains(&html, "btn btn-secondary is-disabled");
    assert_contains(&html, "Previous");
    assert_contains(&html, "Next");
    assert!(!html.contains("Restart"), "unexpected restart label in {html}");
    assert!(!html.contains("Общение"), "back face leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_swaps_text_once_flip_settles() {
    let mut harness = setup_view_harness(two_card_deck(), Locale::English);

    harness.dispatch(SessionIntent::Flip);
    assert!(harness.handles.state().flipped());
    let html = harness.render();
    assert_contains(&html, "Communication");
    assert_contains(&html, "flashcard flashcard--back");

    harness.finish_animation();
    let html = harness.render();
    assert_contains(&html, "Общение");
    assert_contains(&html, "rotateY(180deg)");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_walks_and_loops() {
    let mut harness = setup_view_harness(two_card_deck(), Locale::English);

    harness.dispatch(SessionIntent::Flip);
    harness.dispatch(SessionIntent::Next);
    let state = harness.handles.state();
    assert_eq!(state.position(), 1);
    assert!(!state.flipped());

    harness.finish_animation();
    let html = harness.render();
    assert_contains(&html, "2 of 2");
    assert_contains(&html, "Developer");
    assert_contains(&html, "Restart");
    assert!(!html.contains("is-disabled"), "previous still disabled in {html}");

    harness.dispatch(SessionIntent::Next);
    let html = harness.render();
    assert_eq!(harness.handles.state().position(), 0);
    assert_contains(&html, "1 of 2");
    assert_contains(&html, "Communication");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_next_from_back_shows_new_back_while_turning() {
    let mut harness = setup_view_harness(two_card_deck(), Locale::English);

    harness.dispatch(SessionIntent::Flip);
    harness.finish_animation();
    harness.dispatch(SessionIntent::Next);

    // The card turns back from the back face, so the second card's back text
    // shows until the tween crosses its midpoint.
    let html = harness.render();
    assert!(!harness.handles.state().flipped());
    assert_contains(&html, "2 of 2");
    assert_contains(&html, "Разработчик");
    assert_contains(&html, "data-face=\"back\"");
    assert_contains(&html, "flashcard flashcard--front");
    assert!(!html.contains("Developer"), "front shown before midpoint in {html}");

    harness.finish_animation();
    let html = harness.render();
    assert_contains(&html, "Developer");
    assert_contains(&html, "data-face=\"front\"");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_frame_loop_sleeps_unless_card_is_turning() {
    let window = Duration::from_millis(100);
    let mut harness = setup_view_harness(two_card_deck(), Locale::English);
    assert!(!harness.drive_async(window).await, "idle view scheduled frames");

    harness.dispatch(SessionIntent::Flip);
    assert!(harness.drive_async(window).await, "no frame while turning");

    harness.finish_animation();
    // One last frame draws the settled card.
    harness.drive_async(window).await;
    assert!(!harness.drive_async(window).await, "frames kept coming after settling");
    assert_contains(&harness.render(), "Общение");

    harness.dispatch(SessionIntent::Previous);
    assert!(!harness.drive_async(window).await, "no-op intent woke the frame loop");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_single_card_keeps_previous_disabled() {
    let deck = Deck::new(vec![Card::new("Code", "Код")]).expect("single card deck");
    let mut harness = setup_view_harness(deck, Locale::English);

    harness.dispatch(SessionIntent::Next);
    harness.dispatch(SessionIntent::Previous);
    let html = harness.render();

    assert_eq!(harness.handles.state().position(), 0);
    assert_contains(&html, "1 of 1");
    assert_contains(&html, "is-disabled");
    assert_contains(&html, "Restart");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_renders_russian_labels() {
    let harness = setup_view_harness(english_russian(), Locale::Russian);
    let html = harness.render();

    assert_contains(&html, "Карточка 1 из 9");
    assert_contains(&html, "Назад");
    assert_contains(&html, "Далее");
}
