//! End-to-end pipeline tests over the shipped quiz data.
//!
//! These exercise the full path a real play takes: parse the TOML, drive
//! the session through drag transitions, score, persist a report, and
//! render the playable page.

use std::path::Path;

use sortquiz_core::model::Quiz;
use sortquiz_core::parser;
use sortquiz_core::report::ScoreReport;
use sortquiz_core::scoring::{score, Verdict};
use sortquiz_core::session::{DropTarget, Session};
use sortquiz_render::page::generate_page;

fn canonical_quiz() -> Quiz {
    parser::parse_quiz(Path::new("../../quizzes/describing-people.toml")).unwrap()
}

/// Drag every word into the column its answer key names.
fn play_perfectly(session: &mut Session) {
    let ids: Vec<_> = session.quiz().word_ids().collect();
    for id in ids {
        let slug = session.quiz().words[id.0].category.clone();
        session.drag_start(id).unwrap();
        session.drop_on(DropTarget::Column(&slug)).unwrap();
        session.drag_end();
    }
}

#[test]
fn canonical_quiz_is_well_formed() {
    let quiz = canonical_quiz();
    assert_eq!(quiz.id, "describing-people");
    assert_eq!(quiz.categories.len(), 3);
    assert_eq!(quiz.words.len(), 12);
    assert!(parser::validate_quiz(&quiz).is_empty());
}

#[test]
fn perfect_run_scores_twelve_of_twelve() {
    let mut session = Session::new(canonical_quiz());
    play_perfectly(&mut session);

    let card = score(&session);
    assert_eq!(card.summary(), "You got 12 out of 12 correct!");
    assert!(card.verdicts.iter().all(|v| v.verdict == Verdict::Correct));
}

#[test]
fn untouched_pool_scores_zero_of_twelve() {
    let session = Session::new(canonical_quiz());

    let card = score(&session);
    assert_eq!(card.summary(), "You got 0 out of 12 correct!");
    assert!(card
        .verdicts
        .iter()
        .all(|v| v.verdict == Verdict::Unplaced));
}

#[test]
fn fixing_one_word_moves_the_count_by_one() {
    let mut session = Session::new(canonical_quiz());
    play_perfectly(&mut session);

    // Misplace one word, then put it right again.
    let id = session.quiz().word_by_label("trained to be a vet").unwrap();
    session.drag_start(id).unwrap();
    session.drop_on(DropTarget::Column("current")).unwrap();
    session.drag_end();
    assert_eq!(score(&session).correct, 11);

    session.drag_start(id).unwrap();
    session.drop_on(DropTarget::Column("past")).unwrap();
    session.drag_end();
    assert_eq!(score(&session).correct, 12);
}

#[test]
fn report_roundtrip_preserves_verdicts() {
    let quiz = canonical_quiz();
    let mut session = Session::new(quiz.clone());
    play_perfectly(&mut session);

    let report = ScoreReport::from_card(&quiz, score(&session));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.json");

    report.save_json(&path).unwrap();
    let loaded = ScoreReport::load_json(&path).unwrap();

    assert_eq!(loaded.correct, 12);
    assert_eq!(loaded.total, 12);
    assert_eq!(loaded.quiz.id, "describing-people");
    assert_eq!(loaded.verdicts.len(), 12);
    assert_eq!(loaded.summary, "You got 12 out of 12 correct!");
}

#[test]
fn rendered_page_carries_the_whole_quiz() {
    let quiz = canonical_quiz();
    let html = generate_page(&quiz);

    for cat in &quiz.categories {
        assert!(html.contains(&format!("data-category=\"{}\"", cat.slug)));
    }
    for word in &quiz.words {
        assert!(html.contains(&word.label), "missing word: {}", word.label);
    }
    // One draggable tile and one error marker per word.
    assert_eq!(html.matches("class=\"draggable-word\"").count(), 12);
    assert_eq!(html.matches("class=\"error-icon\"").count(), 12);
}
