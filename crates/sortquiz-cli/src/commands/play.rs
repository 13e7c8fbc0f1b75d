//! The `sortquiz play` command.
//!
//! Drives a session through a scripted move sequence, exactly as a browser
//! drag would: drag start, drop on the column, drag end, one word at a time.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::load_config_from;
use crate::moves;
use sortquiz_core::parser;
use sortquiz_core::report::ScoreReport;
use sortquiz_core::scoring::{score, ScoreCard};
use sortquiz_core::session::{Container, DropTarget, Session};

pub fn execute(
    quiz_path: PathBuf,
    moves_path: PathBuf,
    output: Option<PathBuf>,
    report: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let quiz = parser::parse_quiz(&quiz_path)?;
    let moves = moves::parse_moves(&moves_path)?;

    let mut session = Session::new(quiz);
    for m in &moves {
        let word = session
            .quiz()
            .word_by_label(&m.word)
            .with_context(|| format!("no word labeled '{}' in quiz '{}'", m.word, session.quiz().id))?;
        session.drag_start(word)?;
        session
            .drop_on(DropTarget::Column(&m.column))
            .with_context(|| format!("cannot drop '{}' on '{}'", m.word, m.column))?;
        session.drag_end();
    }

    let card = score(&session);
    print_summary(&card);
    println!("\n{}", card.summary());

    if report || config.always_report {
        let score_report = ScoreReport::from_card(session.quiz(), card);
        let output = output.unwrap_or(config.output_dir);
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let path = output.join(format!("score-{timestamp}.json"));
        score_report.save_json(&path)?;
        eprintln!("Score report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(card: &ScoreCard) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Word", "Placed in", "Expected", "Verdict"]);

    for verdict in &card.verdicts {
        let placed = match &verdict.placement {
            Container::Pool => "-".to_string(),
            Container::Column(slug) => slug.clone(),
        };
        table.add_row(vec![
            Cell::new(&verdict.label),
            Cell::new(placed),
            Cell::new(&verdict.expected),
            Cell::new(verdict.verdict.to_string()),
        ]);
    }

    eprintln!("{table}");
}
