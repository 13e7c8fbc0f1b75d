//! The `sortquiz render` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::load_config_from;
use sortquiz_core::parser;
use sortquiz_render::page::write_page;

pub fn execute(
    quiz_path: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let quiz = parser::parse_quiz(&quiz_path)?;
    for w in parser::validate_quiz(&quiz) {
        tracing::warn!("{}: {}", quiz.id, w.message);
    }

    let output = output.unwrap_or(config.output_dir);
    std::fs::create_dir_all(&output)?;
    let path = output.join(format!("{}.html", quiz.id));
    write_page(&quiz, &path)?;

    println!("Playable page: {}", path.display());
    Ok(())
}
