//! Move script parser.
//!
//! A move script is the synthetic-event form of a play session: each entry
//! names a word (by label) and the column it is dropped into, and is applied
//! as a full drag lifecycle (start, drop, end).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Intermediate TOML structure for parsing move scripts.
#[derive(Debug, Deserialize)]
struct TomlMovesFile {
    #[serde(default)]
    moves: Vec<TomlMove>,
}

#[derive(Debug, Deserialize)]
struct TomlMove {
    word: String,
    column: String,
}

/// One scripted drag: pick up `word`, drop it on `column`.
#[derive(Debug, Clone)]
pub struct Move {
    /// Word label, resolved against the quiz at apply time.
    pub word: String,
    /// Category slug of the target column.
    pub column: String,
}

/// Parse a move script file.
pub fn parse_moves(path: &Path) -> Result<Vec<Move>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read move script: {}", path.display()))?;
    parse_moves_str(&content, path)
}

/// Parse a move script from a TOML string.
pub fn parse_moves_str(content: &str, source_path: &Path) -> Result<Vec<Move>> {
    let parsed: TomlMovesFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(parsed
        .moves
        .into_iter()
        .map(|m| Move {
            word: m.word,
            column: m.column,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_valid_moves() {
        let toml = r#"
[[moves]]
word = "apple"
column = "fruit"

[[moves]]
word = "carrot"
column = "veg"
"#;
        let moves = parse_moves_str(toml, &PathBuf::from("moves.toml")).unwrap();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].word, "apple");
        assert_eq!(moves[1].column, "veg");
    }

    #[test]
    fn empty_script_is_valid() {
        let moves = parse_moves_str("", &PathBuf::from("moves.toml")).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn parse_malformed_moves() {
        let result = parse_moves_str("[[moves]]\nword = 3", &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }
}
