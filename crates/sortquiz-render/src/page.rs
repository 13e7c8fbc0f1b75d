//! Playable quiz page generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined. The page
//! carries the same interaction and scoring semantics as the headless
//! session: drops resolve to the nearest enclosing column, the pool is not
//! a drop target, unplaced words are never counted, and submitting always
//! recomputes from current placements.

use anyhow::Result;
use std::path::Path;

use sortquiz_core::model::Quiz;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the playable page for a quiz.
pub fn generate_page(quiz: &Quiz) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(&quiz.title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&quiz.title)));
    if !quiz.description.is_empty() {
        html.push_str(&format!(
            "<p class=\"meta\">{}</p>\n",
            html_escape(&quiz.description)
        ));
    }
    html.push_str("</header>\n");

    // Category columns
    html.push_str("<div id=\"columns-container\">\n");
    for cat in &quiz.categories {
        html.push_str(&format!(
            "<div class=\"drop-column\" data-category=\"{}\">\n<h2>{}</h2>\n</div>\n",
            html_escape(&cat.slug),
            html_escape(&cat.name)
        ));
    }
    html.push_str("</div>\n");

    // Word pool
    html.push_str("<div id=\"words-container\">\n");
    for word in &quiz.words {
        html.push_str(&format!(
            "<div class=\"draggable-word\" draggable=\"true\" data-category=\"{}\">{}<span class=\"error-icon\">\u{2718}</span></div>\n",
            html_escape(&word.category),
            html_escape(&word.label)
        ));
    }
    html.push_str("</div>\n");

    // Submit control and results region
    html.push_str("<button id=\"submit-btn\">Check answers</button>\n");
    html.push_str("<div id=\"results\"></div>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the playable page to a file.
pub fn write_page(quiz: &Quiz, path: &Path) -> Result<()> {
    let html = generate_page(quiz);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --column: #f9fafb; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --column: #1f2937; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
.meta { color: #6b7280; }
#columns-container { display: flex; gap: 1rem; align-items: stretch; }
.drop-column { flex: 1; min-height: 14rem; padding: 0.5rem 1rem; border: 2px dashed var(--border); border-radius: 8px; background: var(--column); }
.drop-column h2 { font-size: 1rem; margin: 0.25rem 0 0.75rem; }
#words-container { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1.5rem 0; min-height: 3rem; }
.draggable-word { position: relative; padding: 0.4rem 0.8rem; margin: 0.2rem 0; border: 2px solid var(--border); border-radius: 6px; background: var(--bg); cursor: grab; user-select: none; }
.draggable-word.dragging { opacity: 0.5; }
.error-icon { display: none; position: absolute; top: -0.5rem; right: -0.4rem; color: #ef4444; font-size: 0.8rem; }
#submit-btn { padding: 0.5rem 1.5rem; border: none; border-radius: 6px; background: #2563eb; color: #fff; font-size: 1rem; cursor: pointer; }
#submit-btn:hover { background: #1d4ed8; }
#results { margin-top: 1rem; font-size: 1.1rem; font-weight: bold; }
"#;

const JS: &str = r#"
let draggedItem = null;

const draggableWords = document.querySelectorAll('.draggable-word');
const dropColumns = document.querySelectorAll('.drop-column');
const submitBtn = document.getElementById('submit-btn');
const resultsDiv = document.getElementById('results');

draggableWords.forEach(word => {
  word.addEventListener('dragstart', e => {
    draggedItem = e.target;
    draggedItem.classList.add('dragging');
  });
  word.addEventListener('dragend', () => {
    if (draggedItem) {
      draggedItem.classList.remove('dragging');
      draggedItem = null;
    }
  });
});

dropColumns.forEach(column => {
  // dragover/dragenter must cancel the default "no drop" behavior
  column.addEventListener('dragover', e => e.preventDefault());
  column.addEventListener('dragenter', e => e.preventDefault());
  column.addEventListener('drop', e => {
    e.preventDefault();
    // A drop may land on a word inside the column; resolve upwards.
    const target = e.target.closest('.drop-column');
    if (target && draggedItem) {
      target.appendChild(draggedItem);
    }
  });
});

submitBtn.addEventListener('click', () => {
  let correctCount = 0;
  const totalWords = draggableWords.length;

  resultsDiv.textContent = '';

  dropColumns.forEach(column => {
    const columnCategory = column.getAttribute('data-category');
    column.querySelectorAll('.draggable-word').forEach(word => {
      const errorIcon = word.querySelector('.error-icon');
      if (word.getAttribute('data-category') === columnCategory) {
        correctCount++;
        word.style.borderColor = 'green';
        errorIcon.style.display = 'none';
      } else {
        word.style.borderColor = 'red';
        errorIcon.style.display = 'inline';
      }
    });
  });

  resultsDiv.textContent = `You got ${correctCount} out of ${totalWords} correct!`;
});
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use sortquiz_core::model::{Category, Word};

    fn make_quiz() -> Quiz {
        Quiz {
            id: "fruit-or-veg".into(),
            title: "Fruit or Vegetable?".into(),
            description: "Sort each word.".into(),
            categories: vec![
                Category {
                    name: "Fruit".into(),
                    slug: "fruit".into(),
                },
                Category {
                    name: "Vegetables".into(),
                    slug: "veg".into(),
                },
            ],
            words: vec![
                Word {
                    label: "apple".into(),
                    category: "fruit".into(),
                },
                Word {
                    label: "carrot".into(),
                    category: "veg".into(),
                },
            ],
        }
    }

    #[test]
    fn page_contains_required_elements() {
        let html = generate_page(&make_quiz());

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("id=\"columns-container\""));
        assert!(html.contains("id=\"words-container\""));
        assert!(html.contains("id=\"submit-btn\""));
        assert!(html.contains("id=\"results\""));
    }

    #[test]
    fn page_renders_columns_and_words() {
        let html = generate_page(&make_quiz());

        assert!(html.contains("data-category=\"fruit\""));
        assert!(html.contains("data-category=\"veg\""));
        assert!(html.contains("<h2>Fruit</h2>"));
        assert!(html.contains("apple"));
        assert!(html.contains("carrot"));
        assert!(html.contains("draggable=\"true\""));
        // One hidden error marker per word
        assert_eq!(html.matches("class=\"error-icon\"").count(), 2);
    }

    #[test]
    fn page_escapes_labels() {
        let mut quiz = make_quiz();
        quiz.words[0].label = "<script>alert('x')</script>".into();
        let html = generate_page(&quiz);

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn page_inlines_interaction_script() {
        let html = generate_page(&make_quiz());

        assert!(html.contains("dragstart"));
        assert!(html.contains("preventDefault"));
        assert!(html.contains("closest('.drop-column')"));
        assert!(html.contains("out of ${totalWords} correct"));
    }

    #[test]
    fn page_write_to_file() {
        let quiz = make_quiz();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages/quiz.html");

        write_page(&quiz, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
