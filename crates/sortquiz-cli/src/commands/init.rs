//! The `sortquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create sortquiz.toml
    if std::path::Path::new("sortquiz.toml").exists() {
        println!("sortquiz.toml already exists, skipping.");
    } else {
        std::fs::write("sortquiz.toml", SAMPLE_CONFIG)?;
        println!("Created sortquiz.toml");
    }

    // Create example quiz
    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.toml");
    if example_path.exists() {
        println!("quizzes/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: sortquiz validate --quiz quizzes/example.toml");
    println!("  2. Run: sortquiz render --quiz quizzes/example.toml");
    println!("  3. Open the rendered page in a browser and start dragging");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# sortquiz configuration

# Where rendered pages and score reports are written.
output_dir = "./sortquiz-out"

# Save a score report JSON on every play, without needing --report.
always_report = false
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
id = "fruit-or-veg"
title = "Fruit or Vegetable?"
description = "Drag each word into the column where it belongs, then check your answers."

[[categories]]
name = "Fruit"
slug = "fruit"

[[categories]]
name = "Vegetables"
slug = "veg"

[[words]]
label = "apple"
category = "fruit"

[[words]]
label = "carrot"
category = "veg"

[[words]]
label = "pear"
category = "fruit"

[[words]]
label = "broccoli"
category = "veg"

[[words]]
label = "banana"
category = "fruit"

[[words]]
label = "spinach"
category = "veg"
"#;
