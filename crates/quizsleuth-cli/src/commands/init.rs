//! The `quizsleuth init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizsleuth.toml").exists() {
        println!("quizsleuth.toml already exists, skipping.");
    } else {
        std::fs::write("quizsleuth.toml", SAMPLE_CONFIG)?;
        println!("Created quizsleuth.toml");
    }

    println!("\nNext steps:");
    println!("  1. Record an attempt: quizsleuth add --score 60 A C B D");
    println!("  2. See what the data suggests: quizsleuth suggest");
    println!("  3. Or work through the menu: quizsleuth interactive");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizsleuth configuration

# Maximum number of answers per attempt
max_answers = 10

# Number of expected/actual pairs `quizsleuth pairs` keeps
pair_capacity = 10

# Where attempts and pairs are stored. ${VAR} references are expanded.
data_file = "quizsleuth-attempts.txt"
pairs_file = "quizsleuth-pairs.txt"

# auto, always or never
color = "auto"
"#;
