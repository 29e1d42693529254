use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use morpho_key_core::{Analyzer, Composer, MecabConfig, MecabTokenizer, PosCategory, pick_weighted};

#[derive(Parser)]
#[command(name = "morpho-key-exemple", about = "Prints next-word suggestions for a text file")]
struct Cli {
    /// Source text file
    source: PathBuf,

    /// Number of words to compose from suggestions
    #[arg(long, default_value_t = 10)]
    steps: usize,

    /// Seed for the simulated choices (random if absent)
    #[arg(long)]
    seed: Option<u64>,

    /// MeCab program
    #[arg(long, default_value = "mecab")]
    mecab: PathBuf,

    /// Log level, overridden by `RUST_LOG`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Category label of a tag, for display.
fn label(part_of_speech: &str) -> &'static str {
    PosCategory::from_tag(part_of_speech).map_or("?", PosCategory::label)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str())).init();

    // The model is rebuilt from the whole file on each run
    let text = std::fs::read_to_string(&cli.source)?;
    let analyzer = Analyzer::new(MecabTokenizer::new(MecabConfig {
        program: cli.mecab.clone(),
        ..MecabConfig::default()
    }));
    let analysis = analyzer.analyze(&text)?;

    // Candidate table, one line per word
    for (word, candidates) in analysis.iter() {
        let line: Vec<String> = candidates
            .iter()
            .map(|c| format!("{} ({:.1}%, {})", c.text, c.weight * 100.0, label(&c.part_of_speech)))
            .collect();
        println!("{word} -> {}", line.join(", "));
    }

    // Legend of the categories known for display
    let legend: Vec<String> = PosCategory::ALL
        .iter()
        .map(|category| format!("{}={}", category.tag(), category.label()))
        .collect();
    println!("\nLegend: {}", legend.join(" "));

    // Simulate a user always picking a suggestion, weighted by probability
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut composer = Composer::new();
    for _ in 0..cli.steps {
        let suggestions = composer.suggestions(&analysis);
        match pick_weighted(&suggestions, &mut rng) {
            Some(candidate) => composer.push(candidate.text.clone()),
            None => break,
        }
    }
    println!("\nComposed ({} words): {}", composer.words().len(), composer.text());

    Ok(())
}
