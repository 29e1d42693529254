use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use morpho_key_core::MecabConfig;

/// Command line / environment configuration of the server.
#[derive(Parser, Debug, Clone)]
#[command(name = "morpho-key-server", about = "Next-word suggestions over HTTP")]
pub struct Cli {
	/// Bind address
	#[arg(long, env = "MORPHO_KEY_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// HTTP port
	#[arg(long, env = "MORPHO_KEY_PORT", default_value_t = 5000)]
	pub port: u16,

	/// MeCab program to run for each analysis
	#[arg(long, env = "MORPHO_KEY_MECAB", default_value = "mecab")]
	pub mecab: PathBuf,

	/// Extra MeCab argument (repeatable), ex. `--mecab-arg=-d --mecab-arg=/path/to/dic`
	#[arg(long = "mecab-arg", allow_hyphen_values = true)]
	pub mecab_args: Vec<String>,

	/// Maximum time given to the tokenizer, in milliseconds
	#[arg(long, env = "MORPHO_KEY_TIMEOUT_MS", default_value_t = 5000)]
	pub timeout_ms: u64,

	/// Log level, overridden by `RUST_LOG`
	#[arg(long, default_value = "info")]
	pub log_level: String,
}

impl Cli {
	pub fn mecab_config(&self) -> MecabConfig {
		MecabConfig {
			program: self.mecab.clone(),
			args: self.mecab_args.clone(),
		}
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}
