use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use serde::Deserialize;

use super::{TokenizationError, Tokenizer};
use crate::model::token::Token;

/// Marker line MeCab prints at the end of each sentence.
const END_OF_SENTENCE: &str = "EOS";

/// How to launch MeCab.
///
/// Defaults to a `mecab` binary found on `PATH`, with its default
/// dictionary and output format.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct MecabConfig {
	/// Program to run.
	pub program: PathBuf,
	/// Extra arguments (dictionary directory, user dictionaries...).
	pub args: Vec<String>,
}

impl Default for MecabConfig {
	fn default() -> Self {
		Self {
			program: PathBuf::from("mecab"),
			args: Vec::new(),
		}
	}
}

/// Tokenizer backed by a MeCab process.
///
/// One process is spawned per call: the text is written to its stdin and
/// the default output format is parsed from its stdout.
#[derive(Clone, Debug, Default)]
pub struct MecabTokenizer {
	config: MecabConfig,
}

impl MecabTokenizer {
	pub fn new(config: MecabConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &MecabConfig {
		&self.config
	}

	fn program_name(&self) -> String {
		self.config.program.display().to_string()
	}
}

impl Tokenizer for MecabTokenizer {
	/// Runs MeCab on `text`.
	///
	/// # Errors
	/// - `Rejected` if the text contains a NUL byte
	/// - `Unavailable` if the program cannot be started
	/// - `Failed` if it exits with a non-zero status
	/// - `InvalidOutput` if its output is not UTF-8
	///
	/// # Notes
	/// - Empty or blank text returns no tokens without spawning anything.
	fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizationError> {
		if text.trim().is_empty() {
			return Ok(Vec::new());
		}
		if text.contains('\0') {
			return Err(TokenizationError::Rejected("text contains a NUL byte".to_owned()));
		}

		let mut child = Command::new(&self.config.program)
			.args(&self.config.args)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.spawn()
			.map_err(|source| TokenizationError::Unavailable {
				program: self.program_name(),
				source,
			})?;

		// MeCab reads line by line, a trailing newline flushes the last sentence.
		// Stdin is fed from another thread so a large output cannot fill the
		// stdout pipe while we are still writing.
		let writer = child.stdin.take().map(|mut stdin| {
			let mut input = text.to_owned();
			if !input.ends_with('\n') {
				input.push('\n');
			}
			thread::spawn(move || stdin.write_all(input.as_bytes()))
		});

		let output = child.wait_with_output()?;
		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
			log::warn!("{} failed with {}: {}", self.program_name(), output.status, stderr);
			return Err(TokenizationError::Failed {
				status: output.status.to_string(),
				stderr,
			});
		}
		if let Some(writer) = writer {
			writer.join().map_err(|_| io::Error::other("stdin writer panicked"))??;
		}

		let stdout = String::from_utf8(output.stdout)?;
		Ok(parse_mecab_output(&stdout))
	}
}

/// Parses MeCab's default output format.
///
/// Each line reads `surface\tpos,subpos1,subpos2,...`. The top-level
/// part-of-speech is the first feature.
///
/// `EOS` markers and blank lines are skipped. Lines that do not carry both a
/// surface and a tag are dropped.
pub fn parse_mecab_output(output: &str) -> Vec<Token> {
	output
		.lines()
		.filter(|line| !line.is_empty() && *line != END_OF_SENTENCE)
		.filter_map(|line| {
			let fields: Vec<&str> = match line.split_once('\t') {
				Some((surface, features)) => {
					let pos = features.split(',').next().unwrap_or_default();
					[surface, pos].into_iter().filter(|field| !field.is_empty()).collect()
				}
				None => vec![line],
			};
			let token = Token::from_fields(&fields);
			if token.is_none() {
				log::debug!("dropping malformed analyzer line: {line:?}");
			}
			token
		})
		.collect()
}
