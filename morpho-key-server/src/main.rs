mod config;

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, post, web};

use clap::Parser;
use serde::{Deserialize, Serialize};

use morpho_key_core::{AnalysisResult, Candidate, Composer, MecabTokenizer, Tokenizer, analyze};

use config::Cli;

/// Body of `/v1/analyze`.
#[derive(Deserialize)]
struct AnalyzeRequest {
	text: String,
}

/// Body of `/v1/suggest`: the source text and the words chosen so far.
#[derive(Deserialize)]
struct SuggestRequest {
	text: String,
	#[serde(default)]
	words: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestResponse {
	last_word: String,
	/// True when the last word had no entry and the fallback pool was used.
	fallback: bool,
	candidates: Vec<Candidate>,
}

/// Read-only state shared by all workers.
///
/// Analyses rebuild their model on each request, so only the tokenizer and
/// its time budget are shared.
struct SharedData {
	tokenizer: Arc<dyn Tokenizer + Send + Sync>,
	timeout: Duration,
}

/// Runs one analysis on the blocking pool, bounded by the tokenizer timeout.
///
/// Errors are already mapped to the HTTP response to send back.
async fn run_analysis(data: &SharedData, text: String) -> Result<AnalysisResult, HttpResponse> {
	let tokenizer = Arc::clone(&data.tokenizer);
	let task = web::block(move || analyze(&*tokenizer, &text));

	match actix_web::rt::time::timeout(data.timeout, task).await {
		Ok(Ok(Ok(result))) => Ok(result),
		Ok(Ok(Err(e))) => {
			log::warn!("Tokenization failed: {e}");
			Err(HttpResponse::BadGateway().body(e.to_string()))
		}
		Ok(Err(e)) => Err(HttpResponse::InternalServerError().body(format!("Analysis task failed: {e}"))),
		Err(_) => {
			log::warn!("Tokenizer timed out after {:?}", data.timeout);
			Err(HttpResponse::GatewayTimeout().body("Tokenizer timed out"))
		}
	}
}

/// HTTP POST endpoint `/v1/analyze`
///
/// Returns every indexed word of the text with its next-word candidates.
#[post("/v1/analyze")]
async fn post_analyze(data: web::Data<SharedData>, body: web::Json<AnalyzeRequest>) -> impl Responder {
	let body = body.into_inner();
	match run_analysis(&data, body.text).await {
		Ok(result) => HttpResponse::Ok().json(result),
		Err(response) => response,
	}
}

/// HTTP POST endpoint `/v1/suggest`
///
/// Returns the candidates following the last chosen word, or the fallback
/// pool when that word is unknown (or nothing was chosen yet).
#[post("/v1/suggest")]
async fn post_suggest(data: web::Data<SharedData>, body: web::Json<SuggestRequest>) -> impl Responder {
	let SuggestRequest { text, words } = body.into_inner();
	let result = match run_analysis(&data, text).await {
		Ok(result) => result,
		Err(response) => return response,
	};

	let composer: Composer = words.into_iter().collect();
	let last_word = composer.last_word().to_owned();
	HttpResponse::Ok().json(SuggestResponse {
		fallback: !result.contains(&last_word),
		candidates: composer.suggestions(&result).into_owned(),
		last_word,
	})
}

#[get("/v1/health")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().body("ok")
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(post_analyze).service(post_suggest).service(get_health);
}

/// Main entry point for the server.
///
/// Reads the configuration from the command line (or environment), installs
/// the logger and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str())).init();

	let tokenizer = MecabTokenizer::new(cli.mecab_config());
	log::info!("Using tokenizer {:?}", tokenizer.config());

	let shared_data = web::Data::new(SharedData {
		tokenizer: Arc::new(tokenizer),
		timeout: cli.timeout(),
	});

	log::info!("Listening on http://{}:{}", cli.host, cli.port);
	HttpServer::new(move || {
		App::new()
			.app_data(shared_data.clone())
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.configure(configure)
	})
		.bind((cli.host.as_str(), cli.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;
	use morpho_key_core::{Token, TokenizationError};

	/// Reads `surface/pos` pairs separated by spaces.
	fn slash_tokenizer(text: &str) -> Result<Vec<Token>, TokenizationError> {
		Ok(text
			.split_whitespace()
			.filter_map(|pair| pair.split_once('/'))
			.map(|(surface, pos)| Token::new(surface, pos))
			.collect())
	}

	fn shared(tokenizer: Arc<dyn Tokenizer + Send + Sync>, timeout: Duration) -> web::Data<SharedData> {
		web::Data::new(SharedData { tokenizer, timeout })
	}

	#[actix_web::test]
	async fn analyze_returns_ordered_candidates() {
		let app = test::init_service(
			App::new()
				.app_data(shared(Arc::new(slash_tokenizer), Duration::from_secs(5)))
				.configure(configure),
		)
		.await;

		let req = test::TestRequest::post()
			.uri("/v1/analyze")
			.set_json(serde_json::json!({"text": "猫/名詞 が/助詞 猫/名詞 は/助詞 。/記号"}))
			.to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

		assert_eq!(
			body,
			serde_json::json!({
				"猫": [
					{"text": "が", "weight": 0.5, "partOfSpeech": "助詞"},
					{"text": "は", "weight": 0.5, "partOfSpeech": "助詞"}
				],
				"が": [{"text": "猫", "weight": 1.0, "partOfSpeech": "名詞"}],
				"は": [{"text": "は", "weight": 1.0, "partOfSpeech": "助詞"}]
			})
		);
	}

	#[actix_web::test]
	async fn empty_text_is_an_empty_object() {
		let app = test::init_service(
			App::new()
				.app_data(shared(Arc::new(slash_tokenizer), Duration::from_secs(5)))
				.configure(configure),
		)
		.await;

		let req = test::TestRequest::post().uri("/v1/analyze").set_json(serde_json::json!({"text": ""})).to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);
		assert_eq!(test::read_body(resp).await, "{}");
	}

	#[actix_web::test]
	async fn suggest_follows_last_word_or_falls_back() {
		let app = test::init_service(
			App::new()
				.app_data(shared(Arc::new(slash_tokenizer), Duration::from_secs(5)))
				.configure(configure),
		)
		.await;

		let text = "今日/名詞 は/助詞 晴れ/名詞";

		let req = test::TestRequest::post()
			.uri("/v1/suggest")
			.set_json(serde_json::json!({"text": text, "words": ["今日"]}))
			.to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["lastWord"], "今日");
		assert_eq!(body["fallback"], false);
		assert_eq!(body["candidates"][0]["text"], "は");

		let req = test::TestRequest::post()
			.uri("/v1/suggest")
			.set_json(serde_json::json!({"text": text}))
			.to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["lastWord"], "");
		assert_eq!(body["fallback"], true);
		assert_eq!(body["candidates"].as_array().map(Vec::len), Some(2));
	}

	#[actix_web::test]
	async fn tokenizer_failure_is_bad_gateway() {
		let failing = |_: &str| -> Result<Vec<Token>, TokenizationError> {
			Err(TokenizationError::Rejected("unsupported input".to_owned()))
		};
		let app = test::init_service(
			App::new()
				.app_data(shared(Arc::new(failing), Duration::from_secs(5)))
				.configure(configure),
		)
		.await;

		let req = test::TestRequest::post().uri("/v1/analyze").set_json(serde_json::json!({"text": "猫"})).to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
		assert_eq!(test::read_body(resp).await, "input rejected: unsupported input");
	}

	#[actix_web::test]
	async fn slow_tokenizer_times_out() {
		let slow = |text: &str| -> Result<Vec<Token>, TokenizationError> {
			std::thread::sleep(Duration::from_millis(300));
			slash_tokenizer(text)
		};
		let app = test::init_service(
			App::new()
				.app_data(shared(Arc::new(slow), Duration::from_millis(20)))
				.configure(configure),
		)
		.await;

		let req = test::TestRequest::post().uri("/v1/analyze").set_json(serde_json::json!({"text": "猫/名詞"})).to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
	}

	#[actix_web::test]
	async fn malformed_body_is_rejected() {
		let app = test::init_service(
			App::new()
				.app_data(shared(Arc::new(slash_tokenizer), Duration::from_secs(5)))
				.configure(configure),
		)
		.await;

		let req = test::TestRequest::post()
			.uri("/v1/analyze")
			.insert_header(("content-type", "application/json"))
			.set_payload("{\"txt\": 1}")
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn health() {
		let app = test::init_service(
			App::new()
				.app_data(shared(Arc::new(slash_tokenizer), Duration::from_secs(5)))
				.configure(configure),
		)
		.await;
		let req = test::TestRequest::get().uri("/v1/health").to_request();
		assert_eq!(test::call_and_read_body(&app, req).await, "ok");
	}
}
