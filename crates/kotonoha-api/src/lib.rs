//! kotonoha-api crate
//!
//! Web server exposing DeepL translation relay and Japanese script conversion
//! as HTTP API.
//!
//! ## Endpoints
//! - `POST /translate` - Translation relay (DeepL, target language fixed to Japanese)
//! - `POST /convert` - Script conversion (hiragana / katakana / romaji)
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:3000/translate \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "Hello, world"}'
//!
//! curl -X POST http://127.0.0.1:3000/convert \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "日本語のテキスト", "to": "hiragana"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ConvertRequest, ConvertResponse, TranslateRequest, TranslateResponse};
pub use service::{ConvertService, ConvertServiceFull, DeepLTranslator, TranslateService};
