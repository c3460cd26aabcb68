//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::{ConverterCell, TranslateService};

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and the two services.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Translation relay
  ///
  /// - Production: `Arc::new(DeepLTranslator::new(&config)?)`
  /// - Test: `Arc::new(StubTranslateService)`
  pub translator: Arc<dyn TranslateService>,
  /// Script conversion service behind its readiness cell
  ///
  /// Empty until the background dictionary load finishes; tests inject a
  /// pre-filled cell (ready) or a fresh one (uninitialized).
  pub converter: ConverterCell,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, translator: Arc<dyn TranslateService>, converter: ConverterCell) -> Self {
    Self {
      config,
      translator,
      converter,
    }
  }
}
