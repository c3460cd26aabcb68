//! Dictionary Management Module
//!
//! Manages loading of the vibrato-rkyv dictionary used for reading extraction.
//! Preset dictionaries (IPADIC, UniDic, etc.) are downloaded on the first run and
//! loaded from the cache directory from the second time onwards.
//! A local dictionary file can be loaded directly instead.

use crate::errors::error_definition::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Where the dictionary comes from
#[derive(Debug, Clone)]
enum DictionarySource {
  /// Preset dictionary, downloaded into the cache directory on first use
  Preset(PresetDictionaryKind),
  /// Dictionary file already present on disk
  Local(PathBuf),
}

/// Loads the vibrato-rkyv dictionary exactly once and shares it afterwards.
///
/// The load result (success or failure) is memoized, so a failed first load
/// keeps returning the same error instead of retrying the download.
pub struct DictionaryManager {
  /// Dictionary cache directory
  cache_dir: PathBuf,

  /// Dictionary source (preset or local file)
  source: DictionarySource,

  /// Memoized load result. `DictionaryError` implements `Clone`,
  /// so the whole `Result` can be cached and handed out repeatedly.
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Constructs a manager for a preset dictionary.
  ///
  /// The cache directory is derived from the OS cache dir, see [`default_cache_dir`].
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    Ok(Self {
      cache_dir: default_cache_dir()?,
      source: DictionarySource::Preset(preset_kind),
      dictionary: OnceLock::new(),
    })
  }

  /// Constructs a manager for a local dictionary file.
  ///
  /// Fails with [`DictionaryError::DictionaryNotFound`] when the file does not exist.
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      return Err(DictionaryError::DictionaryNotFound(path.display().to_string()));
    }

    // The directory holding the dictionary file doubles as the cache directory
    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      source: DictionarySource::Local(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Loads the dictionary.
  ///
  /// - First call: downloads (preset) or reads (local) the dictionary
  /// - Subsequent calls: returns a clone of the shared `Arc<Dictionary>`
  /// - A first-call error is cached and returned again on every later call
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match &self.source {
      DictionarySource::Local(path) => Dictionary::from_path(path, LoadMode::TrustCache)
        .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e))),

      DictionarySource::Preset(preset_kind) => {
        // Create the cache directory on the first run
        std::fs::create_dir_all(&self.cache_dir)
          .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

        // One subdirectory per dictionary name
        let dict_dir = self.cache_dir.join(preset_kind.name());

        // Downloads on the first run, loads from cache afterwards
        Dictionary::from_preset_with_download(*preset_kind, &dict_dir)
          .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
      }
    }
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                  |
/// |---------|-----------------------------------------------|
/// | Linux   | `~/.cache/kotonoha/dict`                      |
/// | macOS   | `~/Library/Caches/kotonoha/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\kotonoha\dict` |
fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("kotonoha").join("dict"))
}

/// Manual `Debug` implementation for `DictionaryManager`
///
/// `vibrato_rkyv::Dictionary` does not implement `Debug`,
/// so only meta information is shown.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("source", &self.source)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}
