//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_DEEPL_API_URL, DEFAULT_PRESET_DICT};
use crate::errors::ApiError;

/// Dictionary Preset Type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
  /// IPAdic dictionary
  Ipadic,
  /// UniDic (Corpus of Contemporary Written Japanese)
  UnidicCwj,
  /// UniDic (Corpus of Spontaneous Japanese)
  UnidicCsj,
}

impl FromStr for Preset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: ipadic, unidic-cwj, unidic-csj",
        s
      )),
    }
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:3000")
  pub bind_addr: String,
  /// DeepL API authentication key (`DeepL-Auth-Key` scheme)
  pub deepl_api_key: String,
  /// DeepL API endpoint URL
  pub deepl_api_url: String,
  /// Dictionary preset to use for script conversion
  pub preset: Preset,
  /// Local dictionary file, overrides the preset when set
  pub dict_path: Option<PathBuf>,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// `DEEPL_API_KEY` is mandatory: without it the translation relay cannot
  /// authenticate, so startup must fail before the server binds.
  ///
  /// # Errors
  /// Returns an error if `DEEPL_API_KEY` is missing/empty or if
  /// `KOTONOHA_PRESET_DICT` holds an unknown preset name
  pub fn from_env() -> crate::errors::Result<Self> {
    let deepl_api_key = std::env::var("DEEPL_API_KEY")
      .ok()
      .filter(|key| !key.is_empty())
      .ok_or_else(|| ApiError::config("DEEPL_API_KEY が設定されていません。"))?;

    let deepl_api_url =
      std::env::var("DEEPL_API_URL").unwrap_or_else(|_| DEFAULT_DEEPL_API_URL.to_string());

    let bind_addr =
      std::env::var("KOTONOHA_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let preset_dict_str =
      std::env::var("KOTONOHA_PRESET_DICT").unwrap_or_else(|_| DEFAULT_PRESET_DICT.to_string());

    let preset = Preset::from_str(&preset_dict_str).map_err(ApiError::config)?;

    let dict_path = std::env::var("KOTONOHA_DICT_PATH").ok().map(PathBuf::from);

    Ok(Self {
      bind_addr,
      deepl_api_key,
      deepl_api_url,
      preset,
      dict_path,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preset_from_str_ipadic() {
    assert_eq!(Preset::from_str("ipadic").unwrap(), Preset::Ipadic);
    assert_eq!(Preset::from_str("IPADIC").unwrap(), Preset::Ipadic);
  }

  #[test]
  fn preset_from_str_unidic_cwj() {
    assert_eq!(Preset::from_str("unidic-cwj").unwrap(), Preset::UnidicCwj);
    assert_eq!(Preset::from_str("UNIDIC-CWJ").unwrap(), Preset::UnidicCwj);
  }

  #[test]
  fn preset_from_str_unidic_csj() {
    assert_eq!(Preset::from_str("unidic-csj").unwrap(), Preset::UnidicCsj);
  }

  #[test]
  fn preset_from_str_invalid() {
    assert!(Preset::from_str("invalid").is_err());
  }

  #[test]
  fn config_from_env_requires_api_key() {
    // Note: remove_var/set_var became unsafe in Rust 2024, so the environment
    // is taken as-is. Whether the key is present depends on the test
    // environment; both outcomes are asserted on.
    match Config::from_env() {
      Ok(config) => {
        assert!(!config.deepl_api_key.is_empty());
        assert!(!config.bind_addr.is_empty());
      }
      Err(err) => {
        assert_eq!(err.code(), "config_error");
      }
    }
  }
}
