//! サービスモジュール

mod convert_service;
mod translate_service;

pub use convert_service::{ConvertService, ConvertServiceFull, ConverterCell, spawn_converter_init};
pub use translate_service::{DeepLTranslator, TranslateService};
