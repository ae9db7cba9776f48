//! Waste Sort Common Library
//!
//! CLIとWeb(WASM)で共有される型・検証・ワークフロー

pub mod error;
pub mod geolocation;
pub mod i18n;
pub mod language;
pub mod postal_code;
pub mod service;
pub mod submit;
pub mod types;

#[cfg(test)]
mod mock;

pub use error::{Error, Result};
pub use geolocation::{resolve_postal_code, Coordinates, LocateError};
pub use i18n::{translate, try_translate};
pub use language::{Language, LanguageContext, MemoryStore, PreferenceStore, LANGUAGE_STORAGE_KEY};
pub use postal_code::{is_valid, sanitize, FieldStatus, PostalCode, PostalCodeField};
pub use service::{BotVerifier, Endpoints, ServiceClient, VerifyAction};
pub use submit::{submit_analysis, AnalysisSession, SubmitGuard, SubmitOutcome, SubmitPhase};
pub use types::{
    AnalysisForm, AnalysisResponse, AnalysisResult, GeolocationRequest, GeolocationResponse,
    UploadedImage,
};
