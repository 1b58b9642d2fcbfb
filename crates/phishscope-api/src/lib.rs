//! Wire schema, HTTP client, and result normalization for the analysis
//! service.
//!
//! The service is consumed through a single `GET /fetch_and_analyze` call
//! returning a batch of per-email records. This crate owns everything
//! service-shaped: the raw JSON schema ([`schema`]), the transport
//! ([`client`]), and the pure mapping into the domain view model
//! ([`mapper`]). Lifecycle orchestration lives in `phishscope-session`.

pub mod client;
pub mod error;
pub mod mapper;
pub mod schema;

pub use client::{AnalysisApi, HttpAnalysisClient};
pub use error::{Error, Result};
pub use mapper::{normalize_batch, normalize_record};
pub use schema::{
    AnalysisRecord, AnalysisResponse, AnalysisSection, EmotionReport, EmotionScore,
    PhishingVerdict,
};
