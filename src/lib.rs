//! WBGT Analytics - Heat-stress analytics engine for weather observation feeds
//!
//! The engine transforms a time-ordered series of environmental observations
//! (temperature, humidity, solar radiation, wind, UV, rain probability, and
//! the derived WBGT heat-stress index) into actionable summaries through a
//! deterministic pipeline: ingestion → risk classification / slot scoring →
//! window detection / trends / day comparison → report encoding.
//!
//! Every analytic is a pure, synchronous transformation of an in-memory
//! sequence: no network, no persistence, no wall-clock dependence outside
//! report provenance.

pub mod advisor;
pub mod compare;
pub mod config;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod risk;
pub mod score;
pub mod sort;
pub mod trend;
pub mod types;
pub mod windows;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use error::AnalyticsError;
pub use pipeline::{comparison_report, forecast_report, WeatherAnalyzer};
pub use report::{ReportEncoder, REPORT_VERSION};
pub use types::{RiskTier, SafetyBand, Slot, Trend, Window};

/// Engine version embedded in all report payloads
pub const ANALYTICS_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "wbgt-analytics";
