//! Mindgauge - scoring and certification engine for cognitive assessments.
//!
//! Turns a raw assessment result (per-category integer scores) into a
//! certificate value set (IQ estimate, percentile, confidence interval,
//! band, four domain bars) and a detailed report (accuracy, domain ranking,
//! narrative insights and tips, chart-ready series).
//!
//! The engine is a pure, synchronous pipeline over plain data: every
//! function is total, absent input defaults to zero or empty, and repeated
//! calls with the same input return identical output.
//!
//! # Example
//!
//! ```
//! use mindgauge::certificate::calculate_certificate_values;
//! use mindgauge::core::AssessmentScore;
//!
//! let score = AssessmentScore {
//!     total_score: 112,
//!     ..Default::default()
//! };
//! let cert = calculate_certificate_values(&score, "asmt-9e8d7c6b5a");
//! assert!((70..=130).contains(&cert.iq));
//! assert!((1..=99).contains(&cert.percentile));
//! ```

pub mod certificate;
pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod domains;
pub mod numeric;
pub mod output;
pub mod report;

pub use core::{AssessmentScore, Error, Result};
