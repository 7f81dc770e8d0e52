//! vigil-probe — endpoint health probes and the survey pass.
//!
//! # Architecture
//!
//! ```text
//! survey()
//!   ├── sites, in list order (no credential)
//!   │     └── Prober::probe() → HealthVerdict
//!   ├── servers, in list order (X-API-Key attached)
//!   │     └── Prober::probe() → HealthVerdict
//!   └── SurveyResult (unhealthy URLs, encounter order)
//! ```
//!
//! Probes never return errors: transport failures and HTTP >= 400 fold
//! into the verdict, so one bad endpoint cannot abort the pass.

pub mod prober;
pub mod survey;

pub use prober::Prober;
pub use survey::survey;
