//! Composite biomarker evaluation.
//!
//! Resolves analytes from a noisy measurement list and computes a fixed set
//! of published clinical indices:
//!
//! | Metric   | Inputs                                  |
//! |----------|-----------------------------------------|
//! | eGFR     | creatinine, sex, age (CKD-EPI 2021)     |
//! | FIB-4    | age, AST, ALT, platelets                |
//! | De Ritis | AST, ALT                                |
//! | AIP      | triglycerides, HDL                      |
//! | TG/HDL   | triglycerides, HDL                      |
//! | TC/HDL   | total cholesterol, HDL                  |
//! | NLR      | neutrophils, lymphocytes                |
//! | HbA1c    | HbA1c, reported with estimated glucose  |
//!
//! Metrics whose inputs cannot be found are left out of the result. The only
//! exception is eGFR with creatinine present but sex or age missing, which
//! yields a placeholder card.

pub mod context;
pub mod engine;
pub mod gauge;
pub mod metrics;

pub use context::MetricContext;
pub use engine::{EvaluationOptions, Evaluator, evaluate};
pub use gauge::Gauge;
