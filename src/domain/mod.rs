//! Domain layer containing the assessment decision logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, IDs, percentages, display tags)
//! - `symptoms` - Rotterdam-criteria rule engine over the questionnaire
//! - `clinical` - Likelihood decision over clinical measurements
//! - `imaging` - Threshold decision over an ultrasound classifier score
//!
//! Everything here is pure. Model access goes through `crate::ports`.

pub mod clinical;
pub mod foundation;
pub mod imaging;
pub mod symptoms;
