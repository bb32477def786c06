//! PCOS Assess - Polycystic ovary syndrome risk assessment engine
//!
//! Three independent pipelines share one presentation contract:
//! a rule engine over a symptom questionnaire, a probability decision over a
//! clinical classifier, and a threshold decision over an ultrasound image
//! classifier. Trained models are provisioned lazily and may be absent; the
//! pipelines that need them then report the model as unavailable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
