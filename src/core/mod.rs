pub mod engine;
pub mod patcher;
pub mod rules;

pub use crate::domain::model::{Document, PatchReport, Rule, RuleOutcome};
pub use crate::domain::ports::DocumentStore;
pub use crate::utils::error::Result;
