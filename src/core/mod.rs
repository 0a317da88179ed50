//! Core calculator logic

pub mod config;
pub mod estimate;
pub mod format;
pub mod input;
pub mod log;
pub mod session;
pub mod settings;
pub mod store;

// Re-export main types for cleaner imports
pub use estimate::{Estimate, compute_derived};
pub use session::Calculator;
pub use settings::{LoanTerm, Settings};
pub use store::SettingsStore;
