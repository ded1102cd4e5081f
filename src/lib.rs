pub mod config;
pub mod error;
pub mod instruction;
pub mod logging;
pub mod modal;
pub mod orchestrator;
pub mod services;
pub mod state;
pub mod validation;

pub use config::{ModalConfig, NameRules};
pub use error::{ServiceError, SubdomainError};
pub use modal::{CreateSubdomainModal, CreateSubdomainParams, ModalServices};
pub use orchestrator::{OutcomeSink, SubmitContext, SubmitOrchestrator, SubmitOutcome};
