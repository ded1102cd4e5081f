use std::sync::Arc;

use crate::{
    config::NameRules,
    services::{Connection, RefreshFn, RegistrationService, TransactionSubmitter, WalletSession},
    state::FormState,
    validation::{full_subdomain_name, validate_candidate},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success { full_name: String },
    ValidationFailed { full_name: String },
    /// Details only go to the log.
    UnexpectedError,
}

/// Receives the terminal outcome of a submit attempt.
pub trait OutcomeSink: Send + Sync {
    fn present(&self, outcome: &SubmitOutcome);
}

pub struct SubmitContext<'a> {
    pub connection: Option<&'a Connection>,
    pub wallet: &'a dyn WalletSession,
    pub parent_domain: &'a str,
    pub refresh: Option<&'a RefreshFn>,
}

pub struct SubmitOrchestrator {
    registrar: Arc<dyn RegistrationService>,
    submitter: Arc<dyn TransactionSubmitter>,
    rules: NameRules,
}

impl SubmitOrchestrator {
    pub fn new(
        registrar: Arc<dyn RegistrationService>,
        submitter: Arc<dyn TransactionSubmitter>,
        rules: NameRules,
    ) -> Self {
        Self {
            registrar,
            submitter,
            rules,
        }
    }

    pub fn rules(&self) -> &NameRules {
        &self.rules
    }

    /// Runs one submit attempt for the text currently held by `form`.
    ///
    /// Returns `None` without touching anything when the flow is not ready
    /// (no connection, key, signer or text) or when a submit is already running.
    pub async fn submit(
        &self,
        form: &FormState,
        ctx: SubmitContext<'_>,
        sink: &dyn OutcomeSink,
    ) -> Option<SubmitOutcome> {
        let candidate = form.value();
        let (Some(connection), Some(owner), Some(signer)) =
            (ctx.connection, ctx.wallet.public_key(), ctx.wallet.signer())
        else {
            log::debug!("submit - wallet or connection not ready");
            return None;
        };
        if candidate.is_empty() {
            return None;
        }

        let Some(busy) = form.begin_submit() else {
            log::debug!("submit - already in flight");
            return None;
        };
        log::debug!("submit - start");

        let full_name = full_subdomain_name(&candidate, ctx.parent_domain);
        if let Err(e) = validate_candidate(&candidate, ctx.parent_domain, &self.rules) {
            log::warn!("Rejected subdomain {full_name}: {e}");
            busy.release();
            let outcome = SubmitOutcome::ValidationFailed { full_name };
            sink.present(&outcome);
            return Some(outcome);
        }

        let result = async {
            let instructions = self
                .registrar
                .create_registration_instructions(connection, &full_name, &owner)
                .await?;
            self.submitter
                .submit(connection, &owner, instructions, &*signer)
                .await
        }
        .await;
        busy.release();

        let outcome = match result {
            Ok(signature) => {
                log::info!("Subdomain {full_name} created: {signature}");
                SubmitOutcome::Success { full_name }
            }
            Err(e) => {
                log::error!("Failed to create subdomain {full_name}: {e}");
                SubmitOutcome::UnexpectedError
            }
        };
        sink.present(&outcome);

        if matches!(outcome, SubmitOutcome::Success { .. }) {
            if let Some(refresh) = ctx.refresh {
                if let Err(e) = refresh().await {
                    log::warn!("Refresh after subdomain creation failed: {e}");
                }
            }
        }

        log::debug!("submit - finished");
        Some(outcome)
    }
}
