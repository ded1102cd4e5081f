use std::sync::Arc;

use crate::{
    config::ModalConfig,
    error::SubdomainError,
    logging,
    orchestrator::{OutcomeSink, SubmitContext, SubmitOrchestrator, SubmitOutcome},
    services::{
        Connection, ModalHost, ModalParams, RefreshFn, RegistrationService, TransactionSubmitter,
        WalletSession,
    },
    state::{FormState, StateObserver},
};

pub const CREATE_SUBDOMAIN_MODAL: &str = "CreateSubdomain";
pub const ERROR_MODAL: &str = "Error";
pub const SUCCESS_SUBDOMAIN_MODAL: &str = "SuccessSubdomainModal";

pub const UNEXPECTED_ERROR_MSG: &str = "Something went wrong - try again";

/// Parameters the host passes when opening the create-subdomain modal.
#[derive(Clone)]
pub struct CreateSubdomainParams {
    /// Parent domain, tld excluded.
    pub domain: String,
    pub refresh: Option<RefreshFn>,
}

pub struct ModalServices {
    pub host: Arc<dyn ModalHost>,
    pub wallet: Arc<dyn WalletSession>,
    pub connection: Option<Connection>,
    pub registrar: Arc<dyn RegistrationService>,
    pub submitter: Arc<dyn TransactionSubmitter>,
}

/// Controller behind the "Create a subdomain" modal.
pub struct CreateSubdomainModal {
    domain: String,
    refresh: Option<RefreshFn>,
    host: Arc<dyn ModalHost>,
    wallet: Arc<dyn WalletSession>,
    connection: Option<Connection>,
    orchestrator: SubmitOrchestrator,
    presenter: HostPresenter,
    form: FormState,
}

impl CreateSubdomainModal {
    /// Also installs the logger from `config.log_filter` on first use.
    pub fn new(
        params: CreateSubdomainParams,
        services: ModalServices,
        config: ModalConfig,
    ) -> Result<Self, SubdomainError> {
        config.validate()?;
        logging::init_from_config(&config);
        if params.domain.trim().is_empty() {
            return Err(SubdomainError::MissingParam("domain"));
        }
        log::debug!("CreateSubdomainModal opened for {}", params.domain);

        let presenter = HostPresenter {
            host: services.host.clone(),
            tld: config.rules.tld.clone(),
        };
        Ok(Self {
            domain: params.domain,
            refresh: params.refresh,
            host: services.host,
            wallet: services.wallet,
            connection: services.connection,
            orchestrator: SubmitOrchestrator::new(
                services.registrar,
                services.submitter,
                config.rules,
            ),
            presenter,
            form: FormState::new(),
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Text rendered next to the input, e.g. `.example.sol`.
    pub fn suffix(&self) -> String {
        format!(".{}.{}", self.domain, self.orchestrator.rules().tld)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn subscribe(&self, observer: Arc<dyn StateObserver>) {
        self.form.subscribe(observer);
    }

    pub fn set_value(&self, text: impl Into<String>) {
        self.form.set_value(text);
    }

    pub fn is_busy(&self) -> bool {
        self.form.is_busy()
    }

    pub fn create_enabled(&self) -> bool {
        !self.form.is_busy()
    }

    /// Create button: submits when a wallet is connected, asks for one otherwise.
    pub async fn press_create(&self) -> Option<SubmitOutcome> {
        if !self.wallet.is_connected() {
            log::debug!("press_create - wallet not connected");
            self.wallet.request_connection();
            return None;
        }
        self.submit().await
    }

    pub async fn submit(&self) -> Option<SubmitOutcome> {
        let ctx = SubmitContext {
            connection: self.connection.as_ref(),
            wallet: self.wallet.as_ref(),
            parent_domain: &self.domain,
            refresh: self.refresh.as_ref(),
        };
        self.orchestrator
            .submit(&self.form, ctx, &self.presenter)
            .await
    }

    /// Dismisses the modal. A submit already in flight keeps running.
    pub fn cancel(&self) {
        self.host.close_modal(None);
    }
}

struct HostPresenter {
    host: Arc<dyn ModalHost>,
    tld: String,
}

impl OutcomeSink for HostPresenter {
    fn present(&self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Success { full_name } => {
                let host = self.host.clone();
                self.host.open_modal(
                    SUCCESS_SUBDOMAIN_MODAL,
                    ModalParams::SuccessSubdomain {
                        msg: success_message(full_name, &self.tld),
                        subdomain: full_name.clone(),
                    },
                    Some(Box::new(move || {
                        host.close_modal(Some(CREATE_SUBDOMAIN_MODAL))
                    })),
                );
            }
            SubmitOutcome::ValidationFailed { full_name } => self.host.open_modal(
                ERROR_MODAL,
                ModalParams::Error {
                    msg: invalid_subdomain_message(full_name, &self.tld),
                },
                None,
            ),
            SubmitOutcome::UnexpectedError => self.host.open_modal(
                ERROR_MODAL,
                ModalParams::Error {
                    msg: UNEXPECTED_ERROR_MSG.to_string(),
                },
                None,
            ),
        }
    }
}

pub fn invalid_subdomain_message(full_name: &str, tld: &str) -> String {
    format!("{full_name}.{tld} is not a valid subdomain")
}

pub fn success_message(full_name: &str, tld: &str) -> String {
    format!("Subdomain {full_name}.{tld} successfully created!")
}
