use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::{Signature, Signer},
};

use crate::error::ServiceError;

/// Signing capability handed out by the wallet.
pub type SharedSigner = Arc<dyn Signer + Send + Sync>;

/// Caller supplied callback run once after a successful registration.
pub type RefreshFn = Arc<dyn Fn() -> BoxFuture<'static, Result<(), ServiceError>> + Send + Sync>;

/// Hook run by the host when a modal it opened is dismissed.
pub type OnClose = Box<dyn FnOnce() + Send>;

/// Handle to the cluster the services talk to.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub endpoint: String,
    pub commitment: CommitmentConfig,
}

impl Connection {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            commitment: CommitmentConfig::confirmed(),
        }
    }
}

pub trait WalletSession: Send + Sync {
    fn public_key(&self) -> Option<Pubkey>;

    fn signer(&self) -> Option<SharedSigner>;

    fn is_connected(&self) -> bool;

    /// Shows the wallet picker so the user can connect.
    fn request_connection(&self);
}

#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Builds the instructions registering `full_name` for `owner`.
    async fn create_registration_instructions(
        &self,
        connection: &Connection,
        full_name: &str,
        owner: &Pubkey,
    ) -> Result<Vec<Instruction>, ServiceError>;
}

#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// Signs `instructions` with `signer`, broadcasts them and returns the signature.
    async fn submit(
        &self,
        connection: &Connection,
        owner: &Pubkey,
        instructions: Vec<Instruction>,
        signer: &(dyn Signer + Send + Sync),
    ) -> Result<Signature, ServiceError>;
}

/// Parameters of the modals opened from the create-subdomain screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalParams {
    Error { msg: String },
    SuccessSubdomain { msg: String, subdomain: String },
}

pub trait ModalHost: Send + Sync {
    fn open_modal(&self, name: &str, params: ModalParams, on_close: Option<OnClose>);

    /// Closes `name`, or the top-most modal when `None`.
    fn close_modal(&self, name: Option<&str>);
}
