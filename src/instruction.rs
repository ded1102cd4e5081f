use async_trait::async_trait;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    hash::hashv,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::{
    error::ServiceError,
    services::{Connection, RegistrationService},
};

pub const NAME_SEED: &[u8] = b"name";

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum RegistrarInstruction {
    /// Create a subdomain under an existing parent name
    /// Accounts expected:
    /// 0. `[signer, writable]` The subdomain owner, pays for the account
    /// 1. `[]` The parent name account
    /// 2. `[writable]` The subdomain name account
    /// 3. `[]` The system program
    CreateSubdomain { name: String },
}

impl RegistrarInstruction {
    pub fn pack(&self) -> Result<Vec<u8>, ServiceError> {
        Ok(self.try_to_vec()?)
    }

    pub fn unpack(input: &[u8]) -> Result<Self, ServiceError> {
        Self::try_from_slice(input).map_err(|e| ServiceError::Encoding(e.to_string()))
    }
}

/// Address of the account holding `name` (tld excluded).
pub fn find_name_account(program_id: &Pubkey, name: &str) -> (Pubkey, u8) {
    let hashed = hashv(&[name.as_bytes()]);
    Pubkey::find_program_address(&[NAME_SEED, hashed.as_ref()], program_id)
}

pub fn create_subdomain(
    program_id: &Pubkey,
    full_name: &str,
    owner: &Pubkey,
) -> Result<Instruction, ServiceError> {
    let (_, parent) = full_name
        .split_once('.')
        .ok_or_else(|| ServiceError::Encoding(format!("`{full_name}` has no parent domain")))?;

    let (parent_account, _) = find_name_account(program_id, parent);
    let (name_account, _) = find_name_account(program_id, full_name);

    let data = RegistrarInstruction::CreateSubdomain {
        name: full_name.to_string(),
    }
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(parent_account, false),
            AccountMeta::new(name_account, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// Registration service targeting a registrar program by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrarProgram {
    pub program_id: Pubkey,
}

impl RegistrarProgram {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }
}

#[async_trait]
impl RegistrationService for RegistrarProgram {
    async fn create_registration_instructions(
        &self,
        connection: &Connection,
        full_name: &str,
        owner: &Pubkey,
    ) -> Result<Vec<Instruction>, ServiceError> {
        log::debug!(
            "create_subdomain {full_name} for {owner} on {}",
            connection.endpoint
        );
        Ok(vec![create_subdomain(&self.program_id, full_name, owner)?])
    }
}
