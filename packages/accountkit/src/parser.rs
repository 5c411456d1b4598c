//! Account kit parsing pipeline
//!
//! decode (base64) -> unarmor -> extract JSON -> verify signature -> re-parse
//! the verifier's message. Each stage either feeds the next or ends with an
//! [`AccountKitError`].

use crate::collaborator::{SignatureVerifier, Unarmor, VerificationResult};
use crate::dto::AccountKitDto;
use crate::error::{AccountKitError, Result};
use crate::extract::extract_json_object;
use crate::model::AccountSetupDataModel;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use keyward_common::Logging;
use log::debug;
use std::mem;

const OPERATION: &str = "account_kit";

/// Parses and verifies account kit files
#[derive(Debug, Clone)]
pub struct AccountKitParser<U, V> {
    unarmor: U,
    verifier: V,
}

impl<U: Unarmor, V: SignatureVerifier> AccountKitParser<U, V> {
    /// Build a parser from its cryptographic collaborators
    pub fn new(unarmor: U, verifier: V) -> Self {
        Self { unarmor, verifier }
    }

    /// Parse `file_content` and verify the kit signature
    ///
    /// Failures are logged at error level and returned.
    ///
    /// # Errors
    ///
    /// Returns an [`AccountKitError`] describing the failed stage.
    pub async fn parse_and_verify(&self, file_content: &str) -> Result<AccountSetupDataModel> {
        match self.run(file_content).await {
            Ok(model) => {
                Logging::log_security_event(OPERATION, Some(&model.server_user_id), true);
                Ok(model)
            }
            Err(err) => {
                Logging::log_failure(OPERATION, &err.to_string());
                Err(err)
            }
        }
    }

    async fn run(&self, file_content: &str) -> Result<AccountSetupDataModel> {
        let pgp_message = decode_kit(file_content)?;

        let unarmored = self
            .unarmor
            .unarmor(&pgp_message)
            .await
            .map_err(AccountKitError::Unarmor)?;
        let unarmored = String::from_utf8_lossy(&unarmored);

        let kit_json = extract_json_object(&unarmored).ok_or(AccountKitError::JsonNotFound)?;
        let kit = parse_dto(kit_json)?;
        debug!("Account kit JSON extracted ({} bytes)", kit_json.len());

        let verification = self
            .verifier
            .verify_signature(&kit.public_key_armored, &pgp_message, kit_json)
            .await
            .map_err(AccountKitError::Verification)?;

        if !verification.is_verified {
            return Err(AccountKitError::SignatureInvalid);
        }
        into_model(verification)
    }
}

/// Base64-decode the kit file, ignoring line breaks
fn decode_kit(file_content: &str) -> Result<Vec<u8>> {
    let compact: String = file_content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return Err(AccountKitError::NotAnAccountKit);
    }
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|_| AccountKitError::NotAnAccountKit)
}

fn parse_dto(json: &str) -> Result<AccountKitDto> {
    serde_json::from_str(json).map_err(|e| {
        debug!("Account kit JSON rejected: {e}");
        AccountKitError::InvalidJson
    })
}

/// Build the setup model from the verifier's own copy of the message
fn into_model(verification: VerificationResult) -> Result<AccountSetupDataModel> {
    let mut kit = parse_dto(&verification.message)?;
    Ok(AccountSetupDataModel {
        server_user_id: kit.user_id.to_string(),
        domain: mem::take(&mut kit.domain),
        user_name: mem::take(&mut kit.username),
        first_name: mem::take(&mut kit.first_name),
        last_name: mem::take(&mut kit.last_name),
        avatar_url: None,
        key_fingerprint: verification.key_fingerprint,
        armored_key: mem::take(&mut kit.private_key_armored),
    })
}
