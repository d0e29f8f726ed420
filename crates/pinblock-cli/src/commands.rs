//! Command handlers.
//!
//! Each handler runs one codec operation and returns a response DTO; [`run`]
//! renders it as text or JSON. PIN and PAN values never reach the log.

use std::fmt;
use std::path::Path;

use anyhow::Context;
use rand::rngs::OsRng;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use pinblock_core::{PinBlock, PinBlockService, PinPolicy};

use crate::cli::Command;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Result of `encode`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeResponse {
    /// The encoded block, as uppercase hex.
    pub pin_block: PinBlock,
}

/// Result of `decode`.
///
/// `Debug` is masked; the PIN is zeroized on drop.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct DecodeResponse {
    /// The recovered PIN digits.
    pub pin: String,
}

impl fmt::Debug for DecodeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeResponse")
            .field("pin", &"***")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a parsed command and render its output.
pub fn run(cmd: Command) -> anyhow::Result<String> {
    match cmd {
        Command::Encode {
            mut pin,
            pan,
            policy,
            json,
        } => {
            let result = encode(&pin, &pan, policy.as_deref());
            pin.zeroize();
            let response = result?;
            if json {
                Ok(serde_json::to_string(&response)?)
            } else {
                Ok(response.pin_block.to_hex())
            }
        }
        Command::Decode { block, pan, json } => {
            let response = decode(&block, &pan)?;
            if json {
                Ok(serde_json::to_string(&response)?)
            } else {
                Ok(response.pin.clone())
            }
        }
        Command::Policy { policy } => {
            let policy = load_policy(policy.as_deref());
            Ok(serde_json::to_string_pretty(&policy)?)
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Encode `pin` against `pan` under the policy at `policy_path`.
pub fn encode(pin: &str, pan: &str, policy_path: Option<&Path>) -> anyhow::Result<EncodeResponse> {
    let service = PinBlockService::new(load_policy(policy_path));

    let pin_block = service
        .encode_block(pin, pan, &mut OsRng)
        .inspect_err(|e| tracing::warn!(error = %e, "encode rejected"))
        .context("failed to encode PIN block")?;

    tracing::info!(pin_length = pin.len(), "PIN block encoded");
    Ok(EncodeResponse { pin_block })
}

/// Decode the hex `block` against `pan`.
pub fn decode(block: &str, pan: &str) -> anyhow::Result<DecodeResponse> {
    let pin = PinBlockService::default()
        .decode(block, pan)
        .inspect_err(|e| tracing::warn!(error = %e, "decode rejected"))
        .context("failed to decode PIN block")?;

    tracing::info!(pin_length = pin.len(), "PIN block decoded");
    Ok(DecodeResponse { pin })
}

fn load_policy(path: Option<&Path>) -> PinPolicy {
    path.map_or_else(PinPolicy::default, |path| {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "policy file not found, using default");
        }
        let policy = PinPolicy::load(path);
        tracing::debug!(
            path = %path.display(),
            min_length = policy.min_length,
            max_length = policy.max_length,
            "PIN policy loaded"
        );
        policy
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
