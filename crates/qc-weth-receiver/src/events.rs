//! # Request Schema
//!
//! Serializable request/response payloads accepted by the transfer service.
//! Every request/response pair shares a `correlation_id`.

use crate::domain::entities::TransferReceipt;
use crate::domain::value_objects::{Address, Bytes, U256};
use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// INBOUND
// =============================================================================

/// Request to execute one transfer.
///
/// An empty `data` makes this a bare transfer to `to`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferRequestPayload {
    /// Correlation ID echoed in the response.
    pub correlation_id: Uuid,
    /// Transaction sender.
    pub from: Address,
    /// Transaction recipient.
    pub to: Address,
    /// Value moved with the call.
    pub value: U256,
    /// Calldata.
    #[serde(default)]
    pub data: Bytes,
    /// Gas limit; the service default applies when absent.
    #[serde(default)]
    pub gas_limit: Option<u64>,
}

impl TransferRequestPayload {
    /// Creates a bare-transfer request with a fresh correlation ID.
    #[must_use]
    pub fn bare(from: Address, to: Address, value: U256) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            from,
            to,
            value,
            data: Bytes::new(),
            gas_limit: None,
        }
    }

    /// Parses a JSON request.
    ///
    /// # Errors
    ///
    /// `Serialization` if the document does not match the schema.
    pub fn from_json(raw: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(raw).map_err(|e| ServiceError::Serialization(e.to_string()))
    }
}

// =============================================================================
// OUTBOUND
// =============================================================================

/// Response to a transfer request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferResponsePayload {
    /// Correlation ID of the request.
    pub correlation_id: Uuid,
    /// Whether the transfer committed.
    pub success: bool,
    /// Gas used.
    pub gas_used: u64,
    /// Return data on success, revert data on failure.
    pub output: Bytes,
    /// Named revert error, when the revert data decodes to one.
    pub revert_error: Option<String>,
    /// Human-readable failure cause.
    pub error: Option<String>,
}

impl TransferResponsePayload {
    /// Builds the response for `receipt`.
    #[must_use]
    pub fn from_receipt(correlation_id: Uuid, receipt: &TransferReceipt) -> Self {
        Self {
            correlation_id,
            success: receipt.success,
            gas_used: receipt.gas_used,
            output: receipt.output.clone(),
            revert_error: receipt.revert_error().map(|err| err.to_string()),
            error: receipt.error.as_ref().map(ToString::to_string),
        }
    }

    /// Serializes the response to JSON.
    ///
    /// # Errors
    ///
    /// `Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, ServiceError> {
        serde_json::to_string(self).map_err(|e| ServiceError::Serialization(e.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
