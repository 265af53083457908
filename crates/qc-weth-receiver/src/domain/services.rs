//! # Domain Services
//!
//! Pure functions: hashing, selectors, argument words and address derivation.
//! Deterministic, no I/O, no async.

use crate::domain::value_objects::{Address, Selector};
use crate::errors::ContractError;
use sha3::{Digest, Keccak256};

/// Size of one ABI argument word.
pub const WORD_SIZE: usize = 32;

// =============================================================================
// HASHING & SELECTORS
// =============================================================================

/// Keccak-256 of `data`.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(data));
    out
}

/// First four bytes of `keccak256(signature)`.
#[must_use]
pub fn function_selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    Selector([hash[0], hash[1], hash[2], hash[3]])
}

/// Custom errors share the function selector derivation.
#[must_use]
pub fn error_selector(signature: &str) -> Selector {
    function_selector(signature)
}

// =============================================================================
// ARGUMENT WORDS
// =============================================================================

/// Left-pads an address into a 32-byte argument word.
#[must_use]
pub fn encode_address_word(address: Address) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    word[12..].copy_from_slice(address.as_bytes());
    word
}

/// Decodes an address argument word.
///
/// # Errors
///
/// `InvalidCalldata` if the word is short or its upper 12 bytes are dirty.
pub fn decode_address_word(word: &[u8]) -> Result<Address, ContractError> {
    if word.len() != WORD_SIZE || word[..12].iter().any(|&b| b != 0) {
        return Err(ContractError::InvalidCalldata {
            expected: WORD_SIZE,
            actual: word.len(),
        });
    }
    Address::from_slice(&word[12..]).ok_or(ContractError::InvalidCalldata {
        expected: WORD_SIZE,
        actual: word.len(),
    })
}

// =============================================================================
// CONTRACT ADDRESS COMPUTATION
// =============================================================================

/// Computes the address of a contract deployed by `deployer` at `nonce`.
///
/// Address = keccak256(rlp(\[deployer, nonce\]))\[12:\]
#[must_use]
pub fn compute_contract_address(deployer: Address, nonce: u64) -> Address {
    let hash = keccak256(&create_preimage(deployer, nonce));
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&hash[12..32]);
    Address::new(addr)
}

/// `rlp([deployer, nonce])`.
// Casts below: single-byte nonces are < 128, the nonce is at most 8 bytes and
// the list content at most 30, so every value fits in a u8.
#[allow(clippy::cast_possible_truncation)]
fn create_preimage(deployer: Address, nonce: u64) -> Vec<u8> {
    let mut content = Vec::with_capacity(30);

    // 20-byte string header: 0x80 + 20
    content.push(0x94);
    content.extend_from_slice(deployer.as_bytes());

    if nonce == 0 {
        content.push(0x80);
    } else if nonce < 128 {
        content.push(nonce as u8);
    } else {
        let nonce_bytes = trimmed_be_bytes(nonce);
        content.push(0x80 + nonce_bytes.len() as u8);
        content.extend_from_slice(&nonce_bytes);
    }

    let mut rlp_data = Vec::with_capacity(content.len() + 1);
    rlp_data.push(0xc0 + content.len() as u8);
    rlp_data.extend_from_slice(&content);
    rlp_data
}

fn trimmed_be_bytes(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(7);
    bytes[start..].to_vec()
}

// =============================================================================
// TESTS
// =============================================================================
