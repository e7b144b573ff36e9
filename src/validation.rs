use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid EVM address format: {0}")]
    InvalidEvmAddress(String),
}

/// Syntactic EVM address check: 0x prefix followed by exactly 40 hex
/// characters. Mixed-case (checksummed) input is accepted as-is; no
/// checksum verification is performed.
pub fn is_valid_evm_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

pub fn validate_evm_address(address: &str) -> Result<(), ValidationError> {
    if address.trim().is_empty() {
        return Err(ValidationError::MissingParameter("address".to_string()));
    }

    if !is_valid_evm_address(address) {
        return Err(ValidationError::InvalidEvmAddress(address.to_string()));
    }

    Ok(())
}
