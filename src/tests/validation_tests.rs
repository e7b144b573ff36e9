use crate::validation::{is_valid_evm_address, validate_evm_address, ValidationError};

#[test]
fn accepts_well_formed_addresses() {
    assert!(is_valid_evm_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"));
    assert!(is_valid_evm_address("0x0000000000000000000000000000000000000000"));
    // All-lowercase and mixed-case (checksummed) both pass.
    assert!(is_valid_evm_address("0xd8da6bf26964af9d7eed9e03e53415d37aa96045"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!is_valid_evm_address(""));
    assert!(!is_valid_evm_address("0x"));
    assert!(!is_valid_evm_address("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"));
    assert!(!is_valid_evm_address("0x123"));
    assert!(!is_valid_evm_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA9604500"));
    assert!(!is_valid_evm_address("0xZZdA6BF26964aF9D7eEd9e03E53415D37aA96045"));
    assert!(!is_valid_evm_address("vitalik.eth"));
}

#[test]
fn validate_distinguishes_missing_from_malformed() {
    assert!(matches!(
        validate_evm_address("   "),
        Err(ValidationError::MissingParameter(_))
    ));
    assert!(matches!(
        validate_evm_address("0xnope"),
        Err(ValidationError::InvalidEvmAddress(_))
    ));
    assert!(validate_evm_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").is_ok());
}
