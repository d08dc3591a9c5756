// src/error.rs

use num::BigInt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("modulus {modulus} is not coprime to the rest of the system")]
    NonCoprimeModuli { modulus: BigInt },
}
