use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToyBfvError {
    #[error("invalid modulus {0}: must lie in [2, 2^31]")]
    InvalidModulus(i64),

    #[error("modulus mismatch: left operand uses {left}, right operand uses {right}")]
    ModulusMismatch { left: i64, right: i64 },

    #[error("scheme parameters already initialized to {current}, cannot switch to {requested}")]
    AlreadyInitialized { current: String, requested: String },

    #[error("scheme parameters not initialized")]
    ParamsNotInitialized,
}

pub type Result<T> = std::result::Result<T, ToyBfvError>;
