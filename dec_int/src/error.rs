use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntegerError {
    #[error("Index out of range: the index is {index} but the length is {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Divide by 0")]
    DivisionByZero,
    #[error("Mod by zero")]
    ModuloByZero,
    #[error("Subtraction underflow: the subtrahend is larger than the minuend")]
    Underflow,
    #[error("Negative value {0} is not supported")]
    Negative(i128),
}

pub type Result<T> = std::result::Result<T, BigIntegerError>;
