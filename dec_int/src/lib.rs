//! Dec Int \
//! This crate provides:
//! - [`BigInteger`]: arbitrary-precision non-negative integers kept as decimal digits, with schoolbook
//!   `+ - * / %`, ordering, increment, digit access, factorial and Fibonacci.
//! - [`DisplayConfig`]: exact or truncated scientific rendering for terminals.
//!
//! Operators panic on division by zero and on subtraction underflow;
//! `checked_*` methods return a [`BigIntegerError`] instead.

mod big_integer;
mod big_integer_cache;
mod big_integer_constants;
mod error;
mod format;
#[cfg(any(test, feature = "arb"))]
mod arb;

pub use big_integer::BigInteger;
pub use error::{BigIntegerError, Result};
pub use format::DisplayConfig;

#[cfg(test)]
mod tests {
    use crate::{BigInteger, BigIntegerError};

    #[test]
    fn it_works() {
        let n1 = BigInteger::try_from(25i32).unwrap();
        let s1: BigInteger = "25".into();
        let n2 = BigInteger::from(1234u32);
        let big: BigInteger = "9223372036854775807".into();
        assert_eq!(n1, s1);

        assert_eq!((&n2 / &n1).to_string(), "49");
        assert_eq!((&n2 % &n1).to_string(), "9");
        assert_eq!((10u64 + n1.clone()).to_string(), "35");
        assert_eq!(format!("{:e}", BigInteger::from(50u8).fact()), "3.041409e64");
        assert_eq!((&n2 * &big).to_string(), "11381641093478793345838");
        assert_eq!(&n2 * &big, &big * &n2);
        assert_eq!(n1.checked_sub(&n2), Err(BigIntegerError::Underflow));
    }
}
