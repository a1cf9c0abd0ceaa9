//! Rendering for terminals. Small values are printed exactly; past the threshold
//! a value is cut down to `d.dddddde<exponent>`, which cannot be parsed back.

use std::fmt::{Formatter, LowerExp, Result};

use crate::BigInteger;
use crate::big_integer_constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Values with at most this many digits are printed exactly.
    pub exact_threshold: usize,
    /// Digits kept in the truncated form, the leading one included.
    pub significant_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl DisplayConfig {
    pub fn new() -> Self {
        DisplayConfig::default()
    }
    pub fn with_exact_threshold(mut self, exact_threshold: usize) -> Self {
        self.exact_threshold = exact_threshold;
        self
    }
    pub fn with_significant_digits(mut self, significant_digits: usize) -> Self {
        self.significant_digits = significant_digits.max(1);
        self
    }
}

impl BigInteger {
    pub fn to_display_string(&self, config: &DisplayConfig) -> String {
        if self.digit_count() <= config.exact_threshold {
            self.to_plain_string()
        } else {
            self.to_scientific_string(config.significant_digits)
        }
    }
    fn to_scientific_string(&self, significant_digits: usize) -> String {
        let digits = self.digits();
        let exponent = digits.len() - 1;
        let mut most_significant = digits.iter().rev().map(|d| DIGITS[*d as usize]);

        let mut s = String::with_capacity(significant_digits + 8);
        s.extend(most_significant.next());
        let fraction: String = most_significant.take(significant_digits.saturating_sub(1)).collect();
        if !fraction.is_empty() {
            s.push('.');
            s.push_str(&fraction);
        }
        s.push('e');
        s.push_str(&exponent.to_string());
        s
    }
}

/// `{:e}` always uses the truncated form; `{:.3e}` keeps three digits after the point.
impl LowerExp for BigInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let significant_digits = match f.precision() {
            Some(precision) => precision + 1,
            None => DEFAULT_SIGNIFICANT_DIGITS,
        };
        f.pad_integral(true, "", &self.to_scientific_string(significant_digits))
    }
}

#[test]
fn test_display_string() {
    let config = DisplayConfig::default();
    let a: BigInteger = "123456789012".into();
    assert_eq!(a.to_display_string(&config), "123456789012");

    let a: BigInteger = "1234567890123".into();
    assert_eq!(a.to_display_string(&config), "1.234567e12");

    let fact = BigInteger::from(50u8).fact();
    assert_eq!(fact.to_display_string(&config), "3.041409e64");

    let config = DisplayConfig::new().with_exact_threshold(2).with_significant_digits(3);
    assert_eq!(BigInteger::from(25u8).to_display_string(&config), "25");
    assert_eq!(BigInteger::from(1999u16).to_display_string(&config), "1.99e3");
    assert_eq!(BigInteger::from(100u8).to_display_string(&config), "1.00e2");
}

#[test]
fn test_significant_digits_floor() {
    let config = DisplayConfig::new().with_exact_threshold(0).with_significant_digits(0);
    assert_eq!(config.significant_digits, 1);
    assert_eq!(BigInteger::from(4321u16).to_display_string(&config), "4e3");
    assert_eq!(BigInteger::zero().to_display_string(&config), "0e0");
}

#[test]
fn test_lower_exp() {
    let a: BigInteger = "9223372036854775807".into();
    assert_eq!(format!("{:e}", a), "9.223372e18");
    assert_eq!(format!("{:.2e}", a), "9.22e18");
    assert_eq!(format!("{:.0e}", a), "9e18");
    assert_eq!(format!("{:>12e}", BigInteger::from(12u8)), "       1.2e1");
}
