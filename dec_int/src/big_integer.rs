//! # BigInteger
//! Arbitrary-precision non-negative integers, stored as decimal digits with the least significant digit first.
//! # Example
//! ```
//! use dec_int::BigInteger;
//!
//! let a: BigInteger = "10000000000000".into();
//! let b: BigInteger = "900000000000".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a! = {:e}", BigInteger::from(50u32).fact());
//! ```
//!

use std::convert::Infallible;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Index,
};
use std::cmp::Ordering;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::big_integer_constants::*;
use crate::big_integer_cache::*;
use crate::error::{BigIntegerError, Result};

macro_rules! trim_leading_zero {
    ($vec: expr) => {
        {
            let mut v: Vec<u8> = $vec;
            while v.len() > 1 && v.last() == Some(&0) {
                v.pop();
            }
            if v.is_empty() {
                v.push(0);
            }
            v
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    digits: Vec<u8>,
}

// 实现构造
impl BigInteger {
    /// 调用者保证 digits 已经规范化
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        BigInteger { digits }
    }
    pub(crate) fn new(digits: Vec<u8>) -> Self {
        BigInteger { digits: trim_leading_zero!(digits) }
    }
    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }
    pub fn one() -> Self {
        POS_CACHE[1].clone()
    }
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }
    /// Number of decimal digits. Zero has one digit.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }
    /// The digits, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::zero()
    }
}

// 实现打印
impl Display for BigInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "", &self.to_plain_string())
    }
}

impl BigInteger {
    pub(crate) fn to_plain_string(&self) -> String {
        self.digits
            .iter()
            .rev()
            .map(|d| DIGITS[*d as usize])
            .collect()
    }
}

// 实现解析
impl From<&str> for BigInteger {
    fn from(val: &str) -> Self {
        BigInteger::from_decimal_str(val)
    }
}

impl From<String> for BigInteger {
    fn from(val: String) -> Self {
        BigInteger::from_decimal_str(&val)
    }
}

impl FromStr for BigInteger {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(BigInteger::from_decimal_str(s))
    }
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl TryFrom<$i> for BigInteger {
        type Error = BigIntegerError;

        fn try_from(val: $i) -> Result<Self> {
            if val < 0 {
                Err(BigIntegerError::Negative(val as i128))
            } else {
                Ok(BigInteger::value_of(val as u128))
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_integer!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_integer!(i8, i16, i32, isize, i64, i128);

impl BigInteger {
    fn value_of(mut val: u128) -> BigInteger {
        if val <= MAX_CONSTANT as u128 {
            return POS_CACHE[val as usize].clone();
        }
        let radix = RADIX as u128;
        let mut digits = Vec::with_capacity(MAX_NATIVE_DIGITS);
        while val > 0 {
            digits.push((val % radix) as u8);
            val /= radix;
        }
        BigInteger::from_raw(digits)
    }
    /// Parses the decimal digits of `val`. Any character that is not an ASCII digit is skipped,
    /// so `"1,000"` is one thousand and a string without digits is zero.
    pub fn from_decimal_str(val: &str) -> BigInteger {
        let digits = val
            .chars()
            .rev()
            .filter_map(|c| c.to_digit(RADIX as u32))
            .map(|d| d as u8)
            .collect();
        BigInteger::new(digits)
    }
}

// 实现下标访问
impl BigInteger {
    /// The digit at `idx` (0 is the least significant) as its own value.
    pub fn digit(&self, idx: usize) -> Result<BigInteger> {
        self.digits
            .get(idx)
            .map(|d| POS_CACHE[*d as usize].clone())
            .ok_or(BigIntegerError::IndexOutOfRange { index: idx, len: self.digits.len() })
    }
}

impl Index<usize> for BigInteger {
    type Output = BigInteger;

    fn index(&self, idx: usize) -> &Self::Output {
        match self.digits.get(idx) {
            Some(d) => &POS_CACHE[*d as usize],
            None => panic!("{}", BigIntegerError::IndexOutOfRange { index: idx, len: self.digits.len() }),
        }
    }
}

// 实现大小比较
impl BigInteger {
    fn compare_digits(&self, other: &BigInteger) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for pos in (0..self_len).rev() {
            let a = self.digits[pos];
            let b = other.digits[pos];
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_digits(other)
    }
}

/// 由引用版本的运算派生出按值、混合以及 `u64` 操作数的版本
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident) => {
        impl $imp for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> Self::Output {
                <&BigInteger as $imp<&BigInteger>>::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> Self::Output {
                <&BigInteger as $imp<&BigInteger>>::$method(&self, rhs)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> Self::Output {
                <&BigInteger as $imp<&BigInteger>>::$method(self, &rhs)
            }
        }

        impl $imp<u64> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: u64) -> Self::Output {
                <&BigInteger as $imp<&BigInteger>>::$method(&self, &BigInteger::from(rhs))
            }
        }

        impl $imp<BigInteger> for u64 {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> Self::Output {
                <&BigInteger as $imp<&BigInteger>>::$method(&BigInteger::from(self), &rhs)
            }
        }

        impl $assign_imp for BigInteger {
            fn $assign_method(&mut self, rhs: BigInteger) {
                *self = <&BigInteger as $imp<&BigInteger>>::$method(self, &rhs);
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: &BigInteger) {
                *self = <&BigInteger as $imp<&BigInteger>>::$method(self, rhs);
            }
        }
    };
}

// 实现加法
impl Add<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &BigInteger) -> Self::Output {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }
        BigInteger::new(BigInteger::add(&self.digits, &rhs.digits))
    }
}

impl BigInteger {
    fn add(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(x.len().max(y.len()) + 1);
        let mut carry = 0;
        let mut i = 0;

        while i < x.len() || i < y.len() || carry != 0 {
            let sum = x.get(i).copied().unwrap_or(0) +
                      y.get(i).copied().unwrap_or(0) +
                      carry;
            result.push(sum % RADIX);
            carry = sum / RADIX;
            i += 1;
        }

        result
    }
}

forward_binop!(Add, add, AddAssign, add_assign);

// 实现减法
impl Sub<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &BigInteger) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(err) => panic!("{}", err),
        }
    }
}

impl BigInteger {
    /// `self - rhs`, or [`BigIntegerError::Underflow`] when `rhs > self`.
    pub fn checked_sub(&self, rhs: &BigInteger) -> Result<BigInteger> {
        if self < rhs {
            return Err(BigIntegerError::Underflow);
        }
        Ok(BigInteger::new(BigInteger::sub(&self.digits, &rhs.digits)))
    }
    /// 要求 big >= little，little 多出的高位不会被读取
    fn sub(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0;

        for (i, d) in big.iter().enumerate() {
            let mut difference = *d as i8 -
                                 little.get(i).copied().unwrap_or(0) as i8 -
                                 borrow;
            if difference < 0 {
                difference += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(difference as u8);
        }

        result
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl Mul<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &BigInteger) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return BigInteger::zero();
        }
        trace!(lhs_digits = self.digits.len(), rhs_digits = rhs.digits.len(), "long multiplication");
        BigInteger::new(BigInteger::mul(&self.digits, &rhs.digits))
    }
}

impl BigInteger {
    fn mul(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; x.len() + y.len()];

        for (i, x_val) in x.iter().enumerate() {
            if *x_val == 0 {
                continue;
            }
            let mut carry: u32 = 0;
            let mut j = 0;
            while j < y.len() || carry != 0 {
                let y_val = y.get(j).copied().unwrap_or(0) as u32;
                let cur = result[i + j] as u32 + *x_val as u32 * y_val + carry;
                result[i + j] = (cur % RADIX as u32) as u8;
                carry = cur / RADIX as u32;
                j += 1;
            }
        }

        result
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);

// 实现除法
impl Div<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: &BigInteger) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

impl BigInteger {
    /// `self / rhs`, or [`BigIntegerError::DivisionByZero`].
    pub fn checked_div(&self, rhs: &BigInteger) -> Result<BigInteger> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }
    /// Quotient and remainder in one pass.
    pub fn div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if rhs.is_zero() {
            return Err(BigIntegerError::DivisionByZero);
        }
        Ok(BigInteger::divide_long(self, rhs))
    }
    /// Schoolbook long division. Digits of `u` are brought down most significant first,
    /// and each quotient digit is found by subtracting `v` from the running remainder
    /// at most nine times.
    fn divide_long(u: &BigInteger, v: &BigInteger) -> (BigInteger, BigInteger) {
        if u < v {
            return (BigInteger::zero(), u.clone());
        }
        trace!(dividend_digits = u.digits.len(), divisor_digits = v.digits.len(), "long division");

        let mut quotient = vec![0u8; u.digits.len()];
        let mut remainder = BigInteger::zero();

        for pos in (0..u.digits.len()).rev() {
            remainder.push_low_digit(u.digits[pos]);
            let mut q = 0;
            while remainder >= *v {
                remainder = BigInteger::new(BigInteger::sub(&remainder.digits, &v.digits));
                q += 1;
            }
            quotient[pos] = q;
        }

        (BigInteger::new(quotient), remainder)
    }
    /// self = self * 10 + digit
    fn push_low_digit(&mut self, digit: u8) {
        if self.is_zero() {
            self.digits[0] = digit;
        } else {
            self.digits.insert(0, digit);
        }
    }
}

forward_binop!(Div, div, DivAssign, div_assign);

// 实现求余
impl Rem<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: &BigInteger) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

impl BigInteger {
    /// `self % rhs`, or [`BigIntegerError::ModuloByZero`].
    pub fn checked_rem(&self, rhs: &BigInteger) -> Result<BigInteger> {
        if rhs.is_zero() {
            return Err(BigIntegerError::ModuloByZero);
        }
        Ok(BigInteger::divide_long(self, rhs).1)
    }
}

forward_binop!(Rem, rem, RemAssign, rem_assign);

// 实现自增
impl BigInteger {
    /// `++x`: adds one in place and returns the new value.
    pub fn pre_increment(&mut self) -> BigInteger {
        *self += &POS_CACHE[1];
        self.clone()
    }
    /// `x++`: adds one in place and returns the value from before.
    pub fn post_increment(&mut self) -> BigInteger {
        let before = self.clone();
        *self += &POS_CACHE[1];
        before
    }
}

// 实现阶乘与斐波那契
impl BigInteger {
    /// `self!`, with `0! = 1! = 1`.
    pub fn fact(&self) -> BigInteger {
        debug!(digits = self.digits.len(), "computing factorial");
        let one = &POS_CACHE[1];
        let mut acc = BigInteger::one();
        let mut n = self.clone();
        while n > *one {
            acc *= &n;
            n -= one;
        }
        acc
    }
    /// The `self`-th Fibonacci number, counting from `F(0) = 0, F(1) = 1`.
    pub fn fibo(&self) -> BigInteger {
        debug!(digits = self.digits.len(), "computing fibonacci");
        if self.is_zero() {
            return BigInteger::zero();
        }
        let one = &POS_CACHE[1];
        let mut a = BigInteger::zero();
        let mut b = BigInteger::one();
        let mut n = self.clone();
        while n > *one {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
            n -= one;
        }
        b
    }
}

#[test]
fn test_from() {
    let big: BigInteger = 0u8.into();
    assert_eq!(big.digits, vec![0]);

    let big: BigInteger = 1234u16.into();
    assert_eq!(big.digits, vec![4, 3, 2, 1]);

    let big = BigInteger::from(u64::MAX);
    assert_eq!(big.to_string(), "18446744073709551615");

    let big = BigInteger::from(u128::MAX);
    assert_eq!(big.to_string(), u128::MAX.to_string());

    let big = BigInteger::try_from(25i32).unwrap();
    assert_eq!(big, BigInteger::from("25"));

    let big = BigInteger::try_from(i64::MAX).unwrap();
    assert_eq!(big, BigInteger::from("9223372036854775807"));

    assert_eq!(BigInteger::try_from(-1i8), Err(BigIntegerError::Negative(-1)));
    assert_eq!(BigInteger::try_from(i64::MIN), Err(BigIntegerError::Negative(i64::MIN as i128)));
}

#[test]
fn test_from_str() {
    let a: BigInteger = "000120".into();
    assert_eq!(a.digits, vec![0, 2, 1]);

    let a: BigInteger = "1,234,567".into();
    assert_eq!(a, BigInteger::from(1234567u32));

    let a: BigInteger = " -42x ".into();
    assert_eq!(a, BigInteger::from(42u8));

    let a: BigInteger = "0000".into();
    assert_eq!(a.digits, vec![0]);
    assert!(a.is_zero());

    let a: BigInteger = "no digits".into();
    assert_eq!(a, BigInteger::zero());

    let a: BigInteger = "".parse().unwrap();
    assert_eq!(a, BigInteger::zero());

    let a: BigInteger = String::from("9223372036854775807").into();
    assert_eq!(a.digit_count(), 19);
}

#[test]
fn test_digit() {
    let a: BigInteger = "1234".into();
    assert_eq!(a.digit(0), Ok(BigInteger::from(4u8)));
    assert_eq!(a.digit(3), Ok(BigInteger::from(1u8)));
    assert_eq!(a.digit(4), Err(BigIntegerError::IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(a[1], BigInteger::from(3u8));
    assert_eq!(BigInteger::zero().digit(0), Ok(BigInteger::zero()));
}

#[test]
#[should_panic(expected = "Index out of range")]
fn test_index_out_of_range() {
    let a: BigInteger = "1234".into();
    let _ = &a[4];
}

#[test]
fn test_cmp() {
    let a: BigInteger = "99".into();
    let b: BigInteger = "100".into();
    assert!(a < b);
    assert!(!(b < a));
    assert!(!(a < a.clone()));

    let a: BigInteger = "12345".into();
    let b: BigInteger = "12354".into();
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(b.cmp(&a), Ordering::Greater);
    assert_eq!(a.cmp(&"00012345".into()), Ordering::Equal);
}

#[test]
fn test_add() {
    let a: BigInteger = "999999999999999999999".into();
    let b: BigInteger = "1".into();
    let c: BigInteger = "1000000000000000000000".into();
    assert_eq!(&a + &b, c);
    assert_eq!(&b + &a, c);

    assert_eq!(10u64 + BigInteger::from(25u8), BigInteger::from(35u8));
    assert_eq!(BigInteger::from(25u8) + 10u64, BigInteger::from(35u8));
    assert_eq!(BigInteger::zero() + BigInteger::zero(), BigInteger::zero());

    let mut a = BigInteger::from(5u8);
    a += BigInteger::from(95u8);
    assert_eq!(a.digits, vec![0, 0, 1]);
}

#[test]
fn test_sub() {
    let a: BigInteger = "1000000000000000000000".into();
    let b: BigInteger = "1".into();
    let c: BigInteger = "999999999999999999999".into();
    assert_eq!(&a - &b, c);
    assert_eq!(&a - &a, BigInteger::zero());
    assert_eq!((&a - &a).digits, vec![0]);

    let a: BigInteger = "1234".into();
    let b: BigInteger = "1199".into();
    assert_eq!((&a - &b).digits, vec![5, 3]);
}

#[test]
fn test_checked_sub() {
    let a: BigInteger = "25".into();
    let b: BigInteger = "100".into();
    assert_eq!(a.checked_sub(&b), Err(BigIntegerError::Underflow));
    assert_eq!(b.checked_sub(&a), Ok(BigInteger::from(75u8)));
}

#[test]
#[should_panic(expected = "Subtraction underflow")]
fn test_sub_underflow() {
    let _ = BigInteger::from(24u8) - BigInteger::from(25u8);
}

#[test]
fn test_mul() {
    let a: BigInteger = "1234".into();
    let b: BigInteger = "9223372036854775807".into();
    let c: BigInteger = "11381641093478793345838".into();
    assert_eq!(&a * &b, c);
    assert_eq!(&b * &a, c);

    let a: BigInteger = "10000000000000000".into();
    let b: BigInteger = "3001".into();
    let result: BigInteger = "30010000000000000000".into();
    assert_eq!(a.clone() * b.clone(), result);
    assert_eq!(b * a, result);

    let a: BigInteger = "123456789".into();
    assert_eq!(&a * &BigInteger::zero(), BigInteger::zero());
    assert_eq!(BigInteger::from(99u8) * 99u64, BigInteger::from(9801u16));
}

#[test]
fn test_div() {
    let a = BigInteger::from("120");
    let b = BigInteger::from("13");
    let c = BigInteger::from("9");
    assert_eq!(a / b, c);

    let a = BigInteger::from("1234");
    let b = BigInteger::from("25");
    assert_eq!(a.div_rem(&b), Ok((BigInteger::from(49u8), BigInteger::from(9u8))));

    let a = BigInteger::from("10000000000000000000000000000000000");
    let b = BigInteger::from("1000");
    let c = BigInteger::from("10000000000000000000000000000000");
    assert_eq!(a / b, c);

    let a = BigInteger::from("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = BigInteger::from("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = BigInteger::from("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(a / b, c);

    let a = BigInteger::from("7");
    let b = BigInteger::from("12");
    assert_eq!(&a / &b, BigInteger::zero());
    assert_eq!(&a % &b, a);
}

#[test]
fn test_div_by_zero() {
    let a = BigInteger::from(5u8);
    assert_eq!(a.checked_div(&BigInteger::zero()), Err(BigIntegerError::DivisionByZero));
    assert_eq!(a.checked_rem(&BigInteger::zero()), Err(BigIntegerError::ModuloByZero));
    assert_eq!(BigInteger::zero().checked_div(&BigInteger::zero()), Err(BigIntegerError::DivisionByZero));
}

#[test]
#[should_panic(expected = "Divide by 0")]
fn test_div_by_zero_panics() {
    let _ = BigInteger::from(5u8) / BigInteger::zero();
}

#[test]
#[should_panic(expected = "Mod by zero")]
fn test_rem_by_zero_panics() {
    let _ = BigInteger::from(5u8) % BigInteger::zero();
}

#[test]
fn test_mod() {
    let a: BigInteger = "12".into();
    let b: BigInteger = "8".into();
    let r: BigInteger = "4".into();
    assert_eq!(a % b, r);

    let a: BigInteger = "10000000000000000".into();
    let b: BigInteger = "10".into();
    assert_eq!(a % b, BigInteger::zero());

    let a: BigInteger = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".into();
    let b: BigInteger = "526738495607659438721653478560954837265378495607".into();
    let r: BigInteger = "393707270751296419349581795408095683999332705291".into();
    assert_eq!(a % b, r);
}

#[test]
fn test_increment() {
    let mut a = BigInteger::from(25u8);
    assert_eq!(a.post_increment(), BigInteger::from(25u8));
    assert_eq!(a, BigInteger::from(26u8));

    let mut a = BigInteger::from(25u8);
    assert_eq!(a.pre_increment(), BigInteger::from(26u8));
    assert_eq!(a, BigInteger::from(26u8));

    let mut a: BigInteger = "999".into();
    a.pre_increment();
    assert_eq!(a.digits, vec![0, 0, 0, 1]);
}

#[test]
fn test_fact() {
    assert_eq!(BigInteger::zero().fact(), BigInteger::one());
    assert_eq!(BigInteger::one().fact(), BigInteger::one());
    assert_eq!(BigInteger::from(5u8).fact(), BigInteger::from(120u8));
    assert_eq!(
        BigInteger::from(50u8).fact(),
        BigInteger::from("30414093201713378043612608166064768844377641568960512000000000000"),
    );
}

#[test]
fn test_fibo() {
    assert_eq!(BigInteger::zero().fibo(), BigInteger::zero());
    assert_eq!(BigInteger::one().fibo(), BigInteger::one());
    assert_eq!(BigInteger::from(2u8).fibo(), BigInteger::one());
    assert_eq!(BigInteger::from(10u8).fibo(), BigInteger::from(55u8));
    assert_eq!(BigInteger::from(100u8).fibo(), BigInteger::from("354224848179261915075"));
}

#[test]
fn test_to_string() {
    let s = "12345678909876523784950683472613487560983287654321";
    let a: BigInteger = s.into();
    assert_eq!(a.to_string(), s);
    assert_eq!(BigInteger::zero().to_string(), "0");
    assert_eq!(format!("{:>10}", BigInteger::from(25u8)), "        25");
    assert_eq!(format!("{:<4}|", BigInteger::from(7u8)), "7   |");
}

#[cfg(test)]
mod properties {
    use quickcheck::{quickcheck, TestResult};

    use super::*;

    fn is_normalized(n: &BigInteger) -> bool {
        let digits = n.digits();
        !digits.is_empty()
            && digits.iter().all(|d| *d < RADIX)
            && (digits.len() == 1 || digits[digits.len() - 1] != 0)
    }

    quickcheck! {
        fn string_and_native_agree(n: u64) -> bool {
            BigInteger::from(n.to_string().as_str()) == BigInteger::from(n)
        }

        fn results_are_normalized(a: BigInteger, b: BigInteger) -> bool {
            let (big, little) = if a < b { (&b, &a) } else { (&a, &b) };
            let mut results = vec![&a + &b, big - little, &a * &b];
            if !b.is_zero() {
                results.push(&a / &b);
                results.push(&a % &b);
            }
            results.iter().all(is_normalized)
        }

        fn add_identity_and_commutativity(a: BigInteger, b: BigInteger) -> bool {
            &a + &BigInteger::zero() == a && &a + &b == &b + &a
        }

        fn mul_identity_and_zero(a: BigInteger) -> bool {
            &a * &BigInteger::one() == a && (&a * &BigInteger::zero()).is_zero()
        }

        fn div_rem_consistent(a: BigInteger, b: BigInteger) -> TestResult {
            if b.is_zero() {
                return TestResult::discard();
            }
            let (q, r) = match a.div_rem(&b) {
                Ok(qr) => qr,
                Err(_) => return TestResult::failed(),
            };
            TestResult::from_bool(&(&q * &b) + &r == a && r < b)
        }

        fn sub_undoes_add(a: BigInteger, b: BigInteger) -> bool {
            &(&a + &b) - &b == a
        }

        fn exactly_one_ordering_holds(a: BigInteger, b: BigInteger) -> bool {
            let held = [a < b, a == b, b < a];
            held.iter().filter(|h| **h).count() == 1
        }

        fn agrees_with_native(x: u64, y: u64) -> bool {
            let (a, b) = (BigInteger::from(x), BigInteger::from(y));
            let (x, y) = (x as u128, y as u128);
            let mut ok = &a + &b == BigInteger::from(x + y)
                && &a * &b == BigInteger::from(x * y)
                && (a < b) == (x < y);
            if x >= y {
                ok &= &a - &b == BigInteger::from(x - y);
            }
            if y != 0 {
                ok &= &a / &b == BigInteger::from(x / y) && &a % &b == BigInteger::from(x % y);
            }
            ok
        }

        fn increment_adds_one(n: u64) -> bool {
            let mut a = BigInteger::from(n);
            let before = a.post_increment();
            let after = a.clone();
            before == BigInteger::from(n) && after == BigInteger::from(n as u128 + 1)
                && a.pre_increment() == BigInteger::from(n as u128 + 2)
        }
    }
}
