use quickcheck::{Arbitrary, Gen};

use crate::BigInteger;
use crate::big_integer_constants::RADIX;

fn from_arbitrary_digits(digits: Vec<u8>) -> BigInteger {
    BigInteger::new(digits.into_iter().map(|d| d % RADIX).collect())
}

impl Arbitrary for BigInteger {
    fn arbitrary(g: &mut Gen) -> Self {
        from_arbitrary_digits(Vec::<u8>::arbitrary(g))
    }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.digits().to_vec().shrink().map(from_arbitrary_digits))
    }
}
