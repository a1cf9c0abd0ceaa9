pub const RADIX: u8 = 10;

pub const DIGITS: [char; RADIX as usize] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9'
];

pub const MAX_CONSTANT: usize = 16;

/// Enough digits for `u128::MAX`.
pub const MAX_NATIVE_DIGITS: usize = 39;

pub const DEFAULT_EXACT_THRESHOLD: usize = 12;

pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 7;
