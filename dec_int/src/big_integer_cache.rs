use lazy_static::*;

use crate::BigInteger;
use crate::big_integer_constants::*;

lazy_static! {
    /// 0 ..= MAX_CONSTANT，数字按低位在前存放
    pub static ref POS_CACHE: [BigInteger; MAX_CONSTANT + 1] = [
        BigInteger::from_raw(vec![0]   ),
        BigInteger::from_raw(vec![1]   ),
        BigInteger::from_raw(vec![2]   ),
        BigInteger::from_raw(vec![3]   ),
        BigInteger::from_raw(vec![4]   ),
        BigInteger::from_raw(vec![5]   ),
        BigInteger::from_raw(vec![6]   ),
        BigInteger::from_raw(vec![7]   ),
        BigInteger::from_raw(vec![8]   ),
        BigInteger::from_raw(vec![9]   ),
        BigInteger::from_raw(vec![0, 1]),
        BigInteger::from_raw(vec![1, 1]),
        BigInteger::from_raw(vec![2, 1]),
        BigInteger::from_raw(vec![3, 1]),
        BigInteger::from_raw(vec![4, 1]),
        BigInteger::from_raw(vec![5, 1]),
        BigInteger::from_raw(vec![6, 1]),
    ];
}

#[test]
fn test_pos_cache() {
    for (i, cached) in POS_CACHE.iter().enumerate() {
        assert_eq!(cached.to_string(), i.to_string());
    }
}
