use goldenseed::primitives::U256;

#[test]
fn u256_max_const() {
    assert_eq!(U256::MAX, U256::from([255u8; 32]));
}

#[test]
fn u256_try_from_u128_and_back() {
    let a = U256::from(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128);
    assert_eq!(
        u128::try_from(a).unwrap(),
        0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128
    );

    let mut bad = [0u8; 32];
    bad[0] = 1;
    assert!(u128::try_from(U256::from(bad)).is_err());
}

#[test]
fn u256_leading_zeros() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::from(1u64).leading_zeros(), 255);

    let mut high = [0u8; 32];
    high[0] = 0x10;
    assert_eq!(U256::from(high).leading_zeros(), 3);

    let mut mid = [0u8; 32];
    mid[10] = 0x01;
    assert_eq!(U256::from(mid).leading_zeros(), 87u32);
}

#[test]
fn u256_bitwise_ops() {
    let a = U256::from([0xFFu8; 32]);
    let b = U256::from([0x0Fu8; 32]);

    assert_eq!(a & b, U256::from([0x0Fu8; 32]));
    assert_eq!(a ^ b, U256::from([0xF0u8; 32]));
}

#[test]
fn u256_ordering_is_numeric() {
    assert!(U256::from(256u64) > U256::from(255u64));
    assert!(U256::MAX > U256::from(u128::MAX));
}

#[test]
fn u256_decimal_formatting() {
    assert_eq!(U256::MAX.to_string(), "115792089237316195423570985008687907853269984665640564039457584007913129639935");
    assert_eq!(U256::from_dec_str("0"), Some(U256::ZERO));
    assert_eq!(format!("{:>5}", U256::from(42u64)), "   42");
}

#[test]
fn u256_div_rem_small() {
    let (q, r) = U256::from(1_000_003u64).div_rem_small(10);
    assert_eq!(q, U256::from(100_000u64));
    assert_eq!(r, 3);
}
