use std::net::IpAddr;

use ipstep_core::{Family, RangeError, add, add_big, is_ipv4, is_ipv6, sub, sub_big};
use ipstep_integration_tests::util::{big, ip, pow2, random_v4, random_v6, rng, v4, v6};
use num_bigint::BigInt;
use rand::Rng;

const SAMPLES: usize = 512;

#[test]
fn ipv4_unsigned_offsets() {
    let cases: &[(u64, Option<IpAddr>)] = &[
        (1, Some(v4(0, 0, 0, 1))),
        ((1 << 8) - 1, Some(v4(0, 0, 0, 255))),
        (1 << 8, Some(v4(0, 0, 1, 0))),
        ((1 << 16) - 1, Some(v4(0, 0, 255, 255))),
        (1 << 16, Some(v4(0, 1, 0, 0))),
        ((1 << 24) - 1, Some(v4(0, 255, 255, 255))),
        (1 << 24, Some(v4(1, 0, 0, 0))),
        ((1 << 32) - 1, Some(v4(255, 255, 255, 255))),
        (1 << 32, None),
    ];

    for &(offset, expected) in cases {
        let result = add(v4(0, 0, 0, 0), offset);
        match expected {
            Some(addr) => assert_eq!(result, Ok(addr), "0.0.0.0 + {offset}"),
            None => assert_eq!(result, Err(RangeError::new(Family::V4)), "0.0.0.0 + {offset}"),
        }
    }
}

#[test]
fn ipv6_unsigned_offsets() {
    let cases: &[(u64, Option<&str>)] = &[
        (1, Some("::1")),
        ((1 << 16) - 1, Some("::FFFF")),
        (1 << 16, Some("::1:0")),
        ((1 << 32) - 1, Some("::FFFF:FFFF")),
        (1 << 32, Some("::1:0:0")),
        ((1 << 48) - 1, Some("::FFFF:FFFF:FFFF")),
        (1 << 48, Some("::1:0:0:0")),
    ];

    for &(offset, expected) in cases {
        assert_eq!(add(v6("::0"), offset), Ok(v6(expected.unwrap())), ":: + {offset}");
    }

    let max = v6("FFFF:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF");
    assert_eq!(add(max, 1), Err(RangeError::new(Family::V6)));
}

#[test]
fn ipv6_big_offsets() {
    let cases: &[(&[u8], &str)] = &[
        (&[0x01], "::1"),
        (&[0xff, 0xff], "::FFFF"),
        (&[0x01, 0x00, 0x00], "::1:0"),
        (&[0xff, 0xff, 0xff, 0xff], "::FFFF:FFFF"),
        (&[0x01, 0x00, 0x00, 0x00, 0x00], "::1:0:0"),
        (&[0xff; 6], "::FFFF:FFFF:FFFF"),
        (&[0x01, 0, 0, 0, 0, 0, 0], "::1:0:0:0"),
        (&[0xff; 8], "::FFFF:FFFF:FFFF:FFFF"),
        (&[0x01, 0, 0, 0, 0, 0, 0, 0, 0], "0:0:0:1::"),
        (&[0xff; 10], "0:0:0:FFFF:FFFF:FFFF:FFFF:FFFF"),
        (&[0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], "0:0:1::"),
        (&[0xff; 12], "0:0:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF"),
        (&[0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], "0:1::"),
        (&[0xff; 14], "0:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF"),
        (&[0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], "1::"),
        (&[0xff; 16], "FFFF:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF"),
    ];

    for &(bytes, expected) in cases {
        let offset = big(bytes);
        assert_eq!(add_big(v6("::0"), &offset), Ok(v6(expected)), ":: + {offset}");
    }

    let mut too_big = vec![0u8; 17];
    too_big[0] = 0x01;
    assert_eq!(add_big(v6("::0"), &big(&too_big)), Err(RangeError::new(Family::V6)));
}

#[test]
fn underflow_at_zero() {
    assert_eq!(sub(v4(0, 0, 0, 0), 1), Err(RangeError::new(Family::V4)));
    assert_eq!(sub(v6("::"), 1), Err(RangeError::new(Family::V6)));
    assert_eq!(sub_big(v6("::"), &pow2(200)), Err(RangeError::new(Family::V6)));
}

#[test]
fn overflow_far_past_the_bound() {
    assert!(add_big(v4(255, 255, 255, 255), &pow2(64)).is_err());
    assert!(add_big(v4(0, 0, 0, 0), &pow2(33)).is_err());
    assert!(add_big(v6("::"), &pow2(129)).is_err());
    assert!(add(v4(1, 2, 3, 4), u64::MAX).is_err());
}

#[test]
fn zero_offset_is_identity() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_v4(&mut rng);
        assert_eq!(add(a, 0), Ok(a));
        let b = random_v6(&mut rng);
        assert_eq!(add(b, 0), Ok(b));
        assert_eq!(add_big(b, &BigInt::from(0)), Ok(b));
    }
}

#[test]
fn subtract_undoes_add() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_v4(&mut rng);
        let n: u64 = rng.random_range(0..=u32::MAX as u64);
        if let Ok(moved) = add(a, n) {
            assert_eq!(sub(moved, n), Ok(a), "{a} + {n}");
        }

        let b = random_v6(&mut rng);
        let n = BigInt::from(rng.random::<u128>()) - BigInt::from(rng.random::<u128>());
        match add_big(b, &n) {
            // A sum inside ::ffff:0:0/96 is IPv4 from then on, see below.
            Ok(moved) if is_ipv6(b) && !lands_in_mapped_range(moved) => {
                assert_eq!(sub_big(moved, &n), Ok(b), "{b} + {n}");
            }
            _ => {}
        }
    }
}

#[test]
fn family_is_preserved() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_v4(&mut rng);
        let n = BigInt::from(rng.random::<i32>());
        if let Ok(moved) = add_big(a, &n) {
            assert!(is_ipv4(moved), "{a} + {n} = {moved}");
        }

        let b = random_v6(&mut rng);
        if !is_ipv6(b) {
            continue;
        }
        if let Ok(moved) = add_big(b, &n) {
            assert!(
                is_ipv6(moved) || lands_in_mapped_range(moved),
                "{b} + {n} = {moved}"
            );
        }
    }
}

fn lands_in_mapped_range(addr: IpAddr) -> bool {
    matches!(addr, IpAddr::V6(v6) if v6.to_ipv4_mapped().is_some())
}

#[test]
fn ipv6_sum_entering_mapped_range_reads_as_ipv4() {
    let below = ip("::fffe:ffff:ffff");
    let moved = add(below, 1).unwrap();

    assert_eq!(moved, ip("::ffff:0.0.0.0"));
    assert!(lands_in_mapped_range(moved));
    assert!(is_ipv4(moved));

    // Subtraction now runs at 32-bit width, so the step back is rejected.
    assert_eq!(sub(moved, 1), Err(RangeError::new(Family::V4)));
    assert_eq!(add(ip("::ffff:0.0.0.0"), 1), Ok(v4(0, 0, 0, 1)));
}

#[test]
fn ipv6_sum_past_mapped_range_stays_ipv6() {
    let past = add(ip("::fffe:ffff:ffff"), 1 << 33).unwrap();
    assert_eq!(past, ip("::1:0:ffff:ffff"));
    assert!(!lands_in_mapped_range(past));
    assert!(is_ipv6(past));
    assert_eq!(sub(past, 1 << 33), Ok(ip("::fffe:ffff:ffff")));
}
