// -*- mode: rust; -*-
//
// This file is part of ed25519-kes.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Various constants, such as the Ed25519 basepoint and the curve
//! parameter \\(d\\).
//!
//! Most of the constants are given with `LONG_DESCRIPTIVE_UPPER_CASE_NAMES`,
//! but they can be brought into scope using a `let` binding:
//!
//! ```
//! use ed25519_kes::constants;
//!
//! let B = &constants::ED25519_BASEPOINT_POINT;
//! ```

#![allow(non_snake_case)]

use std::sync::LazyLock;

use crate::edwards::{CompressedEdwardsY, EdwardsBasepointTable, EdwardsPoint};
use crate::field::FieldElement51;
use crate::scalar::Scalar;

/// Edwards `d` value, equal to `-121665/121666 mod p`.
pub(crate) const EDWARDS_D: FieldElement51 = FieldElement51([
    929955233495203,
    466365720129213,
    1662059464998953,
    2033849074728123,
    1442794654840575,
]);

/// Edwards `2*d` value, equal to `2*(-121665/121666) mod p`.
pub(crate) const EDWARDS_D2: FieldElement51 = FieldElement51([
    1859910466990425,
    932731440258426,
    1072319116312658,
    1815898335770999,
    633789495995903,
]);

/// `= sqrt(a*d - 1)`, where `a = -1 (mod p)`, `d` are the Edwards curve parameters.
pub(crate) const SQRT_M1: FieldElement51 = FieldElement51([
    1718705420411056,
    234908883556509,
    2233514472574048,
    2117202627021982,
    765476049583133,
]);

/// The Ed25519 basepoint, in `CompressedEdwardsY` format.
///
/// This is the little-endian byte encoding of \\( 4/5 \pmod p \\),
/// which is the \\( y \\)-coordinate of the basepoint.
///
/// The sign bit is 0 since the basepoint has \\( x \\) chosen to be positive.
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
]);

/// The Ed25519 basepoint, as an `EdwardsPoint`.
pub const ED25519_BASEPOINT_POINT: EdwardsPoint = EdwardsPoint {
    X: FieldElement51([
        1738742601995546,
        1146398526822698,
        2070867633025821,
        562264141797630,
        587772402128613,
    ]),
    Y: FieldElement51([
        1801439850948184,
        1351079888211148,
        450359962737049,
        900719925474099,
        1801439850948198,
    ]),
    Z: FieldElement51([1, 0, 0, 0, 0]),
    T: FieldElement51([
        1841354044333475,
        16398895984059,
        755974180946558,
        900171276175154,
        1821297809914039,
    ]),
};

/// The 8-torsion subgroup \\(\mathcal E \[8\]\\) has order 8; the
/// point of order 2 is useful when testing small-order checks.
pub(crate) const EIGHT_TORSION_POINT_OF_ORDER_2: CompressedEdwardsY = CompressedEdwardsY([
    0xec, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
]);

/// `L` is the order of base point, i.e. \\(2\^{252} +
/// 27742317777372353535851937790883648493\\), as five 56-bit limbs.
pub(crate) const L: Scalar = Scalar([
    0x0012631a5cf5d3ed,
    0x00f9dea2f79cd658,
    0x00000000000014de,
    0x0000000000000000,
    0x0000000010000000,
]);

/// `BARRETT_MU` is \\(\lfloor 2\^{512} / L \rfloor\\), as five 56-bit
/// limbs.
pub(crate) const BARRETT_MU: [u64; 5] = [
    0x009ce5a30a2c131b,
    0x00215d086329a7ed,
    0x00ffffffffeb2106,
    0x00ffffffffffffff,
    0x0000000fffffffff,
];

/// Precomputed table of multiples of the Ed25519 basepoint, for
/// fixed-base scalar multiplication.
///
/// The table is ~30KB, so it is built on first use instead of being
/// carried as a constant.
pub static ED25519_BASEPOINT_TABLE: LazyLock<EdwardsBasepointTable> =
    LazyLock::new(|| EdwardsBasepointTable::create(&ED25519_BASEPOINT_POINT));

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::FieldElement51;
    use crate::traits::ValidityCheck;

    #[test]
    fn test_d_vs_ratio() {
        // Test that EDWARDS_D is equal to -121665/121666
        let a = -&FieldElement51([121665, 0, 0, 0, 0]);
        let b = FieldElement51([121666, 0, 0, 0, 0]);
        let d = &a * &b.invert();
        let d2 = &d + &d;
        assert_eq!(d, EDWARDS_D);
        assert_eq!(d2, EDWARDS_D2);
    }

    #[test]
    fn test_sqrt_minus_one() {
        // Test that SQRT_M1 squares to -1
        let minus_one = FieldElement51::MINUS_ONE;
        let sqrt_m1_sq = SQRT_M1.square();
        assert_eq!(minus_one, sqrt_m1_sq);
    }

    #[test]
    fn test_sqrt_constants_sign() {
        // SQRT_M1 is the nonnegative root
        assert!(!bool::from(SQRT_M1.is_negative()));
    }

    #[test]
    fn basepoint_is_valid() {
        assert!(ED25519_BASEPOINT_POINT.is_valid());
    }

    #[test]
    fn basepoint_decompresses_to_basepoint_point() {
        let B = ED25519_BASEPOINT_COMPRESSED.decompress().unwrap();
        assert_eq!(B.compress(), ED25519_BASEPOINT_POINT.compress());
    }

    #[test]
    fn l_encodes_group_order() {
        // l reduces to zero mod l
        let l_bytes = L.to_bytes();
        assert_eq!(Scalar::from_bytes_mod_order(&l_bytes), Scalar::ZERO);
    }
}
