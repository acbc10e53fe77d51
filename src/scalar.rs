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

//! Arithmetic on scalars modulo the group order
//! \\(\ell = 2\^{252} + 27742317777372353535851937790883648493\\), using
//! five \\(56\\)-bit unsigned limbs.
//!
//! Reduction is performed with the Barrett algorithm (HAC 14.42 with
//! \\(b = 2\^8\\), \\(k = 32\\)): a wide value \\(x < 2\^{512}\\) is
//! split into \\(q_1 = \lfloor x / 2\^{248} \rfloor\\) and
//! \\(r_1 = x \bmod 2\^{264}\\), the quotient estimate is
//! \\(q_3 = \lfloor q_1 \mu / 2\^{264} \rfloor\\) with
//! \\(\mu = \lfloor 2\^{512} / \ell \rfloor\\), and
//! \\(r = r_1 - q_3 \ell \bmod 2\^{264}\\) is brought into range with
//! two conditional subtractions.

use core::fmt::Debug;
use core::ops::Index;
use core::ops::{Add, Mul};

use subtle::Choice;
use subtle::ConstantTimeEq;

use zeroize::Zeroize;

use crate::constants;

/// Limbs are 56 bits; a value in \\([0, \ell)\\) occupies the low 29
/// bits of the fifth limb.
const MASK_56: u64 = (1u64 << 56) - 1;
/// A 264-bit value masks its top limb to 40 bits.
const MASK_40: u64 = (1u64 << 40) - 1;

/// A `Scalar` represents an element of \\(\mathbb Z / \ell \mathbb Z\\)
/// as five \\(56\\)-bit limbs.
///
/// Scalars built by the reducing constructors hold a canonical value
/// in \\([0, \ell)\\); `from_bits` stores up to \\(255\\) bits without
/// reducing, for callers (such as clamped Diffie–Hellman-style
/// exponents) that manage the range themselves.
#[derive(Copy, Clone)]
pub struct Scalar(pub(crate) [u64; 5]);

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar({:?})", &self.0[..])
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Index<usize> for Scalar {
    type Output = u64;
    fn index(&self, _index: usize) -> &u64 {
        &(self.0[_index])
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Scalar) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

/// u64 * u64 = u128 multiply helper
#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Borrow predicate: 1 if `a < b`, else 0.  Constant time for
/// operands below \\(2\^{63}\\).
#[inline(always)]
fn lt(a: u64, b: u64) -> u64 {
    a.wrapping_sub(b) >> 63
}

/// Load a little-endian `u64` from an 8-byte window of `input`.
#[inline(always)]
fn load8(input: &[u8]) -> u64 {
    (input[0] as u64)
        | ((input[1] as u64) << 8)
        | ((input[2] as u64) << 16)
        | ((input[3] as u64) << 24)
        | ((input[4] as u64) << 32)
        | ((input[5] as u64) << 40)
        | ((input[6] as u64) << 48)
        | ((input[7] as u64) << 56)
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    /// Compute `a + b (mod l)`.  Both operands must be reduced.
    fn add(self, _rhs: &'b Scalar) -> Scalar {
        let a = &self.0;
        let b = &_rhs.0;
        let mut sum = [0u64; 5];

        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = a[i] + b[i] + (carry >> 56);
            sum[i] = carry & MASK_56;
        }

        // The sum is below 2*l, so a single conditional subtraction
        // canonicalizes it.
        Scalar(conditional_sub_l(sum))
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    /// Compute `a * b (mod l)`.  Both operands must be reduced.
    fn mul(self, _rhs: &'b Scalar) -> Scalar {
        let z = mul_wide(&self.0, &_rhs.0);

        // Split the 512-bit product for Barrett reduction:
        // r1 = z mod 2^264, q1 = z >> 248.
        let r1 = [z[0], z[1], z[2], z[3], z[4] & MASK_40];
        let q1 = [
            ((z[4] >> 24) | (z[5] << 32)) & MASK_56,
            ((z[5] >> 24) | (z[6] << 32)) & MASK_56,
            ((z[6] >> 24) | (z[7] << 32)) & MASK_56,
            ((z[7] >> 24) | (z[8] << 32)) & MASK_56,
            (z[8] >> 24) | (z[9] << 32),
        ];

        Scalar(barrett_reduce(q1, r1))
    }
}

/// Schoolbook 5x5 multiply into ten 56-bit limbs.
fn mul_wide(a: &[u64; 5], b: &[u64; 5]) -> [u64; 10] {
    // Coefficient k collects all products a[i]*b[j] with i+j = k.
    // Each coefficient is at most 5 * (2^56)^2 = 2^114.33, well inside
    // a u128.
    let mut z = [0u128; 9];
    z[0] = m(a[0], b[0]);
    z[1] = m(a[0], b[1]) + m(a[1], b[0]);
    z[2] = m(a[0], b[2]) + m(a[1], b[1]) + m(a[2], b[0]);
    z[3] = m(a[0], b[3]) + m(a[1], b[2]) + m(a[2], b[1]) + m(a[3], b[0]);
    z[4] = m(a[0], b[4]) + m(a[1], b[3]) + m(a[2], b[2]) + m(a[3], b[1]) + m(a[4], b[0]);
    z[5] = m(a[1], b[4]) + m(a[2], b[3]) + m(a[3], b[2]) + m(a[4], b[1]);
    z[6] = m(a[2], b[4]) + m(a[3], b[3]) + m(a[4], b[2]);
    z[7] = m(a[3], b[4]) + m(a[4], b[3]);
    z[8] = m(a[4], b[4]);

    let mut out = [0u64; 10];
    let mut carry: u128 = 0;
    for k in 0..9 {
        let t = z[k] + carry;
        out[k] = (t as u64) & MASK_56;
        carry = t >> 56;
    }
    out[9] = carry as u64;
    out
}

/// Given `q1 = x >> 248` and `r1 = x mod 2^264` for `x < 2^512`,
/// compute `x mod l`.
fn barrett_reduce(q1: [u64; 5], r1: [u64; 5]) -> [u64; 5] {
    let mu = &constants::BARRETT_MU;
    let l = &constants::L.0;

    // q2 = q1 * mu; only the limbs above bit 264 are needed, but the
    // full product is computed so that the quotient estimate is exact.
    let mut z = [0u128; 9];
    for i in 0..5 {
        for j in 0..5 {
            z[i + j] += m(q1[i], mu[j]);
        }
    }
    let mut q2 = [0u64; 10];
    let mut carry: u128 = 0;
    for k in 0..9 {
        let t = z[k] + carry;
        q2[k] = (t as u64) & MASK_56;
        carry = t >> 56;
    }
    q2[9] = carry as u64;

    // q3 = q2 >> 264; bit 264 is bit 40 of limb 4.
    let q3 = [
        ((q2[4] >> 40) | (q2[5] << 16)) & MASK_56,
        ((q2[5] >> 40) | (q2[6] << 16)) & MASK_56,
        ((q2[6] >> 40) | (q2[7] << 16)) & MASK_56,
        ((q2[7] >> 40) | (q2[8] << 16)) & MASK_56,
        (q2[8] >> 40) | (q2[9] << 16),
    ];

    // r2 = (q3 * l) mod 2^264
    let mut z = [0u128; 5];
    for i in 0..5 {
        for j in 0..5 {
            if i + j < 5 {
                z[i + j] += m(q3[i], l[j]);
            }
        }
    }
    let mut r2 = [0u64; 5];
    let mut carry: u128 = 0;
    for k in 0..5 {
        let t = z[k] + carry;
        r2[k] = (t as u64) & MASK_56;
        carry = t >> 56;
    }
    r2[4] &= MASK_40;

    // r = (r1 - r2) mod 2^264.  The true remainder is nonnegative and
    // below 3*l, so the top borrow is always absorbed.
    let mut r = [0u64; 5];
    let mut pb: u64 = 0;
    pb += r2[0];
    let b = lt(r1[0], pb);
    r[0] = r1[0].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b;
    pb += r2[1];
    let b = lt(r1[1], pb);
    r[1] = r1[1].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b;
    pb += r2[2];
    let b = lt(r1[2], pb);
    r[2] = r1[2].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b;
    pb += r2[3];
    let b = lt(r1[3], pb);
    r[3] = r1[3].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b;
    pb += r2[4];
    let b = lt(r1[4], pb);
    r[4] = r1[4].wrapping_sub(pb).wrapping_add(b << 40);

    // At most two subtractions of l remain.
    conditional_sub_l(conditional_sub_l(r))
}

/// Subtract `l` if the operand is at least `l`; the operand must be
/// below `2^256`.
fn conditional_sub_l(r: [u64; 5]) -> [u64; 5] {
    let l = &constants::L.0;
    let mut t = [0u64; 5];

    // t = r - l
    let mut pb: u64 = 0;
    pb += l[0];
    let b = lt(r[0], pb);
    t[0] = r[0].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b;
    pb += l[1];
    let b = lt(r[1], pb);
    t[1] = r[1].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b;
    pb += l[2];
    let b = lt(r[2], pb);
    t[2] = r[2].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b;
    pb += l[3];
    let b = lt(r[3], pb);
    t[3] = r[3].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b;
    pb += l[4];
    let b = lt(r[4], pb);
    t[4] = r[4].wrapping_sub(pb).wrapping_add(b << 32);

    // Keep r if the subtraction borrowed; the mask selection branches
    // only on the borrow mask, never on the value.
    let mask = b.wrapping_sub(1);
    [
        r[0] ^ (mask & (r[0] ^ t[0])),
        r[1] ^ (mask & (r[1] ^ t[1])),
        r[2] ^ (mask & (r[2] ^ t[2])),
        r[3] ^ (mask & (r[3] ^ t[3])),
        r[4] ^ (mask & (r[4] ^ t[4])),
    ]
}

/// Split eight little-endian words into `(q1, r1)` and reduce.
fn reduce512(x: [u64; 8]) -> Scalar {
    // r1 = x mod 2^264
    let r1 = [
        x[0] & MASK_56,
        ((x[0] >> 56) | (x[1] << 8)) & MASK_56,
        ((x[1] >> 48) | (x[2] << 16)) & MASK_56,
        ((x[2] >> 40) | (x[3] << 24)) & MASK_56,
        ((x[3] >> 32) | (x[4] << 32)) & MASK_40,
    ];
    // q1 = x >> 248
    let q1 = [
        ((x[3] >> 56) | (x[4] << 8)) & MASK_56,
        ((x[4] >> 48) | (x[5] << 16)) & MASK_56,
        ((x[5] >> 40) | (x[6] << 24)) & MASK_56,
        ((x[6] >> 32) | (x[7] << 32)) & MASK_56,
        x[7] >> 24,
    ];
    Scalar(barrett_reduce(q1, r1))
}

impl Scalar {
    /// The scalar \\( 0 \\).
    pub const ZERO: Scalar = Scalar([0, 0, 0, 0, 0]);

    /// The scalar \\( 1 \\).
    pub const ONE: Scalar = Scalar([1, 0, 0, 0, 0]);

    /// Construct a `Scalar` by reducing a 256-bit little-endian
    /// integer modulo the group order \\( \ell \\).
    pub fn from_bytes_mod_order(bytes: &[u8; 32]) -> Scalar {
        let x = [
            load8(&bytes[0..]),
            load8(&bytes[8..]),
            load8(&bytes[16..]),
            load8(&bytes[24..]),
            0,
            0,
            0,
            0,
        ];
        reduce512(x)
    }

    /// Construct a `Scalar` by reducing a 512-bit little-endian
    /// integer modulo the group order \\( \ell \\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        let x = [
            load8(&input[0..]),
            load8(&input[8..]),
            load8(&input[16..]),
            load8(&input[24..]),
            load8(&input[32..]),
            load8(&input[40..]),
            load8(&input[48..]),
            load8(&input[56..]),
        ];
        reduce512(x)
    }

    /// Construct a `Scalar` from the low 255 bits of a 256-bit
    /// integer, without reducing mod \\( \ell \\).
    ///
    /// This function is intended for applications like X25519-style
    /// clamped exponents which require specific bit-patterns when
    /// performing scalar multiplication.
    pub fn from_bits(bytes: [u8; 32]) -> Scalar {
        let mut words = [
            load8(&bytes[0..]),
            load8(&bytes[8..]),
            load8(&bytes[16..]),
            load8(&bytes[24..]),
        ];
        // Ensure the value fits in 255 bits.
        words[3] &= (1u64 << 63) - 1;

        Scalar([
            words[0] & MASK_56,
            ((words[0] >> 56) | (words[1] << 8)) & MASK_56,
            ((words[1] >> 48) | (words[2] << 16)) & MASK_56,
            ((words[2] >> 40) | (words[3] << 24)) & MASK_56,
            words[3] >> 32,
        ])
    }

    /// Pack the limbs of this `Scalar` into 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut s = [0u8; 32];

        // Limb i holds bits [56*i, 56*i + 56), i.e. bytes [7*i, 7*i + 7);
        // the top limb of a reduced (or 255-bit raw) scalar fits in the
        // final four bytes.
        for i in 0..4 {
            let limb = self.0[i];
            for j in 0..7 {
                s[7 * i + j] = (limb >> (8 * j)) as u8;
            }
        }
        for j in 0..4 {
            s[28 + j] = (self.0[4] >> (8 * j)) as u8;
        }

        s
    }

    /// Write this scalar in radix 16, with coefficients in `[-8,8)`,
    /// i.e., compute `a_i` such that
    ///
    ///    a = a_0 + a_1*16^1 + ... + a_63*16^63,
    ///
    /// with `-8 ≤ a_i < 8` for `0 ≤ i < 63` and `-8 ≤ a_63 ≤ 8`.
    ///
    /// Precondition: self is below \\(2\^{255}\\), which holds for
    /// every reduced or raw 255-bit scalar.
    pub(crate) fn as_radix_16(&self) -> [i8; 64] {
        let bytes = self.to_bytes();
        debug_assert!(bytes[31] <= 127);
        let mut output = [0i8; 64];

        // Step 1: change radix.
        // Convert from radix 256 (bytes) to radix 16 (nibbles)
        #[inline(always)]
        fn bot_half(x: u8) -> u8 {
            x & 15
        }
        #[inline(always)]
        fn top_half(x: u8) -> u8 {
            (x >> 4) & 15
        }

        for i in 0..32 {
            output[2 * i] = bot_half(bytes[i]) as i8;
            output[2 * i + 1] = top_half(bytes[i]) as i8;
        }
        // Precondition note: since bytes[31] <= 127, output[63] <= 7

        // Step 2: recenter coefficients from [0,16) to [-8,8)
        for i in 0..63 {
            let carry = (output[i] + 8) >> 4;
            output[i] -= carry << 4;
            output[i + 1] += carry;
        }
        // Precondition note: output[63] is not recentered.  It
        // increases by carry <= 1.  Thus output[63] <= 8.

        output
    }

    /// Compute a width-\\(w\\) "Non-Adjacent Form" of this scalar.
    ///
    /// A width-\\(w\\) NAF of a positive integer \\(k\\) is an
    /// expression
    /// $$
    /// k = \sum_{i=0}\^m n\_i 2\^i,
    /// $$
    /// where each nonzero coefficient \\(n\_i\\) is odd and bounded by
    /// \\(|n\_i| < 2\^{w-1}\\), \\(n\_{m}\\) is nonzero, and at most
    /// one of any \\(w\\) consecutive coefficients is nonzero.
    /// (Hankerson, Menezes, Vanstone; def 3.32).
    ///
    /// Intuitively, this is like a binary expansion, except that we
    /// allow some coefficients to grow in magnitude up to
    /// \\(2\^{w-1}\\) so that the nonzero coefficients are as sparse
    /// as possible.
    pub(crate) fn non_adjacent_form(&self, w: usize) -> [i8; 256] {
        // required so that the NAF digits fit in i8
        debug_assert!(w >= 2);
        debug_assert!(w <= 8);

        let bytes = self.to_bytes();
        debug_assert!(bytes[31] <= 127);

        let mut naf = [0i8; 256];

        let mut x_u64 = [0u64; 5];
        for i in 0..4 {
            x_u64[i] = load8(&bytes[8 * i..]);
        }

        let width = 1u64 << w;
        let window_mask = width - 1;

        let mut pos = 0;
        let mut carry = 0;
        while pos < 256 {
            // Construct a buffer of bits of the scalar, starting at bit `pos`
            let u64_idx = pos / 64;
            let bit_idx = pos % 64;
            let bit_buf: u64 = if bit_idx < 64 - w {
                // This window's bits are contained in a single u64
                x_u64[u64_idx] >> bit_idx
            } else {
                // Combine the current u64's bits with the bits from the next u64
                (x_u64[u64_idx] >> bit_idx) | (x_u64[1 + u64_idx] << (64 - bit_idx))
            };

            // Add the carry into the current window
            let window = carry + (bit_buf & window_mask);

            if window & 1 == 0 {
                // If the window value is even, preserve the carry and continue.
                // Why is the carry preserved?
                // If carry == 0 and window & 1 == 0, then the next carry should be 0
                // If carry == 1 and window & 1 == 0, then bit_buf & 1 == 1 so the next carry should be 1
                pos += 1;
                continue;
            }

            if window < width / 2 {
                carry = 0;
                naf[pos] = window as i8;
            } else {
                carry = 1;
                naf[pos] = (window as i8).wrapping_sub(width as i8);
            }

            pos += w;
        }

        naf
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// The largest scalar that satisfies the 253-bit bound of the
    /// limb carrier, reduced: x = 2^253 - 1 mod l.
    static X: Scalar = Scalar([
        0xed9ce5a30a2c12,
        0x06215d086329a7,
        0xffffffffffeb21,
        0xffffffffffffff,
        0x0fffffff,
    ]);

    /// y = 6145104759870991071742105800796537629880401874866217824609283457819451087098
    static Y: Scalar = Scalar([
        0xcb75071e1458fa,
        0x2bbf9d75e1ecda,
        0xd13433d2baf067,
        0xb8255fffcc11fa,
        0x0d96018b,
    ]);

    /// x*y mod l
    static XY: Scalar = Scalar([
        0x2ee6d76ba7632d,
        0x34ed50d71d84e0,
        0x1ba6,
        0x0,
        0x0,
    ]);

    /// x+y mod l
    static X_PLUS_Y: Scalar = Scalar([
        0xa6aed26428b11f,
        0x38025786a8402a,
        0xd13433d2bac6a9,
        0xb8255fffcc11fa,
        0x0d96018b,
    ]);

    /// (2^512 - 1) mod l
    static CANONICAL_2_512_MINUS_1: Scalar = Scalar([
        0x0611e3449c0f00,
        0x1ba768859347a4,
        0xd217f5be65d00e,
        0x7c309a3dceec73,
        0x0399411b,
    ]);

    /// The RFC 8032 test seed, reduced mod l; the expected limbs are
    /// the donna reference values.
    static RFC_SEED_BYTES: [u8; 32] = [
        0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60,
        0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec, 0x2c, 0xc4,
        0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19,
        0x70, 0x3b, 0xac, 0x03, 0x1c, 0xae, 0x7f, 0x60,
    ];

    #[test]
    fn from_bytes_mod_order_vs_donna_limbs() {
        let a = Scalar::from_bytes_mod_order(&RFC_SEED_BYTES);
        let a_donna = Scalar([
            0x00ecab516fee6a0f,
            0x00115b227cd7b44f,
            0x007b69c5494446f3,
            0x0003ac3b70196932,
            0x00000000007fae1c,
        ]);
        assert_eq!(a, a_donna);
    }

    #[test]
    fn as_radix_16_vs_donna_digits() {
        let a = Scalar::from_bytes_mod_order(&RFC_SEED_BYTES);
        #[rustfmt::skip]
        let digits_donna: [i8; 64] = [
            -1,  1, -6,  7, -2, -1,  0,  7,
             1,  5, -5, -5, -3, -1,  0,  5,
             4, -5, -8, -2, -3, -8,  3,  2,
            -5,  6,  1,  1,  3, -1,  7,  4,
             4,  4, -7,  5,  5, -4, -6,  7,
            -5, -8,  3,  3, -7,  7, -7,  2,
             0,  7, -5,  4, -4, -5,  4,  0,
            -4,  2, -2, -5,  0, -8,  1,  0,
        ];
        assert_eq!(a.as_radix_16(), digits_donna);
    }

    #[test]
    fn mul() {
        assert_eq!(&X * &Y, XY);
    }

    #[test]
    fn mul_by_one_is_identity() {
        assert_eq!(&X * &Scalar::ONE, X);
        assert_eq!(&Y * &Scalar::ONE, Y);
    }

    #[test]
    fn add() {
        assert_eq!(&X + &Y, X_PLUS_Y);
        assert_eq!(&X + &Scalar::ZERO, X);
    }

    #[test]
    fn from_bytes_mod_order_wide_of_max() {
        let bignum = [255u8; 64]; // 2^512 - 1
        assert_eq!(
            Scalar::from_bytes_mod_order_wide(&bignum),
            CANONICAL_2_512_MINUS_1
        );
    }

    #[test]
    fn to_bytes_from_bytes_round_trip() {
        let bytes = Y.to_bytes();
        assert_eq!(Scalar::from_bytes_mod_order(&bytes), Y);
        // Canonical values survive the raw path as well.
        assert_eq!(Scalar::from_bits(bytes), Y);
    }

    /// A scalar from the ed25519 test vectors.
    static A_SCALAR_BYTES: [u8; 32] = [
        0x1a, 0x0e, 0x97, 0x8a, 0x90, 0xf6, 0x62, 0x2d,
        0x37, 0x47, 0x02, 0x3f, 0x8a, 0xd8, 0x26, 0x4d,
        0xa7, 0x58, 0xaa, 0x1b, 0x88, 0xe0, 0x40, 0xd1,
        0x58, 0x9e, 0x7b, 0x7f, 0x23, 0x76, 0xef, 0x09,
    ];

    /// The corresponding width-5 NAF digits.
    #[rustfmt::skip]
    static A_NAF: [i8; 256] = [
        0,13,0,0,0,0,0,0,0,7,0,0,0,0,0,0,-9,0,0,0,0,-11,0,0,0,0,3,0,0,0,0,1,
        0,0,0,0,9,0,0,0,0,-5,0,0,0,0,0,0,3,0,0,0,0,11,0,0,0,0,11,0,0,0,0,0,
        -9,0,0,0,0,0,-3,0,0,0,0,9,0,0,0,0,0,1,0,0,0,0,0,0,-1,0,0,0,0,0,9,0,
        0,0,0,-15,0,0,0,0,-7,0,0,0,0,-9,0,0,0,0,0,5,0,0,0,0,13,0,0,0,0,0,-3,0,
        0,0,0,-11,0,0,0,0,-7,0,0,0,0,-13,0,0,0,0,11,0,0,0,0,-9,0,0,0,0,0,1,0,0,
        0,0,0,-15,0,0,0,0,1,0,0,0,0,7,0,0,0,0,0,0,0,0,5,0,0,0,0,0,13,0,0,0,
        0,0,0,11,0,0,0,0,0,15,0,0,0,0,0,-9,0,0,0,0,0,0,0,-1,0,0,0,0,0,0,0,7,
        0,0,0,0,0,-15,0,0,0,0,0,15,0,0,0,0,15,0,0,0,0,15,0,0,0,0,0,1,0,0,0,0,
    ];

    #[test]
    fn non_adjacent_form_test_vector() {
        let a = Scalar::from_bits(A_SCALAR_BYTES);
        let naf = a.non_adjacent_form(5);
        for i in 0..256 {
            assert_eq!(naf[i], A_NAF[i]);
        }
    }

    #[test]
    fn non_adjacent_form_is_sparse_and_odd() {
        let a = Scalar::from_bytes_mod_order(&RFC_SEED_BYTES);
        for w in 2..=8 {
            let naf = a.non_adjacent_form(w);
            let bound = 1i8 << (w - 1);
            for i in 0..256 {
                if naf[i] != 0 {
                    assert_eq!(naf[i] & 1, 1);
                    assert!(naf[i] < bound && naf[i] > -bound);
                    for j in 1..w.min(255 - i) {
                        assert_eq!(naf[i + j], 0);
                    }
                }
            }
        }
    }

    #[test]
    fn zeroize_clears_limbs() {
        let mut a = Scalar::from_bytes_mod_order(&RFC_SEED_BYTES);
        a.zeroize();
        assert_eq!(a.0, [0u64; 5]);
    }
}
