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

//! The \\(u\\)-coordinate surface of the Montgomery form of
//! Curve25519.
//!
//! The birational maps between the Edwards model
//! \\( -x\^2 + y\^2 = 1 + dx\^2y\^2 \\) and the Montgomery model
//! \\( v\^2 = u\^3 + Au\^2 + u \\) identify
//! \\( u = (1+y)/(1-y) \\), so a projective Edwards point
//! \\((X:Y:Z:T)\\) maps to the projective Montgomery
//! \\(u\\)-coordinate \\( (Z+Y : Z-Y) \\).
//!
//! This module exposes only what the X25519-style basepoint
//! multiplication test surface needs; the Diffie–Hellman ladder
//! itself is out of scope.

use core::fmt::Debug;

use subtle::Choice;
use subtle::ConstantTimeEq;

use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;

/// Holds the \\(u\\)-coordinate of a point on the Montgomery form of
/// Curve25519, as 32 little-endian bytes.
#[derive(Copy, Clone, Default)]
pub struct MontgomeryPoint(pub [u8; 32]);

impl Debug for MontgomeryPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "MontgomeryPoint: {:?}", &self.0[..])
    }
}

impl ConstantTimeEq for MontgomeryPoint {
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

impl MontgomeryPoint {
    /// View this `MontgomeryPoint` as an array of bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy this `MontgomeryPoint` to an array of bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl EdwardsPoint {
    /// Convert this `EdwardsPoint` on the Edwards model to the
    /// corresponding `MontgomeryPoint` on the Montgomery model.
    ///
    /// Note that this is a one-way conversion, since the Montgomery
    /// model does not retain sign information.
    pub fn to_montgomery(&self) -> MontgomeryPoint {
        // We have u = (1+y)/(1-y) = (Z+Y)/(Z-Y).
        //
        // The denominator is zero only when y=1, the identity point of
        // the Edwards curve.  Since 0.invert() = 0, in this case we
        // compute the 2-torsion point (0,0).
        let U = &self.Z + &self.Y;
        let W = &self.Z - &self.Y;
        let u = &U * &W.invert();
        MontgomeryPoint(u.to_bytes())
    }
}

/// Perform an X25519-style fixed-base multiplication: clamp the input,
/// multiply the Ed25519 basepoint by the clamped scalar, and return
/// the Montgomery \\(u\\)-coordinate of the result.
pub fn scalarmult_basepoint(bytes: &[u8; 32]) -> [u8; 32] {
    // Clamp the exponent per RFC 7748.
    let mut e = *bytes;
    e[0] &= 248;
    e[31] &= 127;
    e[31] |= 64;

    // The clamped value is a multiple of 8 below 2^255; it is used
    // without reduction mod l.
    let s = Scalar::from_bits(e);
    EdwardsPoint::mul_base(&s).to_montgomery().to_bytes()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;
    use hex_literal::hex;

    /// The X25519 basepoint, u = 9.
    #[test]
    fn basepoint_maps_to_u_nine() {
        let mut nine = [0u8; 32];
        nine[0] = 9;
        let u = constants::ED25519_BASEPOINT_POINT.to_montgomery();
        assert_eq!(u.to_bytes(), nine);
    }

    /// RFC 7748 §6.1: Alice's public key is her clamped private key
    /// times the basepoint.
    #[test]
    fn scalarmult_basepoint_rfc7748_vector() {
        let input = hex!("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
        let expected = hex!("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a");
        assert_eq!(scalarmult_basepoint(&input), expected);
    }
}
