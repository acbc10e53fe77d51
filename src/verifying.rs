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

//! ed25519 public keys.

use core::fmt::Debug;

use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
use crate::errors::{Error, Result};
use crate::scalar::Scalar;
use crate::signature::Signature;
use crate::PUBLIC_KEY_LENGTH;

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ed25519 public key: the compressed Edwards point
/// \\( A = [k_L]B \\).
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PublicKey(pub(crate) CompressedEdwardsY);

impl Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PublicKey({:?})", self.0)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PublicKey {
    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.0.as_bytes()
    }

    /// Copy this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0.to_bytes()
    }

    /// Construct a `PublicKey` from a slice of bytes.
    ///
    /// The bytes are not checked to be a decompressible point here;
    /// verification treats an undecompressible key as a verification
    /// failure.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<PublicKey> {
        if bytes.len() != PUBLIC_KEY_LENGTH {
            return Err(Error::InvalidKeyLength {
                name: "PublicKey",
                expected: PUBLIC_KEY_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut bits: [u8; 32] = [0u8; 32];
        bits.copy_from_slice(bytes);

        Ok(PublicKey(CompressedEdwardsY(bits)))
    }

    /// Verify a signature on a message with this public key.
    ///
    /// Structural failures — a public key that is not a curve point,
    /// or a malformed `R` — are reported as verification failure, not
    /// as an error.  The scalar half of the signature is already
    /// guaranteed canonical by [`Signature::from_bytes`].
    ///
    /// # Returns
    ///
    /// `true` if the signature is valid for this key and message.
    #[allow(non_snake_case)]
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let A = match self.0.decompress() {
            Some(point) => point,
            None => return false,
        };

        // k = H(R ‖ A ‖ msg)
        let mut h = Sha512::new();
        h.update(signature.R.as_bytes());
        h.update(self.as_bytes());
        h.update(message);
        let mut hash: [u8; 64] = [0u8; 64];
        hash.copy_from_slice(h.finalize().as_slice());
        let k = Scalar::from_bytes_mod_order_wide(&hash);

        let s = Scalar::from_bytes_mod_order(&signature.s);

        // Check that [s]B - [k]A = R, comparing the packed encodings
        // in constant time.
        let minus_A = -A;
        let R = EdwardsPoint::vartime_double_scalar_mul_basepoint(&k, &minus_A, &s);

        R.compress()
            .as_bytes()
            .ct_eq(signature.R.as_bytes())
            .into()
    }

    /// Add another public key to this one as curve points.
    ///
    /// This is useful during child key derivation when the keys are
    /// part of BIP32-style wallets.  Note that the high bit of the
    /// repacked result's last byte is flipped; this matches the wire
    /// behaviour expected by BIP32-Ed25519 consumers and is *not* the
    /// RFC 8032 point encoding.
    ///
    /// # Returns
    ///
    /// `Err(Error::InvalidCompressedPoint)` if either key is not a
    /// curve point.
    pub fn point_add(&self, rhs: &PublicKey) -> Result<PublicKey> {
        let lhs_point = self.0.decompress().ok_or(Error::InvalidCompressedPoint)?;
        let rhs_point = rhs.0.decompress().ok_or(Error::InvalidCompressedPoint)?;

        let mut sum = (&lhs_point + &rhs_point).compress().to_bytes();
        sum[31] ^= 0x80;

        Ok(PublicKey(CompressedEdwardsY(sum)))
    }
}

#[cfg(feature = "serde")]
impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for PublicKey {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct PublicKeyVisitor;

        impl<'d> Visitor<'d> for PublicKeyVisitor {
            type Value = PublicKey;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("An ed25519 public key as 32 bytes.")
            }

            fn visit_bytes<E>(self, bytes: &[u8]) -> core::result::Result<PublicKey, E>
            where
                E: SerdeError,
            {
                PublicKey::from_bytes(bytes)
                    .or(Err(SerdeError::invalid_length(bytes.len(), &self)))
            }
        }
        deserializer.deserialize_bytes(PublicKeyVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::signing::PrivateKey;

    #[test]
    fn verify_rejects_wrong_message() {
        let key = PrivateKey::from_bytes(&[0x42u8; 32]).unwrap();
        let pk = key.public_key();
        let sig = key.sign(b"test message");
        assert!(pk.verify(b"test message", &sig));
        assert!(!pk.verify(b"wrong message", &sig));
    }

    #[test]
    fn verify_rejects_undecompressible_key() {
        // y = 2 is not on the curve.
        let mut bad = [0u8; 32];
        bad[0] = 2;
        let pk = PublicKey::from_bytes(&bad).unwrap();
        let key = PrivateKey::from_bytes(&[0x42u8; 32]).unwrap();
        let sig = key.sign(b"msg");
        assert!(!pk.verify(b"msg", &sig));
    }

    #[test]
    fn point_add_rejects_bad_point() {
        let mut bad = [0u8; 32];
        bad[0] = 2;
        let bad_pk = PublicKey::from_bytes(&bad).unwrap();
        let good_pk = PrivateKey::from_bytes(&[0x42u8; 32]).unwrap().public_key();
        assert!(matches!(
            good_pk.point_add(&bad_pk),
            Err(Error::InvalidCompressedPoint)
        ));
    }
}
