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

//! ed25519 secret key types, including the extended 64-byte form used
//! by BIP32-Ed25519 hierarchical wallets.

use core::fmt::Debug;

use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use crate::edwards::EdwardsPoint;
use crate::errors::{Error, Result};
use crate::scalar::Scalar;
use crate::secret::SecureBytes;
use crate::signature::Signature;
use crate::verifying::PublicKey;
use crate::{EXTENDED_SECRET_KEY_LENGTH, SECRET_KEY_LENGTH};

/// The maximum number of draws `PrivateKey::generate` makes before
/// concluding the random source is broken.
const GENERATE_RETRY_LIMIT: usize = 10_000;

/// An EdDSA secret key seed.
///
/// The seed is stored in a locked buffer and is automatically
/// overwritten with zeroes when it falls out of scope.
pub struct PrivateKey(pub(crate) SecureBytes<SECRET_KEY_LENGTH>);

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PrivateKey({:?})", self.0)
    }
}

impl Clone for PrivateKey {
    fn clone(&self) -> PrivateKey {
        PrivateKey(self.0.clone())
    }
}

impl PrivateKey {
    /// View this secret key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.0
    }

    /// Construct a `PrivateKey` from a slice of bytes.
    ///
    /// No validity policy is imposed on the seed here; a seed whose
    /// hash has bit 5 of byte 31 set is accepted, and callers that
    /// care can consult [`PrivateKey::is_valid`].  The caller remains
    /// responsible for wiping the input slice.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<PrivateKey> {
        if bytes.len() != SECRET_KEY_LENGTH {
            return Err(Error::InvalidKeyLength {
                name: "PrivateKey",
                expected: SECRET_KEY_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut bits: [u8; 32] = [0u8; 32];
        bits.copy_from_slice(bytes);

        let key = PrivateKey(SecureBytes::new(bits));
        bits.zeroize();
        Ok(key)
    }

    /// Generate a `PrivateKey` from a `csprng`.
    ///
    /// Seeds are rejection-sampled until `SHA-512(seed)` has bit 5 of
    /// byte 31 clear, so that the clamp in [`PrivateKey::extend`] is
    /// already satisfied and the key signs identically under RFC 8032
    /// implementations.  The expected number of draws is two; the
    /// retry ceiling exists only to turn a broken random source into
    /// an error instead of a hang.
    pub fn generate<T>(csprng: &mut T) -> Result<PrivateKey>
    where
        T: CryptoRng + RngCore,
    {
        let mut seed = SecureBytes::<SECRET_KEY_LENGTH>::zeroed();

        for _ in 0..GENERATE_RETRY_LIMIT {
            csprng
                .try_fill_bytes(&mut seed[..])
                .map_err(|_| Error::RandomSource)?;

            let keyhash = Sha512::digest(&seed[..]);
            if keyhash[31] & 0b0010_0000 == 0 {
                return Ok(PrivateKey(seed));
            }
        }

        Err(Error::RngExhausted)
    }

    /// Check key validity: the seed hash must already satisfy the
    /// clamp's clear of bit 5 of byte 31.
    pub fn is_valid(&self) -> bool {
        let keyhash = Sha512::digest(&self.0[..]);
        keyhash[31] & 0b0010_0000 == 0
    }

    /// Extend this key for inclusion in a BIP32-Ed25519 wallet.
    ///
    /// The seed is hashed with SHA-512 and the clamp is applied to the
    /// scalar half:
    ///
    /// * clear the lowest 3 bits of byte 0;
    /// * clear the highest 3 bits of byte 31;
    /// * set the second-highest bit of byte 31.
    pub fn extend(&self) -> ExtendedPrivateKey {
        let mut keyhash: [u8; 64] = [0u8; 64];
        keyhash.copy_from_slice(Sha512::digest(&self.0[..]).as_slice());

        keyhash[0] &= 0b1111_1000;
        keyhash[31] &= 0b0001_1111;
        keyhash[31] |= 0b0100_0000;
        // Seeds whose hash has bit 5 of byte 31 set are accepted and
        // have that bit cleared here; `generate` rejection-samples so
        // its keys never hit this case.

        let extended = ExtendedPrivateKey(SecureBytes::new(keyhash));
        keyhash.zeroize();
        extended
    }

    /// Derive the public key paired with this private key.
    pub fn public_key(&self) -> PublicKey {
        self.extend().public_key()
    }

    /// Generate a message signature from this private key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.extend().sign(message)
    }
}

/// An "extended" EdDSA secret key, as used by BIP32-Ed25519: 64 bytes
/// `(k_L ‖ k_R)` where `k_L` is the clamped signing scalar and `k_R`
/// is 32 bytes of hash chaining material.
///
/// The key is stored in a locked buffer and is automatically
/// overwritten with zeroes when it falls out of scope.
pub struct ExtendedPrivateKey(pub(crate) SecureBytes<EXTENDED_SECRET_KEY_LENGTH>);

impl Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ExtendedPrivateKey({:?})", self.0)
    }
}

impl Clone for ExtendedPrivateKey {
    fn clone(&self) -> ExtendedPrivateKey {
        ExtendedPrivateKey(self.0.clone())
    }
}

impl ExtendedPrivateKey {
    /// View this secret key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; EXTENDED_SECRET_KEY_LENGTH] {
        &self.0
    }

    /// Construct an `ExtendedPrivateKey` from a slice of bytes.
    ///
    /// # Returns
    ///
    /// `Err(Error::InvalidKeyLength)` on a size mismatch, and
    /// `Err(Error::InvalidKey)` if bit 5 of byte 31 is set (such a
    /// value cannot have been produced by the clamp).  The caller
    /// remains responsible for wiping the input slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<ExtendedPrivateKey> {
        if bytes.len() != EXTENDED_SECRET_KEY_LENGTH {
            return Err(Error::InvalidKeyLength {
                name: "ExtendedPrivateKey",
                expected: EXTENDED_SECRET_KEY_LENGTH,
                actual: bytes.len(),
            });
        }
        if bytes[31] & 0b0010_0000 != 0 {
            return Err(Error::InvalidKey);
        }
        let mut bits: [u8; 64] = [0u8; 64];
        bits.copy_from_slice(bytes);

        let key = ExtendedPrivateKey(SecureBytes::new(bits));
        bits.zeroize();
        Ok(key)
    }

    /// Generate an `ExtendedPrivateKey` from a `csprng`, by extending
    /// a freshly generated seed key.
    pub fn generate<T>(csprng: &mut T) -> Result<ExtendedPrivateKey>
    where
        T: CryptoRng + RngCore,
    {
        Ok(PrivateKey::generate(csprng)?.extend())
    }

    /// Check key validity: the clamp bits of the scalar half must all
    /// hold.
    pub fn is_valid(&self) -> bool {
        (self.0[0] & 0b0000_0111 == 0)
            && (self.0[31] & 0b0010_0000 == 0)
            && (self.0[31] & 0b1000_0000 == 0)
            && (self.0[31] & 0b0100_0000 == 0b0100_0000)
    }

    /// The scalar half `k_L` of this key, reduced mod \\( \ell \\).
    fn scalar(&self) -> Scalar {
        let mut lower: [u8; 32] = [0u8; 32];
        lower.copy_from_slice(&self.0[..32]);
        let a = Scalar::from_bytes_mod_order(&lower);
        lower.zeroize();
        a
    }

    /// Derive the public key paired with this private key: the
    /// compressed basepoint multiple \\( [k_L]B \\).
    pub fn public_key(&self) -> PublicKey {
        let A = EdwardsPoint::mul_base(&self.scalar());
        PublicKey(A.compress())
    }

    /// Generate a message signature from this private key.
    #[allow(non_snake_case)]
    pub fn sign(&self, message: &[u8]) -> Signature {
        let A = self.public_key();

        // r = H(k_R ‖ msg)
        let mut h = Sha512::new();
        h.update(&self.0[32..]);
        h.update(message);
        let mut hash: [u8; 64] = [0u8; 64];
        hash.copy_from_slice(h.finalize().as_slice());
        let r = Scalar::from_bytes_mod_order_wide(&hash);

        // R = [r]B
        let R = EdwardsPoint::mul_base(&r).compress();

        // k = H(R ‖ A ‖ msg)
        let mut h = Sha512::new();
        h.update(R.as_bytes());
        h.update(A.as_bytes());
        h.update(message);
        let mut hash: [u8; 64] = [0u8; 64];
        hash.copy_from_slice(h.finalize().as_slice());
        let k = Scalar::from_bytes_mod_order_wide(&hash);

        // s = r + k * k_L  (mod l)
        let mut a = self.scalar();
        let s = &(&k * &a) + &r;
        a.zeroize();

        Signature { R, s: s.to_bytes() }
    }

    /// Add the lower halves of two extended keys as scalars mod
    /// \\( \ell \\), returning the 32-byte sum.
    ///
    /// This is used during child key derivation in BIP32-style
    /// wallets.
    pub fn scalar_add_lower(&self, rhs: &ExtendedPrivateKey) -> [u8; 32] {
        (&self.scalar() + &rhs.scalar()).to_bytes()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_bytes_rejects_bad_lengths() {
        assert!(matches!(
            PrivateKey::from_bytes(&[0u8; 31]),
            Err(Error::InvalidKeyLength { .. })
        ));
        assert!(matches!(
            ExtendedPrivateKey::from_bytes(&[0u8; 65]),
            Err(Error::InvalidKeyLength { .. })
        ));
    }

    #[test]
    fn extended_from_bytes_rejects_unclamped_bit5() {
        let mut bytes = [0u8; 64];
        bytes[31] = 0b0110_0000;
        assert!(matches!(
            ExtendedPrivateKey::from_bytes(&bytes),
            Err(Error::InvalidKey)
        ));
    }

    #[test]
    fn extend_applies_clamp() {
        let seed = PrivateKey::from_bytes(&[0x42u8; 32]).unwrap();
        let extended = seed.extend();
        assert!(extended.is_valid());
        assert_eq!(extended.as_bytes()[0] & 0b0000_0111, 0);
        assert_eq!(extended.as_bytes()[31] & 0b1110_0000, 0b0100_0000);
    }

    #[test]
    fn generate_produces_valid_keys() {
        let mut csprng = rand::rngs::OsRng;
        let key = PrivateKey::generate(&mut csprng).unwrap();
        assert!(key.is_valid());
        assert!(key.extend().is_valid());
    }

    #[test]
    fn pubkey_from_seed_and_extended_agree() {
        let seed = PrivateKey::from_bytes(&[0x42u8; 32]).unwrap();
        assert_eq!(seed.public_key(), seed.extend().public_key());
    }
}
