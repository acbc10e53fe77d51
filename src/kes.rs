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

//! Key evolving signatures over ed25519, using the binary sum
//! composition of ["Composition and Efficiency Tradeoffs for
//! Forward-Secure Digital Signatures"](https://eprint.iacr.org/2001/034)
//! by Malkin, Micciancio and Miner, nested up to a 7-level-deep
//! binary tree.
//!
//! A key of depth \\(D\\) is conceptually the root of a complete
//! binary tree whose \\(2\^D\\) leaves are ordinary ed25519 keys, one
//! per signing *period*.  Only the path to the currently active leaf
//! is materialised: at each level the key stores the active subtree,
//! the seed needed to rebuild the other subtree when the period
//! crosses that level's midpoint, and the two children's public keys.
//! Advancing the period wipes every secret belonging to the past, so
//! a compromised present key cannot forge signatures for earlier
//! periods.
//!
//! The verification key at every level is the BLAKE2b-256 hash of the
//! two child verification keys, so it is 32 bytes at any depth and
//! never changes across updates.
//!
//! ```
//! use ed25519_kes::kes::{KesDepth, SumKesPrivateKey};
//!
//! let mut seed = [0u8; 32];
//! let (mut key, public) =
//!     SumKesPrivateKey::keygen(KesDepth::new(2).unwrap(), &mut seed).unwrap();
//!
//! let sigma = key.sign(b"message");
//! assert!(sigma.verify(0, &public, b"message").is_ok());
//!
//! key.update().unwrap();
//! assert_eq!(key.period(), 1);
//! ```

use core::fmt::Debug;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::errors::{Error, Result};
use crate::secret::{SecureBuffer, SecureBytes};
use crate::signature::Signature;
use crate::signing::PrivateKey;
use crate::verifying::PublicKey;
use crate::SIGNATURE_LENGTH;

/// BLAKE2b with 256-bit output, the hash of the sum composition.
type Blake2b256 = Blake2b<U32>;

/// Size of the seed consumed by key generation, and of the per-level
/// seed stored for the half-period rebuild.
pub const SEED_SIZE: usize = 32;

/// Size of a compact KES public key at any depth.
pub const KES_PUBLIC_KEY_SIZE: usize = 32;

/// Size of the big-endian period counter appended to a serialised
/// key.
const PERIOD_SIZE: usize = 4;

/// The depth of a sum-composition binary tree, between 0 and 7.
///
/// A key of depth \\(D\\) can sign for \\(2\^D\\) periods.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KesDepth(u32);

impl KesDepth {
    /// The deepest supported tree.
    pub const MAX: KesDepth = KesDepth(7);

    /// Construct a validated depth.
    pub fn new(value: u32) -> Result<KesDepth> {
        if value > KesDepth::MAX.0 {
            return Err(Error::InvalidDepth(value));
        }
        Ok(KesDepth(value))
    }

    /// The raw depth value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The total number of periods (signatures) a key of this depth
    /// supports: \\(2\^D\\).
    pub fn total(&self) -> u32 {
        1u32 << self.0
    }

    /// Half the total number of periods.  Meaningless at depth 0.
    fn half(&self) -> u32 {
        debug_assert!(self.0 > 0);
        1u32 << (self.0 - 1)
    }

    /// The depth of this tree's subtrees.  Meaningless at depth 0.
    fn decr(&self) -> KesDepth {
        debug_assert!(self.0 > 0);
        KesDepth(self.0 - 1)
    }

    /// Size in bytes of a secret key of this depth, excluding the
    /// period tail: `32 + D*(32 + 2*32)`.
    pub fn key_size(&self) -> usize {
        SEED_SIZE + (self.0 as usize) * (SEED_SIZE + 2 * KES_PUBLIC_KEY_SIZE)
    }

    /// Size in bytes of a signature of this depth: `64 + D*64`.
    pub fn signature_size(&self) -> usize {
        SIGNATURE_LENGTH + (self.0 as usize) * 2 * KES_PUBLIC_KEY_SIZE
    }
}

/// Seed handling for key generation.
pub struct KesSeed;

impl KesSeed {
    /// Byte representation size of a `KesSeed`.
    pub const SIZE: usize = SEED_SIZE;

    /// Split a seed into two independent child seeds,
    /// `r0 = BLAKE2b-256(0x01 ‖ seed)` and
    /// `r1 = BLAKE2b-256(0x02 ‖ seed)`, overwriting the input with
    /// zeroes before returning.
    pub fn split(seed: &mut [u8; SEED_SIZE]) -> (SecureBytes<SEED_SIZE>, SecureBytes<SEED_SIZE>) {
        let mut left = SecureBytes::<SEED_SIZE>::zeroed();
        let mut right = SecureBytes::<SEED_SIZE>::zeroed();

        let mut hasher = Blake2b256::new();
        hasher.update([1u8]);
        hasher.update(&seed[..]);
        left.copy_from_slice(hasher.finalize().as_slice());

        let mut hasher = Blake2b256::new();
        hasher.update([2u8]);
        hasher.update(&seed[..]);
        right.copy_from_slice(hasher.finalize().as_slice());

        seed.zeroize();

        (left, right)
    }
}

/// A compact KES verification key: the leaf's ed25519 public key at
/// depth 0, or the BLAKE2b-256 hash of the two child verification
/// keys at any other depth.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SumKesPublicKey(pub(crate) [u8; KES_PUBLIC_KEY_SIZE]);

impl SumKesPublicKey {
    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KES_PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Copy this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; KES_PUBLIC_KEY_SIZE] {
        self.0
    }

    /// Construct a `SumKesPublicKey` from a slice of bytes.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<SumKesPublicKey> {
        if bytes.len() != KES_PUBLIC_KEY_SIZE {
            return Err(Error::InvalidKeyLength {
                name: "SumKesPublicKey",
                expected: KES_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut pk = [0u8; KES_PUBLIC_KEY_SIZE];
        pk.copy_from_slice(bytes);
        Ok(SumKesPublicKey(pk))
    }

    /// Hash two sibling public keys into their parent's public key.
    pub fn hash_pair(&self, other: &SumKesPublicKey) -> SumKesPublicKey {
        let mut hasher = Blake2b256::new();
        hasher.update(self.as_bytes());
        hasher.update(other.as_bytes());
        let mut out = [0u8; KES_PUBLIC_KEY_SIZE];
        out.copy_from_slice(hasher.finalize().as_slice());
        SumKesPublicKey(out)
    }
}

/// A sum-composition KES secret key.
///
/// The serialised layout at depth \\(d > 0\\) is
/// `(child_{d-1} ‖ seed ‖ pk_left ‖ pk_right)` where `child_{d-1}` is
/// the currently active subtree; at depth 0 the payload is a 32-byte
/// ed25519 seed.  A 4-byte big-endian period counter is appended at
/// the outermost layer only.
///
/// The whole buffer lives in locked memory and is wiped on drop.
pub struct SumKesPrivateKey {
    depth: KesDepth,
    prv: SecureBuffer,
}

impl Debug for SumKesPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "SumKesPrivateKey(depth: {}, period: {})",
            self.depth.value(),
            self.period()
        )
    }
}

impl SumKesPrivateKey {
    /// The tree depth of this key.
    pub fn depth(&self) -> KesDepth {
        self.depth
    }

    /// View the serialised key, including the period tail.
    pub fn as_bytes(&self) -> &[u8] {
        &self.prv
    }

    /// Generate a key of the given depth from a 32-byte seed,
    /// returning the key at period 0 together with its public key.
    ///
    /// The seed is consumed: it is overwritten with zeroes before this
    /// function returns.
    pub fn keygen(
        depth: KesDepth,
        seed: &mut [u8; SEED_SIZE],
    ) -> Result<(SumKesPrivateKey, SumKesPublicKey)> {
        let mut prv = SecureBuffer::zeroed(depth.key_size() + PERIOD_SIZE);

        let key_size = depth.key_size();
        let public = keygen_buffer(&mut prv[..key_size], seed, depth);

        // Period 0 at the outermost layer.
        prv[key_size..].copy_from_slice(&0u32.to_be_bytes());

        Ok((SumKesPrivateKey { depth, prv }, public))
    }

    /// Generate a fresh key of the given depth from a
    /// cryptographically secure random number generator.
    pub fn generate<T>(
        depth: KesDepth,
        csprng: &mut T,
    ) -> Result<(SumKesPrivateKey, SumKesPublicKey)>
    where
        T: CryptoRng + RngCore,
    {
        // Draw the seed through the ed25519 rejection sampler so that
        // the leaf reached at period 0 is a valid signing key for
        // RFC 8032 implementations as well.
        let seed_key = PrivateKey::generate(csprng)?;
        let mut seed = [0u8; SEED_SIZE];
        seed.copy_from_slice(seed_key.as_bytes());

        SumKesPrivateKey::keygen(depth, &mut seed)
    }

    /// Reconstruct a key of the given depth from its serialised form.
    ///
    /// Accepts the layout with or without the 4-byte period tail; a
    /// missing tail means period 0.  The caller remains responsible
    /// for wiping the input slice.
    pub fn from_bytes(depth: KesDepth, bytes: &[u8]) -> Result<SumKesPrivateKey> {
        let key_size = depth.key_size();
        if bytes.len() != key_size && bytes.len() != key_size + PERIOD_SIZE {
            return Err(Error::InvalidKeyLength {
                name: "SumKesPrivateKey",
                expected: key_size + PERIOD_SIZE,
                actual: bytes.len(),
            });
        }

        let mut prv = SecureBuffer::zeroed(key_size + PERIOD_SIZE);
        prv[..bytes.len()].copy_from_slice(bytes);

        Ok(SumKesPrivateKey { depth, prv })
    }

    /// The current signing period.
    pub fn period(&self) -> u32 {
        let key_size = self.depth.key_size();
        let mut tail = [0u8; PERIOD_SIZE];
        tail.copy_from_slice(&self.prv[key_size..]);
        u32::from_be_bytes(tail)
    }

    /// Evolve the key into the next period.
    ///
    /// All secret material belonging to the current period is
    /// overwritten with zeroes before this function returns, so the
    /// evolved key cannot be rolled back.
    ///
    /// # Returns
    ///
    /// `Err(Error::KeyExhausted)` once all \\(2\^D\\) periods have
    /// been used.
    pub fn update(&mut self) -> Result<()> {
        let period = self.period();
        let key_size = self.depth.key_size();

        update_buffer(&mut self.prv[..key_size], self.depth, period)?;

        let next = period + 1;
        self.prv[key_size..].copy_from_slice(&next.to_be_bytes());
        Ok(())
    }

    /// Generate a signature for the current period.
    pub fn sign(&self, message: &[u8]) -> KesSignature {
        let mut sigma = vec![0u8; self.depth.signature_size()];
        sign_buffer(&self.prv[..self.depth.key_size()], self.depth, message, &mut sigma);
        KesSignature {
            depth: self.depth,
            sigma,
        }
    }

    /// Recompute the public key of this tree.  It is invariant across
    /// updates.
    pub fn public_key(&self) -> SumKesPublicKey {
        if self.depth.value() == 0 {
            let leaf = PrivateKey(SecureBytes::new(seed_array(&self.prv[..SEED_SIZE])));
            return SumKesPublicKey(leaf.public_key().to_bytes());
        }

        let child_size = self.depth.decr().key_size();
        let pk_l = read_pk(&self.prv, child_size + SEED_SIZE);
        let pk_r = read_pk(&self.prv, child_size + SEED_SIZE + KES_PUBLIC_KEY_SIZE);
        pk_l.hash_pair(&pk_r)
    }

    /// Overwrite the entire key, period tail included, with zeroes.
    pub fn wipe(&mut self) {
        self.prv.wipe();
    }
}

/// Copy a 32-byte slice into a seed array.
fn seed_array(slice: &[u8]) -> [u8; SEED_SIZE] {
    let mut seed = [0u8; SEED_SIZE];
    seed.copy_from_slice(slice);
    seed
}

/// Read a compact public key stored at `offset`.
fn read_pk(buffer: &[u8], offset: usize) -> SumKesPublicKey {
    let mut pk = [0u8; KES_PUBLIC_KEY_SIZE];
    pk.copy_from_slice(&buffer[offset..offset + KES_PUBLIC_KEY_SIZE]);
    SumKesPublicKey(pk)
}

/// Recursively build a key of the given depth in place, consuming
/// (and zeroising) the seed.  Returns the compact public key.
fn keygen_buffer(
    buffer: &mut [u8],
    seed: &mut [u8; SEED_SIZE],
    depth: KesDepth,
) -> SumKesPublicKey {
    debug_assert_eq!(buffer.len(), depth.key_size());

    if depth.value() == 0 {
        buffer[..SEED_SIZE].copy_from_slice(&seed[..]);
        let leaf = PrivateKey(SecureBytes::new(*seed));
        seed.zeroize();
        return SumKesPublicKey(leaf.public_key().to_bytes());
    }

    let child_size = depth.decr().key_size();
    let (mut r0, mut r1) = KesSeed::split(seed);

    // Store the right subtree's seed; it is needed to rebuild that
    // subtree when the period crosses this level's midpoint.
    buffer[child_size..child_size + SEED_SIZE].copy_from_slice(&r1[..]);

    // Build the left (active) subtree in place ...
    let pk_l = keygen_buffer(&mut buffer[..child_size], &mut r0, depth.decr());

    // ... and the right subtree in a throwaway locked buffer, keeping
    // only its public key.
    let mut scratch = SecureBuffer::zeroed(child_size);
    let pk_r = keygen_buffer(&mut scratch, &mut r1, depth.decr());
    drop(scratch);

    buffer[child_size + SEED_SIZE..child_size + SEED_SIZE + KES_PUBLIC_KEY_SIZE]
        .copy_from_slice(pk_l.as_bytes());
    buffer[child_size + SEED_SIZE + KES_PUBLIC_KEY_SIZE..child_size + SEED_SIZE + 2 * KES_PUBLIC_KEY_SIZE]
        .copy_from_slice(pk_r.as_bytes());

    pk_l.hash_pair(&pk_r)
}

/// Recursively advance the key in `buffer` from `period` to
/// `period + 1`, wiping obsolete secrets.
fn update_buffer(buffer: &mut [u8], depth: KesDepth, period: u32) -> Result<()> {
    if depth.value() == 0 {
        // A leaf has a single period; it cannot evolve.
        return Err(Error::KeyExhausted);
    }

    let next = period + 1;
    if next == depth.total() {
        return Err(Error::KeyExhausted);
    }

    let half = depth.half();
    let child_size = depth.decr().key_size();

    if next < half {
        // Still inside the left subtree.
        update_buffer(&mut buffer[..child_size], depth.decr(), period)
    } else if next == half {
        // Crossing the midpoint: the left subtree is spent.  Wipe it
        // and the stored seed, then rebuild the right subtree in its
        // place from that seed.
        let mut seed = seed_array(&buffer[child_size..child_size + SEED_SIZE]);
        buffer[..child_size + SEED_SIZE].zeroize();
        keygen_buffer(&mut buffer[..child_size], &mut seed, depth.decr());
        Ok(())
    } else {
        // Inside the right subtree; its own period count restarts at
        // the midpoint.
        update_buffer(&mut buffer[..child_size], depth.decr(), period - half)
    }
}

/// Recursively sign: the leaf signature followed by each level's
/// public-key pair, innermost first.
fn sign_buffer(buffer: &[u8], depth: KesDepth, message: &[u8], sigma: &mut [u8]) {
    if depth.value() == 0 {
        let leaf = PrivateKey(SecureBytes::new(seed_array(&buffer[..SEED_SIZE])));
        sigma[..SIGNATURE_LENGTH].copy_from_slice(&leaf.sign(message).to_bytes());
        return;
    }

    let child_size = depth.decr().key_size();
    let split = sigma.len() - 2 * KES_PUBLIC_KEY_SIZE;

    sign_buffer(&buffer[..child_size], depth.decr(), message, &mut sigma[..split]);
    sigma[split..].copy_from_slice(
        &buffer[child_size + SEED_SIZE..child_size + SEED_SIZE + 2 * KES_PUBLIC_KEY_SIZE],
    );
}

/// A sum-composition KES signature: an ed25519 leaf signature
/// followed by one public-key pair per tree level.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KesSignature {
    depth: KesDepth,
    sigma: Vec<u8>,
}

impl KesSignature {
    /// The tree depth this signature was produced at.
    pub fn depth(&self) -> KesDepth {
        self.depth
    }

    /// View the serialised signature.
    pub fn as_bytes(&self) -> &[u8] {
        &self.sigma
    }

    /// Construct a `KesSignature` of the given depth from bytes.
    pub fn from_bytes(depth: KesDepth, bytes: &[u8]) -> Result<KesSignature> {
        if bytes.len() != depth.signature_size() {
            return Err(Error::InvalidSignature);
        }
        Ok(KesSignature {
            depth,
            sigma: bytes.to_vec(),
        })
    }

    /// Verify this signature against a public key for the given
    /// period.
    ///
    /// # Returns
    ///
    /// `Err(Error::PublicKeyMismatch)` if a level's public-key pair
    /// does not hash to its parent's key, and
    /// `Err(Error::InvalidSignature)` if the period is out of range or
    /// the leaf signature does not verify.
    pub fn verify(&self, period: u32, public: &SumKesPublicKey, message: &[u8]) -> Result<()> {
        if period >= self.depth.total() {
            return Err(Error::InvalidSignature);
        }
        verify_slice(&self.sigma, self.depth, period, public, message)
    }
}

fn verify_slice(
    sigma: &[u8],
    depth: KesDepth,
    period: u32,
    public: &SumKesPublicKey,
    message: &[u8],
) -> Result<()> {
    if depth.value() == 0 {
        let signature = Signature::from_bytes(sigma)?;
        let leaf_pk = PublicKey::from_bytes(public.as_bytes())?;
        if leaf_pk.verify(message, &signature) {
            return Ok(());
        }
        return Err(Error::InvalidSignature);
    }

    let split = sigma.len() - 2 * KES_PUBLIC_KEY_SIZE;
    let pk_l = read_pk(sigma, split);
    let pk_r = read_pk(sigma, split + KES_PUBLIC_KEY_SIZE);

    if pk_l.hash_pair(&pk_r) != *public {
        return Err(Error::PublicKeyMismatch);
    }

    let half = depth.half();
    if period < half {
        verify_slice(&sigma[..split], depth.decr(), period, &pk_l, message)
    } else {
        verify_slice(&sigma[..split], depth.decr(), period - half, &pk_r, message)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn depth_sizes() {
        let d0 = KesDepth::new(0).unwrap();
        let d1 = KesDepth::new(1).unwrap();
        let d7 = KesDepth::new(7).unwrap();
        assert_eq!(d0.key_size(), 32);
        assert_eq!(d0.signature_size(), 64);
        assert_eq!(d0.total(), 1);
        assert_eq!(d1.key_size(), 128);
        assert_eq!(d1.signature_size(), 128);
        assert_eq!(d7.key_size(), 704);
        assert_eq!(d7.signature_size(), 512);
        assert_eq!(d7.total(), 128);
    }

    #[test]
    fn depth_bounds() {
        assert!(KesDepth::new(7).is_ok());
        assert!(matches!(KesDepth::new(8), Err(Error::InvalidDepth(8))));
    }

    #[test]
    fn seed_split_vectors() {
        let mut seed = [0u8; 32];
        let (r0, r1) = KesSeed::split(&mut seed);
        assert_eq!(
            &r0[..],
            hex!("428b4cef4d1d1818057377c3f146d8deffeded0fed29782949bdee749a75b5ec")
        );
        assert_eq!(
            &r1[..],
            hex!("0fd7e5ff8e984fdcdbb057a78cc79a69e36e86e046881cc43163611830a79c04")
        );
        // The input seed is consumed.
        assert_eq!(seed, [0u8; 32]);
    }

    #[test]
    fn seed_split_scrubs_input() {
        let mut seed = [0xaau8; 32];
        let _ = KesSeed::split(&mut seed);
        assert_eq!(seed, [0u8; 32]);
    }

    #[test]
    fn depth_zero_roundtrip() {
        let mut seed = [7u8; 32];
        let (key, public) =
            SumKesPrivateKey::keygen(KesDepth::new(0).unwrap(), &mut seed).unwrap();
        assert_eq!(key.period(), 0);
        assert_eq!(key.public_key(), public);

        let sigma = key.sign(b"hello");
        assert!(sigma.verify(0, &public, b"hello").is_ok());
    }

    #[test]
    fn depth_zero_never_updates() {
        let mut seed = [7u8; 32];
        let (mut key, _) = SumKesPrivateKey::keygen(KesDepth::new(0).unwrap(), &mut seed).unwrap();
        assert!(matches!(key.update(), Err(Error::KeyExhausted)));
    }

    /// Known-answer: depth-1 key from the all-zero seed.
    #[test]
    fn depth_one_zero_seed_vectors() {
        let mut seed = [0u8; 32];
        let (key, public) =
            SumKesPrivateKey::keygen(KesDepth::new(1).unwrap(), &mut seed).unwrap();

        assert_eq!(
            public.to_bytes(),
            hex!("a011a302c1d25246488ddc5926d0a9b5a0201d62c687e36d808262826a6f495d")
        );

        let sigma = key.sign(b"tilin");
        assert_eq!(
            sigma.as_bytes(),
            hex!(
                "e6d3428663011ebdcc77a5a01c95b5984ecb985dc5a7b6c29c1c9291e888febc"
                "49dd61cfc0b5ff31359a504397a1842f18fd27e73e2aea4f4dc82748dea48008"
                "00339fcb53727593867ba3137c2e83f6c9361bcfeb9561cf3852d04cbdbb85cb"
                "1a965fef0b4b45cb0ff149d4e889a6240cb099582ccb76184396b92e388eb76f"
            )
        );
        assert!(sigma.verify(0, &public, b"tilin").is_ok());
    }

    /// Known-answer: the same key after one update.
    #[test]
    fn depth_one_zero_seed_update_vectors() {
        let mut seed = [0u8; 32];
        let (mut key, public) =
            SumKesPrivateKey::keygen(KesDepth::new(1).unwrap(), &mut seed).unwrap();

        key.update().unwrap();
        assert_eq!(key.period(), 1);
        assert_eq!(key.public_key(), public);

        let sigma = key.sign(b"tilin");
        assert_eq!(
            sigma.as_bytes(),
            hex!(
                "937d42b1e3929606500b01ebf9397b7be0c8f17d08c685bddeb020f24c46a4f0"
                "d151690a8fd692a940e3b53c0bd512573bae417f02e29e2cf198f264b6d83108"
                "00339fcb53727593867ba3137c2e83f6c9361bcfeb9561cf3852d04cbdbb85cb"
                "1a965fef0b4b45cb0ff149d4e889a6240cb099582ccb76184396b92e388eb76f"
            )
        );
        assert!(sigma.verify(1, &public, b"tilin").is_ok());

        // One period per leaf: a second update is exhaustion.
        assert!(matches!(key.update(), Err(Error::KeyExhausted)));
    }

    #[test]
    fn serialised_roundtrip_preserves_period() {
        let mut seed = [3u8; 32];
        let (mut key, public) =
            SumKesPrivateKey::keygen(KesDepth::new(2).unwrap(), &mut seed).unwrap();
        key.update().unwrap();
        key.update().unwrap();

        let restored =
            SumKesPrivateKey::from_bytes(KesDepth::new(2).unwrap(), key.as_bytes()).unwrap();
        assert_eq!(restored.period(), 2);
        assert_eq!(restored.public_key(), public);

        let sigma = restored.sign(b"resumed");
        assert!(sigma.verify(2, &public, b"resumed").is_ok());
    }

    #[test]
    fn wipe_clears_everything() {
        let mut seed = [9u8; 32];
        let (mut key, _) = SumKesPrivateKey::keygen(KesDepth::new(1).unwrap(), &mut seed).unwrap();
        key.wipe();
        assert!(key.as_bytes().iter().all(|&b| b == 0));
    }
}
