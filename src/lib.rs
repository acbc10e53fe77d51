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

//! ed25519 signatures over Curve25519 for blockchain-style key
//! management: the plain RFC 8032-compatible scheme, the extended
//! 64-byte keys of BIP32-Ed25519 hierarchical wallets, and a
//! forward-secure key evolving signature scheme (binary sum
//! composition) built on top of them.
//!
//! # Example
//!
//! ```
//! use ed25519_kes::{PrivateKey, Signature};
//!
//! let mut csprng = rand::rngs::OsRng;
//! let key = PrivateKey::generate(&mut csprng).unwrap();
//! let public = key.public_key();
//!
//! let signature: Signature = key.sign(b"attack at dawn");
//! assert!(public.verify(b"attack at dawn", &signature));
//! ```
//!
//! Key evolving signatures live in the [`kes`] module; the verifiable
//! random function key wrappers live in [`vrf`].
//!
//! # A note on the clamp
//!
//! The key expansion here follows the Cardano/BIP32-Ed25519 clamp,
//! which clears bit 5 of byte 31 of the hashed seed rather than
//! leaving it untouched.  `PrivateKey::generate` rejection-samples
//! seeds so that this never changes the signing scalar; seeds taken
//! from elsewhere can be screened with `PrivateKey::is_valid`.

#![warn(missing_docs)]
#![deny(unsafe_code)]

/// The length of an ed25519 secret key seed, in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// The length of an extended (BIP32-Ed25519) secret key, in bytes.
pub const EXTENDED_SECRET_KEY_LENGTH: usize = 64;

/// The length of an ed25519 public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// The length of an ed25519 signature, in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

pub mod constants;
pub mod edwards;
pub mod kes;
pub mod montgomery;
pub mod scalar;
pub mod traits;
pub mod vrf;

pub(crate) mod curve_models;
pub(crate) mod field;
pub(crate) mod window;

mod errors;
#[allow(unsafe_code)]
mod secret;
mod signature;
mod signing;
mod verifying;

pub use crate::errors::{Error, Result};
pub use crate::secret::{SecureBuffer, SecureBytes};
pub use crate::signature::Signature;
pub use crate::signing::{ExtendedPrivateKey, PrivateKey};
pub use crate::verifying::PublicKey;
