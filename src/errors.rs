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

//! Errors which may occur when parsing keys and/or signatures to or
//! from wire formats, or when evolving key-evolving-signature keys.

use thiserror::Error;

/// Errors which may occur while processing keys, signatures, and KES
/// state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A byte buffer of the wrong size was handed to a constructor.
    #[error("{name} must be {expected} bytes in length, got {actual}")]
    InvalidKeyLength {
        /// The name of the type which is returning the error.
        name: &'static str,
        /// The length in bytes which its constructor expects.
        expected: usize,
        /// The length which was actually supplied.
        actual: usize,
    },

    /// An extended private key violated its structural bit
    /// requirements.
    #[error("extended key bits are not valid")]
    InvalidKey,

    /// A signature had the wrong length, or its scalar half was not
    /// canonically encoded.
    #[error("signature is structurally invalid")]
    InvalidSignature,

    /// A compressed point was not the encoding of a curve point.
    #[error("cannot decompress Edwards point")]
    InvalidCompressedPoint,

    /// The hash of a KES signature's public-key pair did not match the
    /// verification key.
    #[error("KES public key does not match the signature's key pair")]
    PublicKeyMismatch,

    /// A KES key was asked to evolve past its final period.
    #[error("KES key has no periods left")]
    KeyExhausted,

    /// The retry ceiling was reached while rejection-sampling a seed.
    #[error("random number generator failed to produce a valid seed")]
    RngExhausted,

    /// A random number generator reported failure.
    #[error("random number generator failure")]
    RandomSource,

    /// A KES depth outside the supported range was requested.
    #[error("KES depth {0} is outside the supported range 0..=7")]
    InvalidDepth(u32),
}

/// A `Result` alias where the `Err` case is this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
