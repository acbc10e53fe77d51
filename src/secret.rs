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

//! Secret byte containers.
//!
//! Every secret in this crate lives in one of the two buffer types
//! defined here, which provide three lifetime guarantees:
//!
//! 1. on construction, the backing memory is locked against swapping
//!    (best effort; a failed lock loses residency, never wiping);
//! 2. on drop, the contents are overwritten with zeroes using stores
//!    the compiler is not permitted to elide;
//! 3. after wiping, the memory is unlocked again.
//!
//! Clones are fresh buffers with their own lock and their own wipe.

use core::fmt::Debug;
use core::ops::{Deref, DerefMut};

use zeroize::Zeroize;

/// Lock `len` bytes at `ptr` into physical memory.  Returns whether
/// the lock succeeded; failure is not fatal.
#[cfg(unix)]
fn lock_memory(ptr: *const u8, len: usize) -> bool {
    if len == 0 {
        return false;
    }
    unsafe { libc::mlock(ptr as *const libc::c_void, len) == 0 }
}

/// Unlock `len` bytes at `ptr`.
#[cfg(unix)]
fn unlock_memory(ptr: *const u8, len: usize) {
    unsafe {
        libc::munlock(ptr as *const libc::c_void, len);
    }
}

#[cfg(not(unix))]
fn lock_memory(_ptr: *const u8, _len: usize) -> bool {
    false
}

#[cfg(not(unix))]
fn unlock_memory(_ptr: *const u8, _len: usize) {}

/// A fixed-length secret byte array, wiped and unlocked at the end of
/// its life.
pub struct SecureBytes<const N: usize> {
    bytes: [u8; N],
    locked: bool,
}

impl<const N: usize> SecureBytes<N> {
    /// Construct from an existing array.
    ///
    /// The input array is copied; the caller remains responsible for
    /// wiping its own copy.
    pub fn new(bytes: [u8; N]) -> SecureBytes<N> {
        let mut buf = SecureBytes {
            bytes,
            locked: false,
        };
        buf.locked = lock_memory(buf.bytes.as_ptr(), N);
        buf
    }

    /// Construct an all-zero buffer.
    pub fn zeroed() -> SecureBytes<N> {
        SecureBytes::new([0u8; N])
    }

    /// Whether the backing pages are locked against swapping.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Overwrite the contents with zeroes now, without waiting for
    /// drop.
    pub fn wipe(&mut self) {
        self.bytes.zeroize();
    }
}

impl<const N: usize> Drop for SecureBytes<N> {
    fn drop(&mut self) {
        self.bytes.zeroize();
        if self.locked {
            unlock_memory(self.bytes.as_ptr(), N);
        }
    }
}

impl<const N: usize> Clone for SecureBytes<N> {
    fn clone(&self) -> SecureBytes<N> {
        SecureBytes::new(self.bytes)
    }
}

impl<const N: usize> Deref for SecureBytes<N> {
    type Target = [u8; N];
    fn deref(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<const N: usize> DerefMut for SecureBytes<N> {
    fn deref_mut(&mut self) -> &mut [u8; N] {
        &mut self.bytes
    }
}

impl<const N: usize> Debug for SecureBytes<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Never print the contents.
        write!(f, "SecureBytes<{}>([REDACTED])", N)
    }
}

/// A heap-allocated secret byte buffer whose length is chosen at
/// runtime, with the same lifecycle guarantees as [`SecureBytes`].
pub struct SecureBuffer {
    bytes: Box<[u8]>,
    locked: bool,
}

impl SecureBuffer {
    /// Construct an all-zero buffer of the given length.
    pub fn zeroed(len: usize) -> SecureBuffer {
        let mut buf = SecureBuffer {
            bytes: vec![0u8; len].into_boxed_slice(),
            locked: false,
        };
        buf.locked = lock_memory(buf.bytes.as_ptr(), len);
        buf
    }

    /// Construct by copying an existing slice.
    ///
    /// The input slice is copied; the caller remains responsible for
    /// wiping its own copy.
    pub fn from_slice(slice: &[u8]) -> SecureBuffer {
        let mut buf = SecureBuffer::zeroed(slice.len());
        buf.bytes.copy_from_slice(slice);
        buf
    }

    /// Whether the backing pages are locked against swapping.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Overwrite the contents with zeroes now, without waiting for
    /// drop.
    pub fn wipe(&mut self) {
        self.bytes.zeroize();
    }
}

impl Drop for SecureBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
        if self.locked {
            unlock_memory(self.bytes.as_ptr(), self.bytes.len());
        }
    }
}

impl Clone for SecureBuffer {
    fn clone(&self) -> SecureBuffer {
        SecureBuffer::from_slice(&self.bytes)
    }
}

impl Deref for SecureBuffer {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for SecureBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl Debug for SecureBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SecureBuffer({} bytes, [REDACTED])", self.bytes.len())
    }
}
