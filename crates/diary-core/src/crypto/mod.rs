//! Cryptographic primitives for Diary.
//!
//! This module provides the at-rest protection used by the archive:
//! - **cipher**: repeating-key XOR keystream plus base64 text encoding
//! - **digest**: SHA-256 hashing, salt generation, and session key derivation
//!
//! Session keys come from [`derive_key`], which is deterministic so sealed
//! content reopens at the next login. [`derive_ephemeral_key`] is the legacy
//! randomized variant: keys from it are unrecoverable once dropped, which
//! suits scratch data but never persisted entries.
//!
//! ## Security Model
//!
//! - Passwords are stored only as salted SHA-256 digests
//! - Session keys are derived at login and zeroized on logout
//! - Entry content on disk is always keystream-transformed and base64 encoded
//!
//! ## Threat Model
//!
//! The keystream cipher is NOT confidential against an attacker holding the
//! entries file: repeating-key XOR falls to known-plaintext and frequency
//! analysis. It keeps casual readers from seeing journal text, nothing more.
//! Everything that touches content goes through `cipher::seal` and
//! `cipher::open`, so replacing the primitive is a change to one module.

pub mod cipher;
pub mod digest;

pub use cipher::{decode, encode, open, seal, transform};
pub use digest::{
    derive_ephemeral_key, derive_key, generate_salt, hash, hash_password, SessionKey, SALT_LENGTH,
};
