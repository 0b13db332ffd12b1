//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, hex, constant-time compare)
//! - Credential hashing (salted digest format, embedded salt)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
