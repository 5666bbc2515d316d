//! Common library for the EFMM admin portal
//!
//! This crate provides shared functionality used by the portal gateway and
//! its integration tests: the normalized response envelope, session
//! credential extraction, and the review lifecycle shared by every
//! reviewable resource.

pub mod credentials;
pub mod envelope;
pub mod review;
