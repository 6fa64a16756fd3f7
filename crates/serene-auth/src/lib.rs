//! serene-auth
//!
//! Bearer token validation. Sign-in happens at the hosted identity
//! provider; this crate only verifies the tokens it issues and turns them
//! into an [`serene_core::identity::IdentityProvider`].

pub mod error;
pub mod jwt;
pub mod user;
