//! Core Kernel - Foundational types shared by the speaker registration crates
//!
//! This crate provides the building blocks used by the domain and interface crates:
//! - Strongly-typed identifiers for speakers and sessions
//! - The kernel error type
//! - Port infrastructure for swappable persistence collaborators

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{SpeakerId, SessionId};
pub use error::CoreError;
pub use ports::{PortError, DomainPort};
