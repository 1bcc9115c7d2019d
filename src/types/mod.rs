//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account secret and summary types
//! - `amount`: Amount conversion and the movement type
//! - `movement`: Requested operations read from input
//! - `error`: Error types for the ledger

pub mod account;
pub mod amount;
pub mod error;
pub mod movement;

pub use account::{AccountSummary, Secret};
pub use amount::{IntoAmount, Movement};
pub use error::LedgerError;
pub use movement::{MovementKind, MovementRecord};
