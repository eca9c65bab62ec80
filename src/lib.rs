// src/lib.rs
//! ZEN Credz: a simulated credential showcase
//!
//! A catalog of skill credentials the user activates (or "mints" through a
//! simulated wallet), a rule-based coach that scores the active set, and
//! the physics of the 3D carousel that displays it.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod insight;
pub mod progress;
pub mod repl;
pub mod selection;
pub mod state;
pub mod tasks;
pub mod wallet;

pub use catalog::{CATALOG, Category, CredentialDescriptor, SkillLevel};
pub use config::{CONFIG, CredzConfig};
pub use controller::Controller;
pub use error::{CredzError, Result};
pub use insight::{InsightResult, Status, analyze};
pub use selection::{SelectionSet, Toggled};
pub use state::{AppState, MintOutcome, StateSnapshot};
pub use wallet::{Network, Provider, WalletState};
