//! Domain types and pure logic shared by the Spielplan crates.
//!
//! Nothing in here touches the database or the network: the webhook
//! signature gate, form-value validation, and the standings calculation are
//! plain functions so they can be tested without any infrastructure.

pub mod error;
pub mod standings;
pub mod todos;
pub mod tournament;
pub mod types;
pub mod webhook;
