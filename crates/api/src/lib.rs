//! HTTP layer of Spielplan: session auth, server-rendered pages for to-dos,
//! teams and games, and the signed push webhook.

pub mod auth;
pub mod config;
pub mod deploy;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
