//! Taskcluster REST adapters
//!
//! One [`Deployment`] handle per endpoint (source and destination), with
//! thin service wrappers for the three services this tool touches. All
//! wire-shape knowledge lives in [`models`]; the copy logic in `core` only
//! sees descriptors and `Result`s.

pub mod auth;
pub mod client;
pub mod hooks;
pub mod models;
pub mod secrets;

pub use auth::AuthService;
pub use client::{Deployment, ServiceClient};
pub use hooks::HooksService;
pub use secrets::SecretsService;
