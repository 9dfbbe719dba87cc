// tc-migrate - Taskcluster deployment migration tool
// Copyright (c) 2026 tc-migrate Contributors
// Licensed under the MIT License

//! # tc-migrate — Taskcluster deployment migration
//!
//! tc-migrate copies named resources from one Taskcluster deployment to
//! another: secret names, access-control clients, and scheduled hooks. It is
//! a single-shot tool driven entirely by environment variables, reporting
//! per-step progress as it runs.
//!
//! ## Architecture
//!
//! - [`cli`] - command-line surface (help/version only)
//! - [`config`] - settings resolved from the environment
//! - [`core`] - the copy engine, step runner, and resource migrations
//! - [`adapters`] - Taskcluster REST clients
//! - [`render`] - interactive and log progress renderers
//! - [`domain`] - error taxonomy and shared types
//! - [`logging`] - structured console logging
//!
//! ## Copy model
//!
//! Every migration step follows the same shape: a lister lazily enumerates
//! the source collection (following continuation tokens where the API pages),
//! the engine drains it into an ordered batch, then replays one create call
//! per item against the destination, reporting progress before each write.
//! Steps run strictly in order and the first failure ends the run — nothing
//! is retried, diffed, or rolled back.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tc_migrate::config::Settings;
//! use tc_migrate::core::migrate::{steps, RunContext};
//! use tc_migrate::core::runner::TaskRunner;
//!
//! # async fn example() -> tc_migrate::domain::Result<()> {
//! let settings = Settings::from_env()?;
//! let context = Arc::new(RunContext::from_settings(&settings)?);
//! let runner = TaskRunner::new(steps(), context, tc_migrate::render::for_stdout());
//! runner.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## A note on secrets
//!
//! The secrets step copies secret *names* with empty placeholder bodies and
//! a short expiry — never the values. This is a deliberate boundary: secret
//! values should not transit an automated migration tool.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod render;
