//! CLI interface and argument parsing
//!
//! tc-migrate is single-shot: no subcommands, no flags. Everything is
//! parameterized by the environment, so clap only contributes `--help` and
//! `--version`.

use clap::Parser;

/// Copy secrets, clients, and hooks between Taskcluster deployments.
///
/// Reads SRC_ROOT_URL, TASKCLUSTER_ROOT_URL, TASKCLUSTER_CLIENT_ID and
/// TASKCLUSTER_ACCESS_TOKEN from the environment (a .env file is honored)
/// and copies each resource kind from the source deployment to the
/// destination, in order: secrets, clients, hooks.
#[derive(Parser, Debug)]
#[command(name = "tc-migrate")]
#[command(version, about)]
pub struct Cli {}
