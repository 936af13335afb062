//! AppScan on Cloud API client — shared wire contract for the CLI.
//!
//! This crate is the single source of truth for the ASoC endpoints the
//! tool touches: api-key login, app lookup by name, default asset group,
//! app creation.
//!
//! No retries. No token refresh. One login per process run.

mod client;

pub use client::{AppInfo, AsocClient, AsocError, AssetGroupInfo, DEFAULT_API_BASE};
