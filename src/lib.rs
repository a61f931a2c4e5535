//! Retry, backoff and polling-configuration helpers for cloud provisioning code.

pub mod backoff;
pub mod catcher;
pub mod classify;
pub mod cli;
pub mod error;
pub mod file;
pub mod id;
pub mod provider;
pub mod retry;
pub mod state;
pub mod status;
pub mod template;
