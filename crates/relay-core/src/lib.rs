//! Core domain for the message relay: record derivation, object keys, and
//! the storage / workflow-callback clients used by the Lambda.

pub mod aws;
pub mod config;
pub mod error;
pub mod keys;
pub mod record;
pub mod relay;
pub mod storage;
pub mod traced;
pub mod workflow;
