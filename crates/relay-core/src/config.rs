//! Fixed deployment constants.
//!
//! The relay reads no environment or file based configuration; the region
//! and the destination bucket are compiled in.

/// Region both service clients are pinned to.
pub const REGION: &str = "us-east-1";

/// Bucket that receives the derived records.
pub const DEST_BUCKET: &str = "message-relay-data-bucket";
