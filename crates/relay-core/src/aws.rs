use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::config;

/// Load the default AWS configuration pinned to the fixed region.
pub async fn aws_config() -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config::REGION))
        .load()
        .await
}
