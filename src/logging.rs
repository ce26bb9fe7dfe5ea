// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Log output setup for hosts embedding the model.

use anyhow::Result;

use crate::config::LogConfig;

/// Install a formatted stderr subscriber at the configured level.
///
/// Fails if the level is unknown. If a global subscriber is already
/// installed the existing one is kept.
pub fn init(config: &LogConfig) -> Result<()> {
    let level = config.level()?;
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(config.show_target)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = installed {
        tracing::debug!("subscriber already installed: {}", e);
    }
    Ok(())
}
