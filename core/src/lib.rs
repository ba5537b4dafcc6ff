/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod booking;
pub mod consts;
pub mod credential;
pub mod database;
pub mod input;
pub mod permission;
pub mod registration;
pub mod types;

use anyhow::{Context, Result};
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    tracing::info!("Starting Pavilion Server on {}:{}", cli.ip, cli.port);

    std::fs::create_dir_all(&cli.qr_dir)
        .context("Failed to create credential artifact directory")?;

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
