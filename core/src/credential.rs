/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use qrcode::QrCode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Wire content of an issued credential. The serial rotates on
/// regeneration, which is what invalidates previously issued codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPayload {
    pub registration_id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub serial: Uuid,
}

pub fn encode_payload(payload: &CredentialPayload) -> Result<String> {
    let json = serde_json::to_vec(payload).context("Failed to serialize credential payload")?;
    Ok(STANDARD.encode(json))
}

pub fn decode_payload(raw: &str) -> Result<CredentialPayload> {
    let bytes = STANDARD
        .decode(raw.trim())
        .context("Credential is not valid base64")?;

    serde_json::from_slice(&bytes).context("Credential payload is not valid JSON")
}

pub fn artifact_filename(registration_id: Uuid, serial: Uuid) -> String {
    format!("qrcode-{}-{}.png", registration_id, serial)
}

pub fn artifact_path(dir: &str, filename: &str) -> PathBuf {
    Path::new(dir).join(filename)
}

pub fn render_artifact(dir: &str, filename: &str, content: &str) -> Result<()> {
    let code = QrCode::new(content.as_bytes()).context("Failed to encode QR code")?;
    let rendered = code.render::<image::Luma<u8>>().build();

    rendered
        .save(artifact_path(dir, filename))
        .context("Failed to write credential artifact")?;

    Ok(())
}

/// Best effort: a missing file is fine, anything else is logged and ignored.
pub fn remove_artifact(dir: &str, filename: &str) {
    let path = artifact_path(dir, filename);

    match std::fs::remove_file(&path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Credential artifact {} already gone", path.display());
        }
        Err(e) => {
            tracing::warn!("Failed to remove credential artifact {}: {}", path.display(), e);
        }
    }
}
