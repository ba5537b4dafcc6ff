/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::types::*;

/// Bit positions in a role's permission mask.
#[derive(Copy, Clone, Debug)]
pub enum Permission {
    View = 0,
    Edit = 1,
}

fn get_permission_bit(permissions: i64, permission: Permission) -> bool {
    permissions & (1 << permission as i64) != 0
}

/// Resolves the user's role in the organization and tests the requested
/// bit. Callers are expected to have established membership already, a
/// missing membership here is an error, not a plain false.
pub async fn get_permission(
    state: Arc<ServerState>,
    organization_id: Uuid,
    user_id: Uuid,
    permission: Permission,
) -> Result<bool> {
    let (_, role) = EOrganizationUser::find()
        .find_also_related(ERole)
        .filter(
            Condition::all()
                .add(COrganizationUser::Organization.eq(organization_id))
                .add(COrganizationUser::User.eq(user_id)),
        )
        .one(&state.db)
        .await
        .context("Failed to query organization membership")?
        .ok_or_else(|| anyhow::anyhow!("User not found in organization"))?;

    let role = role.ok_or_else(|| anyhow::anyhow!("Role not found"))?;

    Ok(get_permission_bit(role.permission, permission))
}
