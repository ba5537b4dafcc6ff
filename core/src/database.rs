/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QuerySelect,
};
use sea_orm_migration::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::consts::{BASE_ROLE_ADMIN_ID, BASE_ROLE_MEMBER_ID, BASE_ROLE_VIEWER_ID};
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    update_db(&db).await.context("Failed to update database")?;
    Ok(db)
}

async fn update_db(db: &DatabaseConnection) -> Result<(), DbErr> {
    let base_role_admin = ERole::find_by_id(BASE_ROLE_ADMIN_ID).one(db).await?;

    if base_role_admin.is_none() {
        let arole = ARole {
            id: Set(BASE_ROLE_ADMIN_ID),
            name: Set("Admin".to_string()),
            organization: Set(None),
            permission: Set(0x7FFFFFFFFFFFFFFF),
        };

        arole.insert(db).await?;
    }

    let base_role_member = ERole::find_by_id(BASE_ROLE_MEMBER_ID).one(db).await?;

    if base_role_member.is_none() {
        let arole = ARole {
            id: Set(BASE_ROLE_MEMBER_ID),
            name: Set("Member".to_string()),
            organization: Set(None),
            permission: Set(0x0000000000000003),
        };

        arole.insert(db).await?;
    }

    let base_role_viewer = ERole::find_by_id(BASE_ROLE_VIEWER_ID).one(db).await?;

    if base_role_viewer.is_none() {
        let arole = ARole {
            id: Set(BASE_ROLE_VIEWER_ID),
            name: Set("Viewer".to_string()),
            organization: Set(None),
            permission: Set(0x0000000000000001),
        };

        arole.insert(db).await?;
    }

    Ok(())
}

pub async fn get_organization_by_id(
    state: Arc<ServerState>,
    user_id: Uuid,
    organization_id: Uuid,
) -> Result<Option<MOrganization>> {
    Ok(EOrganization::find()
        .join_rev(
            JoinType::InnerJoin,
            EOrganizationUser::belongs_to(entity::organization::Entity)
                .from(COrganizationUser::Organization)
                .to(COrganization::Id)
                .into(),
        )
        .filter(
            Condition::all()
                .add(COrganizationUser::User.eq(user_id))
                .add(COrganization::Id.eq(organization_id)),
        )
        .one(&state.db)
        .await
        .context("Failed to query organization")?)
}

pub async fn get_event_by_id(
    state: Arc<ServerState>,
    user_id: Uuid,
    organization_id: Uuid,
    event_id: Uuid,
) -> Result<Option<(MOrganization, MEvent)>> {
    match get_organization_by_id(state.clone(), user_id, organization_id).await? {
        Some(o) => Ok(EEvent::find()
            .filter(CEvent::Organization.eq(o.id))
            .filter(CEvent::Id.eq(event_id))
            .one(&state.db)
            .await
            .context("Failed to query event")?
            .map(|e| (o, e))),
        None => Ok(None),
    }
}

pub async fn get_venue_by_id(
    state: Arc<ServerState>,
    user_id: Uuid,
    organization_id: Uuid,
    venue_id: Uuid,
) -> Result<Option<(MOrganization, MVenue)>> {
    match get_organization_by_id(state.clone(), user_id, organization_id).await? {
        Some(o) => Ok(EVenue::find()
            .filter(CVenue::Organization.eq(o.id))
            .filter(CVenue::Id.eq(venue_id))
            .one(&state.db)
            .await
            .context("Failed to query venue")?
            .map(|v| (o, v))),
        None => Ok(None),
    }
}

pub async fn get_user_organizations(state: Arc<ServerState>, user_id: Uuid) -> Result<Vec<Uuid>> {
    Ok(EOrganizationUser::find()
        .filter(COrganizationUser::User.eq(user_id))
        .all(&state.db)
        .await
        .context("Failed to query organization memberships")?
        .into_iter()
        .map(|membership| membership.organization)
        .collect())
}
