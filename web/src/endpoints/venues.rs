/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use core::database::{get_organization_by_id, get_venue_by_id};
use core::types::*;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeVenueRequest {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub amount: Decimal,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchVenueRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub amount: Option<Decimal>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
) -> WebResult<Json<BaseResponse<ListResponse>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    let venues = EVenue::find()
        .filter(CVenue::Organization.eq(organization.id))
        .all(&state.db)
        .await?;

    let venues: ListResponse = venues
        .iter()
        .map(|v| ListItem {
            id: v.id,
            name: v.name.clone(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: venues,
    };

    Ok(Json(res))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
    Json(body): Json<MakeVenueRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    let existing_venue = EVenue::find()
        .filter(
            Condition::all()
                .add(CVenue::Organization.eq(organization.id))
                .add(CVenue::Name.eq(body.name.clone())),
        )
        .one(&state.db)
        .await?;

    if existing_venue.is_some() {
        return Err(WebError::already_exists("Venue Name"));
    }

    let venue = AVenue {
        id: Set(Uuid::new_v4()),
        organization: Set(organization.id),
        name: Set(body.name.clone()),
        location: Set(body.location.clone()),
        capacity: Set(body.capacity),
        amount: Set(body.amount),
        created_by: Set(user.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let venue = venue.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: venue.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn get_venue(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((organization, venue)): Path<(Uuid, Uuid)>,
) -> WebResult<Json<BaseResponse<MVenue>>> {
    let (_organization, venue) = get_venue_by_id(state.0.clone(), user.id, organization, venue)
        .await?
        .ok_or_else(|| WebError::not_found("Venue"))?;

    let res = BaseResponse {
        error: false,
        message: venue,
    };

    Ok(Json(res))
}

pub async fn patch_venue(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((organization, venue)): Path<(Uuid, Uuid)>,
    Json(body): Json<PatchVenueRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let (organization, venue) = get_venue_by_id(state.0.clone(), user.id, organization, venue)
        .await?
        .ok_or_else(|| WebError::not_found("Venue"))?;

    let mut avenue: AVenue = venue.into();

    if let Some(name) = body.name {
        let existing_venue = EVenue::find()
            .filter(
                Condition::all()
                    .add(CVenue::Organization.eq(organization.id))
                    .add(CVenue::Name.eq(name.clone())),
            )
            .one(&state.db)
            .await?;

        if existing_venue.is_some() {
            return Err(WebError::already_exists("Venue Name"));
        }

        avenue.name = Set(name);
    }

    if let Some(location) = body.location {
        avenue.location = Set(location);
    }

    if let Some(capacity) = body.capacity {
        avenue.capacity = Set(capacity);
    }

    if let Some(amount) = body.amount {
        avenue.amount = Set(amount);
    }

    let venue = avenue.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: venue.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn delete_venue(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((organization, venue)): Path<(Uuid, Uuid)>,
) -> WebResult<Json<BaseResponse<String>>> {
    let (_organization, venue) = get_venue_by_id(state.0.clone(), user.id, organization, venue)
        .await?
        .ok_or_else(|| WebError::not_found("Venue"))?;

    let avenue: AVenue = venue.into();
    avenue.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Venue deleted".to_string(),
    };

    Ok(Json(res))
}
