/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use core::database::{get_event_by_id, get_organization_by_id};
use core::input::parse_date;
use core::permission::{Permission, get_permission};
use core::types::*;
use entity::event::EventStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeEventRequest {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub max_attendees: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub max_attendees: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EventStatusRequest {
    pub status: String,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
) -> WebResult<Json<BaseResponse<ListResponse>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    let events = EEvent::find()
        .filter(CEvent::Organization.eq(organization.id))
        .all(&state.db)
        .await?;

    let events: ListResponse = events
        .iter()
        .map(|e| ListItem {
            id: e.id,
            name: e.name.clone(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: events,
    };

    Ok(Json(res))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
    Json(body): Json<MakeEventRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    let start_date = parse_date("start_date", body.start_date.as_str())?;
    let end_date = parse_date("end_date", body.end_date.as_str())?;

    if start_date > end_date {
        return Err(WebError::BadRequest(
            "Event end date lies before its start date".to_string(),
        ));
    }

    let now = Utc::now().naive_utc();

    // New events always wait for approval, whatever the client sends.
    let event = AEvent {
        id: Set(Uuid::new_v4()),
        organization: Set(organization.id),
        name: Set(body.name.clone()),
        description: Set(body.description.clone()),
        status: Set(EventStatus::Pending),
        organizer: Set(user.id),
        start_date: Set(start_date),
        end_date: Set(end_date),
        max_attendees: Set(body.max_attendees),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let event = event.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: event.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn get_event(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((organization, event)): Path<(Uuid, Uuid)>,
) -> WebResult<Json<BaseResponse<MEvent>>> {
    let (_organization, event) = get_event_by_id(state.0.clone(), user.id, organization, event)
        .await?
        .ok_or_else(|| WebError::not_found("Event"))?;

    let res = BaseResponse {
        error: false,
        message: event,
    };

    Ok(Json(res))
}

pub async fn patch_event(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((organization, event)): Path<(Uuid, Uuid)>,
    Json(body): Json<PatchEventRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let (_organization, event) = get_event_by_id(state.0.clone(), user.id, organization, event)
        .await?
        .ok_or_else(|| WebError::not_found("Event"))?;

    let start_date = match &body.start_date {
        Some(s) => parse_date("start_date", s)?,
        None => event.start_date,
    };
    let end_date = match &body.end_date {
        Some(s) => parse_date("end_date", s)?,
        None => event.end_date,
    };

    if start_date > end_date {
        return Err(WebError::BadRequest(
            "Event end date lies before its start date".to_string(),
        ));
    }

    let mut aevent: AEvent = event.into();

    if let Some(name) = body.name {
        aevent.name = Set(name);
    }

    if let Some(description) = body.description {
        aevent.description = Set(description);
    }

    if let Some(max_attendees) = body.max_attendees {
        aevent.max_attendees = Set(Some(max_attendees));
    }

    aevent.start_date = Set(start_date);
    aevent.end_date = Set(end_date);

    // Edits send the event back through the approval round.
    aevent.status = Set(EventStatus::Pending);
    aevent.updated_at = Set(Utc::now().naive_utc());

    let event = aevent.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: event.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn post_event_status(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((organization, event)): Path<(Uuid, Uuid)>,
    Json(body): Json<EventStatusRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let status = body
        .status
        .parse::<EventStatus>()
        .map_err(WebError::BadRequest)?;

    let (organization, event) = get_event_by_id(state.0.clone(), user.id, organization, event)
        .await?
        .ok_or_else(|| WebError::not_found("Event"))?;

    if !get_permission(state.0.clone(), organization.id, user.id, Permission::Edit).await? {
        return Err(WebError::Forbidden(
            "Missing permission to change event status".to_string(),
        ));
    }

    let mut aevent: AEvent = event.into();
    aevent.status = Set(status);
    aevent.updated_at = Set(Utc::now().naive_utc());

    let event = aevent.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: event.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn delete_event(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((organization, event)): Path<(Uuid, Uuid)>,
) -> WebResult<Json<BaseResponse<String>>> {
    let (_organization, event) = get_event_by_id(state.0.clone(), user.id, organization, event)
        .await?
        .ok_or_else(|| WebError::not_found("Event"))?;

    let aevent: AEvent = event.into();
    aevent.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Event deleted".to_string(),
    };

    Ok(Json(res))
}
