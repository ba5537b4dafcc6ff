/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use core::booking::{
    BookingPatch, BookingRequest, BulkBookingRequest, bookings_starting_within,
    bulk_create_bookings, get_bookings_by_status, submit_booking, update_booking,
    update_booking_status,
};
use core::database::get_organization_by_id;
use core::permission::{Permission, get_permission};
use core::types::*;
use entity::venue_booking::ApprovalStatus;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct BookingStatusRequest {
    pub status: String,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<MVenueBooking>>>> {
    // TODO: Implement pagination
    let bookings = EVenueBooking::find().all(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: bookings,
    };

    Ok(Json(res))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<BookingRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let booking = submit_booking(state.0.clone(), body, identity).await?;

    let res = BaseResponse {
        error: false,
        message: booking.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn get_booking(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(booking): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MVenueBooking>>> {
    let booking = EVenueBooking::find_by_id(booking)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Booking"))?;

    let res = BaseResponse {
        error: false,
        message: booking,
    };

    Ok(Json(res))
}

pub async fn patch_booking(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(booking): Path<Uuid>,
    Json(body): Json<BookingPatch>,
) -> WebResult<Json<BaseResponse<String>>> {
    let booking = update_booking(state.0.clone(), booking, body).await?;

    let res = BaseResponse {
        error: false,
        message: booking.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn post_booking_status(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(booking): Path<Uuid>,
    Json(body): Json<BookingStatusRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    body.status
        .parse::<ApprovalStatus>()
        .map_err(WebError::BadRequest)?;

    let requested = EVenueBooking::find_by_id(booking)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Booking"))?;

    let organization: MOrganization =
        get_organization_by_id(state.0.clone(), user.id, requested.organization)
            .await?
            .ok_or_else(|| WebError::not_found("Organization"))?;

    if !get_permission(state.0.clone(), organization.id, user.id, Permission::Edit).await? {
        return Err(WebError::Forbidden(
            "Missing permission to change booking status".to_string(),
        ));
    }

    let booking = update_booking_status(state.0.clone(), booking, body.status.as_str()).await?;

    let res = BaseResponse {
        error: false,
        message: booking.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn delete_booking(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(booking): Path<Uuid>,
) -> WebResult<StatusCode> {
    let booking = EVenueBooking::find_by_id(booking)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Booking"))?;

    let abooking: AVenueBooking = booking.into();
    abooking.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_by_event(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(event): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<MVenueBooking>>>> {
    let bookings = EVenueBooking::find()
        .filter(CVenueBooking::Event.eq(event))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: bookings,
    };

    Ok(Json(res))
}

pub async fn put_bulk(
    state: State<Arc<ServerState>>,
    Extension(identity): Extension<Identity>,
    Path(event): Path<Uuid>,
    Json(body): Json<BulkBookingRequest>,
) -> WebResult<Json<BaseResponse<Vec<String>>>> {
    let bookings = bulk_create_bookings(state.0.clone(), event, body, identity).await?;

    let res = BaseResponse {
        error: false,
        message: bookings.iter().map(|b| b.id.to_string()).collect(),
    };

    Ok(Json(res))
}

pub async fn get_by_venue(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(venue): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<MVenueBooking>>>> {
    let bookings = EVenueBooking::find()
        .filter(CVenueBooking::Venue.eq(venue))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: bookings,
    };

    Ok(Json(res))
}

pub async fn get_by_organizer(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<MVenueBooking>>>> {
    let bookings = EVenueBooking::find()
        .filter(CVenueBooking::Organizer.eq(user.id))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: bookings,
    };

    Ok(Json(res))
}

pub async fn get_by_organization(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<MVenueBooking>>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    let bookings = EVenueBooking::find()
        .filter(CVenueBooking::Organization.eq(organization.id))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: bookings,
    };

    Ok(Json(res))
}

pub async fn get_by_status(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(status): Path<String>,
) -> WebResult<Json<BaseResponse<Vec<MVenueBooking>>>> {
    let bookings = get_bookings_by_status(state.0.clone(), status.as_str()).await?;

    let res = BaseResponse {
        error: false,
        message: bookings,
    };

    Ok(Json(res))
}

pub async fn get_upcoming(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path((filter, amount)): Path<(String, i64)>,
) -> WebResult<Json<BaseResponse<Vec<MVenueBooking>>>> {
    let bookings = bookings_starting_within(state.0.clone(), filter.as_str(), amount).await?;

    let res = BaseResponse {
        error: false,
        message: bookings,
    };

    Ok(Json(res))
}
