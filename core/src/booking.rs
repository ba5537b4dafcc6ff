/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use entity::venue_booking::ApprovalStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use super::input::{check_uuid, parse_date, parse_time, required, InputError};
use super::types::*;

#[derive(Debug)]
pub enum BookingError {
    Unauthenticated(&'static str),
    InvalidIdentifier(&'static str),
    Forbidden,
    OrganizationNotFound,
    UserNotFound,
    MissingFields(&'static str),
    InvalidDate(&'static str),
    InvalidTime(&'static str),
    InvalidRange,
    SchedulingConflict(Uuid),
    InvalidStatus(String),
    InvalidFilter(String),
    VenuesNotFound,
    NotFound,
    Store(DbErr),
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::Unauthenticated(what) => {
                write!(f, "No authenticated {} in request context", what)
            }
            BookingError::InvalidIdentifier(field) => write!(f, "Invalid identifier: {}", field),
            BookingError::Forbidden => write!(f, "User is not a member of the organization"),
            BookingError::OrganizationNotFound => write!(f, "Organization not found"),
            BookingError::UserNotFound => write!(f, "User not found"),
            BookingError::MissingFields(field) => write!(f, "Missing required field: {}", field),
            BookingError::InvalidDate(field) => write!(f, "Invalid date: {}", field),
            BookingError::InvalidTime(field) => write!(f, "Invalid time: {}", field),
            BookingError::InvalidRange => write!(f, "Booking end date lies before its start date"),
            BookingError::SchedulingConflict(id) => {
                write!(f, "Venue is already booked by booking {}", id)
            }
            BookingError::InvalidStatus(status) => write!(f, "Unknown approval status: {}", status),
            BookingError::InvalidFilter(filter) => write!(f, "Unknown filter type: {}", filter),
            BookingError::VenuesNotFound => write!(f, "One or more venues not found"),
            BookingError::NotFound => write!(f, "Booking not found"),
            BookingError::Store(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for BookingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookingError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for BookingError {
    fn from(err: DbErr) -> Self {
        BookingError::Store(err)
    }
}

impl From<InputError> for BookingError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::MissingField(field) => BookingError::MissingFields(field),
            InputError::InvalidUuid(field) => BookingError::InvalidIdentifier(field),
            InputError::InvalidDate(field) => BookingError::InvalidDate(field),
            InputError::InvalidTime(field) => BookingError::InvalidTime(field),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub event: Option<String>,
    pub venue: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub approval_status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPatch {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub approval_status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkBookingItem {
    pub venue: Uuid,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkBookingRequest {
    pub organization: Uuid,
    pub bookings: Vec<BulkBookingItem>,
}

/// Overlap on the daily window, bounds inclusive. Windows are normalized
/// so an overnight booking compares on the span it covers.
pub fn time_windows_intersect(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    let (a_lo, a_hi) = (a_start.min(a_end), a_start.max(a_end));
    let (b_lo, b_hi) = (b_start.min(b_end), b_start.max(b_end));

    a_lo <= b_hi && b_lo <= a_hi
}

/// Pending bookings count as provisional holds, so both pending and
/// approved rows can conflict. Date filtering happens in the query, the
/// time window comparison on the candidates.
pub async fn find_conflicting_booking<C: ConnectionTrait>(
    db: &C,
    venue_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    exclude: Option<Uuid>,
) -> Result<Option<MVenueBooking>, DbErr> {
    let mut condition = Condition::all()
        .add(CVenueBooking::Venue.eq(venue_id))
        .add(
            Condition::any()
                .add(CVenueBooking::ApprovalStatus.eq(ApprovalStatus::Pending))
                .add(CVenueBooking::ApprovalStatus.eq(ApprovalStatus::Approved)),
        )
        .add(CVenueBooking::StartDate.lte(end_date))
        .add(CVenueBooking::EndDate.gte(start_date));

    if let Some(id) = exclude {
        condition = condition.add(CVenueBooking::Id.ne(id));
    }

    let candidates = EVenueBooking::find().filter(condition).all(db).await?;

    Ok(candidates
        .into_iter()
        .find(|b| time_windows_intersect(start_time, end_time, b.start_time, b.end_time)))
}

pub async fn submit_booking(
    state: Arc<ServerState>,
    request: BookingRequest,
    identity: Identity,
) -> Result<MVenueBooking, BookingError> {
    let organization_claim = identity
        .organizations
        .first()
        .ok_or(BookingError::Unauthenticated("organization"))?;
    let user_claim = identity
        .user_id
        .as_deref()
        .ok_or(BookingError::Unauthenticated("user"))?;

    let organization_id = check_uuid("organization_id", organization_claim)?;
    let user_id = check_uuid("user_id", user_claim)?;

    let organization = EOrganization::find_by_id(organization_id)
        .one(&state.db)
        .await?
        .ok_or(BookingError::OrganizationNotFound)?;

    let user = EUser::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or(BookingError::UserNotFound)?;

    let membership = EOrganizationUser::find()
        .filter(
            Condition::all()
                .add(COrganizationUser::Organization.eq(organization.id))
                .add(COrganizationUser::User.eq(user.id)),
        )
        .one(&state.db)
        .await?;

    if membership.is_none() {
        return Err(BookingError::Forbidden);
    }

    let event_field = required("event", &request.event)?;
    let venue_field = required("venue", &request.venue)?;
    let start_date_field = required("start_date", &request.start_date)?;
    let end_date_field = required("end_date", &request.end_date)?;
    let start_time_field = required("start_time", &request.start_time)?;
    let end_time_field = required("end_time", &request.end_time)?;

    let event_id = check_uuid("event", event_field)?;
    let venue_id = check_uuid("venue", venue_field)?;

    let start_date = parse_date("start_date", start_date_field)?;
    let end_date = parse_date("end_date", end_date_field)?;
    let start_time = parse_time("start_time", start_time_field)?;
    let end_time = parse_time("end_time", end_time_field)?;

    if start_date > end_date {
        return Err(BookingError::InvalidRange);
    }

    if let Some(conflict) = find_conflicting_booking(
        &state.db, venue_id, start_date, end_date, start_time, end_time, None,
    )
    .await?
    {
        return Err(BookingError::SchedulingConflict(conflict.id));
    }

    let event = EEvent::find_by_id(event_id)
        .one(&state.db)
        .await?
        .ok_or(BookingError::NotFound)?;

    let venue = EVenue::find_by_id(venue_id)
        .one(&state.db)
        .await?
        .ok_or(BookingError::VenuesNotFound)?;

    let days = (end_date - start_date).num_days() + 1;
    let total_amount_due = venue.amount * Decimal::from(days);

    // The requested approval status is discarded, creation always starts
    // pending. Re-running the conflict check inside the transaction narrows
    // the check-then-commit window, the exclusion constraint closes it.
    let txn = state.db.begin().await?;

    if let Some(conflict) = find_conflicting_booking(
        &txn, venue_id, start_date, end_date, start_time, end_time, None,
    )
    .await?
    {
        txn.rollback().await?;
        return Err(BookingError::SchedulingConflict(conflict.id));
    }

    let now = Utc::now().naive_utc();
    let abooking = AVenueBooking {
        id: Set(Uuid::new_v4()),
        event: Set(event.id),
        venue: Set(venue.id),
        organizer: Set(user.id),
        organization: Set(organization.id),
        start_date: Set(start_date),
        end_date: Set(end_date),
        start_time: Set(start_time),
        end_time: Set(end_time),
        approval_status: Set(ApprovalStatus::Pending),
        total_amount_due: Set(total_amount_due),
        invoice: Set(None),
        notes: Set(request.notes),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let booking = abooking.insert(&txn).await?;
    txn.commit().await?;

    Ok(booking)
}

pub async fn update_booking(
    state: Arc<ServerState>,
    booking_id: Uuid,
    patch: BookingPatch,
) -> Result<MVenueBooking, BookingError> {
    let booking = EVenueBooking::find_by_id(booking_id)
        .one(&state.db)
        .await?
        .ok_or(BookingError::NotFound)?;

    let start_date = match &patch.start_date {
        Some(s) => parse_date("start_date", s)?,
        None => booking.start_date,
    };
    let end_date = match &patch.end_date {
        Some(s) => parse_date("end_date", s)?,
        None => booking.end_date,
    };
    let start_time = match &patch.start_time {
        Some(s) => parse_time("start_time", s)?,
        None => booking.start_time,
    };
    let end_time = match &patch.end_time {
        Some(s) => parse_time("end_time", s)?,
        None => booking.end_time,
    };

    if let Some(status) = &patch.approval_status {
        status
            .parse::<ApprovalStatus>()
            .map_err(BookingError::InvalidStatus)?;
    }

    if start_date > end_date {
        return Err(BookingError::InvalidRange);
    }

    if let Some(conflict) = find_conflicting_booking(
        &state.db,
        booking.venue,
        start_date,
        end_date,
        start_time,
        end_time,
        Some(booking.id),
    )
    .await?
    {
        return Err(BookingError::SchedulingConflict(conflict.id));
    }

    // Any edit needs a fresh approval round.
    let mut abooking: AVenueBooking = booking.into();
    abooking.start_date = Set(start_date);
    abooking.end_date = Set(end_date);
    abooking.start_time = Set(start_time);
    abooking.end_time = Set(end_time);
    if let Some(notes) = patch.notes {
        abooking.notes = Set(Some(notes));
    }
    abooking.approval_status = Set(ApprovalStatus::Pending);
    abooking.updated_at = Set(Utc::now().naive_utc());

    Ok(abooking.update(&state.db).await?)
}

pub async fn update_booking_status(
    state: Arc<ServerState>,
    booking_id: Uuid,
    status: &str,
) -> Result<MVenueBooking, BookingError> {
    let status = status
        .parse::<ApprovalStatus>()
        .map_err(BookingError::InvalidStatus)?;

    let booking = EVenueBooking::find_by_id(booking_id)
        .one(&state.db)
        .await?
        .ok_or(BookingError::NotFound)?;

    let txn = state.db.begin().await?;

    let mut abooking: AVenueBooking = booking.clone().into();
    abooking.updated_at = Set(Utc::now().naive_utc());

    if status == ApprovalStatus::Approved && booking.invoice.is_none() {
        let invoice = AVenueInvoice {
            id: Set(Uuid::new_v4()),
            booking: Set(booking.id),
            organization: Set(booking.organization),
            amount: Set(booking.total_amount_due),
            status: Set(entity::registration::PaymentStatus::Pending),
            issued_at: Set(Utc::now().naive_utc()),
            due_date: Set(booking.start_date),
        }
        .insert(&txn)
        .await?;

        abooking.invoice = Set(Some(invoice.id));
    }

    abooking.approval_status = Set(status);

    let booking = abooking.update(&txn).await?;
    txn.commit().await?;

    Ok(booking)
}

pub async fn bulk_create_bookings(
    state: Arc<ServerState>,
    event_id: Uuid,
    request: BulkBookingRequest,
    identity: Identity,
) -> Result<Vec<MVenueBooking>, BookingError> {
    let user_claim = identity
        .user_id
        .as_deref()
        .ok_or(BookingError::Unauthenticated("user"))?;
    let user_id = check_uuid("user_id", user_claim)?;

    let membership = EOrganizationUser::find()
        .filter(
            Condition::all()
                .add(COrganizationUser::Organization.eq(request.organization))
                .add(COrganizationUser::User.eq(user_id)),
        )
        .one(&state.db)
        .await?;

    if membership.is_none() {
        return Err(BookingError::Forbidden);
    }

    let event = EEvent::find_by_id(event_id)
        .one(&state.db)
        .await?
        .ok_or(BookingError::NotFound)?;

    let venue_ids: Vec<Uuid> = request.bookings.iter().map(|b| b.venue).collect();

    let venues = EVenue::find()
        .filter(CVenue::Id.is_in(venue_ids))
        .all(&state.db)
        .await?;

    // All-or-nothing: every requested venue must resolve before any write.
    if venues.len() != request.bookings.len() {
        return Err(BookingError::VenuesNotFound);
    }

    let venues: HashMap<Uuid, MVenue> = venues.into_iter().map(|v| (v.id, v)).collect();

    let mut parsed = Vec::new();

    for item in &request.bookings {
        let start_date = parse_date("start_date", &item.start_date)?;
        let end_date = parse_date("end_date", &item.end_date)?;
        let start_time = parse_time("start_time", &item.start_time)?;
        let end_time = parse_time("end_time", &item.end_time)?;

        if start_date > end_date {
            return Err(BookingError::InvalidRange);
        }

        parsed.push((item, start_date, end_date, start_time, end_time));
    }

    let txn = state.db.begin().await?;
    let mut created = Vec::new();

    for (item, start_date, end_date, start_time, end_time) in parsed {
        // Runs on the transaction, so rows written earlier in this batch
        // are visible to the check.
        if let Some(conflict) = find_conflicting_booking(
            &txn, item.venue, start_date, end_date, start_time, end_time, None,
        )
        .await?
        {
            txn.rollback().await?;
            return Err(BookingError::SchedulingConflict(conflict.id));
        }

        let venue = venues
            .get(&item.venue)
            .ok_or(BookingError::VenuesNotFound)?;

        let days = (end_date - start_date).num_days() + 1;
        let now = Utc::now().naive_utc();

        let abooking = AVenueBooking {
            id: Set(Uuid::new_v4()),
            event: Set(event.id),
            venue: Set(venue.id),
            organizer: Set(user_id),
            organization: Set(request.organization),
            start_date: Set(start_date),
            end_date: Set(end_date),
            start_time: Set(start_time),
            end_time: Set(end_time),
            approval_status: Set(ApprovalStatus::Pending),
            total_amount_due: Set(venue.amount * Decimal::from(days)),
            invoice: Set(None),
            notes: Set(item.notes.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        created.push(abooking.insert(&txn).await?);
    }

    txn.commit().await?;

    Ok(created)
}

pub async fn get_bookings_by_status(
    state: Arc<ServerState>,
    status: &str,
) -> Result<Vec<MVenueBooking>, BookingError> {
    let status = status
        .parse::<ApprovalStatus>()
        .map_err(BookingError::InvalidStatus)?;

    Ok(EVenueBooking::find()
        .filter(CVenueBooking::ApprovalStatus.eq(status))
        .all(&state.db)
        .await?)
}

/// Bookings whose start instant falls inside the window from now to
/// now plus the given amount of minutes, hours or days.
pub async fn bookings_starting_within(
    state: Arc<ServerState>,
    filter_type: &str,
    amount: i64,
) -> Result<Vec<MVenueBooking>, BookingError> {
    let delta = match filter_type {
        "minutes" => Duration::minutes(amount),
        "hours" => Duration::hours(amount),
        "days" => Duration::days(amount),
        other => return Err(BookingError::InvalidFilter(other.to_string())),
    };

    let now = Utc::now().naive_utc();
    let until = now + delta;

    let candidates = EVenueBooking::find()
        .filter(
            Condition::all()
                .add(CVenueBooking::StartDate.gte(now.date()))
                .add(CVenueBooking::StartDate.lte(until.date())),
        )
        .all(&state.db)
        .await?;

    Ok(candidates
        .into_iter()
        .filter(|b| {
            let starts_at = b.start_date.and_time(b.start_time);
            starts_at >= now && starts_at <= until
        })
        .collect())
}
