/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{NaiveDateTime, Utc};
use entity::registration::PaymentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DbErr, EntityTrait, QueryFilter, SqlErr,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use super::credential::{
    artifact_filename, encode_payload, remove_artifact, render_artifact, CredentialPayload,
};
use super::types::*;

#[derive(Debug)]
pub enum RegistrationError {
    DuplicateRegistration,
    MissingRelatedEntity(&'static str),
    InvalidCredential,
    NotFound,
    AlreadyCheckedIn,
    InvalidStatus(String),
    Artifact(anyhow::Error),
    Store(DbErr),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::DuplicateRegistration => {
                write!(f, "A registration for this event already exists")
            }
            RegistrationError::MissingRelatedEntity(what) => {
                write!(f, "Referenced {} does not exist", what)
            }
            RegistrationError::InvalidCredential => write!(f, "Credential is not valid"),
            RegistrationError::NotFound => write!(f, "Registration not found"),
            RegistrationError::AlreadyCheckedIn => write!(f, "Registration already checked in"),
            RegistrationError::InvalidStatus(status) => {
                write!(f, "Unknown payment status: {}", status)
            }
            RegistrationError::Artifact(err) => write!(f, "Credential artifact error: {}", err),
            RegistrationError::Store(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for RegistrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistrationError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for RegistrationError {
    fn from(err: DbErr) -> Self {
        RegistrationError::Store(err)
    }
}

fn default_no_of_tickets() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub event: Uuid,
    pub user: Uuid,
    pub ticket_type: Option<Uuid>,
    pub venue: Option<Uuid>,
    #[serde(default = "default_no_of_tickets")]
    pub no_of_tickets: i32,
    pub registration_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub bought_for: Vec<Uuid>,
}

/// Every persisted row counts as non-cancelled, and a person present on a
/// row as attendee, buyer or beneficiary blocks everyone in the incoming
/// person set.
async fn find_duplicate(
    state: &Arc<ServerState>,
    event_id: Uuid,
    candidates: &[Uuid],
) -> Result<bool, DbErr> {
    let existing = ERegistration::find()
        .filter(CRegistration::Event.eq(event_id))
        .all(&state.db)
        .await?;

    for row in &existing {
        let mut held = vec![row.user, row.buyer];
        held.extend(row.bought_for.iter().copied());

        if candidates.iter().any(|c| held.contains(c)) {
            return Ok(true);
        }
    }

    Ok(false)
}

pub async fn register(
    state: Arc<ServerState>,
    request: RegistrationRequest,
    buyer: MUser,
) -> Result<MRegistration, RegistrationError> {
    let mut candidates = vec![request.user, buyer.id];
    candidates.extend(request.bought_for.iter().copied());

    if find_duplicate(&state, request.event, &candidates).await? {
        return Err(RegistrationError::DuplicateRegistration);
    }

    let registration_id = Uuid::new_v4();
    let serial = Uuid::new_v4();

    let payload = CredentialPayload {
        registration_id,
        user_id: request.user,
        event_id: request.event,
        serial,
    };

    let encoded = encode_payload(&payload).map_err(RegistrationError::Artifact)?;
    let filename = artifact_filename(registration_id, serial);
    render_artifact(&state.cli.qr_dir, &filename, &encoded)
        .map_err(RegistrationError::Artifact)?;

    // Relations are resolved again at write time, earlier checks may be
    // stale by now.
    let event = EEvent::find_by_id(request.event)
        .one(&state.db)
        .await?
        .ok_or(RegistrationError::MissingRelatedEntity("event"))?;

    let attendee = EUser::find_by_id(request.user)
        .one(&state.db)
        .await?
        .ok_or(RegistrationError::MissingRelatedEntity("user"))?;

    EUser::find_by_id(buyer.id)
        .one(&state.db)
        .await?
        .ok_or(RegistrationError::MissingRelatedEntity("buyer"))?;

    if let Some(ticket_type_id) = request.ticket_type {
        ETicketType::find_by_id(ticket_type_id)
            .one(&state.db)
            .await?
            .ok_or(RegistrationError::MissingRelatedEntity("ticket_type"))?;
    }

    if let Some(venue_id) = request.venue {
        EVenue::find_by_id(venue_id)
            .one(&state.db)
            .await?
            .ok_or(RegistrationError::MissingRelatedEntity("venue"))?;
    }

    let registration_date = request
        .registration_date
        .unwrap_or_else(|| Utc::now().naive_utc());

    let aregistration = ARegistration {
        id: Set(registration_id),
        event: Set(event.id),
        user: Set(attendee.id),
        buyer: Set(buyer.id),
        bought_for: Set(request.bought_for),
        ticket_type: Set(request.ticket_type),
        venue: Set(request.venue),
        no_of_tickets: Set(request.no_of_tickets),
        registration_date: Set(registration_date),
        payment_status: Set(PaymentStatus::Pending),
        qr_code: Set(Some(filename)),
        qr_serial: Set(Some(serial)),
        check_date: Set(None),
        attended: Set(false),
    };

    // The unique index on (event, user) is the authoritative duplicate
    // guard, the pre-check above only saves round trips.
    match aregistration.insert(&state.db).await {
        Ok(registration) => Ok(registration),
        Err(e) => {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                return Err(RegistrationError::DuplicateRegistration);
            }

            Err(RegistrationError::Store(e))
        }
    }
}

pub async fn resolve_credential(
    state: Arc<ServerState>,
    raw: &str,
) -> Result<MRegistration, RegistrationError> {
    let payload = super::credential::decode_payload(raw)
        .map_err(|_| RegistrationError::InvalidCredential)?;

    let registration = ERegistration::find_by_id(payload.registration_id)
        .one(&state.db)
        .await?
        .ok_or(RegistrationError::NotFound)?;

    // A rotated serial invalidates every previously issued credential.
    if registration.qr_serial != Some(payload.serial) {
        return Err(RegistrationError::InvalidCredential);
    }

    Ok(registration)
}

pub async fn check_in(
    state: Arc<ServerState>,
    registration_id: Uuid,
) -> Result<MRegistration, RegistrationError> {
    let registration = ERegistration::find_by_id(registration_id)
        .one(&state.db)
        .await?
        .ok_or(RegistrationError::NotFound)?;

    if registration.attended {
        return Err(RegistrationError::AlreadyCheckedIn);
    }

    let mut aregistration: ARegistration = registration.into();
    aregistration.attended = Set(true);
    aregistration.check_date = Set(Some(Utc::now().naive_utc()));

    Ok(aregistration.update(&state.db).await?)
}

pub async fn regenerate_credential(
    state: Arc<ServerState>,
    registration_id: Uuid,
) -> Result<MRegistration, RegistrationError> {
    let registration = ERegistration::find_by_id(registration_id)
        .one(&state.db)
        .await?
        .ok_or(RegistrationError::NotFound)?;

    if let Some(old) = &registration.qr_code {
        remove_artifact(&state.cli.qr_dir, old);
    }

    let serial = Uuid::new_v4();
    let payload = CredentialPayload {
        registration_id: registration.id,
        user_id: registration.user,
        event_id: registration.event,
        serial,
    };

    let encoded = encode_payload(&payload).map_err(RegistrationError::Artifact)?;
    let filename = artifact_filename(registration.id, serial);
    render_artifact(&state.cli.qr_dir, &filename, &encoded)
        .map_err(RegistrationError::Artifact)?;

    let mut aregistration: ARegistration = registration.into();
    aregistration.qr_code = Set(Some(filename));
    aregistration.qr_serial = Set(Some(serial));

    Ok(aregistration.update(&state.db).await?)
}

pub async fn update_payment_status(
    state: Arc<ServerState>,
    registration_id: Uuid,
    status: &str,
) -> Result<MRegistration, RegistrationError> {
    let status = status
        .parse::<PaymentStatus>()
        .map_err(RegistrationError::InvalidStatus)?;

    let registration = ERegistration::find_by_id(registration_id)
        .one(&state.db)
        .await?
        .ok_or(RegistrationError::NotFound)?;

    let mut aregistration: ARegistration = registration.into();
    aregistration.payment_status = Set(status);

    Ok(aregistration.update(&state.db).await?)
}
