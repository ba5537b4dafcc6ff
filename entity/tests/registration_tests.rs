/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for registration entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_registration_entity_basic() -> Result<(), DbErr> {
    let registration_id = Uuid::new_v4();
    let event_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let guest_id = Uuid::new_v4();
    let serial = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![registration::Model {
            id: registration_id,
            event: event_id,
            user: user_id,
            buyer: user_id,
            bought_for: vec![guest_id],
            ticket_type: None,
            venue: None,
            no_of_tickets: 2,
            registration_date: naive_date,
            payment_status: registration::PaymentStatus::Pending,
            qr_code: Some(format!("qrcode-{}-{}.png", registration_id, serial)),
            qr_serial: Some(serial),
            check_date: None,
            attended: false,
        }]])
        .into_connection();

    let result = registration::Entity::find_by_id(registration_id)
        .one(&db)
        .await?;

    assert!(result.is_some());
    let registration = result.unwrap();
    assert_eq!(registration.event, event_id);
    assert_eq!(registration.bought_for, vec![guest_id]);
    assert_eq!(registration.no_of_tickets, 2);
    assert!(!registration.attended);
    assert_eq!(registration.qr_serial, Some(serial));

    Ok(())
}
