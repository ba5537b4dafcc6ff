/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::*;
use std::str::FromStr;

#[test]
fn test_event_status_from_str() {
    assert_eq!(
        event::EventStatus::from_str("pending").unwrap(),
        event::EventStatus::Pending
    );
    assert_eq!(
        event::EventStatus::from_str("approved").unwrap(),
        event::EventStatus::Approved
    );
    assert_eq!(
        event::EventStatus::from_str("rejected").unwrap(),
        event::EventStatus::Rejected
    );

    assert!(event::EventStatus::from_str("cancelled").is_err());
    assert!(event::EventStatus::from_str("Approved").is_err());
}

#[test]
fn test_approval_status_from_str() {
    assert_eq!(
        venue_booking::ApprovalStatus::from_str("pending").unwrap(),
        venue_booking::ApprovalStatus::Pending
    );
    assert_eq!(
        venue_booking::ApprovalStatus::from_str("approved").unwrap(),
        venue_booking::ApprovalStatus::Approved
    );
    assert_eq!(
        venue_booking::ApprovalStatus::from_str("rejected").unwrap(),
        venue_booking::ApprovalStatus::Rejected
    );

    assert!(venue_booking::ApprovalStatus::from_str("cancelled").is_err());
    assert!(venue_booking::ApprovalStatus::from_str("").is_err());
}

#[test]
fn test_payment_status_from_str() {
    assert_eq!(
        registration::PaymentStatus::from_str("pending").unwrap(),
        registration::PaymentStatus::Pending
    );
    assert_eq!(
        registration::PaymentStatus::from_str("paid").unwrap(),
        registration::PaymentStatus::Paid
    );
    assert_eq!(
        registration::PaymentStatus::from_str("refunded").unwrap(),
        registration::PaymentStatus::Refunded
    );

    assert!(registration::PaymentStatus::from_str("unpaid").is_err());
}
