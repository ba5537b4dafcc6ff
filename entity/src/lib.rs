/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod event;
pub mod organization;
pub mod organization_user;
pub mod registration;
pub mod role;
pub mod ticket_type;
pub mod user;
pub mod venue;
pub mod venue_booking;
pub mod venue_invoice;
