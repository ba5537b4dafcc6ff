/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250112_100000_create_table_user;
mod m20250112_100100_create_table_organization;
mod m20250112_100200_create_table_role;
mod m20250112_100300_create_table_organization_user;
mod m20250112_100400_create_table_venue;
mod m20250112_100500_create_table_event;
mod m20250112_100600_create_table_ticket_type;
mod m20250112_100700_create_table_venue_booking;
mod m20250112_100800_create_table_venue_invoice;
mod m20250112_100900_create_table_registration;
mod m20250215_000000_add_booking_constraints;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250112_100000_create_table_user::Migration),
            Box::new(m20250112_100100_create_table_organization::Migration),
            Box::new(m20250112_100200_create_table_role::Migration),
            Box::new(m20250112_100300_create_table_organization_user::Migration),
            Box::new(m20250112_100400_create_table_venue::Migration),
            Box::new(m20250112_100500_create_table_event::Migration),
            Box::new(m20250112_100600_create_table_ticket_type::Migration),
            Box::new(m20250112_100700_create_table_venue_booking::Migration),
            Box::new(m20250112_100800_create_table_venue_invoice::Migration),
            Box::new(m20250112_100900_create_table_registration::Migration),
            Box::new(m20250215_000000_add_booking_constraints::Migration),
        ]
    }
}
