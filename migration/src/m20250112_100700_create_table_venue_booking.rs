/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VenueBooking::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VenueBooking::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VenueBooking::Event).uuid().not_null())
                    .col(ColumnDef::new(VenueBooking::Venue).uuid().not_null())
                    .col(ColumnDef::new(VenueBooking::Organizer).uuid().not_null())
                    .col(ColumnDef::new(VenueBooking::Organization).uuid().not_null())
                    .col(ColumnDef::new(VenueBooking::StartDate).date().not_null())
                    .col(ColumnDef::new(VenueBooking::EndDate).date().not_null())
                    .col(ColumnDef::new(VenueBooking::StartTime).time().not_null())
                    .col(ColumnDef::new(VenueBooking::EndTime).time().not_null())
                    .col(
                        ColumnDef::new(VenueBooking::ApprovalStatus)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VenueBooking::TotalAmountDue)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(VenueBooking::Invoice).uuid().null())
                    .col(ColumnDef::new(VenueBooking::Notes).text().null())
                    .col(
                        ColumnDef::new(VenueBooking::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VenueBooking::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-venue_booking-event")
                            .from(VenueBooking::Table, VenueBooking::Event)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-venue_booking-venue")
                            .from(VenueBooking::Table, VenueBooking::Venue)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-venue_booking-organizer")
                            .from(VenueBooking::Table, VenueBooking::Organizer)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-venue_booking-organization")
                            .from(VenueBooking::Table, VenueBooking::Organization)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-venue_booking-venue")
                    .table(VenueBooking::Table)
                    .col(VenueBooking::Venue)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VenueBooking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VenueBooking {
    Table,
    Id,
    Event,
    Venue,
    Organizer,
    Organization,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    ApprovalStatus,
    TotalAmountDue,
    Invoice,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Venue {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    Id,
}
