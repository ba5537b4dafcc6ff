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
                    .table(VenueInvoice::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VenueInvoice::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VenueInvoice::Booking).uuid().not_null())
                    .col(ColumnDef::new(VenueInvoice::Organization).uuid().not_null())
                    .col(
                        ColumnDef::new(VenueInvoice::Amount)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(VenueInvoice::Status).integer().not_null())
                    .col(
                        ColumnDef::new(VenueInvoice::IssuedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VenueInvoice::DueDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-venue_invoice-booking")
                            .from(VenueInvoice::Table, VenueInvoice::Booking)
                            .to(VenueBooking::Table, VenueBooking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-venue_invoice-organization")
                            .from(VenueInvoice::Table, VenueInvoice::Organization)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(VenueBooking::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk-venue_booking-invoice")
                            .from_tbl(VenueBooking::Table)
                            .from_col(VenueBooking::Invoice)
                            .to_tbl(VenueInvoice::Table)
                            .to_col(VenueInvoice::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(VenueBooking::Table)
                    .drop_foreign_key(Alias::new("fk-venue_booking-invoice"))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VenueInvoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VenueInvoice {
    Table,
    Id,
    Booking,
    Organization,
    Amount,
    Status,
    IssuedAt,
    DueDate,
}

#[derive(DeriveIden)]
enum VenueBooking {
    Table,
    Id,
    Invoice,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    Id,
}
