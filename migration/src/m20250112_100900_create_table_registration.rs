/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
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
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registration::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Registration::Event).uuid().not_null())
                    .col(ColumnDef::new(Registration::User).uuid().not_null())
                    .col(ColumnDef::new(Registration::Buyer).uuid().not_null())
                    .col(
                        ColumnDef::new(Registration::BoughtFor)
                            .array(ColumnType::Uuid)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Registration::TicketType).uuid().null())
                    .col(ColumnDef::new(Registration::Venue).uuid().null())
                    .col(
                        ColumnDef::new(Registration::NoOfTickets)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registration::RegistrationDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registration::PaymentStatus)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Registration::QrCode).string().null())
                    .col(ColumnDef::new(Registration::QrSerial).uuid().null())
                    .col(ColumnDef::new(Registration::CheckDate).date_time().null())
                    .col(ColumnDef::new(Registration::Attended).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-registration-event")
                            .from(Registration::Table, Registration::Event)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-registration-user")
                            .from(Registration::Table, Registration::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-registration-buyer")
                            .from(Registration::Table, Registration::Buyer)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-registration-ticket_type")
                            .from(Registration::Table, Registration::TicketType)
                            .to(TicketType::Table, TicketType::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-registration-venue")
                            .from(Registration::Table, Registration::Venue)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-registration-event-user")
                    .table(Registration::Table)
                    .col(Registration::Event)
                    .col(Registration::User)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Registration {
    Table,
    Id,
    Event,
    User,
    Buyer,
    BoughtFor,
    TicketType,
    Venue,
    NoOfTickets,
    RegistrationDate,
    PaymentStatus,
    QrCode,
    QrSerial,
    CheckDate,
    Attended,
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TicketType {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Venue {
    Table,
    Id,
}
