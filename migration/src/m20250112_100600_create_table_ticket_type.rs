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
                    .table(TicketType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TicketType::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TicketType::Event).uuid().not_null())
                    .col(ColumnDef::new(TicketType::Name).string().not_null())
                    .col(
                        ColumnDef::new(TicketType::Price)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TicketType::Quantity).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ticket_type-event")
                            .from(TicketType::Table, TicketType::Event)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TicketType {
    Table,
    Id,
    Event,
    Name,
    Price,
    Quantity,
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
}
