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
        let db = manager.get_connection();

        db.execute_unprepared("CREATE EXTENSION IF NOT EXISTS btree_gist")
            .await?;

        db.execute_unprepared("CREATE TYPE timerange AS RANGE (subtype = time)")
            .await?;

        // Rejects two pending or approved bookings of the same venue whose
        // date ranges and daily time windows both overlap. Time windows are
        // normalized so overnight bookings compare on their covered span.
        db.execute_unprepared(
            "ALTER TABLE venue_booking \
             ADD CONSTRAINT excl_venue_booking_overlap \
             EXCLUDE USING gist ( \
                 venue WITH =, \
                 daterange(start_date, end_date, '[]') WITH &&, \
                 timerange(LEAST(start_time, end_time), GREATEST(start_time, end_time), '[]') WITH && \
             ) \
             WHERE (approval_status IN (0, 1))",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            "ALTER TABLE venue_booking DROP CONSTRAINT IF EXISTS excl_venue_booking_overlap",
        )
        .await?;

        db.execute_unprepared("DROP TYPE IF EXISTS timerange").await?;

        Ok(())
    }
}
