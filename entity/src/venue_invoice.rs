/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::registration::PaymentStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "venue_invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub booking: Uuid,
    pub organization: Uuid,
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub issued_at: NaiveDateTime,
    pub due_date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Booking,
    Organization,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Booking => Entity::belongs_to(super::venue_booking::Entity)
                .from(Column::Booking)
                .to(super::venue_booking::Column::Id)
                .into(),
            Self::Organization => Entity::belongs_to(super::organization::Entity)
                .from(Column::Organization)
                .to(super::organization::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
