/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[sea_orm(num_value = 0)]
    Pending,
    #[sea_orm(num_value = 1)]
    Paid,
    #[sea_orm(num_value = 2)]
    Refunded,
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(format!("Unknown payment status: {}", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub event: Uuid,
    pub user: Uuid,
    pub buyer: Uuid,
    pub bought_for: Vec<Uuid>,
    pub ticket_type: Option<Uuid>,
    pub venue: Option<Uuid>,
    pub no_of_tickets: i32,
    pub registration_date: NaiveDateTime,
    pub payment_status: PaymentStatus,
    pub qr_code: Option<String>,
    pub qr_serial: Option<Uuid>,
    pub check_date: Option<NaiveDateTime>,
    pub attended: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Event,
    User,
    Buyer,
    TicketType,
    Venue,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Event => Entity::belongs_to(super::event::Entity)
                .from(Column::Event)
                .to(super::event::Column::Id)
                .into(),
            Self::User => Entity::belongs_to(super::user::Entity)
                .from(Column::User)
                .to(super::user::Column::Id)
                .into(),
            Self::Buyer => Entity::belongs_to(super::user::Entity)
                .from(Column::Buyer)
                .to(super::user::Column::Id)
                .into(),
            Self::TicketType => Entity::belongs_to(super::ticket_type::Entity)
                .from(Column::TicketType)
                .to(super::ticket_type::Column::Id)
                .into(),
            Self::Venue => Entity::belongs_to(super::venue::Entity)
                .from(Column::Venue)
                .to(super::venue::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
