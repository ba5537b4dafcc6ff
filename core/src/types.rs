/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "Pavilion", display_name = "Pavilion", bin_name = "pavilion-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "PAVILION_DEBUG", default_value = "false")]
    pub debug: bool,
    #[arg(long, env = "PAVILION_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "PAVILION_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "PAVILION_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "PAVILION_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "PAVILION_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "PAVILION_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "PAVILION_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "PAVILION_SESSION_HOURS", value_parser = greater_than_zero::<i64>, default_value = "24")]
    pub session_hours: i64,
    #[arg(long, env = "PAVILION_QR_DIR", default_value = "qrcodes")]
    pub qr_dir: String,
    #[arg(long, env = "PAVILION_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

/// Claims of a verified token, still in wire form. The booking pipeline
/// re-checks their shape instead of trusting the issuer.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Option<String>,
    pub organizations: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Uuid,
    pub name: String,
}

pub type ListResponse = Vec<ListItem>;

pub type EEvent = event::Entity;
pub type EOrganization = organization::Entity;
pub type EOrganizationUser = organization_user::Entity;
pub type ERegistration = registration::Entity;
pub type ERole = role::Entity;
pub type ETicketType = ticket_type::Entity;
pub type EUser = user::Entity;
pub type EVenue = venue::Entity;
pub type EVenueBooking = venue_booking::Entity;
pub type EVenueInvoice = venue_invoice::Entity;

pub type MEvent = event::Model;
pub type MOrganization = organization::Model;
pub type MOrganizationUser = organization_user::Model;
pub type MRegistration = registration::Model;
pub type MRole = role::Model;
pub type MTicketType = ticket_type::Model;
pub type MUser = user::Model;
pub type MVenue = venue::Model;
pub type MVenueBooking = venue_booking::Model;
pub type MVenueInvoice = venue_invoice::Model;

pub type AEvent = event::ActiveModel;
pub type AOrganization = organization::ActiveModel;
pub type AOrganizationUser = organization_user::ActiveModel;
pub type ARegistration = registration::ActiveModel;
pub type ARole = role::ActiveModel;
pub type ATicketType = ticket_type::ActiveModel;
pub type AUser = user::ActiveModel;
pub type AVenue = venue::ActiveModel;
pub type AVenueBooking = venue_booking::ActiveModel;
pub type AVenueInvoice = venue_invoice::ActiveModel;

pub type CEvent = event::Column;
pub type COrganization = organization::Column;
pub type COrganizationUser = organization_user::Column;
pub type CRegistration = registration::Column;
pub type CRole = role::Column;
pub type CTicketType = ticket_type::Column;
pub type CUser = user::Column;
pub type CVenue = venue::Column;
pub type CVenueBooking = venue_booking::Column;
pub type CVenueInvoice = venue_invoice::Column;

pub type REvent = event::Relation;
pub type ROrganization = organization::Relation;
pub type ROrganizationUser = organization_user::Relation;
pub type RRegistration = registration::Relation;
pub type RRole = role::Relation;
pub type RTicketType = ticket_type::Relation;
pub type RUser = user::Relation;
pub type RVenue = venue::Relation;
pub type RVenueBooking = venue_booking::Relation;
pub type RVenueInvoice = venue_invoice::Relation;
