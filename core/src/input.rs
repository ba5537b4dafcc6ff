/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use uuid::{Uuid, Variant};

use super::consts::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    MissingField(&'static str),
    InvalidUuid(&'static str),
    InvalidDate(&'static str),
    InvalidTime(&'static str),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingField(field) => write!(f, "Missing required field: {}", field),
            InputError::InvalidUuid(field) => write!(f, "Invalid identifier: {}", field),
            InputError::InvalidDate(field) => {
                write!(f, "Invalid date: {} (expected YYYY-MM-DD)", field)
            }
            InputError::InvalidTime(field) => {
                write!(f, "Invalid time: {} (expected HH:MM or HH:MM:SS)", field)
            }
        }
    }
}

impl std::error::Error for InputError {}

pub fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, InputError> {
    value.as_deref().ok_or(InputError::MissingField(field))
}

/// Accepts only the hyphenated 8-4-4-4-12 form with RFC 4122 variant and
/// version nibbles. Token claims pass through here before any lookup.
pub fn check_uuid(field: &'static str, value: &str) -> Result<Uuid, InputError> {
    if value.len() != 36 {
        return Err(InputError::InvalidUuid(field));
    }

    let id = Uuid::try_parse(value).map_err(|_| InputError::InvalidUuid(field))?;

    if !(1..=5).contains(&id.get_version_num()) || id.get_variant() != Variant::RFC4122 {
        return Err(InputError::InvalidUuid(field));
    }

    Ok(id)
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| InputError::InvalidDate(field))
}

pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, InputError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| InputError::InvalidTime(field))
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn check_index_name(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if s != s.to_lowercase() {
        return Err("Name must be lowercase".to_string());
    }

    if s.contains(|c: char| !c.is_ascii_alphanumeric() && c != '-') {
        return Err("Name can only contain letters, numbers, and dashes".to_string());
    }

    if s.starts_with('-') || s.ends_with('-') {
        return Err("Name can only start and end with letters or numbers".to_string());
    }

    Ok(())
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

/// Validates password strength requirements
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password cannot exceed 128 characters".to_string());
    }

    if password.to_lowercase().contains("password") {
        return Err("Password cannot contain the word 'password'".to_string());
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c));

    if !has_uppercase {
        return Err("Password must contain at least one uppercase letter".to_string());
    }

    if !has_lowercase {
        return Err("Password must contain at least one lowercase letter".to_string());
    }

    if !has_digit {
        return Err("Password must contain at least one digit".to_string());
    }

    if !has_special {
        return Err(
            "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)"
                .to_string(),
        );
    }

    Ok(())
}
