/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Response;
use axum::{Extension, Json};
use core::credential::{artifact_path, remove_artifact};
use core::registration::{
    RegistrationRequest, check_in, regenerate_credential, register, resolve_credential,
    update_payment_status,
};
use core::types::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct ValidateCredentialRequest {
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PaymentStatusRequest {
    pub status: String,
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<RegistrationRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let registration = register(state.0.clone(), body, user).await?;

    let res = BaseResponse {
        error: false,
        message: registration.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn get_by_event(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(event): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<MRegistration>>>> {
    let registrations = ERegistration::find()
        .filter(CRegistration::Event.eq(event))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: registrations,
    };

    Ok(Json(res))
}

pub async fn get_registration(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(registration): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MRegistration>>> {
    let registration = ERegistration::find_by_id(registration)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Registration"))?;

    let res = BaseResponse {
        error: false,
        message: registration,
    };

    Ok(Json(res))
}

pub async fn delete_registration(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(registration): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let registration = ERegistration::find_by_id(registration)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Registration"))?;

    if let Some(filename) = &registration.qr_code {
        remove_artifact(&state.cli.qr_dir, filename);
    }

    let aregistration: ARegistration = registration.into();
    aregistration.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Registration deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn get_credential(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(registration): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let registration = ERegistration::find_by_id(registration)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Registration"))?;

    let filename = registration
        .qr_code
        .ok_or_else(|| WebError::not_found("Credential"))?;

    let res = BaseResponse {
        error: false,
        message: format!("/static/{}", filename),
    };

    Ok(Json(res))
}

pub async fn get_credential_image(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(registration): Path<Uuid>,
) -> WebResult<Response<Body>> {
    let registration = ERegistration::find_by_id(registration)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Registration"))?;

    let filename = registration
        .qr_code
        .ok_or_else(|| WebError::not_found("Credential"))?;

    let file_path = artifact_path(&state.cli.qr_dir, &filename);

    let file = tokio::fs::File::open(&file_path).await.map_err(|e| {
        WebError::InternalServerError(format!("Failed to open credential artifact: {}", e))
    })?;

    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static("image/png"))
        .body(body)
        .map_err(|e| WebError::InternalServerError(format!("Failed to build response: {}", e)))
}

pub async fn post_regenerate_credential(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(registration): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let registration = regenerate_credential(state.0.clone(), registration).await?;

    let res = BaseResponse {
        error: false,
        message: registration.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn post_validate(
    state: State<Arc<ServerState>>,
    Json(body): Json<ValidateCredentialRequest>,
) -> WebResult<Json<BaseResponse<MRegistration>>> {
    let registration = resolve_credential(state.0.clone(), body.code.as_str()).await?;

    let res = BaseResponse {
        error: false,
        message: registration,
    };

    Ok(Json(res))
}

pub async fn post_check_in(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(registration): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MRegistration>>> {
    let registration = check_in(state.0.clone(), registration).await?;

    let res = BaseResponse {
        error: false,
        message: registration,
    };

    Ok(Json(res))
}

pub async fn post_payment_status(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(registration): Path<Uuid>,
    Json(body): Json<PaymentStatusRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let registration =
        update_payment_status(state.0.clone(), registration, body.status.as_str()).await?;

    let res = BaseResponse {
        error: false,
        message: registration.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn get_artifact(
    state: State<Arc<ServerState>>,
    Path(file): Path<String>,
) -> WebResult<Response<Body>> {
    // Artifacts are served by bare filename, anything that could leave
    // the artifact directory is rejected.
    if file.contains('/') || file.contains("..") {
        return Err(WebError::BadRequest("Invalid file name".to_string()));
    }

    let file_path = artifact_path(&state.cli.qr_dir, &file);

    let file = tokio::fs::File::open(&file_path)
        .await
        .map_err(|_| WebError::not_found("File"))?;

    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static("image/png"))
        .body(body)
        .map_err(|e| WebError::InternalServerError(format!("Failed to build response: {}", e)))
}
