/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use core::consts::BASE_ROLE_ADMIN_ID;
use core::database::get_organization_by_id;
use core::input::check_index_name;
use core::permission::{Permission, get_permission};
use core::types::*;
use email_address::EmailAddress;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QuerySelect,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeOrganizationRequest {
    pub name: String,
    pub description: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchOrganizationRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AddUserRequest {
    pub user: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RemoveUserRequest {
    pub user: String,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<ListResponse>>> {
    // TODO: Implement pagination
    let organizations = EOrganization::find()
        .join_rev(
            JoinType::InnerJoin,
            EOrganizationUser::belongs_to(entity::organization::Entity)
                .from(COrganizationUser::Organization)
                .to(COrganization::Id)
                .into(),
        )
        .filter(COrganizationUser::User.eq(user.id))
        .all(&state.db)
        .await?;

    let organizations: ListResponse = organizations
        .iter()
        .map(|o| ListItem {
            id: o.id,
            name: o.name.clone(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: organizations,
    };

    Ok(Json(res))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeOrganizationRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    if check_index_name(body.name.clone().as_str()).is_err() {
        return Err(WebError::invalid_name("Organization Name"));
    }

    if !EmailAddress::is_valid(body.contact_email.as_str()) {
        return Err(WebError::invalid_email());
    }

    let existing_organization = EOrganization::find()
        .filter(COrganization::Name.eq(body.name.clone()))
        .one(&state.db)
        .await?;

    if existing_organization.is_some() {
        return Err(WebError::already_exists("Organization Name"));
    }

    let organization = AOrganization {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.clone()),
        description: Set(body.description.clone()),
        contact_email: Set(body.contact_email.clone()),
        contact_phone: Set(body.contact_phone.clone()),
        created_by: Set(user.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let organization = organization.insert(&state.db).await?;

    let organization_user = AOrganizationUser {
        id: Set(Uuid::new_v4()),
        organization: Set(organization.id),
        user: Set(user.id),
        role: Set(BASE_ROLE_ADMIN_ID),
        joined_at: Set(Utc::now().naive_utc()),
    };

    organization_user.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: organization.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn get_organization(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MOrganization>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    let res = BaseResponse {
        error: false,
        message: organization,
    };

    Ok(Json(res))
}

pub async fn patch_organization(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
    Json(body): Json<PatchOrganizationRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    if !get_permission(state.0.clone(), organization.id, user.id, Permission::Edit).await? {
        return Err(WebError::Forbidden(
            "Missing permission to edit organization".to_string(),
        ));
    }

    let mut aorganization: AOrganization = organization.into();

    if let Some(name) = body.name {
        if check_index_name(name.as_str()).is_err() {
            return Err(WebError::invalid_name("Organization Name"));
        }

        let existing_organization = EOrganization::find()
            .filter(COrganization::Name.eq(name.clone()))
            .one(&state.db)
            .await?;

        if existing_organization.is_some() {
            return Err(WebError::already_exists("Organization Name"));
        }

        aorganization.name = Set(name);
    }

    if let Some(description) = body.description {
        aorganization.description = Set(description);
    }

    if let Some(contact_email) = body.contact_email {
        if !EmailAddress::is_valid(contact_email.as_str()) {
            return Err(WebError::invalid_email());
        }

        aorganization.contact_email = Set(contact_email);
    }

    if let Some(contact_phone) = body.contact_phone {
        aorganization.contact_phone = Set(Some(contact_phone));
    }

    let organization = aorganization.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: organization.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn delete_organization(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    if !get_permission(state.0.clone(), organization.id, user.id, Permission::Edit).await? {
        return Err(WebError::Forbidden(
            "Missing permission to delete organization".to_string(),
        ));
    }

    // TODO: Make sure to delete all related data and that cascade is working
    let aorganization: AOrganization = organization.into();
    aorganization.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Organization deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn get_organization_users(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
) -> WebResult<Json<BaseResponse<ListResponse>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    let organization_users = EOrganizationUser::find()
        .filter(COrganizationUser::Organization.eq(organization.id))
        .all(&state.db)
        .await?;

    let organization_users: ListResponse = organization_users
        .iter()
        .map(|ou| ListItem {
            id: ou.user,
            name: ou.role.to_string(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: organization_users,
    };

    Ok(Json(res))
}

pub async fn post_organization_users(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
    Json(body): Json<AddUserRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    let target_user = EUser::find()
        .filter(CUser::Username.eq(body.user.clone()))
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let organization_user = EOrganizationUser::find()
        .filter(
            Condition::all()
                .add(COrganizationUser::Organization.eq(organization.id))
                .add(COrganizationUser::User.eq(target_user.id)),
        )
        .one(&state.db)
        .await?;

    if organization_user.is_some() {
        return Err(WebError::already_exists("User already in Organization"));
    }

    let role = ERole::find()
        .filter(
            Condition::all().add(CRole::Name.eq(body.role.clone())).add(
                Condition::any()
                    .add(CRole::Organization.eq(organization.id))
                    .add(CRole::Organization.is_null()),
            ),
        )
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Role"))?;

    let organization_user = AOrganizationUser {
        id: Set(Uuid::new_v4()),
        organization: Set(organization.id),
        user: Set(target_user.id),
        role: Set(role.id),
        joined_at: Set(Utc::now().naive_utc()),
    };

    organization_user.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "User invited".to_string(),
    };

    Ok(Json(res))
}

pub async fn delete_organization_users(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(organization): Path<Uuid>,
    Json(body): Json<RemoveUserRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let organization: MOrganization = get_organization_by_id(state.0.clone(), user.id, organization)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    let target_user = EUser::find()
        .filter(CUser::Username.eq(body.user.clone()))
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let organization_user = EOrganizationUser::find()
        .filter(
            Condition::all()
                .add(COrganizationUser::Organization.eq(organization.id))
                .add(COrganizationUser::User.eq(target_user.id)),
        )
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User in Organization"))?;

    let organization_user: AOrganizationUser = organization_user.into();
    organization_user.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "User removed".to_string(),
    };

    Ok(Json(res))
}
