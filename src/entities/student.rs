use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub cohort: String,
    // Column name stays lowercase to match the existing schema
    #[sea_orm(column_name = "instructorid")]
    #[serde(rename = "instructorid")]
    pub instructor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Create/update request model with validation. String fields default to
// empty and integer fields to 0 so that a missing field fails validation
// (400) instead of being rejected during deserialization.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct StudentRequest {
    #[schema(examples("Jane Doe"))]
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[schema(examples("2025A"))]
    #[serde(default)]
    #[validate(length(min = 1, message = "Cohort is required"))]
    pub cohort: String,
    #[schema(examples(1))]
    #[serde(default, rename = "instructorid")]
    #[validate(range(min = 1, message = "Instructor id is required"))]
    pub instructor_id: i32,
}

/// Request body naming the instructor the caller claims to act as.
/// Not validated: a missing id defaults to 0, which matches no row owner.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OwnerRequest {
    #[schema(examples(1))]
    #[serde(default, rename = "instructorid")]
    pub instructor_id: i32,
}
