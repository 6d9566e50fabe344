use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::instructor::{ActiveModel, Column, Entity as Instructor, Model};
use crate::error::ApiError;

pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<Model>, ApiError> {
    let instructor = Instructor::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await?;

    Ok(instructor)
}

pub async fn create(
    db: &DatabaseConnection,
    username: String,
    password_hash: String,
) -> Result<Model, ApiError> {
    let instructor = ActiveModel {
        username: Set(username),
        password: Set(password_hash),
        ..Default::default()
    };

    let instructor = instructor.insert(db).await?;
    Ok(instructor)
}
