use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::entities::student::{ActiveModel, Column, Entity as Student, Model, StudentRequest};
use crate::error::ApiError;

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ApiError> {
    let students = Student::find().all(db).await?;
    Ok(students)
}

/// Looks up a student by id, filtered to the claimed owner. An absent row
/// and a row owned by another instructor are both `None`.
pub async fn find_owned(
    db: &DatabaseConnection,
    id: i32,
    instructor_id: i32,
) -> Result<Option<Model>, ApiError> {
    let student = Student::find_by_id(id)
        .filter(Column::InstructorId.eq(instructor_id))
        .one(db)
        .await?;

    Ok(student)
}

pub async fn create(db: &DatabaseConnection, request: StudentRequest) -> Result<Model, ApiError> {
    let student = ActiveModel {
        name: Set(request.name),
        cohort: Set(request.cohort),
        instructor_id: Set(request.instructor_id),
        ..Default::default()
    };

    let student = student.insert(db).await?;
    Ok(student)
}

/// Applies new name/cohort values to an existing row. The existence check,
/// the ownership check and the update run inside one transaction so the row
/// cannot change owner or disappear between them. Ownership is never
/// transferred: the stored instructor id stays as it is.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    request: StudentRequest,
) -> Result<Model, ApiError> {
    let txn = db.begin().await?;

    let existing = match Student::find_by_id(id).one(&txn).await? {
        Some(student) => student,
        None => return Err(ApiError::NotFound),
    };

    if existing.instructor_id != request.instructor_id {
        return Err(ApiError::Forbidden);
    }

    let mut student: ActiveModel = existing.into();
    student.name = Set(request.name);
    student.cohort = Set(request.cohort);
    let updated = student.update(&txn).await?;

    txn.commit().await?;

    Ok(updated)
}

/// Deletes a student after the same transactional existence/ownership
/// checks as `update`, returning the removed row.
pub async fn delete(
    db: &DatabaseConnection,
    id: i32,
    instructor_id: i32,
) -> Result<Model, ApiError> {
    let txn = db.begin().await?;

    let existing = match Student::find_by_id(id).one(&txn).await? {
        Some(student) => student,
        None => return Err(ApiError::NotFound),
    };

    if existing.instructor_id != instructor_id {
        return Err(ApiError::Forbidden);
    }

    Student::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    Ok(existing)
}
