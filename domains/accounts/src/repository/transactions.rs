//! Transactional free functions for the accounts domain

use crate::domain::entities::{NewUser, User};
use jobscout_common::RepositoryError;
use sqlx::{Postgres, Transaction};

/// Insert a user within an existing transaction.
///
/// Returns `RepositoryError::AlreadyExists` when the email is taken.
pub async fn create_user_tx(
    transaction: &mut Transaction<'_, Postgres>,
    new_user: &NewUser,
) -> std::result::Result<User, RepositoryError> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password)
        VALUES ($1, $2)
        RETURNING id, email, password, skills
        "#,
    )
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .fetch_one(&mut **transaction)
    .await
    .map_err(RepositoryError::from_sqlx)
}

/// Overwrite a user's skills within an existing transaction.
///
/// `None` clears the field. Returns `RepositoryError::NotFound` if the user
/// does not exist.
pub async fn update_skills_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: i64,
    skills: Option<&str>,
) -> std::result::Result<(), RepositoryError> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET skills = $2
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(skills)
    .execute(&mut **transaction)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}
