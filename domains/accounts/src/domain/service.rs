//! Account workflows: registration, credential checks, profile updates
//!
//! Each write runs in its own transaction and is rolled back explicitly
//! before an error is returned.

use jobscout_auth::password::{self, PASSWORD_POLICY_MESSAGE};
use jobscout_common::{db, Error, RepositoryError, Result};

use crate::domain::entities::{NewUser, User, EMAIL_TAKEN_MESSAGE};
use crate::repository::{create_user_tx, update_skills_tx, AccountsRepositories};

/// Register a new account.
///
/// Fails with `Error::Validation` when the password does not meet the policy
/// and with `Error::Conflict` when the email is already registered. A
/// concurrent registration of the same email is caught by the unique
/// constraint and reported as the same conflict.
pub async fn register(
    repos: &AccountsRepositories,
    email: &str,
    password: &str,
    bcrypt_cost: u32,
) -> Result<User> {
    if !password::meets_policy(password) {
        return Err(Error::Validation(PASSWORD_POLICY_MESSAGE.to_string()));
    }

    if repos.users.find_by_email(email).await?.is_some() {
        return Err(Error::Conflict(EMAIL_TAKEN_MESSAGE.to_string()));
    }

    let password_hash = password::hash_password(password, bcrypt_cost)
        .await
        .map_err(|e| Error::Internal(e.to_string()))?;
    let new_user = NewUser::new(email, password_hash);

    let mut tx = repos.begin().await?;
    match create_user_tx(&mut tx, &new_user).await {
        Ok(user) => {
            tx.commit().await?;
            Ok(user)
        }
        Err(e) => {
            db::rollback(tx).await;
            match e {
                RepositoryError::AlreadyExists => {
                    Err(Error::Conflict(EMAIL_TAKEN_MESSAGE.to_string()))
                }
                other => Err(other.into()),
            }
        }
    }
}

/// Check an email/password pair.
///
/// Returns `Ok(None)` for an unknown email and for a wrong password alike.
pub async fn authenticate(
    repos: &AccountsRepositories,
    email: &str,
    password: &str,
) -> Result<Option<User>> {
    let Some(user) = repos.users.find_by_email(email).await? else {
        return Ok(None);
    };

    let matches = password::verify_password(password, &user.password)
        .await
        .map_err(|e| Error::Internal(e.to_string()))?;

    Ok(matches.then_some(user))
}

/// Overwrite the user's skills text. `None` clears it.
pub async fn update_skills(
    repos: &AccountsRepositories,
    user_id: i64,
    skills: Option<&str>,
) -> Result<()> {
    let mut tx = repos.begin().await?;
    match update_skills_tx(&mut tx, user_id, skills).await {
        Ok(()) => {
            tx.commit().await?;
            Ok(())
        }
        Err(e) => {
            db::rollback(tx).await;
            Err(e.into())
        }
    }
}
