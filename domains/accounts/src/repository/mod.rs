//! Repository implementations for the accounts domain

pub mod transactions;
pub mod users;

use sqlx::{PgPool, Postgres, Transaction};

pub use transactions::{create_user_tx, update_skills_tx};
pub use users::UserRepository;

/// Combined repository access for the accounts domain
#[derive(Clone)]
pub struct AccountsRepositories {
    pool: PgPool,
    pub users: UserRepository,
}

impl AccountsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
