use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use crate::{constant::TEST_PASSWORD, error::TestError};

/// Insert a user with the standard fixture password ([`TEST_PASSWORD`]).
pub async fn insert_user<C: ConnectionTrait>(
    db: &C,
    username: &str,
    email: &str,
) -> Result<entity::user::Model, TestError> {
    insert_user_with_password(db, username, email, TEST_PASSWORD).await
}

/// Insert a user with an argon2id hash of the given plaintext password.
pub async fn insert_user_with_password<C: ConnectionTrait>(
    db: &C,
    username: &str,
    email: &str,
    password: &str,
) -> Result<entity::user::Model, TestError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();

    let user = entity::user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        email: ActiveValue::Set(email.to_string()),
        password_hash: ActiveValue::Set(password_hash),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
