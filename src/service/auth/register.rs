use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::user::UserDto,
    service::auth::password::hash_password,
};

/// Register a new user account.
///
/// Rejects duplicate usernames and emails before hashing the password and
/// inserting the user. Registration does not establish a session; the caller
/// logs in separately.
pub async fn register_service(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
) -> Result<UserDto, Error> {
    let user_repository = UserRepository::new(db);

    if user_repository.get_by_username(username).await?.is_some() {
        return Err(AuthError::UsernameTaken.into());
    }

    if user_repository.get_by_email(email).await?.is_some() {
        return Err(AuthError::EmailTaken.into());
    }

    let password_hash = hash_password(password)?;

    let user = user_repository
        .create(username, email, &password_hash)
        .await?;

    Ok(user.into())
}
