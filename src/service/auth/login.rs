use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::user::UserDto,
    service::auth::password::verify_password,
};

/// Verify a username and password pair.
///
/// Unknown usernames and wrong passwords both fail with
/// [`AuthError::InvalidCredentials`] so the response never reveals which
/// field was wrong. Establishing the session is the caller's job.
pub async fn login_service(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<UserDto, Error> {
    let user_repository = UserRepository::new(db);

    let Some(user) = user_repository.get_by_username(username).await? else {
        return Err(AuthError::InvalidCredentials.into());
    };

    if !verify_password(password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(user.into())
}
