use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

pub const SESSION_USER_ID_KEY: &str = "boxoffice:user:id";

/// The logged in user's ID as kept in the session cookie.
///
/// Stored as a string and parsed back to an `i32` on read, so a tampered or
/// corrupted session value surfaces as a parse error instead of a silent
/// wrong ID.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Mark the session as belonging to the given user, called after a
    /// successful credential check
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// The user ID of the session's owner, `None` for anonymous sessions
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Session user ID is not a valid integer: {}", e))
                })
            })
            .transpose()
    }
}
