use kernel::model::{auth::AccessToken, id::UserId};
use shared::error::AppResult;

/// Key under which an access token's user id is stored.
pub struct AuthorizationKey(String);

impl AuthorizationKey {
    /// Mints a fresh token and its storage key in one step.
    pub fn gen() -> (Self, AccessToken) {
        let token = uuid::Uuid::new_v4().simple().to_string();
        (Self(token.clone()), AccessToken(token))
    }

    pub fn inner_ref(&self) -> &str {
        &self.0
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(value: &AccessToken) -> Self {
        Self(value.0.clone())
    }
}

pub struct AuthorizedUserId(UserId);

impl AuthorizedUserId {
    pub fn new(user_id: UserId) -> Self {
        Self(user_id)
    }

    pub fn into_inner(self) -> UserId {
        self.0
    }

    pub fn to_stored(&self) -> String {
        self.0.to_string()
    }

    pub fn from_stored(value: String) -> AppResult<Self> {
        Ok(Self(value.parse()?))
    }
}
