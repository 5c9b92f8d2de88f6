use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;

/// Decides whether a caller-supplied credential grants admin access.
///
/// Handlers only see this trait, so the static shared secret can be swapped
/// for a session or token scheme without touching them.
pub trait Authorizer: Send + Sync {
    fn authorize(&self, credential: Option<&str>) -> bool;
}

/// Wrapper type for Actix-web app data.
pub type AuthorizerData = Arc<dyn Authorizer>;

/// A single static password compared by exact string equality.
#[derive(Clone)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl Authorizer for SharedSecret {
    fn authorize(&self, credential: Option<&str>) -> bool {
        credential.is_some_and(|supplied| supplied == self.0)
    }
}

/// JSON body carrying the admin password (`{"password": "..."}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminCredential {
    pub password: Option<String>,
}

/// Reject the request unless `credential` is accepted by `authorizer`.
pub fn require_admin(authorizer: &dyn Authorizer, credential: Option<&str>) -> Result<(), ApiError> {
    if authorizer.authorize(credential) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}
