pub mod authorization;

pub use authorization::{AdminCredential, Authorizer, AuthorizerData, SharedSecret, require_admin};
