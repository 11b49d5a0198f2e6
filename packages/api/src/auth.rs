//! Login and registration flows.
//!
//! Both validate the form first (no request is sent on failure), call the
//! backend, and hand back a [`Session`] for the caller to store with
//! [`store::SessionStore::login`] or [`store::SessionStore::register`]. On any
//! error the caller's store is left as it was.

use store::Session;
use tracing::info;

use crate::models::RegisterForm;
use crate::{validate, ApiClient, ApiError};

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub session: Session,
    /// Server confirmation, shown to the user.
    pub message: String,
}

/// Log in with email and password.
pub async fn sign_in(client: &ApiClient, email: &str, password: &str) -> Result<Session, ApiError> {
    validate::email(email)?;
    let response = client.login(email, password).await?;
    info!(user_id = response.data.user.id, "logged in");
    Ok(response.data.into())
}

/// Create an account and log straight into it.
pub async fn sign_up(client: &ApiClient, form: &RegisterForm) -> Result<Registration, ApiError> {
    validate::email(&form.email)?;
    validate::new_password(&form.password)?;
    let response = client.register(form).await?;
    info!(user_id = response.data.user.id, "registered");
    Ok(Registration {
        session: response.data.into(),
        message: response
            .message
            .unwrap_or_else(|| "Registration successful".to_string()),
    })
}
