//! REST calls against the remote authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, AuthError>` with a message a screen can
//! render inline. No retries and no caching: a failed call is reported once
//! and the user decides what to do next.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::AuthError;
use super::types::{Actor, Credentials, LoginResponse, ProfileUpdate, RegisterForm};
use crate::session::namespace::Namespace;

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(ns: &Namespace, action: &str) -> String {
    format!("/auth/{}/{}", ns.name, action)
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16, message: Option<String>) -> AuthError {
    match status {
        401 | 403 => AuthError::InvalidCredentials(
            message.unwrap_or_else(|| "Invalid email or password.".to_owned()),
        ),
        409 => AuthError::Conflict(
            message.unwrap_or_else(|| "An account with this email already exists.".to_owned()),
        ),
        400 | 422 => AuthError::Validation(
            message.unwrap_or_else(|| "The submitted form was rejected.".to_owned()),
        ),
        _ => AuthError::Network(message.unwrap_or_else(|| format!("request failed: {status}"))),
    }
}

#[cfg(feature = "hydrate")]
fn transport_error(e: &gloo_net::Error) -> AuthError {
    log::debug!("auth request transport failure: {e}");
    AuthError::Network("Could not reach the server. Try again.".to_owned())
}

/// Read the API error payload from a non-OK response.
#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> AuthError {
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.display_message().map(str::to_owned));
    classify_status(resp.status(), message)
}

/// Sign in via `POST /auth/{namespace}/login`.
///
/// # Errors
///
/// `InvalidCredentials` on rejection, `Network` on transport failure or an
/// unexpected status.
pub async fn login(ns: &Namespace, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_endpoint(ns, "login"))
            .json(credentials)
            .map_err(|e| transport_error(&e))?
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| transport_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ns, credentials);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /auth/{namespace}/register`.
///
/// The response carries the new actor but no token: registration never
/// establishes a session.
///
/// # Errors
///
/// `Validation` or `Conflict` on rejection, `Network` otherwise.
pub async fn register(ns: &Namespace, form: &RegisterForm) -> Result<Actor, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_endpoint(ns, "register"))
            .json(form)
            .map_err(|e| transport_error(&e))?
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        #[derive(serde::Deserialize)]
        struct RegisterResponse {
            actor: Actor,
        }
        let body: RegisterResponse = resp.json().await.map_err(|e| transport_error(&e))?;
        Ok(body.actor)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ns, form);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Request a password-reset email via `POST /auth/{namespace}/forgot-password`.
///
/// # Errors
///
/// `Network` on transport failure or an unexpected status.
pub async fn request_password_reset(ns: &Namespace, email: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(&auth_endpoint(ns, "forgot-password"))
            .json(&payload)
            .map_err(|e| transport_error(&e))?
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ns, email);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Set a new password via `POST /auth/{namespace}/reset-password` using the
/// token segment from the emailed link.
///
/// # Errors
///
/// `Validation` when the token is stale or the password is rejected,
/// `Network` otherwise.
pub async fn reset_password(ns: &Namespace, token: &str, password: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": token, "password": password });
        let resp = gloo_net::http::Request::post(&auth_endpoint(ns, "reset-password"))
            .json(&payload)
            .map_err(|e| transport_error(&e))?
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ns, token, password);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Update profile fields via `PUT /auth/{namespace}/profile`, returning the
/// refreshed actor. The credential token authorizes the call but is never
/// changed by it.
///
/// # Errors
///
/// `InvalidCredentials` when the token is no longer accepted, `Validation`
/// on a rejected payload, `Network` otherwise.
pub async fn update_profile(
    ns: &Namespace,
    token: &str,
    update: &ProfileUpdate,
) -> Result<Actor, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&auth_endpoint(ns, "profile"))
            .header("Authorization", &format!("Bearer {token}"))
            .json(update)
            .map_err(|e| transport_error(&e))?
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Actor>().await.map_err(|e| transport_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ns, token, update);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}
