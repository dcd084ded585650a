//! Delegation to the hosted auth subsystem (`/auth/v1`).

use super::{check_status, Backend, BackendError};
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login/registration request body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Backend {
    /// Signs in with email/password. The session payload is returned as raw
    /// JSON; the API layer only cares whether the call succeeded.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Value, BackendError> {
        let url = self.auth_url("token");
        let response = self
            .request(Method::POST, &url)
            .query(&[("grant_type", "password")])
            .json(credentials)
            .send()
            .await?;
        let body = check_status(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Registers a new user against the hosted auth subsystem.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<Value, BackendError> {
        let url = self.auth_url("signup");
        let response = self
            .request(Method::POST, &url)
            .json(credentials)
            .send()
            .await?;
        let body = check_status(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Revokes the caller's session. `token` is the raw Authorization header
    /// value forwarded from the client.
    pub async fn sign_out(&self, token: &str) -> Result<(), BackendError> {
        let url = self.auth_url("logout");
        let response = self
            .http
            .request(Method::POST, &url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, token)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
