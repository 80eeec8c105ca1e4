use tracing::{info, warn};

use crate::client::NalogClient;
use crate::error::ApiError;
use crate::helpers::time::parse_expiry;
use crate::models::{rejection_message, AuthResponse, PasswordAuthRequest, RefreshTokenRequest};
use crate::session::Token;
use crate::utils::constants::{
    MSG_AUTH_FAILED, MSG_REFRESH_FAILED, PATH_AUTH_PASSWORD, PATH_AUTH_REFRESH,
};

impl NalogClient {
    /// Password login. Stores the issued tokens and the taxpayer ID from the
    /// returned profile.
    ///
    /// # Errors
    ///
    /// [`ApiError::Authentication`] when the response carries no refresh token
    /// or is missing the token, its expiry or the profile INN.
    pub async fn authenticate(&mut self, inn: &str, password: &str) -> Result<(), ApiError> {
        let body = PasswordAuthRequest {
            username: inn,
            password,
            device_info: self.session.device_info(),
        };
        let response: AuthResponse = self.post_unauthorized(PATH_AUTH_PASSWORD, &body).await?;

        if response.refresh_token().is_none() {
            let message = rejection_message(response.message, MSG_AUTH_FAILED);
            warn!(%message, "authorization rejected");
            return Err(ApiError::Authentication(message));
        }

        let expires_at = response.token_expire_in.as_deref().and_then(parse_expiry);
        let (Some(token), Some(expires_at), Some(profile_inn), Some(refresh_token)) = (
            response.token(),
            expires_at,
            response.inn(),
            response.refresh_token(),
        ) else {
            warn!("authorization response is incomplete");
            return Err(ApiError::Authentication(rejection_message(
                response.message.clone(),
                MSG_AUTH_FAILED,
            )));
        };

        self.session.store_login(
            profile_inn.to_owned(),
            Token::new(token.to_owned(), expires_at),
            refresh_token.to_owned(),
        );
        info!(
            inn = %profile_inn,
            expires_at = %expires_at,
            "authorization in lknpd.nalog.ru was successful"
        );
        Ok(())
    }

    /// Live access token, refreshing it first when missing or expired.
    pub(crate) async fn ensure_token(&mut self) -> Result<String, ApiError> {
        if let Some(token) = self.session.usable_token() {
            return Ok(token.to_owned());
        }
        if !self.session.has_refresh_token() {
            return Err(ApiError::NotAuthenticated);
        }
        self.refresh_token().await
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// [`ApiError::TokenRefresh`] when the response carries no token or no
    /// parseable expiry.
    pub async fn refresh_token(&mut self) -> Result<String, ApiError> {
        let body = RefreshTokenRequest {
            device_info: self.session.device_info(),
            refresh_token: self.session.refresh_token(),
        };
        let response: AuthResponse = self.post_unauthorized(PATH_AUTH_REFRESH, &body).await?;

        if response.token().is_none() {
            let message = rejection_message(response.message, MSG_REFRESH_FAILED);
            warn!(%message, "token refresh rejected");
            return Err(ApiError::TokenRefresh(message));
        }

        let expires_at = response.token_expire_in.as_deref().and_then(parse_expiry);
        let (Some(token), Some(expires_at)) = (response.token(), expires_at) else {
            warn!("token refresh response has no usable expiry");
            return Err(ApiError::TokenRefresh(rejection_message(
                response.message.clone(),
                MSG_REFRESH_FAILED,
            )));
        };

        let token = token.to_owned();
        self.session.store_refresh(
            Token::new(token.clone(), expires_at),
            response.refresh_token.clone(),
        );
        info!(expires_at = %expires_at, "access token refreshed");
        Ok(token)
    }
}
