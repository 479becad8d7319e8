use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, UserResponse},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_public(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(&request),
            )
            .await?;
        let login_response: LoginResponse = Self::map_json_response(response).await?;
        self.session().set_token(&login_response.access_token)?;
        Ok(login_response)
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(self.http_client().get(format!("{}/users/me", base_url)))
            .await?;
        Self::map_json_response(response).await
    }

    /// Sign-out is client-side only: the API has no session to revoke.
    pub fn logout(&self) {
        self.session().clear();
    }
}
