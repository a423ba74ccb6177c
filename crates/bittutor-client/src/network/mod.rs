mod api;

pub use api::JSON_CONTENT_TYPE;

use bittutor_protocol::{Request, ServerResponse};

use crate::config::ClientConfig;
use crate::error::{Result, SubmitError};
use crate::form::{attach_file_if_present, collect_login, collect_registration, FormState};

/// Page the user is sent to after registering
pub const SIGN_IN_PAGE: &str = "sign-in.html";

/// Result of a successful registration submission
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub response: ServerResponse,
    /// Where the caller should navigate next
    pub sign_in_url: String,
}

/// Sends form submissions to the server
#[derive(Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SubmissionClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(SubmitError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sign_in_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), SIGN_IN_PAGE)
    }

    /// POST a request and decode the server's reply
    pub async fn submit(&self, request: impl Into<Request>) -> Result<ServerResponse> {
        let request = request.into();
        tracing::info!("Submitting {} to {}", request.operation(), self.base_url);

        let body = api::post(&self.http, &self.base_url, &request).await?;
        let response = ServerResponse::from_body(&body).map_err(SubmitError::Protocol)?;
        tracing::debug!(
            "Server replied to {} with result {}",
            response.operation,
            response.result_text()
        );

        Ok(response)
    }

    // Registration

    /// Collect the registration form, read its image if one is selected,
    /// then submit. Nothing is sent if the image cannot be read.
    pub async fn register<F: FormState + ?Sized>(&self, form: &F) -> Result<RegistrationOutcome> {
        let draft = collect_registration(form);
        let payload = attach_file_if_present(draft.payload, draft.file.as_ref()).await?;

        let response = self.submit(payload).await?;

        Ok(RegistrationOutcome {
            response,
            sign_in_url: self.sign_in_url(),
        })
    }

    // Login

    pub async fn login<F: FormState + ?Sized>(&self, form: &F) -> Result<ServerResponse> {
        self.submit(collect_login(form)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> SubmissionClient {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        SubmissionClient::new(&config).unwrap()
    }

    #[test]
    fn test_sign_in_url() {
        assert_eq!(
            client("http://127.0.0.1:8080").sign_in_url(),
            "http://127.0.0.1:8080/sign-in.html"
        );
        assert_eq!(
            client("https://tutor.example.org/").sign_in_url(),
            "https://tutor.example.org/sign-in.html"
        );
    }

    #[tokio::test]
    async fn test_client_setup_error_reads_differently_from_delivery_error() {
        // A malformed URL fails inside reqwest before anything is sent
        let source = reqwest::Client::new().get("http://").send().await.unwrap_err();

        let message = SubmitError::Client(source).to_string();
        assert!(message.starts_with("Could not create HTTP client"), "{message}");
        assert!(!message.contains("could not be delivered"), "{message}");
    }
}
