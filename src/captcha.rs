//! hCaptcha token verification against the hosted siteverify API.

use serde::Deserialize;

const SITEVERIFY_URL: &str = "https://hcaptcha.com/siteverify";

#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Verify a client-submitted hCaptcha token. Network or decode failures are
/// logged and treated as a failed verification.
pub async fn verify_hcaptcha(client: &reqwest::Client, secret: &str, token: &str) -> bool {
    let params = [("response", token), ("secret", secret)];

    let response = match client.post(SITEVERIFY_URL).form(&params).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("hCaptcha request failed: {}", e);
            return false;
        }
    };

    let result: SiteverifyResponse = match response.json().await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Failed to parse hCaptcha response: {}", e);
            return false;
        }
    };

    if !result.success {
        tracing::warn!("hCaptcha verification failed: {:?}", result.error_codes);
    }
    result.success
}
