//! Image generation client for the logo moodboard.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{api_error, http_client, LlmError};

pub const IMAGE_MODEL: &str = "gpt-image-1";
pub const IMAGE_SIZE: &str = "1024x1024";

/// Anything that can turn one prompt into `count` raw image buffers.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, count: u8) -> Result<Vec<Vec<u8>>, LlmError>;
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    b64_json: Option<String>,
}

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ImageClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: http_client()?,
            api_key,
            base_url,
        })
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, prompt: &str, count: u8) -> Result<Vec<Vec<u8>>, LlmError> {
        let request_body = ImageRequest {
            model: IMAGE_MODEL,
            prompt,
            n: count,
            size: IMAGE_SIZE,
        };

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body = response.text().await?;
        let parsed: ImageResponse = serde_json::from_str(&body)?;
        let images = decode_payloads(&parsed.data)?;

        debug!("Image generation returned {} images", images.len());
        Ok(images)
    }
}

fn decode_payloads(data: &[ImageDatum]) -> Result<Vec<Vec<u8>>, LlmError> {
    data.iter()
        .map(|datum| {
            let encoded = datum.b64_json.as_deref().ok_or(LlmError::EmptyContent)?;
            STANDARD
                .decode(encoded)
                .map_err(|e| LlmError::Decode(e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_decodes_every_payload() {
        let server = MockServer::start().await;
        let png_header = [0x89u8, b'P', b'N', b'G'];
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .and(body_partial_json(json!({"model": IMAGE_MODEL, "n": 3, "size": IMAGE_SIZE})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"b64_json": STANDARD.encode(png_header)},
                    {"b64_json": STANDARD.encode(b"two")},
                    {"b64_json": STANDARD.encode(b"three")}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ImageClient::new("k".into(), server.uri()).unwrap();
        let images = client.generate("Logo moodboard for Bloom", 3).await.unwrap();
        assert_eq!(images.len(), 3);
        assert_eq!(images[0], png_header.to_vec());
        assert_eq!(images[2], b"three".to_vec());
    }

    #[tokio::test]
    async fn test_policy_rejection_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"message": "Your request was rejected by the safety system"}
            })))
            .mount(&server)
            .await;

        let client = ImageClient::new("k".into(), server.uri()).unwrap();
        let err = client.generate("anything", 3).await.unwrap_err();
        assert!(err.to_string().contains("safety system"));
    }

    #[test]
    fn test_malformed_base64_is_decode_error() {
        let data = vec![ImageDatum {
            b64_json: Some("not base64 at all!!".into()),
        }];
        assert!(matches!(decode_payloads(&data), Err(LlmError::Decode(_))));
    }

    #[test]
    fn test_missing_payload_is_empty_content() {
        let data = vec![ImageDatum { b64_json: None }];
        assert!(matches!(decode_payloads(&data), Err(LlmError::EmptyContent)));
    }
}
