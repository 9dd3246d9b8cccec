#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ConvertPayload;
use crate::domain::models::Gateway;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChoiceMessageResponse {
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChoiceResponse {
    message: ChoiceMessageResponse,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ConvertResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default)]
    choices: Vec<ChoiceResponse>,
}

pub struct Convert {
    url: String,
    timeout: String,
}

impl Default for Convert {
    fn default() -> Convert {
        return Convert {
            url: Config::get(ConfigKey::ConvertUrl),
            timeout: Config::get(ConfigKey::GatewayHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl Gateway for Convert {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Convert gateway URL is not defined");
        }

        let res = reqwest::Client::new()
            .get(format!("{url}/api/health", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "convert gateway is not reachable");
            bail!("Convert gateway is not reachable");
        }

        let status = res.unwrap().status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "convert gateway health check failed");
            bail!("Convert gateway health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn convert(&self, payload: &ConvertPayload) -> Result<String> {
        if self.url.is_empty() {
            bail!("Convert gateway URL is not defined");
        }

        let res = reqwest::Client::new()
            .post(format!("{url}/api/convert", url = self.url))
            .json(payload)
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.text().await?;
        if !(200..300).contains(&status) {
            tracing::error!(status = status, body = body.as_str(), "convert request rejected");
            bail!("The gateway responded with status {status}: {body}");
        }

        let parsed = serde_json::from_str::<ConvertResponse>(&body)?;
        tracing::debug!(body = ?parsed, "convert response");

        // The gateway reports some failures inside a 200 body.
        if let Some(error) = parsed.error {
            bail!(error);
        }

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| return choice.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Ok("(no content)".to_string());
        }

        return Ok(content);
    }
}
