#[cfg(test)]
#[path = "gateway_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Step;

/// Sentinel text the gateway recognizes by convention when a reordered
/// outline rides along with the request.
pub const STEPS_REORDERED: &str = "steps_reordered";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPayload {
    pub position: usize,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertPayload {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepPayload>>,
}

impl ConvertPayload {
    pub fn text(text: &str) -> ConvertPayload {
        return ConvertPayload {
            text: text.to_string(),
            steps: None,
        };
    }

    pub fn steps_reordered(steps: &[Step]) -> ConvertPayload {
        let steps = steps
            .iter()
            .enumerate()
            .map(|(idx, step)| {
                return StepPayload {
                    position: idx + 1,
                    name: step.name.to_string(),
                    description: step.description.to_string(),
                };
            })
            .collect::<Vec<StepPayload>>();

        return ConvertPayload {
            text: STEPS_REORDERED.to_string(),
            steps: Some(steps),
        };
    }
}

/// What the controller meant by a request. Decides how the reply is folded
/// back into history once it arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// First exchange, reply is parsed for the three labeled suggestions.
    Suggestions,
    /// Free text forwarded as-is.
    Freeform,
    /// Fire-and-forget notification that the outline order changed.
    ReorderNotice,
}

#[derive(Debug)]
pub struct ConvertRequest {
    pub kind: RequestKind,
    pub payload: ConvertPayload,
}

impl ConvertRequest {
    pub fn new(kind: RequestKind, payload: ConvertPayload) -> ConvertRequest {
        return ConvertRequest { kind, payload };
    }
}

#[async_trait]
pub trait Gateway {
    /// Used at startup to verify the gateway is reachable. Failures warn,
    /// they never stop the app.
    async fn health_check(&self) -> Result<()>;

    /// POSTs one payload and returns the reply text from the first choice.
    /// Non-2xx statuses and application-level `error` fields both fail.
    async fn convert(&self, payload: &ConvertPayload) -> Result<String>;
}

pub type GatewayBox = Box<dyn Gateway + Send + Sync>;
