use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use guidepost_core::gateways::feedback_analysis::{
    AnalysisError, AnalysisRequest, FeedbackAnalysis, FeedbackAnalysisGateway,
};
use guidepost_entities::rating::SentimentScore;

/// Instructs the model to answer with nothing but the expected JSON
/// document. The response is parsed strictly, anything else fails the
/// analysis.
const SYSTEM_PROMPT: &str = "\
You are an assistant that evaluates traveler feedback about a tour guide. \
Analyze all provided feedback texts and images of feedback documents. \
Respond with a single JSON object and nothing else, using exactly these fields: \
{\"summary\": string, \"sentiment_score\": integer between 0 and 100, \
\"strengths\": array of exactly 3 short strings, \"improvements\": string, \
\"red_flags\": boolean}. \
Set red_flags to true only for serious misconduct mentioned in the feedback.";

#[derive(Debug, Clone)]
pub struct GenerativeModelConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

/// Client for an OpenAI-compatible chat completions endpoint with a
/// JSON-constrained response format.
pub struct GenerativeModelGateway {
    client: reqwest::blocking::Client,
    config: GenerativeModelConfig,
}

impl GenerativeModelGateway {
    pub fn new(config: GenerativeModelConfig) -> Self {
        // Intentionally no request timeout: a slow model call stalls
        // only the single triggering request.
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .expect("HTTP client");
        Self { client, config }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: serde_json::Value,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct AnalysisPayload {
    summary: String,
    sentiment_score: i64,
    strengths: Vec<String>,
    improvements: String,
    red_flags: bool,
}

fn user_content(request: &AnalysisRequest) -> serde_json::Value {
    let mut parts = Vec::with_capacity(1 + request.images.len());
    let mut text = String::from("Traveler feedback about the guide:\n");
    for (i, feedback) in request.texts.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, feedback));
    }
    parts.push(serde_json::json!({ "type": "text", "text": text }));
    for image in &request.images {
        let data_url = format!("data:{};base64,{}", image.media_type, image.base64_data);
        parts.push(serde_json::json!({
            "type": "image_url",
            "image_url": { "url": data_url },
        }));
    }
    serde_json::Value::Array(parts)
}

fn parse_analysis(content: &str) -> Result<FeedbackAnalysis, AnalysisError> {
    let AnalysisPayload {
        summary,
        sentiment_score,
        strengths,
        improvements,
        red_flags,
    } = serde_json::from_str(content)
        .map_err(|err| AnalysisError::MalformedResponse(anyhow!(err)))?;
    Ok(FeedbackAnalysis {
        summary,
        sentiment_score: SentimentScore::clamped(sentiment_score),
        strengths,
        improvements,
        red_flags,
    })
}

impl FeedbackAnalysisGateway for GenerativeModelGateway {
    fn analyze(&self, request: &AnalysisRequest) -> Result<FeedbackAnalysis, AnalysisError> {
        debug_assert!(!request.is_empty());
        let chat_request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: serde_json::Value::String(SYSTEM_PROMPT.to_string()),
                },
                ChatMessage {
                    role: "user",
                    content: user_content(request),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        log::debug!(
            "Requesting feedback analysis from model '{}' ({} texts, {} images)",
            self.config.model,
            request.texts.len(),
            request.images.len()
        );
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&chat_request)
            .send()
            .map_err(|err| AnalysisError::Transport(anyhow!(err)))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AnalysisError::Transport(anyhow!(
                "Analysis provider responded with {status}: {body}"
            )));
        }
        let chat_response: ChatResponse = response
            .json()
            .map_err(|err| AnalysisError::MalformedResponse(anyhow!(err)))?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AnalysisError::MalformedResponse(anyhow!("Response contains no choices"))
            })?;
        parse_analysis(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_analysis() {
        let content = r#"{
            "summary": "Guests loved the guide",
            "sentiment_score": 87,
            "strengths": ["local knowledge", "punctuality", "humor"],
            "improvements": "Slow down when walking uphill",
            "red_flags": false
        }"#;
        let analysis = parse_analysis(content).unwrap();
        assert_eq!(analysis.summary, "Guests loved the guide");
        assert_eq!(u8::from(analysis.sentiment_score), 87);
        assert_eq!(analysis.strengths.len(), 3);
        assert!(!analysis.red_flags);
    }

    #[test]
    fn out_of_range_sentiment_score_is_clamped() {
        let content = r#"{
            "summary": "s",
            "sentiment_score": 140,
            "strengths": [],
            "improvements": "",
            "red_flags": true
        }"#;
        let analysis = parse_analysis(content).unwrap();
        assert_eq!(u8::from(analysis.sentiment_score), 100);
    }

    #[test]
    fn non_json_response_fails() {
        assert!(matches!(
            parse_analysis("The guide was great!"),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }

    #[test]
    fn missing_fields_fail() {
        assert!(matches!(
            parse_analysis(r#"{"summary": "s"}"#),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }

    #[test]
    fn images_are_passed_as_data_urls() {
        use guidepost_core::gateways::feedback_analysis::InlineImage;
        let request = AnalysisRequest {
            texts: vec!["great".into()],
            images: vec![InlineImage {
                base64_data: "QUJD".into(),
                media_type: "image/png".into(),
            }],
        };
        let content = user_content(&request);
        let parts = content.as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[1]["image_url"]["url"].as_str().unwrap(),
            "data:image/png;base64,QUJD"
        );
    }
}
