use jarvis::application::prompts::TRANSCRIPT_ANALYSIS_SYSTEM_PROMPT;
use jarvis::application::services::{AnalysisError, TranscriptAnalysisService};
use jarvis::domain::{ChatMessage, MessageRole};

use crate::helpers::{RecordingLlmClient, TEST_TRANSCRIPT_MODEL};

#[tokio::test]
async fn given_transcript_when_analyzing_then_sends_system_then_user_message() {
    let client = RecordingLlmClient::replying(r#"{"domain": "business"}"#);
    let service = TranscriptAnalysisService::new(client.clone(), TEST_TRANSCRIPT_MODEL.to_string());
    let transcript = "Let's schedule a meeting for next Tuesday.";

    let analysis = service.analyze(transcript, None).await.unwrap();

    assert_eq!(analysis, r#"{"domain": "business"}"#);
    let call = client.single_call();
    assert_eq!(call.model, TEST_TRANSCRIPT_MODEL);
    assert_eq!(
        call.messages,
        vec![
            ChatMessage::system(TRANSCRIPT_ANALYSIS_SYSTEM_PROMPT),
            ChatMessage::user(transcript),
        ]
    );
}

#[tokio::test]
async fn given_custom_prompt_when_analyzing_then_replaces_system_prompt() {
    let client = RecordingLlmClient::replying("ok");
    let service = TranscriptAnalysisService::new(client.clone(), TEST_TRANSCRIPT_MODEL.to_string());

    service
        .analyze("hello there", Some("Summarize in one word"))
        .await
        .unwrap();

    let call = client.single_call();
    assert_eq!(call.messages[0].role, MessageRole::System);
    assert_eq!(call.messages[0].text(), "Summarize in one word");
}

#[tokio::test]
async fn given_whitespace_transcript_when_analyzing_then_invalid_input() {
    let client = RecordingLlmClient::replying("unused");
    let service = TranscriptAnalysisService::new(client.clone(), TEST_TRANSCRIPT_MODEL.to_string());

    let result = service.analyze(" \n\t", None).await;

    assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    assert!(client.calls().is_empty());
}
