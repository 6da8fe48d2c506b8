use jarvis::application::prompts::SYNTHESIS_SYSTEM_PROMPT;
use jarvis::application::services::{AnalysisError, SynthesisService, format_synthesis_message};
use jarvis::domain::ChatMessage;

use crate::helpers::{RecordingLlmClient, TEST_SYNTHESIS_MODEL};

#[test]
fn given_two_frames_when_formatting_then_numbers_frames_from_one() {
    let message = format_synthesis_message(
        r#"{"context": "asking"}"#,
        &[r#"{"hazard": "none"}"#.to_string(), r#"{"hazard": "car"}"#.to_string()],
    );

    assert_eq!(
        message,
        "Transcription Analysis:\n{\"context\": \"asking\"}\n\n\
         Surrounding Visual Analysis:\n\
         Frame 1: {\"hazard\": \"none\"}\n\
         Frame 2: {\"hazard\": \"car\"}"
    );
}

#[test]
fn given_no_frames_when_formatting_then_visual_section_is_empty() {
    let message = format_synthesis_message("ta", &[]);

    assert_eq!(
        message,
        "Transcription Analysis:\nta\n\nSurrounding Visual Analysis:\n"
    );
}

#[tokio::test]
async fn given_analyses_when_synthesizing_then_uses_fixed_system_prompt() {
    let client = RecordingLlmClient::replying("The counter is in front of you.");
    let service = SynthesisService::new(client.clone(), TEST_SYNTHESIS_MODEL.to_string());
    let frames = vec![r#"{"objects": ["counter front 3 m"]}"#.to_string()];

    let response = service.synthesize("where is it", &frames).await.unwrap();

    assert_eq!(response, "The counter is in front of you.");
    let call = client.single_call();
    assert_eq!(call.model, TEST_SYNTHESIS_MODEL);
    assert_eq!(
        call.messages,
        vec![
            ChatMessage::system(SYNTHESIS_SYSTEM_PROMPT),
            ChatMessage::user(format_synthesis_message("where is it", &frames)),
        ]
    );
}

#[tokio::test]
async fn given_frames_without_transcript_when_synthesizing_then_still_calls_model() {
    let client = RecordingLlmClient::replying("ok");
    let service = SynthesisService::new(client.clone(), TEST_SYNTHESIS_MODEL.to_string());

    let result = service.synthesize("", &["{}".to_string()]).await;

    assert!(result.is_ok());
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn given_nothing_to_synthesize_when_synthesizing_then_invalid_input() {
    let client = RecordingLlmClient::replying("unused");
    let service = SynthesisService::new(client.clone(), TEST_SYNTHESIS_MODEL.to_string());

    let result = service.synthesize("  ", &[]).await;

    assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    assert!(client.calls().is_empty());
}

#[test]
fn given_builtin_prompt_when_reading_then_examples_use_plain_quotes() {
    assert!(!SYNTHESIS_SYSTEM_PROMPT.contains("\\\""));
    assert!(
        SYNTHESIS_SYSTEM_PROMPT
            .contains(r#""transcription_analysis": "{"context": "User asking about nearby objects""#)
    );
}
