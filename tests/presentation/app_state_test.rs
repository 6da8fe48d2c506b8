use jarvis::presentation::AppState;

use super::settings_test::valid_settings;
use crate::helpers::{
    RecordingLlmClient, TEST_SYNTHESIS_MODEL, TEST_TRANSCRIPT_MODEL, TEST_VISION_MODEL,
};

#[test]
fn given_settings_when_building_state_then_services_use_configured_models() {
    let state = AppState::from_settings(RecordingLlmClient::replying("unused"), &valid_settings());

    assert_eq!(state.vision_service.model(), TEST_VISION_MODEL);
    assert_eq!(state.transcript_analysis_service.model(), TEST_TRANSCRIPT_MODEL);
    assert_eq!(state.synthesis_service.model(), TEST_SYNTHESIS_MODEL);
}

#[test]
fn given_body_limit_in_settings_when_building_state_then_converted_to_bytes() {
    let mut settings = valid_settings();
    settings.server.max_body_mb = 2;

    let state = AppState::from_settings(RecordingLlmClient::replying("unused"), &settings);

    assert_eq!(state.max_body_bytes, 2 * 1024 * 1024);
}

#[test]
fn given_overflowing_body_limit_when_building_state_then_falls_back_to_default() {
    let mut settings = valid_settings();
    settings.server.max_body_mb = usize::MAX;

    let state = AppState::from_settings(RecordingLlmClient::replying("unused"), &settings);

    assert_eq!(state.max_body_bytes, AppState::DEFAULT_MAX_BODY_BYTES);
}

#[test]
fn given_auth_token_in_settings_when_building_state_then_token_kept() {
    let mut settings = valid_settings();
    settings.auth.token = Some("secret".to_string());

    let state = AppState::from_settings(RecordingLlmClient::replying("unused"), &settings);

    assert_eq!(state.auth_token.as_deref(), Some("secret"));
}
