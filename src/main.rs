use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use jarvis::application::ports::LlmClient;
use jarvis::infrastructure::llm::{EchoLlmClient, create_llm_client};
use jarvis::infrastructure::observability::{TracingConfig, init_tracing};
use jarvis::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        &settings.logging,
        environment,
    ));

    let llm_client: Arc<dyn LlmClient> = if settings.scaffold.enabled {
        tracing::warn!("Scaffold mode enabled, model calls are echoed locally");
        Arc::new(EchoLlmClient::new(Duration::from_millis(
            settings.scaffold.mock_response_delay_ms,
        )))
    } else {
        let client = create_llm_client(&settings.llm).context("Failed to build LLM client")?;
        tracing::info!(
            provider = ?settings.llm.provider,
            base_url = %client.base_url(),
            "LLM client configured"
        );
        Arc::new(client)
    };

    if settings.auth_token().is_none() {
        tracing::warn!("No auth token configured, any bearer token is accepted");
    }

    let state = AppState::from_settings(llm_client, &settings);
    tracing::info!(
        vision = %state.vision_service.model(),
        transcription_analysis = %state.transcript_analysis_service.model(),
        synthesis = %state.synthesis_service.model(),
        max_body_bytes = state.max_body_bytes,
        "Models configured"
    );

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
