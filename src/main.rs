use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doc_chat::api::{create_router, AppState};
use doc_chat::application::{ChatService, ContextBudgeter, CorpusBuilder, WordCountEstimator};
use doc_chat::infrastructure::{extract::FormatExtractor, AppConfig, OpenAiChat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,doc_chat=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    // The corpus is built exactly once; an empty corpus means there is
    // nothing to serve and startup must fail.
    let builder = CorpusBuilder::new(&config.source_dir, Arc::new(FormatExtractor));
    let corpus = builder.build()?;
    info!(
        processed = corpus.processed.len(),
        skipped = corpus.skipped.len(),
        "corpus built"
    );

    let budgeter = ContextBudgeter::new(Arc::new(WordCountEstimator), config.token_budget);
    let context = budgeter.apply(&corpus.text);

    let gateway = Arc::new(OpenAiChat::new(
        &config.llm.base_url,
        &config.llm.api_key,
        &config.llm.model,
        config.llm.max_response_tokens,
    ));
    let chat = Arc::new(ChatService::new(gateway, &config.system_prompt, &context));

    let host = config.server.host.clone();
    let port = config.server.port;
    let state = AppState::new(chat, config);
    let app = create_router(state);

    let addr = SocketAddr::new(host.parse()?, port);
    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
