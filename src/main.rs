use std::{process, sync::Arc};

use folia::{
    application::{
        chrome::ChromeService, detail::DetailService, engagement::EngagementService,
        error::AppError, feed::FeedService, repos::PostsRepo,
    },
    config,
    infra::{
        error::InfraError,
        http::{self, HttpState},
        store::StaticPostStore,
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let state = build_http_state(&settings);
    serve_http(&settings, state).await
}

fn build_http_state(settings: &config::Settings) -> HttpState {
    let posts: Arc<dyn PostsRepo> = Arc::new(StaticPostStore);

    let feed = Arc::new(FeedService::new(posts.clone(), settings.feed.clone()));
    let engagement = Arc::new(EngagementService::new(posts.clone()));
    let detail = Arc::new(DetailService::new(
        posts.clone(),
        feed.as_ref().clone(),
        engagement.as_ref().clone(),
    ));
    let chrome = Arc::new(ChromeService::new(settings.site.clone()));

    HttpState {
        feed,
        detail,
        engagement,
        chrome,
    }
}

async fn serve_http(settings: &config::Settings, state: HttpState) -> Result<(), AppError> {
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.public_addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "folia::serve",
        addr = %settings.server.public_addr,
        "Listening"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install shutdown signal handler");
        return;
    }
    info!(target = "folia::serve", "Shutdown signal received");
}
