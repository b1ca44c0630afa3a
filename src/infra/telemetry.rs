use std::sync::Once;

use metrics::{Unit, describe_counter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            "folia_feed_page_total",
            Unit::Count,
            "Total number of full listing pages rendered."
        );
        describe_counter!(
            "folia_feed_append_total",
            Unit::Count,
            "Total number of incremental feed windows served."
        );
        describe_counter!(
            "folia_post_view_total",
            Unit::Count,
            "Total number of post detail pages rendered."
        );
        describe_counter!(
            "folia_not_found_total",
            Unit::Count,
            "Total number of requests resolved to the not-found page."
        );
        describe_counter!(
            "folia_engagement_toggle_total",
            Unit::Count,
            "Total number of like and bookmark toggles."
        );
        describe_counter!(
            "folia_theme_toggle_total",
            Unit::Count,
            "Total number of theme preference changes."
        );
    });
}
