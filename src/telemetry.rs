use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::ObservabilityConfig;

/// Initialize structured logging
///
/// `RUST_LOG` wins over the configured level. JSON output includes the current
/// span so flow session ids land on every event.
pub fn init_telemetry(observability: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&observability.log_level));

    let json_layer = observability.json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!observability.json_logs)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    tracing::debug!(
        log_level = %observability.log_level,
        json = observability.json_logs,
        "Welcome flow telemetry initialized"
    );
    Ok(())
}

/// Generate an id that ties together all events of one flow run
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common flow attributes
pub fn create_flow_span(operation: &str, identity_key: &str, session_id: &str) -> tracing::Span {
    tracing::info_span!(
        "welcome_flow",
        operation = operation,
        flow.key = identity_key,
        session.id = session_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
