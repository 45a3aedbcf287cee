//! Tracing setup for stdio servers

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber, writing to stderr
///
/// stdout carries the MCP protocol, so nothing may be logged there. `RUST_LOG`
/// narrows or widens the filter; `crate_name` is always at least `info`.
/// `LOG_FORMAT=json` switches to one JSON object per line.
///
/// Fails if the directive does not parse or a subscriber is already set.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(format!("{crate_name}=info").parse()?);
    let registry = tracing_subscriber::registry().with(filter);

    if json_logs_requested(std::env::var("LOG_FORMAT").ok().as_deref()) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn json_logs_requested(log_format: Option<&str>) -> bool {
    log_format.is_some_and(|v| v.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_selection() {
        assert!(json_logs_requested(Some("json")));
        assert!(json_logs_requested(Some("JSON")));
        assert!(!json_logs_requested(Some("text")));
        assert!(!json_logs_requested(None));
    }
}
