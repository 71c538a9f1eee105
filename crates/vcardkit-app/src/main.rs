use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vcardkit_app::render::{render, write_output};
use vcardkit_core::config::load_config;
use vcardkit_rfc::rfc::vcard::parse_file;

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config(std::env::args().nth(1))?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let input = config.input.require_path()?;
    let cards = parse_file(input)?;

    tracing::info!(path = %input.display(), count = cards.len(), "Parsed vCards");

    let output = render(&cards, config.output.format)?;
    write_output(&output, config.output.path.as_deref())?;

    Ok(())
}
