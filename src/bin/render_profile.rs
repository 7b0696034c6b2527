// Preview binary: populate a page template from the profile document.
//
// Purpose: inspect what the renderers produce without a browser
// Usage: PROFILE_TEMPLATE=site/index.html cargo run --bin render_profile

use std::path::Path;

use anyhow::{bail, Context};
use profile_page::{init, RenderConfig, StaticDom};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // Default log level: info for our crate, warn for others
                .unwrap_or_else(|_| "profile_page=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment variables
    // The data path resolves against the template's directory, like the page's own URL.
    let template_path = std::env::var("PROFILE_TEMPLATE").unwrap_or_else(|_| "index.html".to_string());
    let out_path = std::env::var("PROFILE_OUT").unwrap_or_else(|_| "preview.html".to_string());
    let config = RenderConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PROFILE_TEMPLATE: {}", template_path);
    tracing::info!("  PROFILE_DATA: {}", config.data_path);
    tracing::info!("  PROFILE_OUT: {}", out_path);

    let template = tokio::fs::read_to_string(&template_path)
        .await
        .with_context(|| format!("reading template {}", template_path))?;
    let mut dom = StaticDom::from_template(template);

    let base = Path::new(&template_path)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .filter(|p| !p.is_empty());

    let Some(page) = init(&mut dom, config, base.as_deref()).await else {
        bail!("profile document could not be loaded; template left unrendered");
    };

    for (section, outcome) in &page.report().sections {
        tracing::info!("  {:<13} {:?}", section, outcome);
    }

    tokio::fs::write(&out_path, dom.to_html())
        .await
        .with_context(|| format!("writing {}", out_path))?;
    tracing::info!("Wrote {}", out_path);

    Ok(())
}
