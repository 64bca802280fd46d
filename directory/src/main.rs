//! Directory entry-point: loads the page, optionally selects a user, and
//! prints the rendered document as HTML.

use std::io::{self, Write};
use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_directory::DirectorySettings;
use employee_directory::domain::DirectoryClient;
use employee_directory::domain::ports::{DirectorySource, FixtureDirectorySource};
use employee_directory::inbound::page::PageController;
use employee_directory::outbound::jsonplaceholder::DirectoryHttpSource;

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load directory settings: {err}"))?;
    let source = build_source(&settings)?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build directory runtime")?;
    let html = runtime.block_on(render_page(source, &settings));

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{html}").wrap_err("failed to write page HTML")?;
    Ok(())
}

fn build_source(settings: &DirectorySettings) -> Result<Arc<dyn DirectorySource>> {
    if settings.offline {
        info!("serving the built-in fixture dataset");
        return Ok(Arc::new(FixtureDirectorySource::sample()));
    }
    let base_url = settings
        .api_base_url()
        .wrap_err("invalid directory API base URL")?;
    info!(base_url = %base_url, "using the directory HTTP API");
    let source = DirectoryHttpSource::new(base_url, settings.request_timeout())
        .wrap_err("failed to build directory HTTP client")?;
    Ok(Arc::new(source))
}

async fn render_page(source: Arc<dyn DirectorySource>, settings: &DirectorySettings) -> String {
    let client = DirectoryClient::new(source).with_policy(settings.id_policy());
    let mut controller = PageController::new(client);
    controller.init_app().await;

    if let Some(user_id) = settings.select_user {
        if controller.choose_user(user_id) == 0 {
            warn!(user_id, "select menu did not accept the selection");
        }
        controller.process_events().await;
    }

    let document = controller.document();
    document.outer_html(document.root())
}
