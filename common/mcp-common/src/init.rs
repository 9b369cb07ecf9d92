//! Server startup
//!
//! Tracing setup and the `serve_stdio!` macro used by each server's `main.rs`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the log output format
pub const LOG_FORMAT_ENV_VAR: &str = "LOG_FORMAT";

/// Initialize tracing for an MCP server
///
/// Logs go to stderr because stdout carries the MCP protocol. `RUST_LOG`
/// controls filtering on top of a default of `info` for `crate_name`.
/// `LOG_FORMAT=json` switches to one JSON object per line; otherwise plain
/// text without ANSI colors.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    if json_requested() {
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

fn json_requested() -> bool {
    std::env::var(LOG_FORMAT_ENV_VAR)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Generate `main` for a stdio MCP server
///
/// The server type must provide `fn new() -> anyhow::Result<Self>`. A failing
/// constructor (e.g. the database schema could not be created) aborts startup
/// before anything is served.
///
/// ```rust,ignore
/// mcp_common::serve_stdio!(ExpenseMcpServer, "expense_mcp");
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($server_type:ty, $crate_name:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = match <$server_type>::new() {
                Ok(server) => server,
                Err(e) => {
                    tracing::error!("Startup failed: {:#}", e);
                    return Err(e);
                }
            };
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}
