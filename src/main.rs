//! Smart Room Energy Manager - Main Entry Point
//!
//! In the browser this launches the Dioxus dashboard. Natively it is a small
//! CLI that pre-renders the shared navigation header for a page path.

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    use smart_room_dashboard::app::App;

    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Smart Room dashboard - WASM initialized!".into());
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(
    name = "smart-room-dashboard",
    about = "Pre-render the shared navigation header for a page path"
)]
struct Cli {
    /// Location path used to pick the active link
    #[arg(long, default_value = "/")]
    path: String,

    /// Render with the mobile menu expanded
    #[arg(long)]
    menu_open: bool,

    /// Write the header to this file instead of stdout
    #[arg(long)]
    output: Option<std::path::PathBuf>,
}

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use smart_room_dashboard::cli::{prerender_header, write_output};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let html = prerender_header(&cli.path, cli.menu_open)?;
    write_output(&html, cli.output.as_deref())?;
    Ok(())
}
