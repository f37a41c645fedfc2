//! heronav-web - Leptos header component and preview server

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod scroll;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
pub use components::HeroHeader;

#[cfg(feature = "ssr")]
pub use router::{create_router, PreviewState};

/// Run the preview server
#[cfg(feature = "ssr")]
pub async fn run(state: PreviewState, port: u16) -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::info;

    let router = create_router(Arc::new(state));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Preview server listening on http://{}", addr);
    println!("Preview server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
