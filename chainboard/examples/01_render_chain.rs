use std::sync::Arc;

use chainboard::{Dashboard, OPTION_CHAIN_CONTAINER_ID, Page};
use chainboard_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build the dashboard against the CI-safe mock source. Swap in
    //    chainboard_http::HttpSource::builder("http://localhost:8000").build()?
    //    to hit a real backend.
    let dashboard = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    // 2. A page carrying the container the dashboard template reserves.
    let mut page = Page::new().with_container(OPTION_CHAIN_CONTAINER_ID);

    // 3. One fetch, one render.
    dashboard.render_option_chain(&mut page).await?;

    let container = page
        .container(OPTION_CHAIN_CONTAINER_ID)
        .expect("container exists");
    println!("{}", container.inner_html());

    Ok(())
}
