//! Every way a render can fail is a typed error, and a failed render never
//! touches the page.

use std::sync::Arc;

use chainboard::{ChainboardError, Dashboard, OPTION_CHAIN_CONTAINER_ID, Page};
use chainboard_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A backend outage, as the renderer sees it.
    let down = Dashboard::builder()
        .with_source(Arc::new(MockSource::failing(ChainboardError::source(
            "chainboard-mock",
            "connection refused",
        ))))
        .build()?;

    let mut page = Page::new().with_container(OPTION_CHAIN_CONTAINER_ID);
    match down.render_option_chain(&mut page).await {
        Ok(()) => println!("unexpected success"),
        Err(err) => println!("fetch failed: {err}"),
    }

    // The page still renders its previous state (here: empty containers).
    let container = page
        .container(OPTION_CHAIN_CONTAINER_ID)
        .expect("container exists");
    println!("container after failure: {:?}", container.inner_html());

    // A page that lacks the designated container fails the same explicit way.
    let healthy = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;
    let mut bare_page = Page::new();
    match healthy.render_option_chain(&mut bare_page).await {
        Ok(()) => println!("unexpected success"),
        Err(err) => println!("render failed: {err}"),
    }

    Ok(())
}
