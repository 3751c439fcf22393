use std::time::Duration;

use thirtyfour::prelude::*;

use crate::{
    configuration::Settings,
    domain::{dedupe_prices, parse_price, render_report, SiteResult},
    services::{Browser, Droid},
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The three retailers the price flow queries, with their hardcoded entry
/// points and selectors. The selectors track each site's live markup and are
/// expected to rot; a scrape that finds nothing is a per-site empty result,
/// never a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Pazarama,
    Trendyol,
    Akakce,
}

impl Site {
    pub const ALL: [Site; 3] = [Site::Pazarama, Site::Trendyol, Site::Akakce];

    pub fn label(&self) -> &'static str {
        match self {
            Site::Pazarama => "Pazarama",
            Site::Trendyol => "Trendyol",
            Site::Akakce => "Akakce",
        }
    }

    fn home_url(&self) -> &'static str {
        match self {
            Site::Pazarama => "https://www.pazarama.com/",
            Site::Trendyol => "https://www.trendyol.com/",
            Site::Akakce => "https://www.akakce.com/",
        }
    }

    fn search_input(&self) -> By {
        match self {
            Site::Pazarama => By::Id("label-input"),
            Site::Trendyol => By::Css("input[data-testid='suggestion']"),
            Site::Akakce => By::Css("input[name='q']"),
        }
    }

    fn price_elements(&self) -> By {
        match self {
            Site::Pazarama => By::Css(".leading-tight"),
            Site::Trendyol => By::ClassName("prc-box-dscntd"),
            Site::Akakce => By::ClassName("pt_v8"),
        }
    }
}

/// Scrape one retailer on its own session. Any failure inside the session is
/// contained here: the site contributes an empty list and the run goes on.
pub async fn scrape_site(site: Site, settings: &Settings) -> SiteResult {
    let droid = match Droid::new(Browser::Chrome, &settings.webdriver).await {
        Ok(droid) => droid,
        Err(e) => {
            log::error!("Failed to open session for {}: {:?}", site.label(), e);
            return SiteResult::empty(site.label());
        }
    };

    let prices = match collect_prices(&droid.driver, site, settings).await {
        Ok(prices) => prices,
        Err(e) => {
            log::error!("Error scraping {}: {:?}", site.label(), e);
            vec![]
        }
    };
    droid.quit().await;

    SiteResult {
        label: site.label(),
        prices,
    }
}

async fn collect_prices(
    driver: &WebDriver,
    site: Site,
    settings: &Settings,
) -> WebDriverResult<Vec<f64>> {
    let input_wait = Duration::from_secs(settings.webdriver.input_wait_secs);
    let price_wait = Duration::from_secs(settings.webdriver.price_wait_secs);

    driver.goto(site.home_url()).await?;

    let search_input = driver
        .query(site.search_input())
        .wait(input_wait, POLL_INTERVAL)
        .first()
        .await?;
    search_input
        .wait_until()
        .wait(input_wait, POLL_INTERVAL)
        .clickable()
        .await?;
    search_input.clear().await?;
    search_input.send_keys(&settings.scrape.search_product).await?;
    search_input.send_keys(Key::Enter + "").await?;

    // Grace period for client-side rendering of the result grid before the
    // condition-based wait takes over.
    tokio::time::sleep(Duration::from_secs(settings.webdriver.settle_delay_secs)).await;

    let price_elements = driver
        .query(site.price_elements())
        .wait(price_wait, POLL_INTERVAL)
        .all_from_selector_required()
        .await?;

    let mut prices = Vec::new();
    for element in price_elements {
        let text = element.text().await?;
        if let Some(price) = parse_price(&text) {
            prices.push(price);
        }
    }

    let prices = dedupe_prices(prices, settings.scrape.max_search_results);
    log::info!("Found {} prices on {}", prices.len(), site.label());

    Ok(prices)
}

/// Run the three site scrapes on independent sessions and render the report.
/// The scrapes run concurrently; a failed site never blocks the others, and
/// the report always lists sites in fixed order.
pub async fn run_price_report(settings: &Settings) -> String {
    let (pazarama, trendyol, akakce) = tokio::join!(
        scrape_site(Site::Pazarama, settings),
        scrape_site(Site::Trendyol, settings),
        scrape_site(Site::Akakce, settings),
    );

    render_report(&settings.scrape.search_product, &[pazarama, trendyol, akakce])
}
