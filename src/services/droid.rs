use thirtyfour::{error::WebDriverError, DesiredCapabilities, WebDriver};

use crate::configuration::WebdriverSettings;

/// Closed set of browser engines a session can be opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Edge,
}

impl Browser {
    pub fn label(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
        }
    }
}

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    /// Open a maximized session against the configured WebDriver endpoint.
    pub async fn new(
        browser: Browser,
        settings: &WebdriverSettings,
    ) -> Result<Self, WebDriverError> {
        let server_url = settings.server_url.as_str();
        let driver = match browser {
            Browser::Chrome => WebDriver::new(server_url, DesiredCapabilities::chrome()).await?,
            Browser::Edge => WebDriver::new(server_url, DesiredCapabilities::edge()).await?,
        };

        // The remote session is live from here on; dropping the driver does
        // not end it, so a failed setup step must still quit.
        if let Err(e) = driver.maximize_window().await {
            if let Err(quit_err) = driver.quit().await {
                log::warn!("Failed to close browser session: {:?}", quit_err);
            }
            return Err(e);
        }

        Ok(Droid { driver })
    }

    /// Shut the browser down. Quit failures are logged, not propagated.
    pub async fn quit(self) {
        if let Err(e) = self.driver.quit().await {
            log::warn!("Failed to close browser session: {:?}", e);
        }
    }
}
