pub mod droid;
pub mod login_runner;
pub mod price_scraper;
#[cfg(test)]
pub(crate) mod stub_webdriver;

pub use droid::*;
pub use login_runner::*;
pub use price_scraper::*;
