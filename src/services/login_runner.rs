use std::time::Duration;

use anyhow::Context;
use thirtyfour::prelude::*;

use crate::{
    configuration::Settings,
    domain::{login_cases, LoginCase, LoginOutcome},
    services::{Browser, Droid},
};

const LOGIN_URL: &str = "https://tr.pandora.net/tr/login/";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the full scenario table on each browser engine. Every case runs even
/// when an earlier one fails; each failure is logged with its case context
/// and the suite returns an aggregate error at the end.
pub async fn run_login_suite(settings: &Settings) -> anyhow::Result<()> {
    let mut failures: Vec<String> = Vec::new();

    for browser in [Browser::Chrome, Browser::Edge] {
        for case in login_cases() {
            let label = format!(
                "case {:?} for user '{}' on {}",
                case.expected,
                case.username,
                browser.label()
            );
            match run_login_case(browser, &case, settings).await {
                Ok(()) => log::info!("Outcome confirmed for {}", label),
                Err(e) => {
                    log::error!("Failed {}: {:?}", label, e);
                    failures.push(label);
                }
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        anyhow::bail!(
            "{} login case(s) failed: {}",
            failures.len(),
            failures.join("; ")
        )
    }
}

async fn run_login_case(
    browser: Browser,
    case: &LoginCase,
    settings: &Settings,
) -> anyhow::Result<()> {
    let droid = Droid::new(browser, &settings.webdriver)
        .await
        .context("failed to open browser session")?;

    // Teardown runs whether the case passed or not.
    let outcome = drive_login_case(&droid.driver, case, settings).await;
    droid.quit().await;

    outcome
}

async fn drive_login_case(
    driver: &WebDriver,
    case: &LoginCase,
    settings: &Settings,
) -> anyhow::Result<()> {
    let implicit_wait = Duration::from_secs(settings.webdriver.implicit_wait_secs);
    driver.set_implicit_wait_timeout(implicit_wait).await?;

    driver.goto(LOGIN_URL).await?;

    let username_field = driver.find(By::Id("login-form-email")).await?;
    let password_field = driver.find(By::Id("login-form-password")).await?;
    let login_button = driver
        .find(By::Css("button[data-auto='btnSubmitLogin']"))
        .await?;

    username_field.clear().await?;
    username_field.send_keys(case.username).await?;
    password_field.clear().await?;
    password_field.send_keys(case.password).await?;

    // Submit through script; the overlay on this page intercepts native
    // clicks on the button.
    let script_args: Vec<serde_json::Value> = vec![login_button.to_json()?];
    driver.execute("arguments[0].click();", script_args).await?;

    let (marker, description) = match case.expected {
        LoginOutcome::Success => (By::ClassName("card-detail-info"), "success indicator"),
        LoginOutcome::Failure => (By::ClassName("alert-danger"), "error indicator"),
        LoginOutcome::EmptyValidation => {
            (By::ClassName("invalid-feedback"), "validation indicator")
        }
    };

    let indicator = driver
        .query(marker)
        .wait(implicit_wait, POLL_INTERVAL)
        .first()
        .await
        .with_context(|| format!("expected {}, but none appeared", description))?;

    let displayed = indicator.is_displayed().await?;
    anyhow::ensure!(displayed, "{} is present but not visible", description);

    Ok(())
}
