pub mod dom;
pub mod notify;
pub mod upload;
pub mod style;

use chrono::{Datelike, Local, NaiveDate};
use tracing::error;

use site::SiteConfig;

const SITE_TOML: &str = include_str!("../../site.toml");

pub fn load_config() -> SiteConfig {
    match SiteConfig::from_toml(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}; falling back to built-in settings");
            SiteConfig::default()
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_year() -> i32 {
    Local::now().year()
}
