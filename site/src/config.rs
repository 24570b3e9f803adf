use serde::Deserialize;

use crate::content::SiteContent;

pub const DEFAULT_ADMIN_SECRET: &str = "123465";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // shared secret for the admin editor
    pub admin_secret: String,

    // address named in the (simulated) contact notification
    pub notify_recipient: String,

    // how long the simulated notification takes to "send"
    pub notify_delay_ms: u32,

    // how long the contact form shows its success state before going idle
    pub status_reset_ms: u32,

    // preset colors offered by the admin theme picker
    pub palette: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            admin_secret: String::from(DEFAULT_ADMIN_SECRET),
            notify_recipient: SiteContent::default().contact.email,
            notify_delay_ms: 1500,
            status_reset_ms: 3000,
            palette: ["#0d9488", "#C5A059", "#3b82f6", "#be123c", "#7c3aed"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SiteConfig {
    // keys missing from the file keep their compiled-in defaults
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text)
            .map_err(|err| anyhow::Error::msg(format!("failed to parse site config: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(SiteConfig::from_toml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = SiteConfig::from_toml(
            r##"
            notify_delay_ms = 10
            palette = ["#000000"]
            "##,
        )
        .unwrap();

        assert_eq!(config.notify_delay_ms, 10);
        assert_eq!(config.palette, vec![String::from("#000000")]);
        assert_eq!(config.admin_secret, DEFAULT_ADMIN_SECRET);
        assert_eq!(config.status_reset_ms, 3000);
    }

    #[test]
    fn bad_types_are_rejected() {
        assert!(SiteConfig::from_toml("notify_delay_ms = \"soon\"").is_err());
    }
}
