use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

// site configuration
//
// identity and contact details shown on the page.  timing and layout constants live next to
// the code that uses them (scroll::LOOK_AHEAD_PX, form::BANNER_DURATION)
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub brand: String,
    pub brand_mark: String,
    pub company: String,
    pub copyright_holder: String,
    pub tagline: String,
    pub contact: ContactConfig,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub network: Network,
    pub href: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub enum Network {
    LinkedIn,
    GitHub,
}

impl Network {
    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::LinkedIn => "social-linkedin",
            Self::GitHub => "social-github",
        }
    }
}

// the config table lives under [config] so the file can grow other tables later
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

impl SiteConfig {
    pub fn parse(doc: &str) -> anyhow::Result<Self> {
        let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;
        Ok(data.config)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        debug!("reading embedded site config");
        Self::parse(EMBEDDED_CONFIG)
    }

    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.copyright_holder)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            brand: "inxcode".to_owned(),
            brand_mark: "∞".to_owned(),
            company: "INXCODE".to_owned(),
            copyright_holder: "INXCODE Pvt Ltd".to_owned(),
            tagline: String::new(),
            contact: ContactConfig {
                email: String::new(),
                phone: String::new(),
                location: String::new(),
            },
            social: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::embedded().unwrap();

        assert_eq!(config.brand, "inxcode");
        assert_eq!(config.contact.email, "inxcode@gmail.com");
        assert_eq!(
            config.social.iter().map(|s| s.network).collect::<Vec<_>>(),
            [Network::LinkedIn, Network::GitHub]
        );
    }

    #[test]
    fn social_is_optional() {
        let doc = r#"
            [config]
            brand = "acme"
            brand_mark = "*"
            company = "ACME"
            copyright_holder = "ACME Ltd"
            tagline = "things"

            [config.contact]
            email = "hi@acme.test"
            phone = "0"
            location = "nowhere"
        "#;

        let config = SiteConfig::parse(doc).unwrap();
        assert!(config.social.is_empty());
        assert_eq!(config.copyright_line(2025), "© 2025 ACME Ltd. All rights reserved.");
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = SiteConfig::parse("brand = \"acme\"").unwrap_err();
        assert!(err.to_string().contains("site config"));
    }
}
