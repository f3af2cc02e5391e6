use std::fmt;

use serde::{Deserialize, Serialize};

// the content sections of the page, in the order they appear
//
// the declaration order doubles as the priority order used by the scroll tracker, so do not
// reorder these without also reordering the markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    // element id of the section, also used as the url fragment
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }

    pub fn fragment(self) -> String {
        format!("#{}", self.id())
    }

    // accepts both "#about" (as returned by location.hash) and a bare "about"
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order_is_page_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "services", "portfolio", "contact"]);
        assert!(Section::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn fragment_parsing() {
        assert_eq!(Section::from_fragment("#services"), Some(Section::Services));
        assert_eq!(Section::from_fragment("contact"), Some(Section::Contact));
        assert_eq!(Section::from_fragment(""), None);
        assert_eq!(Section::from_fragment("#"), None);
        assert_eq!(Section::from_fragment("#Contact"), None);
        assert_eq!(Section::Portfolio.fragment(), "#portfolio");
    }
}
