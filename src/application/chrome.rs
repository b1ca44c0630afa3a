//! Layout chrome: brand, navigation, footer, page meta and theme.
//!
//! The theme is deliberately not an ambient global; it is resolved from the
//! request's cookie and threaded through the layout context like any other
//! view-model field.

use crate::config::SiteSettings;
use crate::presentation::views::{
    BrandView, FooterView, LayoutChrome, NavigationLinkView, NavigationView, PageMetaView,
};

/// Reader-selected color scheme. `Auto` defers to the host environment's
/// `prefers-color-scheme` signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemePreference {
    pub fn from_cookie(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::Auto,
        }
    }

    /// Value rendered into the `data-theme` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// The mode the navbar toggle switches to next. `Auto` offers dark,
    /// matching a light-first default.
    pub fn toggle_target(self) -> &'static str {
        match self {
            Self::Dark => "light",
            Self::Light | Self::Auto => "dark",
        }
    }
}

#[derive(Clone)]
pub struct ChromeService {
    site: SiteSettings,
}

impl ChromeService {
    pub fn new(site: SiteSettings) -> Self {
        Self { site }
    }

    pub fn load(&self, theme: ThemePreference) -> LayoutChrome {
        LayoutChrome {
            brand: BrandView {
                title: self.site.brand_title.clone(),
                href: "/blogs".to_string(),
            },
            navigation: NavigationView {
                entries: vec![NavigationLinkView {
                    label: "Blog".to_string(),
                    href: "/blogs".to_string(),
                }],
            },
            footer: FooterView {
                copy: self.site.footer_copy.clone(),
            },
            meta: PageMetaView {
                title: self.site.meta_title.clone(),
                description: self.site.meta_description.clone(),
            },
            theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_values_map_to_preferences() {
        assert_eq!(
            ThemePreference::from_cookie(Some("dark")),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemePreference::from_cookie(Some("light")),
            ThemePreference::Light
        );
        assert_eq!(ThemePreference::from_cookie(None), ThemePreference::Auto);
        assert_eq!(
            ThemePreference::from_cookie(Some("sepia")),
            ThemePreference::Auto
        );
    }

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(ThemePreference::Dark.toggle_target(), "light");
        assert_eq!(ThemePreference::Light.toggle_target(), "dark");
        assert_eq!(ThemePreference::Auto.toggle_target(), "dark");
    }
}
