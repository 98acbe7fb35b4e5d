//! Client route table.
//!
//! Paths are relative to an optional deployment basename such as `/camply`.

use std::fmt;

/// Pages reachable in the web client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// `/`
    Home,
    /// `/providers`
    Providers,
    /// `/how-it-works`
    HowItWorks,
    /// `/ethos`
    Ethos,
    /// `/contribute`
    Contribute,
    /// `/faq`
    Faq,
    /// `/privacy`
    Privacy,
    /// `/terms`
    Terms,
    /// `/contact`
    Contact,
    /// Sign-in page rendered without the site layout.
    Auth,
    /// `/rec-areas/{provider_id}/{id}`
    RecreationArea {
        /// Owning provider.
        provider_id: i32,
        /// Provider-scoped area id.
        id: String,
    },
    /// `/campgrounds/{provider_id}/{id}`
    Campground {
        /// Owning provider.
        provider_id: i32,
        /// Provider-scoped campground id.
        id: String,
    },
    /// Any path without a page; holds the unmatched path.
    NotFound(String),
}

const STATIC_ROUTES: [(&str, AppRoute); 10] = [
    ("/", AppRoute::Home),
    ("/providers", AppRoute::Providers),
    ("/how-it-works", AppRoute::HowItWorks),
    ("/ethos", AppRoute::Ethos),
    ("/contribute", AppRoute::Contribute),
    ("/faq", AppRoute::Faq),
    ("/privacy", AppRoute::Privacy),
    ("/terms", AppRoute::Terms),
    ("/contact", AppRoute::Contact),
    ("/auth", AppRoute::Auth),
];

fn normalise_basename(basename: &str) -> &str {
    basename.trim_end_matches('/')
}

impl AppRoute {
    /// Resolve a browser path, stripping `basename` first.
    ///
    /// Query strings and fragments are ignored. A trailing slash is accepted.
    ///
    /// # Examples
    /// ```
    /// use camply_client::AppRoute;
    ///
    /// assert_eq!(
    ///     AppRoute::parse("/camply/campgrounds/1/232447", "/camply/"),
    ///     AppRoute::Campground { provider_id: 1, id: "232447".to_owned() },
    /// );
    /// assert_eq!(AppRoute::parse("/faq/", ""), AppRoute::Faq);
    /// ```
    #[must_use]
    pub fn parse(path: &str, basename: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let basename = normalise_basename(basename);
        let relative = match path.strip_prefix(basename) {
            Some(rest) if basename.is_empty() || rest.is_empty() || rest.starts_with('/') => rest,
            _ => return Self::NotFound(path.to_owned()),
        };
        let trimmed = relative.trim_end_matches('/');
        let relative = if trimmed.is_empty() { "/" } else { trimmed };

        if let Some((_, route)) = STATIC_ROUTES
            .iter()
            .find(|(candidate, _)| *candidate == relative)
        {
            return route.clone();
        }

        let segments: Vec<&str> = relative.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["rec-areas", provider, id] => {
                Self::entity(provider, id, relative, |provider_id, id| {
                    Self::RecreationArea { provider_id, id }
                })
            }
            ["campgrounds", provider, id] => {
                Self::entity(provider, id, relative, |provider_id, id| {
                    Self::Campground { provider_id, id }
                })
            }
            _ => Self::NotFound(relative.to_owned()),
        }
    }

    fn entity(
        provider: &str,
        id: &str,
        relative: &str,
        build: impl FnOnce(i32, String) -> Self,
    ) -> Self {
        match provider.parse::<i32>() {
            Ok(provider_id) if !id.is_empty() => build(provider_id, id.to_owned()),
            _ => Self::NotFound(relative.to_owned()),
        }
    }

    /// Path relative to the basename.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::RecreationArea { provider_id, id } => format!("/rec-areas/{provider_id}/{id}"),
            Self::Campground { provider_id, id } => format!("/campgrounds/{provider_id}/{id}"),
            Self::NotFound(path) => path.clone(),
            route => STATIC_ROUTES
                .iter()
                .find(|(_, candidate)| candidate == route)
                .map(|(path, _)| (*path).to_owned())
                .unwrap_or_else(|| "/".to_owned()),
        }
    }

    /// Absolute href under `basename`.
    #[must_use]
    pub fn href(&self, basename: &str) -> String {
        format!("{}{}", normalise_basename(basename), self.path())
    }

    /// Whether the page renders inside the shared header and footer.
    #[must_use]
    pub fn uses_layout(&self) -> bool {
        !matches!(self, Self::Auth)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Entry in the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Link text.
    pub label: &'static str,
    /// Target, relative to the basename; may carry a `#section`.
    pub href: &'static str,
}

impl NavLink {
    /// Links into a section of the home page scroll instead of navigating
    /// when the home page is already shown.
    #[must_use]
    pub fn anchor(&self) -> Option<&'static str> {
        self.href.split_once('#').map(|(_, anchor)| anchor)
    }

    /// Highlight state for the current route. Anchor links never highlight.
    #[must_use]
    pub fn is_active(&self, current: &AppRoute) -> bool {
        self.anchor().is_none() && current.path() == self.href
    }
}

/// Header navigation in display order.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Providers",
        href: "/providers",
    },
    NavLink {
        label: "Features",
        href: "/#features",
    },
    NavLink {
        label: "How it works",
        href: "/#how-it-works",
    },
    NavLink {
        label: "Contribute",
        href: "/contribute",
    },
];
