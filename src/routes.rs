//! Static route catalog.
//!
//! The fixed, code-defined pages of the site, one table per locale.
//! Changing an entry is a code change, not a database write.

use crate::locale::Locale;

/// A navigable page not backed by dynamic content. `path` is the locale-
/// relative URL segment, empty for the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticRouteEntry {
    pub path: &'static str,
    pub name: &'static str,
}

const ROUTES_TR: &[StaticRouteEntry] = &[
    StaticRouteEntry { path: "", name: "Ana Sayfa" },
    StaticRouteEntry { path: "hakkimizda", name: "Hakkımızda" },
    StaticRouteEntry { path: "blog", name: "Blog" },
    StaticRouteEntry { path: "iletisim", name: "İletişim" },
    StaticRouteEntry { path: "projelerimiz", name: "Projelerimiz" },
    StaticRouteEntry { path: "hizmetlerimiz", name: "Hizmetlerimiz" },
];

const ROUTES_EN: &[StaticRouteEntry] = &[
    StaticRouteEntry { path: "", name: "Home" },
    StaticRouteEntry { path: "about", name: "About" },
    StaticRouteEntry { path: "blog", name: "Blog" },
    StaticRouteEntry { path: "contact", name: "Contact" },
    StaticRouteEntry { path: "projects", name: "Projects" },
    StaticRouteEntry { path: "services", name: "Services" },
];

pub fn catalog(locale: Locale) -> &'static [StaticRouteEntry] {
    match locale {
        Locale::Tr => ROUTES_TR,
        Locale::En => ROUTES_EN,
    }
}

/// Linear scan of the catalog for the given locale. An entry matches when
/// the normalized query is a substring of its lowercased display name or
/// path. Matches keep catalog declaration order; there is no ranking.
pub fn match_routes(normalized_query: &str, locale: Locale) -> Vec<StaticRouteEntry> {
    catalog(locale)
        .iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(normalized_query)
                || entry.path.to_lowercase().contains(normalized_query)
        })
        .copied()
        .collect()
}

impl StaticRouteEntry {
    /// Stable result id: `page-blog`, `page-home` for the empty path.
    pub fn result_id(&self) -> String {
        if self.path.is_empty() {
            "page-home".to_string()
        } else {
            format!("page-{}", self.path)
        }
    }

    /// Locale-prefixed URL: `/en/blog`, `/tr` for the home page.
    pub fn url(&self, locale: Locale) -> String {
        if self.path.is_empty() {
            format!("/{}", locale)
        } else {
            format!("/{}/{}", locale, self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_routes_by_name_and_path() {
        let hits = match_routes("blog", Locale::En);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "blog");
        assert_eq!(hits[0].name, "Blog");
        assert_eq!(hits[0].url(Locale::En), "/en/blog");

        // "about" only matches the path, the display name is "About"
        let hits = match_routes("about", Locale::En);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "About");
    }

    #[test]
    fn test_match_routes_locale_isolation() {
        // Turkish page names never leak into English results
        assert!(match_routes("hakkimizda", Locale::En).is_empty());
        assert_eq!(match_routes("hakkimizda", Locale::Tr).len(), 1);
    }

    #[test]
    fn test_match_routes_declaration_order() {
        // "i" appears in several Turkish entries; order must follow the catalog
        let hits = match_routes("i", Locale::Tr);
        let names: Vec<&str> = hits.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec!["Hakkımızda", "İletişim", "Projelerimiz", "Hizmetlerimiz"]
        );
    }

    #[test]
    fn test_home_entry_ids_and_urls() {
        let home = catalog(Locale::Tr)[0];
        assert_eq!(home.result_id(), "page-home");
        assert_eq!(home.url(Locale::Tr), "/tr");
    }
}
