//! Supported locales and path-based locale resolution.
//!
//! The locale set is closed: `en` and `ar`. Anything else in the first path
//! segment resolves to the default instead of failing the request.

use std::fmt;

/// Cookie remembering the last locale a visitor browsed in.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Local-storage key the client reads before falling back to the cookie.
pub const LOCALE_STORAGE_KEY: &str = "locale";

pub const DEFAULT_LOCALE: Locale = Locale::En;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }

    /// Exact match against the allow-list. Case-sensitive, like URL segments.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == raw)
    }

    /// Resolve a candidate segment, substituting the default when it is
    /// missing or not on the allow-list.
    #[must_use]
    pub fn from_segment(segment: Option<&str>) -> Self {
        segment.and_then(Self::parse).unwrap_or(DEFAULT_LOCALE)
    }

    /// Resolve from the first segment of a request path.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::from_segment(first_segment(path))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First non-empty segment of a path (`"/ar/login"` → `"ar"`).
#[must_use]
pub fn first_segment(path: &str) -> Option<&str> {
    path.split('/').find(|s| !s.is_empty())
}

/// Split a path into its locale prefix (if any) and the remaining segments.
///
/// `"/ar/dashboard/favorites"` → `(Some(Ar), ["dashboard", "favorites"])`
/// `"/dashboard"` → `(None, ["dashboard"])`
#[must_use]
pub fn split_locale(path: &str) -> (Option<Locale>, Vec<&str>) {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.first().copied().and_then(Locale::parse) {
        Some(locale) => {
            segments.remove(0);
            (Some(locale), segments)
        }
        None => (None, segments),
    }
}

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;
