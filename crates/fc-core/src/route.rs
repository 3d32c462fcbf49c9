/// Navigable pages. Anything unrecognised lands on `NotFound`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    PersonaForge,
    DreamChain,
    Settings,
    NotFound(String),
}

impl Route {
    /// Resolve a path. A single trailing slash and any `?query` or `#fragment`
    /// are ignored; matching is otherwise exact.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = match path {
            "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        match trimmed {
            "/" | "" => Self::Home,
            "/persona-forge" => Self::PersonaForge,
            "/dream-chain" => Self::DreamChain,
            "/settings" => Self::Settings,
            _ => Self::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::PersonaForge => "/persona-forge",
            Self::DreamChain => "/dream-chain",
            Self::Settings => "/settings",
            Self::NotFound(p) => p,
        }
    }

    /// Nav-bar title of the page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "PersonaForge + DreamChain",
            Self::PersonaForge => "PersonaForge",
            Self::DreamChain => "DreamChain",
            Self::Settings => "Settings",
            Self::NotFound(_) => "Page Not Found",
        }
    }

    /// Pages offered as links from the not-found page.
    pub fn recovery_links() -> [Route; 3] {
        [Self::Home, Self::PersonaForge, Self::DreamChain]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/persona-forge"), Route::PersonaForge);
        assert_eq!(Route::resolve("/dream-chain"), Route::DreamChain);
        assert_eq!(Route::resolve("/settings"), Route::Settings);
    }

    #[test]
    fn test_trailing_slash_and_query() {
        assert_eq!(Route::resolve("/dream-chain/"), Route::DreamChain);
        assert_eq!(Route::resolve("/settings?tab=api"), Route::Settings);
        assert_eq!(Route::resolve("/#top"), Route::Home);
    }

    #[test]
    fn test_catch_all() {
        let r = Route::resolve("/dream-chain/extra");
        assert_eq!(r, Route::NotFound("/dream-chain/extra".to_string()));
        assert_eq!(r.path(), "/dream-chain/extra");
        assert_eq!(Route::resolve("/Settings"), Route::NotFound("/Settings".into()));
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [Route::Home, Route::PersonaForge, Route::DreamChain, Route::Settings] {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }
}
