use yew_router::Routable;

// routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Page {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/profile")]
    Profile,
    #[at("/friends")]
    Friends,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Page {
    /// pages that require a resolved, authenticated session
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Profile | Page::Friends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_social_pages_are_guarded() {
        assert!(Page::Friends.is_protected());
        assert!(Page::Profile.is_protected());
        assert!(!Page::Home.is_protected());
        assert!(!Page::Terms.is_protected());
        assert_eq!(Page::Friends.to_path(), "/friends");
    }
}
