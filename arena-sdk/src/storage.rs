use crate::config::TOKEN;
use crate::error::Result;

/// Where the bearer token lives between page loads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;

    fn save(&self, token: &str) -> Result<()>;

    fn clear(&self);
}

/// `localStorage["jwt"]`
pub struct LocalToken;

impl TokenStore for LocalToken {
    fn load(&self) -> Option<String> {
        utils::get_local_storage(TOKEN).filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) -> Result<()> {
        utils::set_local_storage(TOKEN, token)?;
        Ok(())
    }

    fn clear(&self) {
        utils::remove_local_storage(TOKEN);
    }
}
