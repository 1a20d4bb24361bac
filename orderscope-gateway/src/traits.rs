use async_trait::async_trait;

use crate::error::Result;
use crate::types::FetchedOrder;

/// Access to the order backend.
///
/// The lookup flow depends on this trait only, so tests can substitute a
/// scripted gateway and the HTTP client stays swappable.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Fetches one order by its identifier.
    ///
    /// The identifier is passed raw; implementations are responsible for
    /// any escaping their transport needs.
    async fn fetch_order(&self, identifier: &str) -> Result<FetchedOrder>;
}
