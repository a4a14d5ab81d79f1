//! Process-wide product events.
//!
//! An external collaborator (for example an admin surface) announces catalog
//! changes by publishing [`ProductsUpdated`]. The storefront only subscribes.

use tokio::sync::broadcast;

/// Default number of undelivered events a subscriber may fall behind by.
pub(crate) const DEFAULT_CAPACITY: usize = 16;

/// Signal that the product listing changed upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductsUpdated;

/// Broadcast channel carrying [`ProductsUpdated`].
#[derive(Debug, Clone)]
pub struct ProductEvents {
    sender: broadcast::Sender<ProductsUpdated>,
}

impl ProductEvents {
    /// Create a channel with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(DEFAULT_CAPACITY);
        Self { sender }
    }

    /// Announce a catalog change. Returns the number of subscribers reached.
    pub fn publish(&self) -> usize {
        let delivered = self.sender.send(ProductsUpdated).unwrap_or(0);
        tracing::debug!(delivered, "Published productsUpdated");
        delivered
    }

    /// Start receiving events. Dropping the receiver unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ProductsUpdated> {
        self.sender.subscribe()
    }
}

impl Default for ProductEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers() {
        assert_eq!(ProductEvents::new().publish(), 0);
    }

    #[tokio::test]
    async fn test_subscribers_receive_events() {
        let events = ProductEvents::new();
        let mut first = events.subscribe();
        let mut second = events.subscribe();

        assert_eq!(events.publish(), 2);
        assert_eq!(first.recv().await.unwrap(), ProductsUpdated);
        assert_eq!(second.recv().await.unwrap(), ProductsUpdated);

        drop(second);
        assert_eq!(events.publish(), 1);
    }
}
