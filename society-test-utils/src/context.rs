//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds the mock API server and every endpoint registered on it, so a test can point an
//! API client at [`TestContext::url`] and verify afterwards that each endpoint received
//! the expected number of requests.

use mockito::{Mock, Server, ServerGuard};

use crate::fixtures::ApiFixtures;

/// ```ignore
/// let test = TestBuilder::new()
///     .with_list_endpoint("events", &[factory::event("1", "Picnic", "2030-01-01")], 1)
///     .build()
///     .await?;
///
/// let config = Config::with_api_url(&test.url());
///
/// // ... exercise the client
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Mock HTTP server standing in for the society API
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Origin of the mock server, without a trailing slash
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Access endpoint helpers to register more mocks after `build()`.
    ///
    /// Mocks created this way are not tracked by [`assert_mocks`](Self::assert_mocks);
    /// keep the returned [`Mock`] and assert it directly.
    pub fn api<'a>(&'a mut self) -> ApiFixtures<'a> {
        ApiFixtures {
            server: &mut self.server,
        }
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
