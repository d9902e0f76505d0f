mod api;
mod membership;
mod resource;

use society_portal::client::{api::ApiClient, config::Config};
use society_test_utils::TestContext;

/// Client pointed at the mock API of `test`
pub fn test_client(test: &TestContext) -> ApiClient {
    ApiClient::new(&test_config(test))
}

pub fn test_config(test: &TestContext) -> Config {
    Config::with_api_url(&test.url())
}
