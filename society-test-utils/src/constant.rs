//! Values shared by the mock API endpoints.

/// Prefix of every API route served by the mock server.
pub static API_PREFIX: &str = "/api";

/// Base of the URLs returned by mock upload endpoints.
pub static TEST_STORAGE_URL: &str = "https://storage.example.com";

/// Builds the mock server path of an API route, e.g. `events` becomes `/api/events`.
pub fn api_path(path: &str) -> String {
    format!("{}/{}", API_PREFIX, path.trim_start_matches('/'))
}
