//! Tests for the response envelope handling of the API client.

mod envelope;
