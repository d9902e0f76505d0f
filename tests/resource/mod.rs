//! Tests for the admin resource manager against a mock API.
//!
//! Covers listing and searching, create and update with refetch, image uploads that
//! precede the record write, and the confirmed delete flow.

mod crud;
mod delete;
mod image;
