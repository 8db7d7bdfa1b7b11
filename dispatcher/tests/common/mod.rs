//! Test doubles shared by the dispatcher integration tests.

pub mod mock_bot;
pub mod stub_completion;
