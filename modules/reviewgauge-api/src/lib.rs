pub mod analyzer;
pub mod fetcher;
pub mod prompts;
pub mod rest;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;
