//! Ingestion Service Module
//!
//! Handles the acquisition and local caching of the book feed.
//!
//! ## Workflow
//! 1. **Hydrate**: On startup, the local cache file (if readable) is applied to the
//!    catalog immediately so queries work before the network answers.
//! 2. **Fetch**: The remote JSON feed is downloaded once and normalized; malformed
//!    rows are dropped, not errors.
//! 3. **Replace**: A successful fetch replaces the in-memory collection wholesale
//!    and rewrites the cache file.
//! 4. **Degrade**: A failed fetch is logged and the service keeps serving whatever
//!    data (cache or empty) is already loaded. No retries, no timeouts.

pub mod feed;
pub mod handlers;
pub mod types;
