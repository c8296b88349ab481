//! Google News RSS ingestion core.
//!
//! Fetches the Japanese-edition Google News feed for a topic filter, parses
//! the RSS payload with an element-tracking state machine, and normalizes
//! entries into display-ready records. Presentation (rendering, selection,
//! refresh gestures) lives outside this crate; its whole contract is
//! [`feed::FeedClient::request_feed`] producing a stream of
//! [`feed::FetchOutcome`] values, plus [`present::present`] for turning
//! loaded articles into rows.

pub mod feed;
pub mod filter;
pub mod present;
pub mod util;
