//! # Continuations
//!
//! Async counterparts of the container operators. Each function awaits the
//! pending container exactly once and then applies the synchronous rule:
//! nothing is spawned, nothing runs concurrently, and a step only starts after
//! the container it depends on has resolved. Once a failure appears, no
//! downstream step is invoked.
//!
//! ```ignore
//! use faultline::continuation::{bind, map_value};
//!
//! let name = map_value(
//!     bind(load_user(id), |user| load_profile(user.profile_id), Some("user lookup failed")),
//!     |profile| profile.display_name,
//! )
//! .await;
//! ```

pub mod optional;
pub mod outcome;
pub mod result_option;

pub use outcome::{
    bind, bind_remote, expect, map_value, map_value_async, match_async, match_with, to_outcome,
    unwrap,
};
