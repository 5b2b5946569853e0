//! Route access policy.
//!
//! - [`matcher::RouteMatcher`]: path patterns such as `/dashboard/:path*`
//! - [`policy::AccessPolicy`]: which paths need a session, and where to send
//!   visitors that have none

pub mod matcher;
pub mod policy;

pub use matcher::{PatternError, RouteMatcher};
pub use policy::{AccessDecision, AccessPolicy};
