//! Route table and session guards.
//!
//! Every navigation resolves a path to a [`Route`], evaluates that route's
//! guards against the current session and follows redirects until a route
//! renders. Nothing is cached between navigations.

mod guard;
mod route;
mod router;

pub use guard::{Guard, GuardDecision};
pub use route::Route;
pub use router::{resolve, Navigation, Router, MAX_REDIRECTS};
