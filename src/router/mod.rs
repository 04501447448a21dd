//! Route table and navigation guard.
//!
//! DESIGN
//! ======
//! Navigation decisions are pure functions over `(target, session state)`
//! so the onboarding funnel is testable without a browser. The wiring in
//! `app.rs` feeds them from the live location and issues the redirects.

pub mod guard;
pub mod routes;
