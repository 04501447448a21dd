//! Shared client-side session state.
//!
//! DESIGN
//! ======
//! State is split by domain (`role`, `auth`) so the guard and individual
//! pages can depend on small focused models. Stores are constructed once
//! in `app.rs` and handed to components via context — nothing here is a
//! global.

pub mod auth;
pub mod role;
