//! Page components, one per route.
//!
//! The role-selection and profile pages drive the role store; the rest
//! are feature surfaces that the navigation layer only has to route to.

pub mod meals;
pub mod profile;
pub mod role_selection;
pub mod shopping;
pub mod tasks;
pub mod weekend;
pub mod wishlist;
