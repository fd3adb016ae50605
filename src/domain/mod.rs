//! Core domain types for AXESS

mod action;
mod route;
mod site;
mod theme;
mod user;

pub use action::{Action, Feedback};
pub use route::Route;
pub use site::Site;
pub use theme::Theme;
pub use user::{Profile, UserId};
