//! Bridge configuration: where the Volumio UI lives, how often to poll it,
//! how to launch the browser and how to appear on the session bus.
//!
//! Loading is layered (environment over file over defaults); see
//! [`Settings`].

mod load;
mod schema;

pub use schema::*;
