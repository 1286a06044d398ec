//! HTTP surface for the chat API

mod routes;
mod server;

pub use routes::{APOLOGY_TEXT, AppState, ErrorBody, router};
pub use server::serve;
