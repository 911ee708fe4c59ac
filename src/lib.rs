pub mod api;
pub mod builder;
pub mod catalog;
pub mod errors;
pub mod layout;
pub mod materialize;
pub mod notify;
pub mod prompt;
