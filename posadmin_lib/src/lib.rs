//! Reusable core for the admin console screens: the search-driven list
//! controller and the data-source seam it fetches through.

pub mod controller;
pub mod error;
pub mod source;

pub use self::controller::{ListController, ListHandle, ListNotice, ListSnapshot, DEBOUNCE_WINDOW};
pub use self::error::ListError;
pub use self::source::{source_fn, FnSource, PageSource};

pub use posadmin_api::types;
pub use posadmin_api::{Client, Error, ListQuery, Session};
