mod client;
mod errors;
mod query;
mod session;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::ListQuery;
pub use self::session::Session;
