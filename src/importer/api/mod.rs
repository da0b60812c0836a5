pub mod client;
pub mod http_client;
pub mod urls;

pub use client::ServiceClient;
pub use http_client::*;
pub use urls::*;
