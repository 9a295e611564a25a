pub mod blog;
pub mod contact;
pub mod representative;
pub mod search;
pub mod server;
pub mod sitemap;
