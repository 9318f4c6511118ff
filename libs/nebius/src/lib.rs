pub mod models;

pub use models::Models;
