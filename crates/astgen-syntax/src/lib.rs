pub mod bootstrap;
pub mod error;
pub mod schema;
pub mod token;

pub use error::*;
pub use schema::*;
pub use token::*;
