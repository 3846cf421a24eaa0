pub mod customer;
mod error;
mod health_check;
pub mod order;
pub mod product;

pub use error::*;
pub use health_check::*;
