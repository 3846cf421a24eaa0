mod customer;
mod error;
mod order;
mod product;

pub use customer::*;
pub use error::*;
pub use order::*;
pub use product::*;
