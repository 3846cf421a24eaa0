mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use crate::{db_interaction::RecordError, routes::ApiError, validation::ValidationErrors};

pub const UNKNOWN_CUSTOMER: &str = "Customer does not exist.";

// Writes with a dangling customer_id are reported against that field
fn order_write_error(e: RecordError) -> ApiError {
    match e {
        RecordError::ForeignKeyViolation(_) => {
            ApiError::Validation(ValidationErrors::single("customer_id", UNKNOWN_CUSTOMER))
        },
        e => ApiError::from_record(e, "Order")
    }
}
