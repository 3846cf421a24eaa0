//! Request body parsing for each entity: a typed insert for creation and a
//! typed change set for updates.

mod customer;
mod order;
mod product;
