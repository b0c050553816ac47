//! CRUD surface for the four record collections.

pub mod handlers;
pub mod validation;
