//! Core library components.
//!
//! Business logic for file transfer and secret upsert, plus the AWS
//! adapters that back the capability traits.

pub mod aws;
pub mod transfer;
pub mod upsert;
