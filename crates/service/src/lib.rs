//! Service layer: the generic CRUD engine shared by all six resource
//! services, the storage abstraction it runs on, and the MongoDB
//! connection bootstrap.

pub mod crud;
pub mod db;
pub mod errors;
pub mod storage;
