// Test Helper Modules
//
// Shared by unit, contract and integration tests. Include from a test target
// with:
//
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]


pub use failing_repository::*;
pub use test_data::*;
pub use test_database::*;
