//! Record store - the in-memory employee roster
//!
//! An ordered list of employee records plus a strictly increasing id
//! counter, behind a single lock so every operation runs as one
//! read-modify-write critical section.

pub mod employee;

pub use employee::{Employee, EmployeeDraft, EmployeeStore, StoreError};
