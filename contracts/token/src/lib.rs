#![no_std]

pub mod admin;
pub mod allowance;
pub mod balance;
pub mod contract;
pub mod metadata;
pub mod storage_types;


pub use contract::{Token, TokenClient};
