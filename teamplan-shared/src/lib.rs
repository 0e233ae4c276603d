#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared request/response models for the TeamPlan API.

pub mod models;
