#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod models;
