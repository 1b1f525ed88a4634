#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod catalog;
pub mod cli;
pub mod selector;
pub mod session;
