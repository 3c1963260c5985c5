// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

pub mod factories;
pub mod fake_catalog;
pub mod helpers;
pub mod stub_server;
