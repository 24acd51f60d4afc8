#![cfg_attr(not(test), no_std)]

//! Wi-Fi and MQTT settings for the vehicle GPS tracker firmware.
//!
//! Values are read from `cfg.toml` at build time and compiled into
//! [`config::CONFIG`].

pub mod config;
pub mod constants;


pub use config::{Config, CONFIG};
