//! Network operations against the PCGamingWiki API

mod client;

pub use client::PcgwClient;
