//! Parameter playground for text-generation APIs: build a request from a
//! prompt, a product and one set of sampling parameters, or sweep every
//! combination of candidate values and collect each outcome in order.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
