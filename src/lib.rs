//! The Rust SDK for Goaffpro, an affiliate marketing and tracking platform.
//!
//! # Overview
//!
//! The SDK revolves around a [`Client`] that holds an affiliate tracking session. A session is
//! established by calling [`Client::init()`] with the shop's public token; once it is ready, the
//! client records page views and conversions for the affiliate identified by the current referral
//! code. Normally the referral code is captured from an inbound link, and
//! [`Client::set_referral_code()`] exists so hosts can set it directly.
//!
//! An [`EventLogger`] can be provided to mirror every delivered tracking event into your own
//! storage or analytics pipeline.
//!
//! The [`app`] module contains the form handlers of the demonstration walkthrough, built against
//! the [`AffiliateSdk`] contract rather than against [`Client`] directly.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum.
//!
//! Tracking calls are not critical enough to crash a host application over, so callers typically
//! map failures to a generic display value and move on. The returned errors are still valuable
//! for debugging and usually indicate that developer's attention is needed.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate for logging
//! messages. Consider integrating a `log`-compatible logger implementation for better visibility
//! into SDK operations.
//!
//! # Examples
//!
//! ```
//! # use goaffpro::ClientConfig;
//! let client = ClientConfig::new()
//!     .event_logger(|event| {
//!         println!("{:?}", event);
//!     })
//!     .to_client();
//! ```
//!
//! A runnable walkthrough lives in the `simple` demo of this repository.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

pub mod app;
mod client;
mod config;
mod error;
mod events;
mod sdk;
mod session_store;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use events::{ConversionEvent, ConversionOrder, EventLogger, PageViewEvent, TrackedEvent};
pub use sdk::AffiliateSdk;
pub use session_store::{Session, SiteSettings};
