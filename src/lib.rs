//! Close-call reporter.
//!
//! # Overview
//!
//! Polls an infrared break-beam detector and a serial GPS receiver on a
//! single-board computer. When an object interrupts the beam, the current GPS
//! fix is fetched and the event is reported to a remote HTTP datastore as a
//! timestamped JSON payload with an auth token header.
//!
//! Reporting is opt-in: without `SERVER` and `AUTH_TOKEN` in the environment
//! the program still polls and logs every event locally, it just never
//! touches the network.
//!
//! # Modules
//!
//! - [`platform`]: startup validation against the supported board whitelist
//! - [`config`]: environment configuration
//! - [`devices`]: sensor seams and their GPIO/UART hardware backends
//! - [`model`]: GPS fix and notification payload types
//! - [`notifier`]: JSON formatting and the HTTP PUT to the datastore
//! - [`reporter`]: the poll loop and shutdown handling

pub mod config;
pub mod devices;
pub mod model;
pub mod notifier;
pub mod platform;
pub mod reporter;
