// Copyright 2026 futcli Contributors
// SPDX-License-Identifier: Apache-2.0

//! futcli library — FUT evolutions and SBC catalogs scraped from fut.gg.
//!
//! [`evolutions::EvolutionsScraper`] pulls evolution records out of the
//! server-rendered evolutions page; [`sbc::SbcFetcher`] walks the paginated
//! SBC API and groups the results by category. Both reach the network only
//! through [`transport::Transport`].

pub mod cli;
pub mod config;
pub mod error;
pub mod evolutions;
pub mod record;
pub mod render;
pub mod sbc;
pub mod transport;

pub use config::FutConfig;
pub use record::{EvolutionItem, LabelMap, SbcItem};
