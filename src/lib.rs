// SPDX-License-Identifier: GPL-3.0-only

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
