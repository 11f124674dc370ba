//! Widget glue for the `pagewindow` crate.
//!
//! The `pagewindow` crate is UI-agnostic and only decides which pages are shown. This crate
//! turns that into a small pagination widget:
//!
//! - Flat configuration with defaults (`PagerConfig`, `PagerConfigPatch`)
//! - Markup generation for the pager links, ellipses and the optional jump input
//! - Click/key dispatch (`ClickTarget`, jump input sanitizing) and an `on_page_change` callback
//!
//! The embedding page supplies the container through the [`Container`]/[`Document`] traits, so
//! this crate stays framework-agnostic (no DOM bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod container;
mod error;
mod event;
mod markup;
mod pager;


pub use config::{OnPageChange, PagerConfig, PagerConfigPatch};
pub use container::{Container, Document, MemoryContainer, MemoryDocument};
pub use error::WidgetError;
pub use event::{ClickTarget, sanitize_jump_input};
pub use markup::{escape_html, render_markup};
pub use pager::Pager;
