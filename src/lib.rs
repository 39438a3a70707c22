//! Mobility Gallery
//!
//! Renders the Economic Mobility editorial series: a single static page of
//! four image/graphic visuals with titles, subtitles, and captions. Three of
//! the visuals are photographic frames addressed through an image delivery
//! collaborator; one is a procedurally drawn wealth-vs-income infographic.
//!
//! # Design
//!
//! - **Catalog**: a fixed, ordered sequence of [`VisualDescriptor`] records,
//!   validated against its data contract before any rendering happens
//! - **Frame selection**: a tagged [`FrameKind`] chooses between the chart
//!   and an image-backed frame per visual
//! - **Markup tree**: the one wire format, a small element tree serialized
//!   to HTML for the hosting pipeline; styling stays external and is
//!   addressed through stable class tokens only
//!
//! # Example
//!
//! ```
//! use mobility_gallery::{render_page, visuals, StaticImageProvider};
//!
//! # fn main() -> mobility_gallery::Result<()> {
//! let page = render_page(visuals(), &StaticImageProvider)?;
//! assert!(page.to_html().contains("Economic Mobility Series"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod markup;

pub mod catalog;
pub use catalog::{visuals, Aspect, ImageRef, Variant, VisualDescriptor};

pub mod chart;

pub mod frame;
pub use frame::{FrameKind, ImageProvider, ImageRequest, StaticImageProvider};

pub mod page;
pub use page::{render_card, render_document, render_page};
