//! Content loading for refdocs.
//!
//! Reads the content tree of the site into [`RawItem`](refdocs_nav::RawItem)s
//! for the navigation pipeline:
//! - [`ContentSource`]: reference entries or examples from `*.json` records
//! - [`load_assets`] and [`prepare_examples`]: example code paired with images
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use refdocs_content::ContentSource;
//! use refdocs_nav::{ContentKind, normalize, organize_reference_items};
//!
//! let raw = ContentSource::new("content/reference", ContentKind::Reference).load()?;
//! let tree = organize_reference_items(&normalize(&raw, "processing"));
//! # Ok(())
//! # }
//! ```

mod assets;
mod error;
mod scanner;
mod source;

pub use assets::{
    CodeFile, ExampleAssets, ImageFile, PreparedExample, load_assets, prepare_examples,
};
pub use error::ContentError;
pub use source::ContentSource;
