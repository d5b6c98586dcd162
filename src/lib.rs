#![warn(missing_docs)]
//! Doodlegen - hand-drawn doodle reference images via the Gemini image API.
//!
//! The crate holds a fixed list of [`Subject`]s, sends each one's prompt to an
//! [`ImageProvider`] and writes the first returned image to
//! `<output-dir>/<subject-id>-doodle.png`.
//!
//! # Quick Start
//!
//! ```no_run
//! use doodlegen::{generate_doodles, GeminiProvider, SUBJECTS};
//!
//! #[tokio::main]
//! async fn main() -> doodlegen::Result<()> {
//!     let provider = GeminiProvider::builder().build()?;
//!     let summary = generate_doodles(
//!         &provider,
//!         SUBJECTS,
//!         std::path::Path::new("doodles"),
//!         &mut std::io::stdout(),
//!     )
//!     .await?;
//!     assert_eq!(summary.total, 4);
//!     Ok(())
//! }
//! ```

mod error;
pub mod image;
pub mod run;
pub mod subjects;

// Re-export error types at crate root
pub use error::{DoodleError, Result};

pub use image::providers::{GeminiModel, GeminiProvider, GeminiProviderBuilder};
pub use image::{GeneratedImage, GenerationRequest, ImageProvider};
pub use run::{generate_doodles, RunSummary};
pub use subjects::{output_path, Subject, STYLE_PREFIX, SUBJECTS};
