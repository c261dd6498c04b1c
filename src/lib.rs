//! postcraft: LinkedIn post drafting on top of the Gemini API.
//!
//! A topic and a few style preferences go in; a handful of post drafts,
//! each with hashtags and a call-to-action, come out. The work is a fixed
//! sequence of prompts: one planning call, then content, hashtags and CTA
//! for every planned post.
//!
//! # Quick Start
//!
//! ```no_run
//! use postcraft::prelude::*;
//!
//! # async fn example() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::load()?;
//! let generator = PostGenerator::from_config(&config)?;
//!
//! let request = GenerationRequest::builder()
//!     .topic("Remote work tips")
//!     .tone(Tone::Casual)
//!     .post_count(3)
//!     .build();
//!
//! let output = generator.generate(&request, None).await?;
//! for post in &output.posts {
//!     println!("{}", postcraft::present::clipboard_text(post));
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod generation;
pub mod health;
pub mod models;
pub mod prelude;
pub mod present;
pub mod provider;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
