//! Proxygen code generator library.
//!
//! This crate turns a backend's API definition document into client proxy
//! source files. For every controller of one selected module it emits:
//!
//! - A model file declaring every structured and enum type the controller's
//!   actions reach, transitively
//! - An API file with one function per action, building the request URL
//!   from path placeholders and query parameters
//!
//! ## Modules
//!
//! - [`fetch`] - Loading the schema document over HTTP or from disk
//! - [`select`] - Picking one module out of the schema
//! - [`resolve`] - Computing the type closure of a controller
//! - [`validation`] - Binding action parameters to URL placeholders
//! - [`emitter`] - Target-language rendering (TypeScript)
//! - [`paths`] - Planning where each generated file goes
//! - [`output`] - Staging and writing generated files
//! - [`pipeline`] - The end-to-end run
//! - [`config`] - Command-line and config-file settings
//! - [`progress`] - Progress events
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use proxygen_gen::config::{CliArgs, GeneratorConfig};
//! use proxygen_gen::pipeline::run_remote;
//! use proxygen_gen::progress::TracingProgress;
//!
//! # async fn example() -> Result<(), proxygen_gen::errors::GeneratorError> {
//! let args = CliArgs {
//!     url: Some("https://localhost:44300".to_string()),
//!     module: Some("app".to_string()),
//!     output: Some("src/api".into()),
//!     ..Default::default()
//! };
//! let config = GeneratorConfig::resolve(&args)?;
//! let summary = run_remote(&config, &TracingProgress).await?;
//! println!("{} files written", summary.files.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Generated Layout
//!
//! For module `App` (remote service `app`) with a controller in group `user`:
//!
//! ```text
//! <output>/app/user/index.ts         // export function getById(id: number): Promise<UserDto>
//! <output>/app/user/model/index.ts   // export interface UserDto { ... }
//! ```

pub mod config;
pub mod emitter;
pub mod errors;
pub mod fetch;
pub mod naming;
pub mod output;
pub mod parser;
pub mod paths;
pub mod pipeline;
pub mod progress;
pub mod resolve;
pub mod select;
pub mod validation;

#[cfg(test)]
mod test_utils;
