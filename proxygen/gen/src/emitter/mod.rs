//! Target-language emitters.
//!
//! The selector, resolver and path planner are shared by every target; only
//! the rendering of the two per-controller files differs. Each target
//! implements [`ProxyEmitter`] and is chosen through [`TargetLanguage`].

pub mod typescript;

use clap::ValueEnum;
use proxygen_define::ControllerDescription;
use serde::Deserialize;
use strum::{Display, EnumString};

use crate::errors::GeneratorError;
use crate::resolve::ResolvedType;
use crate::select::FilteredModel;

pub use typescript::{TypeScriptEmitter, TypeScriptOptions};

/// Renders the model and API files of one controller in a target language.
pub trait ProxyEmitter: Send + Sync {
    /// Human-readable target name.
    fn name(&self) -> &'static str;

    /// Source file extension, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders the data-shape declarations of a controller's resolved types.
    fn render_model_file(
        &self,
        model: &FilteredModel<'_>,
        controller: &ControllerDescription,
        types: &[ResolvedType<'_>],
    ) -> Result<String, GeneratorError>;

    /// Renders one callable wrapper per action of a controller.
    ///
    /// `types` is the same resolved set the model file was rendered from.
    fn render_api_file(
        &self,
        model: &FilteredModel<'_>,
        controller: &ControllerDescription,
        types: &[ResolvedType<'_>],
    ) -> Result<String, GeneratorError>;
}

/// Languages proxies can be generated for.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Display,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TargetLanguage {
    /// TypeScript (`.ts`).
    #[default]
    #[serde(alias = "typescript")]
    #[strum(to_string = "ts", serialize = "typescript")]
    #[value(name = "ts", alias = "typescript")]
    Ts,
}

/// Settings for every emitter, taken from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitterOptions {
    pub typescript: TypeScriptOptions,
}

/// Builds the emitter for a target language.
pub fn emitter_for(target: TargetLanguage, options: &EmitterOptions) -> Box<dyn ProxyEmitter> {
    match target {
        TargetLanguage::Ts => Box::new(TypeScriptEmitter::new(options.typescript.clone())),
    }
}
