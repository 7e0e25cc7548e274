//! Podscript — Core library.
//! Turns a transcript into a sectioned, lightly styled podcast script via a remote generation service.

pub mod config;
pub mod form;
pub mod generation;
pub mod generator;
pub mod markup;
pub mod render;
pub mod sectionizer;

pub use config::GeneratorConfig;
pub use form::{
    CommentatorList, FormError, GenerationRequest, PodcastForm, DEFAULT_LENGTH_MINUTES, DEFAULT_TITLE,
    MAX_COMMENTATORS,
};
pub use generation::{GenerationClient, GenerationError};
pub use generator::{GenerateError, PodcastGenerator, GENERIC_FAILURE_MESSAGE};
pub use markup::{format_line, render_lines, Markup};
pub use render::{
    render_commentator_fields, render_commentator_options, render_error, render_error_slot,
    render_script,
};
pub use sectionizer::{sectionize, Section, SectionedScript};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
