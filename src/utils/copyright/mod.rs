// debian/copyright generation from a template and the authors list

pub mod authors;
pub mod config;
pub mod generator;
pub mod template;

pub use authors::{AuthorsBlock, select_authors};
pub use config::CopyrightConfig;
pub use generator::{
    CopyrightGenerator, GenerationOutcome, GenerationStatus, content_digest, render_copyright,
};
pub use template::CopyrightTemplate;
