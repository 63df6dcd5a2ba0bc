//! Web front end for the blog post generator.
//!
//! One page: a form for the title, optional snippet, length, and sample
//! count; a generate action that renders the variants; a download action
//! that returns them as a plain-text attachment.

mod config;
mod logging;
mod page;
mod web;

pub use config::Settings;
pub use logging::init_logging;
pub use page::{GENERIC_FAILURE, Outcome, PageView, render_page, validation_message};
pub use web::{AppState, DownloadForm, GenerateForm, app, download, generate, index};
