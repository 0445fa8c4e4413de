use thiserror::Error;

/// Failures that stop the server before or while it serves pages.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("couldn't bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}
