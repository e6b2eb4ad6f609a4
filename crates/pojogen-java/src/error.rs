use thiserror::Error;

#[derive(Debug, Error)]
pub enum JavaError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to render schema excerpt for `{name}`: {source}")]
    Excerpt {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
