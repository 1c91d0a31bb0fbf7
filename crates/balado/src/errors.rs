//! Error types for Balado.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Rust uses the Debug trait to show errors returned from main,
                    // but thiserror renders through Display. This redirects Debug to Display, essentially.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum QueryError {
    #[error("host query reported errors: {0:?}")]
    Reported(Vec<String>),
    #[error("host query resolved without data")]
    MissingData,
}

#[derive(Error)]
pub enum PlanError {
    #[error("markdown page planning failed")]
    Markdown(#[source] QueryError),
    #[error("podcast feed page planning failed")]
    Feed(#[source] QueryError),
}

#[derive(Error)]
pub enum StyleError {
    #[error("failed to parse stylesheet: {0}")]
    Parse(String),
    #[error("failed to serialize stylesheet: {0}")]
    Print(String),
}

#[derive(Error, Debug)]
pub enum BaladoError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Style(#[from] StyleError),
}

impl_debug_for_error!(QueryError, PlanError, StyleError);
