//! Error types for the simulation engine.
//!
//! Only construction and configuration problems are errors. Interactions
//! that simply do not apply (wrong food, prey out of reach, a sleeping bird
//! asked to fly) are reported through outcome enums instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcosystemError {
    /// No species kind carries this type label
    #[error("Unknown species type: {0}")]
    UnknownSpecies(String),

    /// No resource kind carries this type label
    #[error("Unknown resource type: {0}")]
    UnknownResource(String),

    /// The environment handle is not registered with the ecosystem
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    /// World bounds with a minimum above the maximum
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// No free position found within the retry cap
    #[error("No position at least {min_distance} apart found after {attempts} attempts")]
    PlacementExhausted { min_distance: f64, attempts: u32 },

    /// Configuration rejected by validation or parsing
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<EcosystemError>,
    },
}

pub type Result<T> = std::result::Result<T, EcosystemError>;

impl EcosystemError {
    #[must_use]
    pub fn unknown_species<S: Into<String>>(label: S) -> Self {
        Self::UnknownSpecies(label.into())
    }

    #[must_use]
    pub fn unknown_resource<S: Into<String>>(label: S) -> Self {
        Self::UnknownResource(label.into())
    }

    #[must_use]
    pub fn unknown_environment<S: Into<String>>(id: S) -> Self {
        Self::UnknownEnvironment(id.into())
    }

    /// Suggested remedy shown next to the error by the runner.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::UnknownSpecies(_) => {
                "Use one of: Rabbit, Canari, HerbivorousFish, Wolf, Shark, Bear, Crow, Human"
            }
            Self::UnknownResource(_) => "Use one of: Grass, Fruits, Algae",
            Self::UnknownEnvironment(_) => "Register the environment before adding entities to it",
            Self::InvalidBounds(_) => "Check the world width and height",
            Self::PlacementExhausted { .. } => {
                "Lower placement.min_distance, enlarge the world or enable relax_on_exhaustion"
            }
            Self::Config(_) => "Fix the reported value in the configuration file",
            Self::Context { source, .. } => source.suggestion(),
        }
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<anyhow::Error> for EcosystemError {
    fn from(err: anyhow::Error) -> Self {
        Self::Config(err.to_string())
    }
}
