use thiserror::Error;

/// Failures the particle field can report to its host.
///
/// None of these are fatal to the page: the field is decorative, so hosts
/// log them and carry on without an animation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("2d drawing context is not available")]
    SurfaceUnavailable,
    #[error("frame scheduler is not available")]
    SchedulerUnavailable,
    #[error("invalid field config: {0}")]
    InvalidConfig(String),
    #[error("{requested} particles requested, at most {max} supported")]
    TooManyParticles { requested: usize, max: usize },
}

pub type FieldResult<T> = Result<T, FieldError>;
