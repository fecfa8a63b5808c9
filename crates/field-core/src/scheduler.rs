use crate::error::FieldResult;

/// Host id of a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Host primitive that runs the field's tick once per display refresh.
///
/// The browser implementation wraps `requestAnimationFrame`; tests use a
/// manual scheduler and call `ParticleField::tick` themselves.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FieldResult<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}
