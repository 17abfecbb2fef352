use crate::api::types::BodyKind;
use crate::core::vector::Vector2;

/// Shared capability of everything that takes part in the force model.
///
/// Black holes and stars both implement this rather than one extending the
/// other: they differ in mass formula and in whether they move at all.
pub trait Body {
    /// Position in view space.
    fn pos(&self) -> Vector2;
    /// Velocity in view-space units per time unit.
    fn vel(&self) -> Vector2;
    fn mass(&self) -> f64;
    /// Draw-relevant size.
    fn size(&self) -> f64;
    fn kind(&self) -> BodyKind;

    /// Velocity magnitude.
    fn speed(&self) -> f64 {
        self.vel().length()
    }
}
