use std::any::Any;

/// A value stored in [`crate::StateCtx`], keyed by its concrete type.
///
/// `snapshot` decides whether commands can see the state: commands run off the UI
/// thread, so only states that can be cloned into a `Send` box are handed to them.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}
