//! Base trait for actions dispatched into a store.

/// Marker trait for action objects.
///
/// Actions are usually an enum: the variant is the action type and its fields
/// are the payload. Matching on the enum in a reducer makes an unhandled
/// action type a compile error.
pub trait Action: Send + 'static {
    /// Variant tag, used in logs.
    fn kind(&self) -> &'static str;
}
