//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object is defined entirely by its attribute values: two instances
/// built from the same input are interchangeable. Contrast with [`Entity`],
/// where two instances with the same id are the *same* thing regardless of
/// their attributes.
///
/// [`Entity`]: crate::entity::Entity
///
/// ## Construction is the validation point
///
/// Value objects in this workspace validate in their constructor and return
/// `DomainResult<Self>`; an invalid instance can never exist. Once built they
/// are immutable; "modifying" one means constructing a new one.
///
/// ## Design constraints
///
/// - **Clone**: values are cheap to copy and passed around freely.
/// - **PartialEq**: compared by attribute values, never by address.
/// - **Debug**: values show up in logs and test failures.
///
/// ```ignore
/// let a = Name::new("Ada Lovelace")?;
/// let b = Name::new("Ada Lovelace")?;
/// assert_eq!(a, b); // equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
