//! The common node capability shared by every tree element.

use std::any::Any;
use std::fmt::Debug;

/// One element of the syntax tree.
///
/// Implementors are concrete node variants. The trait is object safe, so
/// heterogeneous variants live side by side behind a [`NodeBox`].
pub trait Node: Debug + 'static {
    /// Kind tag of the concrete variant, e.g. `"Program"`.
    ///
    /// Must be non-empty and identical on every call.
    fn class_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Owning handle to any node. Dropping it runs the variant's own cleanup.
pub type NodeBox = Box<dyn Node>;

/// Supertype for value-producing nodes.
///
/// Carries no members of its own yet; variants implement it alongside
/// [`Node`].
pub trait Expression: Node {}

impl<'a> dyn Node + 'a {
    /// Returns `true` if the node is a `T`.
    pub fn is<T: Node>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Node>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Node>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
