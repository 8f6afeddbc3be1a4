//! Opaque host-supplied values.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type-erased value supplied by the host application.
///
/// Binding values are opaque to the policy layer: it stores them and hands
/// them back, nothing more. Their concrete type and meaning are part of the
/// host/interpreter contract, and the interpreter recovers the concrete type
/// with [`downcast_ref`](HostValue::downcast_ref) at resolution time.
///
/// Cloning is cheap and shares the contained object rather than duplicating
/// it, which is what lets [`PolicyBuilder::build`](crate::PolicyBuilder::build)
/// issue independent snapshots without deep-copying host state.
#[derive(Clone)]
pub struct HostValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl HostValue {
    /// Wrap a host object.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the contained object as `T`, if it was constructed from a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Whether the contained object was constructed from a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// The name of the concrete type captured at construction.
    ///
    /// Diagnostic only: the string comes from [`std::any::type_name`] and
    /// carries no stability guarantees.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostValue").field(&self.type_name).finish()
    }
}
