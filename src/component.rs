//! Component model - The things containers and presenters are made of.
//!
//! A component is anything that can be rendered with a props value and hands
//! back a [`Cleanup`]. Component *types* are shared by reference
//! ([`ComponentRef`]), the same way a component function is passed around as a
//! value: a container receives its presenter as a `ComponentRef` and renders it
//! as many times as it likes.
//!
//! # Building components
//!
//! ```ignore
//! use spark_container::{component, intrinsic, noop_cleanup, Cleanup};
//!
//! fn user_list(props: UserListProps) -> Cleanup {
//!     // render rows...
//!     noop_cleanup()
//! }
//!
//! // Intrinsic name "user_list" comes from the function itself
//! let list = component(user_list).into_ref();
//!
//! // Closures have no intrinsic name, so give them one
//! let row = component(|props: RowProps| noop_cleanup())
//!     .with_display_name("Row")
//!     .into_ref();
//!
//! // Primitive identified by its tag
//! let boxed = intrinsic("box", |props: BoxProps| noop_cleanup()).into_ref();
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

use crate::display_name::intrinsic_name_of;
use crate::types::Cleanup;

// =============================================================================
// Component Trait
// =============================================================================

/// A renderable component type.
///
/// Only `render` is required. The three name accessors feed
/// [`get_display_name`](crate::get_display_name) and default to "not set".
pub trait Component: 'static {
    /// The props this component expects.
    type Props: 'static;

    /// Render with the given props. Returns a cleanup that unmounts.
    fn render(&self, props: Self::Props) -> Cleanup;

    /// Explicit display name, set by whoever built the component.
    fn display_name(&self) -> Option<&str> {
        None
    }

    /// Intrinsic name, derived from the component's own definition.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Tag name, for framework primitives identified by a fixed tag.
    fn tag(&self) -> Option<&str> {
        None
    }
}

/// Shared reference to a component type accepting props `P`.
pub type ComponentRef<P> = Rc<dyn Component<Props = P>>;

/// Whether two references point at the same component.
pub fn same_component<P: 'static>(a: &ComponentRef<P>, b: &ComponentRef<P>) -> bool {
    Rc::ptr_eq(a, b)
}

// =============================================================================
// FnComponent - Components from functions and closures
// =============================================================================

/// A component backed by a render function.
pub struct FnComponent<P, F> {
    render: F,
    display_name: Option<String>,
    name: Option<&'static str>,
    _props: PhantomData<fn(P)>,
}

/// Create a component from a render function.
///
/// The intrinsic name is taken from the function's type: a named function
/// item yields its own name, a closure yields none.
pub fn component<P, F>(render: F) -> FnComponent<P, F>
where
    P: 'static,
    F: Fn(P) -> Cleanup + 'static,
{
    FnComponent {
        render,
        display_name: None,
        name: intrinsic_name_of::<F>(),
        _props: PhantomData,
    }
}

impl<P, F> FnComponent<P, F>
where
    P: 'static,
    F: Fn(P) -> Cleanup + 'static,
{
    /// Set the explicit display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Share this component as a [`ComponentRef`].
    pub fn into_ref(self) -> ComponentRef<P> {
        Rc::new(self)
    }
}

impl<P, F> Component for FnComponent<P, F>
where
    P: 'static,
    F: Fn(P) -> Cleanup + 'static,
{
    type Props = P;

    fn render(&self, props: P) -> Cleanup {
        (self.render)(props)
    }

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name
    }
}

// =============================================================================
// Intrinsic - Tag-named primitives
// =============================================================================

/// A framework primitive identified by a tag (`"box"`, `"text"`, ...).
pub struct Intrinsic<P, F> {
    tag: &'static str,
    render: F,
    _props: PhantomData<fn(P)>,
}

/// Create a tag-named primitive component.
pub fn intrinsic<P, F>(tag: &'static str, render: F) -> Intrinsic<P, F>
where
    P: 'static,
    F: Fn(P) -> Cleanup + 'static,
{
    Intrinsic {
        tag,
        render,
        _props: PhantomData,
    }
}

impl<P, F> Intrinsic<P, F>
where
    P: 'static,
    F: Fn(P) -> Cleanup + 'static,
{
    /// Share this component as a [`ComponentRef`].
    pub fn into_ref(self) -> ComponentRef<P> {
        Rc::new(self)
    }
}

impl<P, F> Component for Intrinsic<P, F>
where
    P: 'static,
    F: Fn(P) -> Cleanup + 'static,
{
    type Props = P;

    fn render(&self, props: P) -> Cleanup {
        (self.render)(props)
    }

    fn tag(&self) -> Option<&str> {
        Some(self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::noop_cleanup;
    use std::cell::Cell;

    fn greeting(_props: String) -> Cleanup {
        noop_cleanup()
    }

    #[test]
    fn test_fn_component_renders_with_props() {
        let received: Rc<Cell<i32>> = Rc::new(Cell::new(0));
        let received_clone = received.clone();

        let counter = component(move |props: i32| {
            received_clone.set(props);
            noop_cleanup()
        });

        let cleanup = counter.render(7);
        assert_eq!(received.get(), 7, "render should receive the props");
        cleanup();
    }

    #[test]
    fn test_fn_component_cleanup_is_returned() {
        let cleaned = Rc::new(Cell::new(false));
        let cleaned_clone = cleaned.clone();

        let comp = component(move |_: ()| {
            let cleaned = cleaned_clone.clone();
            Box::new(move || cleaned.set(true)) as Cleanup
        });

        let cleanup = comp.render(());
        assert!(!cleaned.get());
        cleanup();
        assert!(cleaned.get(), "cleanup from render should unmount");
    }

    #[test]
    fn test_fn_component_names() {
        let named = component(greeting);
        assert_eq!(named.name(), Some("greeting"));
        assert_eq!(named.display_name(), None);

        let anonymous = component(|_: String| noop_cleanup());
        assert_eq!(anonymous.name(), None, "closures have no intrinsic name");

        let labelled = component(|_: String| noop_cleanup()).with_display_name("Label");
        assert_eq!(labelled.display_name(), Some("Label"));
    }

    #[test]
    fn test_intrinsic_tag() {
        let boxed = intrinsic("box", |_: ()| noop_cleanup());
        assert_eq!(boxed.tag(), Some("box"));
        assert_eq!(boxed.name(), None);
        assert_eq!(boxed.display_name(), None);
    }

    #[test]
    fn test_same_component_is_identity() {
        let a = component(greeting).into_ref();
        let b = component(greeting).into_ref();
        let a_again = a.clone();

        assert!(same_component(&a, &a_again));
        assert!(!same_component(&a, &b), "separately built components differ");
    }
}
