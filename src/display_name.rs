//! Display names - Human-readable component identifiers for debugging.
//!
//! A component can be identified several ways. Resolution tries them in a
//! fixed order and takes the first non-empty one:
//!
//! 1. [`ComponentName::Display`] - explicit display name
//! 2. [`ComponentName::Intrinsic`] - name of the defining function
//! 3. [`ComponentName::Tag`] - tag of a framework primitive
//! 4. [`ComponentName::Unknown`] - nothing usable
//!
//! Resolution is pure: the same component always resolves to the same name.

use std::any::type_name;
use std::fmt;

use crate::component::Component;

/// Fallback used when a component has no usable name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// The resolved identity of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentName<'a> {
    /// Explicit display name.
    Display(&'a str),
    /// Intrinsic name of the component definition.
    Intrinsic(&'a str),
    /// Tag of a primitive component.
    Tag(&'a str),
    /// No name available.
    Unknown,
}

impl<'a> ComponentName<'a> {
    /// Resolve a component's name using the ordered fallback.
    pub fn resolve<C: Component + ?Sized>(component: &'a C) -> Self {
        if let Some(name) = non_empty(component.display_name()) {
            return ComponentName::Display(name);
        }
        if let Some(name) = non_empty(component.name()) {
            return ComponentName::Intrinsic(name);
        }
        if let Some(tag) = non_empty(component.tag()) {
            return ComponentName::Tag(tag);
        }
        ComponentName::Unknown
    }

    /// The name text.
    pub fn as_str(&self) -> &'a str {
        match *self {
            ComponentName::Display(name)
            | ComponentName::Intrinsic(name)
            | ComponentName::Tag(name) => name,
            ComponentName::Unknown => UNKNOWN_NAME,
        }
    }
}

impl fmt::Display for ComponentName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// Returns the display name of a component. Never fails.
pub fn get_display_name<C: Component + ?Sized>(component: &C) -> String {
    ComponentName::resolve(component).as_str().to_string()
}

/// Intrinsic name of a render function type.
///
/// Named function items yield their own identifier (`user_list`). Closures,
/// function pointers and boxed functions yield `None`. Based on
/// [`std::any::type_name`], whose exact output is not guaranteed across
/// compiler versions, so treat the result as debug info.
pub fn intrinsic_name_of<F>() -> Option<&'static str> {
    // Function items are zero-sized; pointers and boxes are not
    if std::mem::size_of::<F>() != 0 {
        return None;
    }

    let full = type_name::<F>();
    if full.contains("{{closure}}") || full.starts_with("fn(") || full.contains("dyn ") {
        return None;
    }

    // Drop generic arguments, keep the last path segment
    let path = full.split('<').next().unwrap_or(full);
    let name = path.rsplit("::").next().unwrap_or(path);

    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{component, intrinsic};
    use crate::types::{noop_cleanup, Cleanup};

    fn user_list(_props: ()) -> Cleanup {
        noop_cleanup()
    }

    #[test]
    fn test_explicit_display_name_wins() {
        let comp = component(user_list).with_display_name("UserList");
        assert_eq!(ComponentName::resolve(&comp), ComponentName::Display("UserList"));
        assert_eq!(get_display_name(&comp), "UserList");
    }

    #[test]
    fn test_empty_display_name_falls_through() {
        let comp = component(user_list).with_display_name("");
        assert_eq!(
            ComponentName::resolve(&comp),
            ComponentName::Intrinsic("user_list"),
            "empty display name should be skipped"
        );
    }

    #[test]
    fn test_intrinsic_name_from_function() {
        assert_eq!(get_display_name(&component(user_list)), "user_list");
    }

    #[test]
    fn test_tag_name() {
        let text = intrinsic("text", |_: ()| noop_cleanup());
        assert_eq!(ComponentName::resolve(&text), ComponentName::Tag("text"));
        assert_eq!(get_display_name(&text), "text");
    }

    #[test]
    fn test_empty_tag_is_unknown() {
        let blank = intrinsic("", |_: ()| noop_cleanup());
        assert_eq!(ComponentName::resolve(&blank), ComponentName::Unknown);
    }

    #[test]
    fn test_unnamed_closure_is_unknown() {
        let comp = component(|_: ()| noop_cleanup());
        assert_eq!(get_display_name(&comp), UNKNOWN_NAME);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let comp = component(user_list).into_ref();
        let first = get_display_name(comp.as_ref());
        let second = get_display_name(comp.as_ref());
        assert_eq!(first, second);
    }

    fn type_of<T>(_: &T) -> fn() -> Option<&'static str> {
        intrinsic_name_of::<T>
    }

    #[test]
    fn test_intrinsic_name_of_fn_item() {
        assert_eq!(type_of(&user_list)(), Some("user_list"));
    }

    #[test]
    fn test_intrinsic_name_of_boxed_fn_is_none() {
        let boxed: Box<dyn Fn(()) -> Cleanup> = Box::new(|_| noop_cleanup());
        assert_eq!(type_of(&boxed)(), None, "boxed closures have no name");

        let boxed_item: Box<dyn Fn(()) -> Cleanup> = Box::new(user_list);
        assert_eq!(type_of(&boxed_item)(), None, "boxing erases the item name");
    }

    #[test]
    fn test_intrinsic_name_of_fn_pointer_is_none() {
        let pointer: fn(()) -> Cleanup = user_list;
        assert_eq!(type_of(&pointer)(), None, "fn pointers erase the item name");

        let closure_pointer: fn(()) -> Cleanup = |_| noop_cleanup();
        assert_eq!(type_of(&closure_pointer)(), None);
    }

    #[test]
    fn test_intrinsic_name_of_non_functions_is_none() {
        assert_eq!(intrinsic_name_of::<String>(), None);
        assert_eq!(intrinsic_name_of::<(u8, u8)>(), None);
    }

    #[test]
    fn test_boxed_and_pointer_components_are_unknown() {
        let boxed: Box<dyn Fn(()) -> Cleanup> = Box::new(|_| noop_cleanup());
        assert_eq!(get_display_name(&component(boxed)), UNKNOWN_NAME);

        let pointer: fn(()) -> Cleanup = user_list;
        assert_eq!(get_display_name(&component(pointer)), UNKNOWN_NAME);
    }
}
