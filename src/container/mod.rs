//! Containers - Binding behavior components to presenter components.
//!
//! A container owns data and behavior and delegates rendering to a presenter
//! it receives through its `component` prop. This module provides:
//! - [`ContainerComponentProps`] - the prop convention containers follow
//! - [`MergeProps`] - partial props overriding, for setup-time extra props
//! - [`with_container`] - binds a container to presenters, producing composites
//! - [`DynProps`] - a dynamically keyed props record following the convention
//!
//! # Defining container props
//!
//! Like every props struct in the framework, container props keep all fields
//! optional so the same type serves as its own partial:
//!
//! ```ignore
//! use spark_container::{merge_fields, ComponentRef, ContainerComponentProps, MergeProps, PropValue};
//!
//! #[derive(Clone, Default)]
//! struct LoaderProps {
//!     component: Option<ComponentRef<UserListProps>>,
//!     url: Option<PropValue<String>>,
//!     retries: Option<u32>,
//! }
//!
//! impl ContainerComponentProps for LoaderProps {
//!     type Presenter = UserListProps;
//!
//!     fn component(&self) -> Option<&ComponentRef<UserListProps>> {
//!         self.component.as_ref()
//!     }
//!
//!     fn set_component(&mut self, component: ComponentRef<UserListProps>) {
//!         self.component = Some(component);
//!     }
//! }
//!
//! impl MergeProps for LoaderProps {
//!     fn merge(&mut self, overrides: Self) {
//!         merge_fields!(self, overrides; component, url, retries);
//!     }
//! }
//! ```

mod dyn_props;
mod with_container;

pub use dyn_props::DynProps;
pub use with_container::{with_container, Composite, ContainerFactory};

use crate::component::ComponentRef;
use crate::types::{noop_cleanup, Cleanup};

// =============================================================================
// Prop Convention
// =============================================================================

/// Props convention for containers: a `component` slot holding the presenter.
///
/// Composites produced by [`with_container`] fill the slot before the
/// container renders, so a container rendered through a composite always
/// finds its presenter here.
pub trait ContainerComponentProps: 'static {
    /// Props the presenter expects.
    type Presenter: 'static;

    /// The presenter to render, if one has been set.
    fn component(&self) -> Option<&ComponentRef<Self::Presenter>>;

    /// Set the presenter.
    fn set_component(&mut self, component: ComponentRef<Self::Presenter>);

    /// Render the presenter with the given props.
    ///
    /// Without a presenter this renders nothing and returns a no-op cleanup.
    fn render_component(&self, props: Self::Presenter) -> Cleanup {
        match self.component() {
            Some(component) => component.render(props),
            None => {
                tracing::warn!("container rendered without a presenter component");
                noop_cleanup()
            }
        }
    }
}

// =============================================================================
// Partial Merge
// =============================================================================

/// Override props with a partial set of props.
///
/// Every field set in `overrides` replaces the field in `self`. Fields left
/// unset in `overrides` keep their current value.
pub trait MergeProps {
    fn merge(&mut self, overrides: Self);
}

/// Implement [`MergeProps::merge`] for structs whose fields are all `Option`.
///
/// ```ignore
/// merge_fields!(self, overrides; component, url, retries);
/// ```
#[macro_export]
macro_rules! merge_fields {
    ($target:expr, $overrides:expr; $($field:ident),+ $(,)?) => {{
        let overrides = $overrides;
        $(
            if overrides.$field.is_some() {
                $target.$field = overrides.$field;
            }
        )+
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{component, same_component};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct PanelProps {
        component: Option<ComponentRef<String>>,
        title: Option<String>,
        collapsed: Option<bool>,
    }

    impl ContainerComponentProps for PanelProps {
        type Presenter = String;

        fn component(&self) -> Option<&ComponentRef<String>> {
            self.component.as_ref()
        }

        fn set_component(&mut self, component: ComponentRef<String>) {
            self.component = Some(component);
        }
    }

    impl MergeProps for PanelProps {
        fn merge(&mut self, overrides: Self) {
            merge_fields!(self, overrides; component, title, collapsed);
        }
    }

    #[test]
    fn test_merge_fields_overrides_set_fields_only() {
        let mut props = PanelProps {
            title: Some("Inbox".into()),
            collapsed: Some(false),
            ..Default::default()
        };

        props.merge(PanelProps {
            collapsed: Some(true),
            ..Default::default()
        });

        assert_eq!(props.title.as_deref(), Some("Inbox"), "unset override keeps value");
        assert_eq!(props.collapsed, Some(true), "set override wins");
    }

    #[test]
    fn test_merge_fields_overrides_component() {
        let first = component(|_: String| noop_cleanup()).into_ref();
        let second = component(|_: String| noop_cleanup()).into_ref();

        let mut props = PanelProps::default();
        props.set_component(first);
        props.merge(PanelProps {
            component: Some(second.clone()),
            ..Default::default()
        });

        assert!(same_component(props.component().unwrap(), &second));
    }

    #[test]
    fn test_render_component_renders_presenter() {
        let rendered: Rc<Cell<usize>> = Rc::new(Cell::new(0));
        let rendered_clone = rendered.clone();

        let presenter = component(move |title: String| {
            assert_eq!(title, "Inbox");
            rendered_clone.set(rendered_clone.get() + 1);
            noop_cleanup()
        })
        .into_ref();

        let mut props = PanelProps::default();
        props.set_component(presenter);

        let cleanup = props.render_component("Inbox".to_string());
        assert_eq!(rendered.get(), 1);
        cleanup();
    }

    #[test]
    fn test_render_component_without_presenter_is_noop() {
        let props = PanelProps::default();
        let cleanup = props.render_component("ignored".to_string());
        cleanup();
    }
}
