//! with_container() - Bind a container component to presenter components.
//!
//! # Pattern: Setup Once, Wrap Per Presenter
//!
//! 1. Call [`with_container`] once per container to get a [`ContainerFactory`]
//! 2. Call [`ContainerFactory::wrap`] once per presenter to get a [`Composite`]
//! 3. Render the composite like any other component, as often as needed
//!
//! # Prop Precedence
//!
//! Each render merges, later wins:
//! 1. Own props passed to the composite
//! 2. The presenter, as `component`
//! 3. Extra props fixed at setup time
//!
//! Callers can never swap the presenter out through their own props, and extra
//! props always have the last word, including over `component`.
//!
//! # Example
//!
//! ```ignore
//! use spark_container::{component, with_container};
//!
//! let loader = component(user_loader).with_display_name("Loader").into_ref();
//! let list = component(user_list).with_display_name("UserList").into_ref();
//!
//! let with_loader = with_container(loader, None);
//! let loading_list = with_loader.wrap(list);
//!
//! assert_eq!(loading_list.display_name(), Some("withContainer(Loader)(UserList)"));
//!
//! let cleanup = loading_list.render(LoaderProps::default());
//! cleanup();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{effect_scope, on_scope_dispose};

use super::{ContainerComponentProps, MergeProps};
use crate::component::{Component, ComponentRef};
use crate::display_name::get_display_name;
use crate::types::Cleanup;

/// Create a factory binding `container` to presenters.
///
/// `extra_props` are merged over every render of every composite the factory
/// produces. Only their set fields take effect.
pub fn with_container<Props>(
    container: ComponentRef<Props>,
    extra_props: Option<Props>,
) -> ContainerFactory<Props>
where
    Props: ContainerComponentProps + MergeProps + Clone,
{
    ContainerFactory {
        container,
        extra_props: extra_props.map(Rc::new),
    }
}

// =============================================================================
// ContainerFactory
// =============================================================================

/// Reusable binding of a container (and its extra props) to presenters.
pub struct ContainerFactory<Props: ContainerComponentProps> {
    container: ComponentRef<Props>,
    extra_props: Option<Rc<Props>>,
}

impl<Props: ContainerComponentProps> Clone for ContainerFactory<Props> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            extra_props: self.extra_props.clone(),
        }
    }
}

impl<Props> ContainerFactory<Props>
where
    Props: ContainerComponentProps + MergeProps + Clone,
{
    /// Bind a presenter, producing a new composite component.
    pub fn wrap(&self, presenter: ComponentRef<Props::Presenter>) -> Composite<Props> {
        let display_name = format!(
            "withContainer({})({})",
            get_display_name(&*self.container),
            get_display_name(&*presenter),
        );
        tracing::debug!(display_name = %display_name, "composite component created");

        Composite {
            container: self.container.clone(),
            presenter,
            extra_props: self.extra_props.clone(),
            display_name,
        }
    }

    /// The container this factory binds.
    pub fn container(&self) -> &ComponentRef<Props> {
        &self.container
    }

    /// The setup-time extra props, if any.
    pub fn extra_props(&self) -> Option<&Props> {
        self.extra_props.as_deref()
    }
}

// =============================================================================
// Composite
// =============================================================================

/// A container bound to a specific presenter.
///
/// Immutable once created. Rendering it renders the container with the
/// presenter injected as `component`.
pub struct Composite<Props: ContainerComponentProps> {
    container: ComponentRef<Props>,
    presenter: ComponentRef<Props::Presenter>,
    extra_props: Option<Rc<Props>>,
    display_name: String,
}

impl<Props> Composite<Props>
where
    Props: ContainerComponentProps + MergeProps + Clone,
{
    /// The props the container receives when the composite renders with `own`.
    pub fn merged_props(&self, own: Props) -> Props {
        let mut props = own;
        props.set_component(self.presenter.clone());
        if let Some(extra) = &self.extra_props {
            props.merge(Props::clone(extra));
        }
        props
    }

    /// The bound container.
    pub fn container(&self) -> &ComponentRef<Props> {
        &self.container
    }

    /// The bound presenter.
    pub fn presenter(&self) -> &ComponentRef<Props::Presenter> {
        &self.presenter
    }

    /// Share this composite as a [`ComponentRef`].
    pub fn into_ref(self) -> ComponentRef<Props> {
        Rc::new(self)
    }
}

impl<Props> Component for Composite<Props>
where
    Props: ContainerComponentProps + MergeProps + Clone,
{
    type Props = Props;

    fn render(&self, own: Props) -> Cleanup {
        tracing::trace!(display_name = %self.display_name, "rendering composite");

        let props = self.merged_props(own);
        let container = self.container.clone();

        // Container cleanup runs when the scope is disposed
        let cleanup: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(None));
        let cleanup_for_render = cleanup.clone();
        let cleanup_for_dispose = cleanup.clone();

        let scope = effect_scope(false);

        scope.run(move || {
            *cleanup_for_render.borrow_mut() = Some(container.render(props));

            on_scope_dispose(move || {
                if let Some(cleanup_fn) = cleanup_for_dispose.borrow_mut().take() {
                    cleanup_fn();
                }
            });
        });

        Box::new(move || {
            scope.stop();
        })
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.display_name)
    }
}
