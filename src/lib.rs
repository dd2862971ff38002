//! # spark-container
//!
//! Container/presenter composition for reactive components.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A *container* component owns data and behavior. A *presenter* component owns
//! rendering. The container never names a concrete presenter; it renders
//! whatever arrives in its `component` prop. [`with_container`] binds the two:
//!
//! ```text
//! with_container(Container, extra) → ContainerFactory
//!     .wrap(Presenter)            → Composite
//!         .render(own props)      → Container(own + {component: Presenter} + extra)
//! ```
//!
//! Every render returns a [`Cleanup`]. Composite renders run inside an effect
//! scope, so the cleanup tears down everything the container set up.
//!
//! ## Modules
//!
//! - [`types`] - Cleanup, PropValue, Value
//! - [`component`] - Component trait, function and intrinsic components
//! - [`display_name`] - Component name resolution for debugging
//! - [`container`] - Prop convention, merging, with_container

pub mod component;
pub mod container;
pub mod display_name;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use component::{
    component, intrinsic, same_component, Component, ComponentRef, FnComponent, Intrinsic,
};

pub use container::{
    with_container, Composite, ContainerComponentProps, ContainerFactory, DynProps, MergeProps,
};

pub use display_name::{get_display_name, intrinsic_name_of, ComponentName, UNKNOWN_NAME};
