//! Dynamically keyed props.
//!
//! [`DynProps`] is a string-keyed record of reactive values plus the
//! `component` slot. It suits containers that forward arbitrary props they
//! don't know about, and merges the way an object spread does: keys present in
//! the overrides replace, everything else is kept.

use std::collections::BTreeMap;
use std::fmt;

use super::{ContainerComponentProps, MergeProps};
use crate::component::ComponentRef;
use crate::display_name::get_display_name;
use crate::types::{PropValue, Value};

/// String-keyed props with a presenter slot for presenters taking `P`.
pub struct DynProps<P: 'static> {
    component: Option<ComponentRef<P>>,
    values: BTreeMap<String, PropValue<Value>>,
}

impl<P: 'static> DynProps<P> {
    pub fn new() -> Self {
        Self {
            component: None,
            values: BTreeMap::new(),
        }
    }

    /// Builder: set a static value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let value: Value = value.into();
        self.set(key, value);
        self
    }

    /// Builder: set a static, signal or getter value.
    pub fn with_prop(mut self, key: impl Into<String>, value: PropValue<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder: set the presenter.
    pub fn with_component(mut self, component: ComponentRef<P>) -> Self {
        self.component = Some(component);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue<Value>>) {
        self.values.insert(key.into(), value.into());
    }

    /// Current value of `key`. Reads signals and getters.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).map(PropValue::get)
    }

    /// The raw prop for `key`, keeping its reactivity.
    pub fn prop(&self, key: &str) -> Option<&PropValue<Value>> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue<Value>> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in sorted order. Does not include `component`.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<P: 'static> Default for DynProps<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: 'static> Clone for DynProps<P> {
    fn clone(&self) -> Self {
        Self {
            component: self.component.clone(),
            values: self.values.clone(),
        }
    }
}

impl<P: 'static> fmt::Debug for DynProps<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let component = self.component.as_ref().map(|c| get_display_name(&**c));
        f.debug_struct("DynProps")
            .field("component", &component)
            .field("values", &self.values)
            .finish()
    }
}

impl<P: 'static> ContainerComponentProps for DynProps<P> {
    type Presenter = P;

    fn component(&self) -> Option<&ComponentRef<P>> {
        self.component.as_ref()
    }

    fn set_component(&mut self, component: ComponentRef<P>) {
        self.component = Some(component);
    }
}

impl<P: 'static> MergeProps for DynProps<P> {
    fn merge(&mut self, overrides: Self) {
        if overrides.component.is_some() {
            self.component = overrides.component;
        }
        self.values.extend(overrides.values);
    }
}
