//! Loader demo - one container, two presenters.
//!
//! Run with: cargo run --example loader
//! Set RUST_LOG=spark_container=trace to see composite creation and renders.

use spark_container::{
    component, noop_cleanup, with_container, Cleanup, Component, ContainerComponentProps,
    DynProps, PropValue, Value,
};
use spark_signals::signal;
use tracing_subscriber::EnvFilter;

type LoaderProps = DynProps<Vec<String>>;

/// Container: "loads" users and hands them to whatever presenter it was given.
fn user_loader(props: LoaderProps) -> Cleanup {
    let limit = props
        .get("limit")
        .and_then(|v| v.as_int())
        .unwrap_or(3) as usize;

    let users: Vec<String> = ["ada", "grace", "linus", "ken", "barbara"]
        .iter()
        .take(limit)
        .map(|name| name.to_string())
        .collect();

    props.render_component(users)
}

fn user_list(users: Vec<String>) -> Cleanup {
    for user in &users {
        println!("  - {}", user);
    }
    noop_cleanup()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let loader = component(user_loader).with_display_name("Loader").into_ref();
    let with_loader = with_container(loader, Some(LoaderProps::new().with("source", "demo")));

    let list = with_loader.wrap(component(user_list).with_display_name("UserList").into_ref());
    let count = with_loader.wrap(
        component(|users: Vec<String>| {
            println!("  {} users", users.len());
            noop_cleanup()
        })
        .into_ref(),
    );

    println!("{}", list.display_name().unwrap_or_default());
    let cleanup_list = list.render(LoaderProps::new().with("limit", 2));

    // Limit as a signal: the container reads the latest value when it renders
    let limit = signal(Value::Int(4));
    println!("{}", count.display_name().unwrap_or_default());
    let cleanup_count =
        count.render(LoaderProps::new().with_prop("limit", PropValue::Signal(limit.clone())));

    limit.set(Value::Int(5));
    let cleanup_again = count.render(LoaderProps::new().with_prop("limit", limit.into()));

    cleanup_list();
    cleanup_count();
    cleanup_again();
}
