use leptos::*;
use std::future::Future;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

fn local_executor() -> (tokio::runtime::Runtime, tokio::task::LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("build test runtime");
    (runtime, tokio::task::LocalSet::new())
}

/// Runs `f` inside a `LocalSet` so resources and actions can spawn.
pub fn with_local_runtime<T>(f: impl FnOnce() -> T) -> T {
    let (runtime, local) = local_executor();
    local.block_on(&runtime, async move { f() })
}

pub fn with_local_runtime_async<F, Fut, T>(f: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let (runtime, local) = local_executor();
    local.block_on(&runtime, f())
}

/// Yields to spawned tasks until `condition` holds or the budget runs out.
pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::task::yield_now().await;
    }
    condition()
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
