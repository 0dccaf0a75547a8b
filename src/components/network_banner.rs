//! Connectivity banner driven by the browser's online/offline events.

use leptos::prelude::*;

use crate::state::network::NetworkState;

/// Shows offline/syncing/error notices, and a "Back online" notice that
/// dismisses itself after `ClientConfig::banner_dismiss_ms`.
#[component]
pub fn NetworkBanner() -> impl IntoView {
    let network = expect_context::<RwSignal<NetworkState>>();

    #[cfg(feature = "hydrate")]
    {
        let dismiss_ms = expect_context::<crate::config::ClientConfig>().banner_dismiss_ms;

        Effect::new(move || {
            let online = web_sys::window().is_none_or(|w| w.navigator().on_line());
            network.set(NetworkState::with_status(online));
        });

        let offline = window_event_listener(leptos::ev::offline, move |_| {
            network.update(NetworkState::go_offline);
        });
        let online = window_event_listener(leptos::ev::online, move |_| {
            let Some(generation) = network.try_update(NetworkState::go_online).flatten() else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(dismiss_ms).await;
                network.try_update(|n| n.dismiss_reconnected(generation));
            });
        });
        on_cleanup(move || {
            offline.remove();
            online.remove();
        });
    }

    move || {
        network.with(NetworkState::banner).map(|(modifier, text)| {
            view! {
                <div class=format!("network-banner {modifier}") role="status">
                    {text}
                </div>
            }
        })
    }
}
