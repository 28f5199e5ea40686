//! Log Panel Component
//!
//! Collapsible view of the most recent log lines.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    view! {
        <details
            class="log-panel"
            on:toggle=move |_| set_lines.set(rolling_logger::recent_lines())
        >
            <summary>"Logs"</summary>
            <pre class="log-lines">{move || lines.get().join("\n")}</pre>
        </details>
    }
}
