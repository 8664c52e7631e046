use leptos::ev::KeyboardEvent;
use leptos::*;

const DEFAULT_CONFIRM_LABEL: &str = "Ya, Lanjutkan";
const DEFAULT_CANCEL_LABEL: &str = "Batal";

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Centered overlay shell shared by confirmations and form modals.
/// Backdrop clicks, the close button and Escape all call `on_close`.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let title_text = Signal::derive(move || title.get());
    let class = store_value(class);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Tutup"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class=move || format!(
                        "relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4 {}",
                        class.get_value()
                    )
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                        <button
                            type="button"
                            aria-label="Tutup"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
    } else {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
    };

    let confirm_label_text =
        Signal::derive(move || label_or(confirm_label.get(), DEFAULT_CONFIRM_LABEL));
    let cancel_label_text =
        Signal::derive(move || label_or(cancel_label.get(), DEFAULT_CANCEL_LABEL));
    let message_text = Signal::derive(move || message.get());

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel>
            <p class="text-sm text-fg-muted">{move || message_text.get()}</p>
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                    on:click=move |_| on_cancel.call(())
                >
                    {move || cancel_label_text.get()}
                </button>
                <button
                    type="button"
                    class=confirm_button_class
                    disabled=move || confirm_disabled.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {move || confirm_label_text.get()}
                </button>
            </div>
        </Modal>
    }
}
