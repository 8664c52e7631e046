use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    employee_id: RwSignal<String>,
    error: RwSignal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="bg-surface flex min-h-screen flex-col items-center justify-center gap-6 p-6 md:p-10">
            <div class="w-full max-w-sm">
                <form class="flex flex-col gap-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="flex flex-col items-center gap-2">
                        <span class="sr-only">"Absensi."</span>
                        <h1 class="text-xl font-bold text-fg">"Welcome to Absensi."</h1>
                        <div class="text-center text-sm text-fg-muted">"Aplikasi Absensi Karyawan"</div>
                    </div>
                    <div class="grid gap-3">
                        <label for="employeeId" class="text-sm font-medium text-fg">"Nomor Karyawan"</label>
                        <input
                            id="employeeId"
                            name="employeeId"
                            type="text"
                            required
                            class="h-9 w-full rounded-md border border-border bg-surface px-3 text-sm text-fg placeholder:text-fg-muted"
                            placeholder="Masukkan Nomor Karyawan"
                            prop:value=move || employee_id.get()
                            on:input=move |ev| employee_id.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || error.with(Option::is_some)>
                        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded text-sm" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="inline-flex w-full items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        <Show when=move || pending.get() fallback=|| "Masuk">
                            <span class="h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}
