use crate::api::ApiError;
use leptos::*;

/// Follow-up hint shown under an error, by taxonomy class.
pub fn error_hint(error: &ApiError) -> Option<&'static str> {
    match error.code.as_str() {
        "REQUEST_FAILED" => Some("Periksa koneksi jaringan Anda lalu coba lagi."),
        "UNAUTHORIZED" => Some("Sesi Anda telah berakhir. Silakan login kembali."),
        "NOT_FOUND" => Some("Data tidak ditemukan."),
        _ => None,
    }
}

fn validation_details(error: &ApiError) -> Vec<String> {
    if error.code != "VALIDATION_ERROR" {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            let details = validation_details(&e);
                            if !details.is_empty() {
                                view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {details.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                                    </ul>
                                }
                                .into_view()
                            } else if let Some(hint) = error_hint(&e) {
                                view! { <div class="text-xs opacity-75">{hint}</div> }.into_view()
                            } else {
                                ().into_view()
                            }
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}
