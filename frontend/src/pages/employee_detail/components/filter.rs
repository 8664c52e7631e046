use crate::{
    components::common::{Badge, Button, ButtonVariant},
    pages::employee_detail::utils::{DateRange, QuickRange},
    utils::time::{iso_date, today_in_app_tz},
};
use leptos::*;

const DATE_INPUT_CLASS: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text";

#[component]
pub fn DateRangeFilter(
    range: RwSignal<DateRange>,
    #[prop(into)] applied: Signal<DateRange>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    on_apply: Callback<()>,
    on_quick: Callback<QuickRange>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let max_date = iso_date(today_in_app_tz());
    let start = move || range.with(|r| r.start.clone());
    let end = move || range.with(|r| r.end.clone());

    view! {
        <div class="rounded-lg border border-dashed border-border bg-surface-muted p-4 space-y-4">
            <p class="text-sm font-semibold text-fg">"Filter by Date Range"</p>
            <div class="flex flex-wrap gap-2">
                {QuickRange::ALL
                    .into_iter()
                    .map(|quick| {
                        view! {
                            <Button
                                variant=ButtonVariant::Outline
                                class="text-xs"
                                disabled=busy
                                on:click=move |_| on_quick.call(quick)
                            >
                                {quick.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4 items-end">
                <div class="space-y-2">
                    <label for="start-date" class="text-sm text-fg">"From Date"</label>
                    <input
                        id="start-date"
                        type="date"
                        class=DATE_INPUT_CLASS
                        max=max_date.clone()
                        prop:value=start
                        on:input=move |ev| range.update(|r| r.start = event_target_value(&ev))
                    />
                </div>
                <div class="space-y-2">
                    <label for="end-date" class="text-sm text-fg">"To Date"</label>
                    <input
                        id="end-date"
                        type="date"
                        class=DATE_INPUT_CLASS
                        max=max_date
                        min=start
                        prop:value=end
                        on:input=move |ev| range.update(|r| r.end = event_target_value(&ev))
                    />
                </div>
                <Button loading=busy on:click=move |_| on_apply.call(())>
                    {move || if busy.get() { "Filtering..." } else { "Apply Filter" }}
                </Button>
                <Button variant=ButtonVariant::Outline disabled=busy on:click=move |_| on_reset.call(())>
                    "Reset"
                </Button>
            </div>
            <Show when=move || error.with(Option::is_some)>
                <p class="text-sm text-status-error-text" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            {move || {
                applied
                    .with(DateRange::label)
                    .map(|label| {
                        view! {
                            <div class="flex items-center gap-2 border-t border-border pt-2">
                                <span class="text-sm text-fg-muted">"Active Filter:"</span>
                                <Badge>{label}</Badge>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
