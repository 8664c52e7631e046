use crate::{
    api::AttendanceRecord,
    components::{
        common::{Button, ButtonVariant, StatusBadge},
        empty_state::EmptyState,
        layout::LoadingSpinner,
    },
    config,
    pages::portal::utils::{empty_message, punch_time, record_count_label, record_day, remaining, HistoryFilter},
    utils::status::AttendanceStatus,
};
use leptos::*;

#[component]
fn PunchCell(label: &'static str, time: String, status: AttendanceStatus) -> impl IntoView {
    let recorded = status != AttendanceStatus::NotRecorded;
    view! {
        <div class="space-y-1">
            <p class="text-xs text-fg-muted">{label}</p>
            <p class="text-sm font-semibold text-fg">{time}</p>
            {recorded.then(|| view! { <StatusBadge status=status /> })}
        </div>
    }
}

#[component]
pub fn RecordCard(record: AttendanceRecord) -> impl IntoView {
    let tz = config::current_time_zone();
    view! {
        <li class="rounded-lg border border-border bg-surface-elevated p-4 space-y-3">
            <p class="text-sm font-medium text-fg">{record_day(&record, tz)}</p>
            <div class="grid grid-cols-2 gap-4">
                <PunchCell
                    label="Clock In"
                    time=punch_time(record.clock_in.as_deref(), tz)
                    status=record.clock_in_status(tz)
                />
                <PunchCell
                    label="Clock Out"
                    time=punch_time(record.clock_out.as_deref(), tz)
                    status=record.clock_out_status(tz)
                />
            </div>
        </li>
    }
}

#[component]
pub fn HistoryFilterBar(
    filter: Signal<HistoryFilter>,
    count: Signal<usize>,
    on_start: Callback<String>,
    on_end: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-muted p-4 space-y-3">
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                <label class="text-sm text-fg">
                    "From"
                    <input
                        type="date"
                        class="mt-1 w-full form-control-input"
                        prop:value=move || filter.with(|f| f.start.clone())
                        on:change=move |ev| on_start.call(event_target_value(&ev))
                    />
                </label>
                <label class="text-sm text-fg">
                    "To"
                    <input
                        type="date"
                        class="mt-1 w-full form-control-input"
                        prop:value=move || filter.with(|f| f.end.clone())
                        on:change=move |ev| on_end.call(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="flex items-center justify-between text-sm">
                <span class="text-fg-muted">{move || record_count_label(count.get())}</span>
                <Show when=move || filter.with(HistoryFilter::is_active)>
                    <button type="button" class="text-action-primary-bg hover:underline" on:click=move |_| on_clear.call(())>
                        "Clear Filter"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn HistoryList(
    #[prop(into)] loading: Signal<bool>,
    records: Signal<Vec<AttendanceRecord>>,
    total: Signal<usize>,
    filter_active: Signal<bool>,
    on_load_more: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let left = move || remaining(total.get(), records.with(Vec::len));
    view! {
        {move || {
            if loading.get() && total.get() == 0 {
                return view! {
                    <div class="rounded-lg border border-border bg-surface-elevated p-8">
                        <LoadingSpinner label="Loading Attendance Records" />
                    </div>
                }
                .into_view();
            }
            if total.get() == 0 {
                if filter_active.get() {
                    let clear = view! {
                        <Button variant=ButtonVariant::Outline on:click=move |_| on_clear.call(())>
                            "Clear Filters"
                        </Button>
                    };
                    return view! {
                        <EmptyState
                            title="No Attendance Records Found"
                            description=empty_message(true)
                            action=clear.into_view()
                        />
                    }
                    .into_view();
                }
                return view! {
                    <EmptyState title="No Attendance Records Found" description=empty_message(false) />
                }
                .into_view();
            }
            view! {
                <ul class="space-y-3">
                    {records
                        .get()
                        .into_iter()
                        .map(|record| view! { <RecordCard record=record /> })
                        .collect_view()}
                </ul>
                <Show when=move || { left() > 0 }>
                    <Button
                        variant=ButtonVariant::Outline
                        class="w-full mt-3"
                        on:click=move |_| on_load_more.call(())
                    >
                        {move || format!("Load More Records ({} remaining)", left())}
                    </Button>
                </Show>
            }
            .into_view()
        }}
    }
}
