use crate::{
    api::UserProfile,
    components::common::Button,
    pages::portal::utils::{punch_control, schedule_label, today_short, PunchControl, PunchKind},
    state::attendance::TodayContext,
    utils::time::today_in_app_tz,
};
use leptos::*;

#[component]
pub fn ScheduleCard(
    user: Signal<Option<UserProfile>>,
    today: Signal<TodayContext>,
    #[prop(into)] busy: Signal<bool>,
    on_punch: Callback<PunchKind>,
) -> impl IntoView {
    let control = create_memo(move |_| today.with(punch_control));
    let hours = move || user.with(|user| schedule_label(user.as_ref()));

    view! {
        <section class="rounded-lg border border-border bg-surface-elevated p-6 shadow-sm space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-base font-semibold text-fg">"Working Schedule"</h2>
                <div class="text-right">
                    <p class="text-sm font-medium text-fg">"Today"</p>
                    <p class="text-xs text-fg-muted">{today_short(today_in_app_tz())}</p>
                </div>
            </div>
            <div>
                <p class="text-2xl font-bold text-fg">{hours}</p>
                <p class="text-xs text-fg-muted">"Working Hours"</p>
            </div>
            {move || match control.get() {
                PunchControl::Completed => view! {
                    <Button class="w-full" disabled=true>"Attendance Completed Today"</Button>
                }
                .into_view(),
                PunchControl::Ready { kind, enabled } => view! {
                    <Button
                        class="w-full"
                        disabled=Signal::derive(move || !enabled)
                        loading=busy
                        on:click=move |_| on_punch.call(kind)
                    >
                        {kind.label()}
                    </Button>
                }
                .into_view(),
            }}
        </section>
    }
}
