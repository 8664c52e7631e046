use super::{
    components::{
        dialogs::{PunchConfirmDialog, PunchReceiptDialog},
        header::PortalHeader,
        history::{HistoryFilterBar, HistoryList},
        schedule::ScheduleCard,
    },
    view_model::{use_portal_view_model, PortalViewModel},
};
use crate::{
    components::layout::ErrorMessage,
    state::auth::use_logout,
};
use leptos::*;

fn punch_error(vm: PortalViewModel) -> Signal<Option<String>> {
    let action = vm.punch_action;
    Signal::derive(move || {
        action
            .value()
            .with(|value| value.as_ref().and_then(|r| r.as_ref().err().map(|e| e.error.clone())))
    })
}

#[component]
pub fn PortalPanel() -> impl IntoView {
    let vm = use_portal_view_model();
    let logout = use_logout();
    let user = Signal::derive(move || vm.user.get());
    let today = Signal::derive(move || vm.attendance.with(|state| state.today.clone()));
    let error = punch_error(vm);
    let total = Signal::derive(move || vm.filtered.with(Vec::len));
    let filter = Signal::derive(move || vm.filter.get());
    let filter_active = Signal::derive(move || vm.filter.with(|f| f.is_active()));

    view! {
        <div class="min-h-screen bg-surface">
            <PortalHeader
                user=user
                refreshing=vm.loading()
                on_refresh=Callback::new(move |_| vm.refresh())
                on_logout=logout
            />
            <main class="max-w-5xl mx-auto px-4 py-6 space-y-6">
                {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <ScheduleCard
                    user=user
                    today=today
                    busy=vm.submitting()
                    on_punch=Callback::new(move |kind| vm.open_confirm(kind))
                />
                <section class="space-y-3">
                    <div class="flex items-center justify-between">
                        <h2 class="text-base font-semibold text-fg">"Attendance History"</h2>
                        <button
                            type="button"
                            class="text-sm text-fg-muted hover:text-fg"
                            on:click=move |_| vm.toggle_filter()
                        >
                            "Filter"
                        </button>
                    </div>
                    <Show when=move || vm.show_filter.get()>
                        <HistoryFilterBar
                            filter=filter
                            count=total
                            on_start=Callback::new(move |value| vm.set_filter_start(value))
                            on_end=Callback::new(move |value| vm.set_filter_end(value))
                            on_clear=Callback::new(move |_| vm.clear_filter())
                        />
                    </Show>
                    <HistoryList
                        loading=vm.loading()
                        records=vm.visible_records()
                        total=total
                        filter_active=filter_active
                        on_load_more=Callback::new(move |_| vm.load_more())
                        on_clear=Callback::new(move |_| vm.clear_filter())
                    />
                </section>
            </main>
            <PunchConfirmDialog
                pending=vm.pending
                clock=vm.clock
                on_confirm=Callback::new(move |_| vm.confirm())
                on_cancel=Callback::new(move |_| vm.cancel_confirm())
            />
            <PunchReceiptDialog receipt=vm.receipt on_close=Callback::new(move |_| vm.close_receipt()) />
        </div>
    }
}
