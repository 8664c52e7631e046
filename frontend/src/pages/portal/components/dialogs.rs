use crate::{
    components::confirm_dialog::{ConfirmDialog, Modal},
    pages::portal::utils::{PunchKind, PunchReceipt},
};
use leptos::*;

#[cfg(target_arch = "wasm32")]
fn tick_while_open(open: Signal<bool>, clock: RwSignal<String>) {
    use crate::utils::time::current_time_string;
    use gloo_timers::callback::Interval;

    let interval = store_value(None::<Interval>);
    create_effect(move |_| {
        if open.get() {
            clock.set(current_time_string());
            interval.set_value(Some(Interval::new(1_000, move || {
                let _ = clock.try_update(|now| *now = current_time_string());
            })));
        } else {
            // Dropping the interval cancels it.
            interval.set_value(None);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn tick_while_open(_open: Signal<bool>, _clock: RwSignal<String>) {}

/// Asks before punching, showing a clock that ticks each second while open.
#[component]
pub fn PunchConfirmDialog(
    pending: RwSignal<Option<PunchKind>>,
    clock: RwSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || pending.with(Option::is_some));
    tick_while_open(is_open, clock);

    let title = Signal::derive(move || {
        pending
            .get()
            .map(PunchKind::confirm_title)
            .unwrap_or_default()
    });
    let message = Signal::derive(move || {
        pending
            .get()
            .map(|kind| clock.with(|now| kind.confirm_message(now)))
            .unwrap_or_default()
    });

    view! {
        <ConfirmDialog
            is_open=is_open
            title=title
            message=message
            on_confirm=on_confirm
            on_cancel=on_cancel
        />
    }
}

#[component]
pub fn PunchReceiptDialog(receipt: RwSignal<Option<PunchReceipt>>, on_close: Callback<()>) -> impl IntoView {
    let is_open = Signal::derive(move || receipt.with(Option::is_some));
    let title = Signal::derive(move || {
        receipt
            .with(|r| r.as_ref().map(|r| r.kind.success_title()))
            .unwrap_or_default()
            .to_string()
    });

    view! {
        <Modal is_open=is_open title=title on_close=on_close>
            {move || {
                receipt
                    .get()
                    .map(|r| {
                        view! {
                            <div class="text-center space-y-2">
                                <p class="text-sm text-fg-muted">{r.kind.success_lead()}</p>
                                <p class="text-3xl font-bold text-fg">{r.time}</p>
                                <p class="text-sm text-fg-muted">{r.date}</p>
                            </div>
                        }
                    })
            }}
            <div class="flex justify-end">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| on_close.call(())
                >
                    "Close"
                </button>
            </div>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn confirm_shows_kind_and_clock() {
        let html = render_to_string(|| {
            let pending = create_rw_signal(Some(PunchKind::CheckOut));
            let clock = create_rw_signal("17:02:03".to_string());
            view! {
                <PunchConfirmDialog
                    pending=pending
                    clock=clock
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Konfirmasi Check-out"));
        assert!(html.contains("Apakah Anda yakin ingin check-out pada pukul 17:02:03?"));
        assert!(html.contains("Ya, Lanjutkan"));
    }

    #[test]
    fn confirm_hidden_without_pending_punch() {
        let html = render_to_string(|| {
            view! {
                <PunchConfirmDialog
                    pending=create_rw_signal(None)
                    clock=create_rw_signal(String::new())
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn receipt_shows_time_and_date() {
        let html = render_to_string(|| {
            let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
            let receipt = create_rw_signal(Some(PunchReceipt::new(
                PunchKind::CheckIn,
                "08:05:00".into(),
                date,
            )));
            view! { <PunchReceiptDialog receipt=receipt on_close=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Check In Successful!"));
        assert!(html.contains("You have successfully checked in at:"));
        assert!(html.contains("08:05:00"));
        assert!(html.contains("Thursday, 02 January 2025"));
        assert!(html.contains("Close"));
    }
}
