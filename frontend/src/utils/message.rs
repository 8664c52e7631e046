use leptos::*;

pub const SUCCESS_DISMISS_MS: u32 = 2_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}

/// Clears the success message after `millis`, unless it was replaced meanwhile.
pub fn dismiss_success_after(messages: RwSignal<MessageState>, millis: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        let shown = messages.with_untracked(|state| state.success.clone());
        gloo_timers::callback::Timeout::new(millis, move || {
            let _ = messages.try_update(|state| {
                if state.success == shown {
                    state.success = None;
                }
            });
        })
        .forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (messages, millis);
}
