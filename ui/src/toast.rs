use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Append a notification and return its id.
    pub fn push(&mut self, level: ToastLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    }

    /// Remove one notification by id.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// How long a toast stays up before it removes itself.
const TOAST_TIMEOUT_MS: u32 = 4_000;

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Append a notification and schedule its removal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = toasts.write().push(level, message);

    // Auto-dismiss timer
    #[cfg(target_arch = "wasm32")]
    {
        let mut toasts = *toasts;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            toasts.write().dismiss(id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Renders the current notifications with a dismiss control each.
#[component]
pub fn ToastViewport() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "toast-viewport",
            for Toast { id, level, message } in toasts().items.iter().cloned() {
                div {
                    key: "{id}",
                    class: match level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    span { "{message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| {
                            toasts.write().dismiss(id);
                        },
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Success, "saved");
        let b = toasts.push(ToastLevel::Error, "failed");
        assert_ne!(a, b);
        assert_eq!(toasts.items.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_the_matching_toast() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Success, "one");
        let b = toasts.push(ToastLevel::Success, "two");
        toasts.dismiss(a);
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].id, b);
    }

    // The timer calls dismiss with the id push returned, so expiry after the
    // timeout reduces to this same removal and the list stays bounded.
    #[test]
    fn test_expired_ids_do_not_accumulate() {
        let mut toasts = Toasts::default();
        for _ in 0..10 {
            let id = toasts.push(ToastLevel::Success, "note created");
            toasts.dismiss(id);
        }
        assert!(toasts.items.is_empty());
    }
}
