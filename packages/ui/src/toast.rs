use dioxus::prelude::*;

/// How long a toast stays up before dismissing itself (browser only).
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const AUTO_DISMISS_MS: u32 = 6_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Success => "toast toast_success",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);
        let mut toasts = self.toasts;
        toasts.with_mut(|items| {
            items.push(Toast {
                id,
                title,
                body,
                kind,
            })
        });
        self.schedule_dismiss(id);
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    pub fn error(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Error);
    }

    pub fn success(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Success);
    }

    pub fn items(&self) -> Vec<Toast> {
        (self.toasts)()
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let this = *self;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = use_context_provider(|| Toasts { toasts, next_id });

    rsx! {
        {children}
        ToastViewport { toasts: ctx }
    }
}

#[component]
fn ToastViewport(toasts: Toasts) -> Element {
    let lang = crate::use_lang()();
    let items = toasts.items();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items.into_iter() {
                div { key: "{toast.id}", class: toast.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        {crate::t(lang, "common.dismiss")}
                    }
                }
            }
        }
    }
}

impl PartialEq for Toasts {
    fn eq(&self, other: &Self) -> bool {
        self.toasts == other.toasts && self.next_id == other.next_id
    }
}
