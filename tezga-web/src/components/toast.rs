use crate::components::foundation as f;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastItem {
    pub id: u32,
    pub kind: ToastKind,
    pub message: f::AttrValue,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub toasts: Vec<ToastItem>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_dismiss: Option<f::Callback<u32>>,
}

#[f::function_component(Toast)]
pub fn toast(props: &ToastProps) -> f::Html {
    let class = f::class_list(&["toast", "toast-end", "toast-top"], &props.class);
    f::html! {
        <div class={class} role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let dismiss_btn = props.on_dismiss.as_ref().map(|cb| {
                    let id = toast.id;
                    let cb = cb.clone();
                    let on_click = f::Callback::from(move |_: f::MouseEvent| cb.emit(id));
                    f::html! {
                        <button class="btn btn-ghost btn-xs" aria-label="Dismiss"
                                onclick={on_click}>{ "✕" }</button>
                    }
                }).unwrap_or_default();
                let alert_class = f::classes!("alert", toast.kind.class());
                f::html! {
                    <div class={alert_class}>
                        <span>{ toast.message.clone() }</span>
                        { dismiss_btn }
                    </div>
                }
            }) }
        </div>
    }
}
