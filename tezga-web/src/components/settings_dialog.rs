use crate::components::foundation as f;
use f::TargetCast;
use tezga_catalog::RotationCfg;

const INTERVAL_CHOICES: &[(u32, &str)] = &[
    (2000, "2 seconds"),
    (3000, "3 seconds"),
    (5000, "5 seconds"),
    (8000, "8 seconds"),
];

#[derive(f::Properties, PartialEq, Clone)]
pub struct SettingsDialogProps {
    pub open: bool,
    pub cfg: RotationCfg,
    #[prop_or_default]
    pub on_close: f::Callback<()>,
    #[prop_or_default]
    pub on_change: f::Callback<RotationCfg>,
}

#[f::function_component(SettingsDialog)]
pub fn settings_dialog(props: &SettingsDialogProps) -> f::Html {
    if !props.open {
        return f::Html::default();
    }
    let cfg = props.cfg;
    let close = {
        let cb = props.on_close.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        f::Callback::from(move |e: f::KeyboardEvent| {
            if !cfg!(target_arch = "wasm32") {
                let _ = &e;
                return;
            }
            if e.key() == "Escape" {
                cb.emit(());
            }
        })
    };
    let toggle_enabled = {
        let on_change = props.on_change.clone();
        f::Callback::from(move |_: f::Event| {
            on_change.emit(RotationCfg {
                enabled: !cfg.enabled,
                ..cfg
            });
        })
    };
    let toggle_scope = {
        let on_change = props.on_change.clone();
        f::Callback::from(move |_: f::Event| {
            on_change.emit(RotationCfg {
                modal_only: !cfg.modal_only,
                ..cfg
            });
        })
    };
    let change_interval = {
        let on_change = props.on_change.clone();
        f::Callback::from(move |e: f::Event| {
            let value = e.target_unchecked_into::<f::HtmlSelectElement>().value();
            if let Ok(interval_ms) = value.parse::<u32>() {
                on_change.emit(RotationCfg { interval_ms, ..cfg }.clamped());
            }
        })
    };
    f::html! {
        <div class="modal modal-open settings-dialog" role="dialog" aria-modal="true"
             aria-label="Gallery settings" onkeydown={on_keydown} tabindex="-1">
            <div class="modal-box">
                <div class="modal-box__header">
                    <h3 class="modal-box__title">{ "Gallery settings" }</h3>
                    <button class="close" aria-label="Close" onclick={close.clone()}>{ "✕" }</button>
                </div>
                <label class="settings-dialog__row">
                    <input type="checkbox" checked={cfg.enabled} onchange={toggle_enabled} />
                    <span>{ "Rotate gallery images automatically" }</span>
                </label>
                <label class="settings-dialog__row">
                    <span>{ "Rotation interval" }</span>
                    <select onchange={change_interval} disabled={!cfg.enabled}>
                        { for INTERVAL_CHOICES.iter().map(|(ms, label)| f::html! {
                            <option value={ms.to_string()} selected={*ms == cfg.interval_ms}>
                                { *label }
                            </option>
                        }) }
                    </select>
                </label>
                <label class="settings-dialog__row">
                    <input type="checkbox" checked={cfg.modal_only} onchange={toggle_scope} />
                    <span>{ "Only rotate inside the product view" }</span>
                </label>
            </div>
            <div class="modal-backdrop" onclick={close}></div>
        </div>
    }
}
