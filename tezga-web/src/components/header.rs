use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct HeaderProps {
    #[prop_or_default]
    pub on_open_settings: f::Callback<()>,
}

#[f::function_component(Header)]
pub fn header(props: &HeaderProps) -> f::Html {
    let open_settings = {
        let cb = props.on_open_settings.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(()))
    };
    f::html! {
        <header class="site-header">
            <a class="brand" href="#top">{ "Tezga" }</a>
            <nav class="site-nav" aria-label="Primary">
                <a class="nav-link" href="#categories">{ "Categories" }</a>
                <a class="nav-link" href="#catalog">{ "Catalog" }</a>
                <a class="nav-link" href="#contact">{ "Contact" }</a>
            </nav>
            <button class="btn btn-ghost" id="settings-open-btn" aria-label="Settings"
                    onclick={open_settings}>{ "⚙" }</button>
        </header>
    }
}
