use once_cell::sync::Lazy;
use regex::Regex;

use crate::components::foundation as f;
use f::TargetCast;

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

const MIN_MESSAGE_LEN: usize = 10;

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct ContactFormProps {
    /// Fired with a confirmation message after a successful (fake) submit.
    #[prop_or_default]
    pub on_submitted: f::Callback<f::AttrValue>,
}

#[f::function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> f::Html {
    let name = f::use_state(String::new);
    let email = f::use_state(String::new);
    let message = f::use_state(String::new);
    let errors = f::use_state(Vec::<String>::new);

    let on_name = {
        let name = name.clone();
        f::Callback::from(move |e: f::InputEvent| {
            name.set(e.target_unchecked_into::<f::HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        f::Callback::from(move |e: f::InputEvent| {
            email.set(e.target_unchecked_into::<f::HtmlInputElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        f::Callback::from(move |e: f::InputEvent| {
            message.set(e.target_unchecked_into::<f::HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let errors = errors.clone();
        let on_submitted = props.on_submitted.clone();
        f::Callback::from(move |e: f::SubmitEvent| {
            e.prevent_default();
            let mut problems = Vec::new();
            if name.trim().is_empty() {
                problems.push("Please tell us your name.".to_string());
            }
            if !is_valid_email(email.trim()) {
                problems.push("That email address does not look right.".to_string());
            }
            if message.trim().len() < MIN_MESSAGE_LEN {
                problems.push(format!(
                    "A few more words, please (at least {MIN_MESSAGE_LEN} characters)."
                ));
            }
            if problems.is_empty() {
                // there is no backend; the submission ends at a toast
                on_submitted.emit(f::AttrValue::from(format!(
                    "Thanks {}! We received your message.",
                    name.trim()
                )));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                errors.set(Vec::new());
            } else {
                errors.set(problems);
            }
        })
    };

    f::html! {
        <section id="contact" class="contact">
            <h2>{ "Write to us" }</h2>
            <form class="contact-form" onsubmit={onsubmit}>
                <label class="contact-form__field">
                    <span>{ "Name" }</span>
                    <input type="text" name="name" value={(*name).clone()}
                           oninput={on_name} placeholder="Your name" />
                </label>
                <label class="contact-form__field">
                    <span>{ "Email" }</span>
                    <input type="email" name="email" value={(*email).clone()}
                           oninput={on_email} placeholder="you@example.com" />
                </label>
                <label class="contact-form__field">
                    <span>{ "Message" }</span>
                    <textarea name="message" value={(*message).clone()}
                              oninput={on_message} rows="5"
                              placeholder="What can we do for you?" />
                </label>
                { if errors.is_empty() { f::Html::default() } else { f::html! {
                    <ul class="contact-form__errors" role="alert">
                        { for errors.iter().map(|err| f::html! { <li>{ err.clone() }</li> }) }
                    </ul>
                } } }
                <button type="submit" class="btn btn-primary">{ "Send message" }</button>
            </form>
        </section>
    }
}
