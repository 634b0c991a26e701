use crate::config::FrontendConfig;
use shared::models::LoginForm;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(yew::Properties, PartialEq)]
pub struct LoginPageProps {
    /// Fired when the form is submitted with both fields filled in.
    pub on_login: Callback<()>,
}

/// The login gate. Any non-empty e-mail/password pair passes; there is no
/// credential check behind it.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let config = FrontendConfig::new();

    let can_continue = LoginForm::new((*email).clone(), (*password).clone()).can_continue();

    let onsubmit = {
        let on_login = props.on_login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if can_continue {
                on_login.emit(());
            }
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    html! {
        <div class="flex flex-col items-center text-center">
            <h1 class="text-5xl font-bold text-success">{ config.app_title().to_string() }</h1>
            <p class="mt-2 text-base-content/70">{ config.tagline().to_string() }</p>

            <form class="w-full mt-10" {onsubmit}>
                <div class="flex flex-col space-y-4">
                    <input
                        class="input input-bordered w-full"
                        type="email"
                        placeholder="E-MAIL"
                        value={(*email).clone()}
                        oninput={on_email_change}
                    />
                    <input
                        class="input input-bordered w-full"
                        type="password"
                        placeholder="PASSWORD"
                        value={(*password).clone()}
                        oninput={on_password_change}
                    />
                </div>
                <button
                    class="btn btn-primary w-full mt-6"
                    type="submit"
                    disabled={!can_continue}
                >
                    { "CONTINUE" }
                </button>
            </form>
        </div>
    }
}
