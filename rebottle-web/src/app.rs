use crate::models::{AppAction, AppState};
use crate::pages::{HomePage, LoginPage};
use shared::models::Screen;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Root component: owns the session state and switches between the login
/// gate and the points dashboard.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    let on_login = {
        let state = state.clone();
        Callback::from(move |()| {
            log(std::format!("Switching to screen: {}", Screen::Main).as_str());
            state.dispatch(AppAction::LogIn);
        })
    };

    let on_logout = {
        let state = state.clone();
        Callback::from(move |()| {
            log(std::format!("Switching to screen: {}", Screen::Login).as_str());
            state.dispatch(AppAction::LogOut);
        })
    };

    let on_add_points = {
        let state = state.clone();
        Callback::from(move |amount: u32| state.dispatch(AppAction::AddPoints(amount)))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 font-sans">
            <div class="card w-full max-w-md mx-auto shadow-2xl bg-base-100">
                <div class="card-body">
                    {
                        match state.session.screen() {
                            Screen::Login => html! { <LoginPage {on_login} /> },
                            Screen::Main => html! {
                                <HomePage
                                    points={state.session.points()}
                                    {on_logout}
                                    {on_add_points}
                                />
                            },
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn app_starts_at_the_login_gate() {
        let rendered = yew::LocalServerRenderer::<App>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains("REBOTTLE"));
        assert!(rendered.contains("CONTINUE"));
        assert!(
            !rendered.contains("Total Points"),
            "dashboard must not render before login"
        );
    }

    #[wasm_bindgen_test]
    async fn app_renders_both_login_fields() {
        let rendered = yew::LocalServerRenderer::<App>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains("E-MAIL"));
        assert!(rendered.contains("PASSWORD"));
    }
}
