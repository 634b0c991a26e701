use crate::components::{AccordionItem, PointsHeader, RedeemForm, WalletPanel, WithdrawPanel};
use gloo_timers::callback::Timeout;
use shared::config::RewardsConfig;
use shared::models::{AccordionSection, AnyNonEmptyCode, redeem, toggle};
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::IconId;

#[derive(yew::Properties, PartialEq)]
pub struct HomePageProps {
    /// Current points balance, owned by the root component.
    pub points: u32,
    /// Fired by the logout control in the header.
    pub on_logout: Callback<()>,
    /// Fired with the credited amount after an accepted redemption.
    pub on_add_points: Callback<u32>,
}

const fn section_icon(section: AccordionSection) -> IconId {
    match section {
        AccordionSection::Code => IconId::HeroiconsOutlineTag,
        AccordionSection::Wallet => IconId::HeroiconsOutlineWallet,
        AccordionSection::Withdraw => IconId::HeroiconsOutlineArrowUpTray,
    }
}

/// The points dashboard: header with the balance and logout, plus the
/// three-section accordion (code entry opens first).
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let open_section = use_state(|| Some(AccordionSection::Code));
    let code = use_state(String::new);
    let show_success = use_state(|| false);
    // Holding the pending timer in state means replacing it cancels the old
    // one, and unmounting the page cancels whatever is left.
    let success_timer = use_state(|| None::<Timeout>);
    let config = RewardsConfig::new();

    let on_toggle = {
        let open_section = open_section.clone();
        Callback::from(move |section: AccordionSection| {
            open_section.set(toggle(*open_section, section));
        })
    };

    let on_code_input = {
        let code = code.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                code.set(input.value());
            }
        })
    };

    let on_redeem = {
        let code = code.clone();
        let show_success = show_success.clone();
        let success_timer = success_timer.clone();
        let on_add_points = props.on_add_points.clone();
        let config = config.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            // An empty code is suppressed rather than surfaced as an error.
            let Ok(credited) = redeem(&AnyNonEmptyCode, &config, code.as_str()) else {
                return;
            };
            on_add_points.emit(credited);
            code.set(String::new());
            show_success.set(true);
            let timer_flag = show_success.clone();
            success_timer.set(Some(Timeout::new(config.success_message_ms, move || {
                timer_flag.set(false);
            })));
        })
    };

    html! {
        <div class="w-full">
            <PointsHeader points={props.points} on_logout={props.on_logout.clone()} />

            <main class="space-y-4">
                {
                    for AccordionSection::iter().map(|section| {
                        let open = *open_section == Some(section);
                        let body = match section {
                            AccordionSection::Code => html! {
                                <RedeemForm
                                    code={(*code).clone()}
                                    show_success={*show_success}
                                    oninput={on_code_input.clone()}
                                    onsubmit={on_redeem.clone()}
                                />
                            },
                            AccordionSection::Wallet => html! {
                                <WalletPanel points={props.points} />
                            },
                            AccordionSection::Withdraw => html! {
                                <WithdrawPanel points={props.points} />
                            },
                        };
                        html! {
                            <AccordionItem
                                key={section.as_str()}
                                {section}
                                icon_id={section_icon(section)}
                                {open}
                                on_toggle={on_toggle.clone()}
                            >
                                { body }
                            </AccordionItem>
                        }
                    })
                }
            </main>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn props_with_points(points: u32) -> HomePageProps {
        HomePageProps {
            points,
            on_logout: Callback::noop(),
            on_add_points: Callback::noop(),
        }
    }

    #[wasm_bindgen_test]
    async fn dashboard_shows_balance_and_sections() {
        let rendered = yew::LocalServerRenderer::<HomePage>::with_props(props_with_points(10))
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains("Total Points"));
        assert!(rendered.contains("ENTER CODE"));
        assert!(rendered.contains("WALLET"));
        assert!(rendered.contains("WITHDRAW"));
        assert!(rendered.contains("1.50"), "wallet value for 10 points");
    }

    #[wasm_bindgen_test]
    async fn code_section_is_open_first() {
        let rendered = yew::LocalServerRenderer::<HomePage>::with_props(props_with_points(0))
            .hydratable(false)
            .render()
            .await;

        assert_eq!(
            rendered.matches("aria-expanded=\"true\"").count(),
            1,
            "exactly one section open"
        );
        assert!(rendered.contains("Enter your code"));
    }

    #[wasm_bindgen_test]
    async fn success_message_is_hidden_initially() {
        let rendered = yew::LocalServerRenderer::<HomePage>::with_props(props_with_points(0))
            .hydratable(false)
            .render()
            .await;

        assert!(!rendered.contains("successfully added"));
    }
}
