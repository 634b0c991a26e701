use shared::config::RewardsConfig;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(yew::Properties, PartialEq)]
pub struct RedeemFormProps {
    /// Current contents of the code field (owned by the dashboard).
    pub code: String,
    /// Whether the transient confirmation message is visible.
    pub show_success: bool,
    /// Fired on every keystroke in the code field.
    pub oninput: Callback<InputEvent>,
    /// Fired when the form is submitted.
    pub onsubmit: Callback<SubmitEvent>,
}

/// Code entry form. Presentational only: the dashboard owns the field state,
/// the success flag, and its timer.
#[function_component(RedeemForm)]
pub fn redeem_form(props: &RedeemFormProps) -> Html {
    let config = RewardsConfig::new();

    html! {
        <form class="space-y-3 pt-2" onsubmit={props.onsubmit.clone()}>
            <input
                class="input input-bordered w-full"
                type="text"
                placeholder="Enter your code"
                value={props.code.clone()}
                oninput={props.oninput.clone()}
            />
            <button class="btn btn-primary w-full" type="submit">{ "Redeem" }</button>
            if props.show_success {
                <div class="flex items-center justify-center space-x-2 text-success">
                    <Icon icon_id={IconId::HeroiconsSolidCheckCircle} class="w-5 h-5" />
                    <p class="text-sm font-semibold">
                        { format!("{} points successfully added!", config.reward_points) }
                    </p>
                </div>
            }
        </form>
    }
}
