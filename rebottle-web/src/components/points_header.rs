use crate::config::FrontendConfig;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(yew::Properties, PartialEq)]
pub struct PointsHeaderProps {
    /// Current points balance.
    pub points: u32,
    /// Fired when the logout control is clicked.
    pub on_logout: Callback<()>,
}

/// Dashboard header: brand line, the points total, and the logout control.
#[function_component(PointsHeader)]
pub fn points_header(props: &PointsHeaderProps) -> Html {
    let config = FrontendConfig::new();

    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_event: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="text-center mb-8 relative">
            <h1 class="text-xl font-bold text-success tracking-widest">{ config.app_title().to_string() }</h1>
            <p class="text-6xl font-bold mt-1">{ props.points }</p>
            <p class="text-base-content/70">{ "Total Points" }</p>
            <button
                class="btn btn-ghost btn-circle absolute top-0 right-0"
                aria-label="Logout"
                {onclick}
            >
                <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-6 h-6" />
            </button>
        </header>
    }
}
