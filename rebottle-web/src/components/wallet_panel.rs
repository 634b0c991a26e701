use shared::config::RewardsConfig;
use shared::models::monetary_value;
use yew::prelude::*;

#[derive(yew::Properties, PartialEq)]
pub struct WalletPanelProps {
    /// Current points balance.
    pub points: u32,
}

/// Read-only wallet display: the monetary value of the balance.
#[function_component(WalletPanel)]
pub fn wallet_panel(props: &WalletPanelProps) -> Html {
    let config = RewardsConfig::new();
    let value = monetary_value(&config, props.points);

    html! {
        <div class="text-center py-4">
            <p class="text-sm text-base-content/70">{ "Total Account Value" }</p>
            <p class="text-5xl font-bold mt-1">
                { format!("{}{}", config.currency_symbol, value) }
            </p>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn render_with_points(points: u32) -> String {
        yew::LocalServerRenderer::<WalletPanel>::with_props(WalletPanelProps { points })
            .hydratable(false)
            .render()
            .await
    }

    #[wasm_bindgen_test]
    async fn wallet_shows_two_decimal_value() {
        assert!(render_with_points(10).await.contains("₹1.50"));
        assert!(render_with_points(2).await.contains("₹0.30"));
    }

    #[wasm_bindgen_test]
    async fn empty_wallet_shows_zero() {
        assert!(render_with_points(0).await.contains("₹0.00"));
    }
}
