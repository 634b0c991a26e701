pub(crate) mod accordion_item;
pub(crate) mod points_header;
pub(crate) mod redeem_form;
pub(crate) mod wallet_panel;
pub(crate) mod withdraw_panel;

// Re-export components for convenience
pub use accordion_item::AccordionItem;
pub use points_header::PointsHeader;
pub use redeem_form::RedeemForm;
pub use wallet_panel::WalletPanel;
pub use withdraw_panel::WithdrawPanel;
