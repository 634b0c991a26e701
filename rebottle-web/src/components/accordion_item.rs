use shared::models::AccordionSection;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(yew::Properties, PartialEq)]
pub struct AccordionItemProps {
    /// Which section this item represents; supplies the title.
    pub section: AccordionSection,
    /// Icon shown next to the title.
    pub icon_id: IconId,
    /// Whether this section is the open one.
    pub open: bool,
    /// Fired with the section when the toggle row is clicked.
    pub on_toggle: Callback<AccordionSection>,
    #[prop_or_default]
    pub children: Children,
}

/// Collapsible accordion shell. The body stays in the DOM and is collapsed
/// with classes, so field contents survive closing and reopening a section.
#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let section = props.section;
        Callback::from(move |_event: MouseEvent| on_toggle.emit(section))
    };

    let chevron_class = if props.open {
        "w-6 h-6 text-base-content/50 transition-transform duration-300 rotate-180"
    } else {
        "w-6 h-6 text-base-content/50 transition-transform duration-300"
    };
    let body_class = if props.open {
        "max-h-96 transition-all duration-500 overflow-hidden"
    } else {
        "max-h-0 transition-all duration-500 overflow-hidden"
    };

    html! {
        <div class="bg-base-100 rounded-xl shadow-sm overflow-hidden">
            <button
                class="w-full flex justify-between items-center p-4"
                aria-expanded={props.open.to_string()}
                {onclick}
            >
                <div class="flex items-center space-x-4">
                    <span class="text-success">
                        <Icon icon_id={props.icon_id} class="w-6 h-6" />
                    </span>
                    <span class="font-bold text-lg">{ props.section.title() }</span>
                </div>
                <Icon icon_id={IconId::HeroiconsOutlineChevronDown} class={chevron_class} />
            </button>
            <div class={body_class}>
                <div class="px-5 pb-5">
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}
