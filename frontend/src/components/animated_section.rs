use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::visibility::ObserverOptions;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger in seconds before the entrance transition starts.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub options: ObserverOptions,
}

/// Fades its children in the first time they scroll into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), props.options.clone());

    html! {
        <div ref={node}
            class={classes!("animated-section", props.class.clone(), in_view.then(|| "in-view"))}
            style={format!("transition-delay: {:.1}s;", props.delay)}>
            { for props.children.iter() }
        </div>
    }
}
