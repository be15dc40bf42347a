use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FlowArrowProps {
    #[prop_or_default]
    pub delay: f64,
}

#[function_component(FlowArrow)]
pub fn flow_arrow(props: &FlowArrowProps) -> Html {
    html! {
        <div class="flow-arrow" style={format!("animation-delay: {:.1}s;", props.delay)}>
            <div class="flow-arrow__bounce">
                <div class="flow-arrow__glow"></div>
                <div class="flow-arrow__disc">{"↓"}</div>
            </div>
        </div>
    }
}
