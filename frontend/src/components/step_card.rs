use yew::prelude::*;

use crate::catalog::StepDescriptor;
use crate::components::particles::{browser_random, scatter_points, Point};
use crate::components::step_icon::StepIcon;

const SPARKLE_AREA: (f64, f64) = (250.0, 150.0);

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub step: &'static StepDescriptor,
    pub is_active: bool,
    pub on_select: Callback<usize>,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(5)]
    pub sparkle_count: usize,
}

/// One stage of the flow. Clicking asks the page to highlight it.
#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    let hovered = use_state_eq(|| false);
    let sparkles = use_state(Vec::<Point>::new);

    // Fresh sparkle positions every time the card lights up
    {
        let sparkles = sparkles.clone();
        let count = props.sparkle_count;
        use_effect_with_deps(
            move |&is_active| {
                if is_active {
                    sparkles.set(scatter_points(count, SPARKLE_AREA.0, SPARKLE_AREA.1, browser_random));
                }
                || ()
            },
            props.is_active,
        );
    }

    let onclick = {
        let on_select = props.on_select.clone();
        let index = props.step.index;
        Callback::from(move |_: MouseEvent| on_select.emit(index))
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let step = props.step;
    let class = classes!(
        "step-card",
        step.category.theme_class(),
        props.is_active.then(|| "active"),
        (*hovered).then(|| "hovered"),
    );

    html! {
        <div class={class} onclick={onclick} onmouseenter={onmouseenter} onmouseleave={onmouseleave}
            style={format!("animation-delay: {:.1}s;", props.delay)}>
            <div class="step-card__number" style={format!("animation-delay: {:.1}s;", props.delay + 0.2)}>
                { (step.index + 1).to_string() }
            </div>
            <div class="step-card__shine"></div>

            if props.is_active {
                { for sparkles.iter().enumerate().map(|(i, p)| html! {
                    <div class="sparkle"
                        style={format!("left: {:.0}px; top: {:.0}px; animation-delay: {:.1}s;", p.x, p.y, i as f64 * 0.2)}>
                    </div>
                }) }
            }

            <div class="step-card__body">
                <div class="step-card__icon">
                    <StepIcon category={step.category} is_active={props.is_active} />
                </div>
                <div class="step-card__text">
                    <h3>{ step.title }</h3>
                    <p>{ step.description }</p>
                    if props.is_active && !step.details.is_empty() {
                        <ul class="step-card__details">
                            { for step.details.iter().map(|d| html! { <li>{ *d }</li> }) }
                        </ul>
                    }
                </div>
            </div>

            if props.is_active {
                <div class="step-card__star">{"★"}</div>
                <div class="step-card__pulse"></div>
            }
        </div>
    }
}
