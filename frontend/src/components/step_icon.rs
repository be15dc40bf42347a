use yew::prelude::*;

use crate::catalog::Category;

fn glyph(category: Category) -> &'static str {
    match category {
        Category::Emergency => "✚",
        Category::Medical => "👁",
        Category::Support => "☎",
        Category::Care => "🩺",
        Category::Coordination => "🏥",
        Category::Psychology => "🧠",
        Category::Therapy => "💪",
        Category::Documentation => "📋",
        Category::Family => "👪",
        Category::External => "🚑",
    }
}

fn motion_class(category: Category) -> &'static str {
    match category {
        Category::Emergency => "motion-spin-pulse",
        Category::Medical | Category::Family => "motion-pulse",
        Category::Support => "motion-ring",
        Category::Care => "motion-swing",
        Category::Coordination => "motion-pulse-fast",
        Category::Psychology => "motion-glow",
        Category::Therapy => "motion-spin",
        Category::Documentation => "motion-bob",
        Category::External => "motion-drive",
    }
}

#[derive(Properties, PartialEq)]
pub struct StepIconProps {
    pub category: Category,
    pub is_active: bool,
}

#[function_component(StepIcon)]
pub fn step_icon(props: &StepIconProps) -> Html {
    let motion = props.is_active.then(|| motion_class(props.category));

    html! {
        <div class={classes!("step-icon", motion)}>
            <span class="step-icon__glyph">{ glyph(props.category) }</span>
            {
                if props.is_active && props.category == Category::Coordination {
                    html! {
                        <svg class="heartbeat" width="100" height="30" viewBox="0 0 100 30">
                            <path d="M0,15 L20,15 L25,5 L30,25 L35,10 L40,20 L45,15 L100,15"
                                stroke="currentColor" stroke-width="2" fill="none" />
                        </svg>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .step-icon {
                        position: relative;
                        width: 2rem;
                        height: 2rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.8rem;
                        color: #fff;
                    }
                    .heartbeat path {
                        stroke-dasharray: 140;
                        animation: trace 2s infinite;
                    }
                    .motion-spin-pulse { animation: spin-pulse 2s infinite; }
                    .motion-pulse { animation: pulse 2s infinite; }
                    .motion-pulse-fast { animation: pulse 1s infinite; }
                    .motion-ring { animation: ring 2s infinite; }
                    .motion-swing { animation: swing 2s infinite; }
                    .motion-glow { animation: pulse 1.5s infinite; filter: drop-shadow(0 0 8px #c084fc); }
                    .motion-spin { animation: spin 3s linear infinite; }
                    .motion-bob { animation: bob 1.5s infinite; }
                    .motion-drive { animation: drive 2s infinite; }
                    @keyframes spin-pulse {
                        0% { transform: scale(1) rotate(0deg); }
                        50% { transform: scale(1.2) rotate(180deg); }
                        100% { transform: scale(1) rotate(360deg); }
                    }
                    @keyframes pulse {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.15); }
                    }
                    @keyframes ring {
                        0%, 100% { transform: rotate(0deg); }
                        33% { transform: rotate(15deg); }
                        66% { transform: rotate(-15deg); }
                    }
                    @keyframes swing {
                        0%, 100% { transform: rotate(0deg); }
                        33% { transform: rotate(10deg); }
                        66% { transform: rotate(-10deg); }
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    @keyframes bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-5px); }
                    }
                    @keyframes drive {
                        0%, 100% { transform: translateX(0); }
                        50% { transform: translateX(10px); }
                    }
                    @keyframes trace {
                        0% { stroke-dashoffset: 140; }
                        50% { stroke-dashoffset: 0; }
                        100% { stroke-dashoffset: 140; }
                    }
                "#}
            </style>
        </div>
    }
}
