use yew::prelude::*;

use crate::catalog::StatBadge as Stat;

#[derive(Properties, PartialEq)]
pub struct StatBadgeProps {
    pub stat: &'static Stat,
    #[prop_or_default]
    pub delay: f64,
}

#[function_component(StatBadge)]
pub fn stat_badge(props: &StatBadgeProps) -> Html {
    let stat = props.stat;
    html! {
        <div class="stat-badge" style={format!("animation-delay: {:.1}s;", props.delay)}>
            <div class="stat-badge__glyph">{ stat.glyph }</div>
            <div class="stat-badge__label">{ stat.label }</div>
            <div class="stat-badge__value">{ stat.value }</div>
        </div>
    }
}
