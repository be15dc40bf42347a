use yew::prelude::*;

use crate::catalog::Professional;

#[derive(Properties, PartialEq)]
pub struct ProfessionalTileProps {
    pub professional: &'static Professional,
    /// Whether the currently highlighted step involves this role.
    pub is_highlighted: bool,
    pub on_select: Callback<usize>,
}

/// Clicking a role jumps the flow to the first step it takes part in.
#[function_component(ProfessionalTile)]
pub fn professional_tile(props: &ProfessionalTileProps) -> Html {
    let professional = props.professional;
    let onclick = {
        let on_select = props.on_select.clone();
        let first = professional.steps.first().copied();
        Callback::from(move |_: MouseEvent| {
            if let Some(step) = first {
                on_select.emit(step);
            }
        })
    };

    let steps = professional
        .steps
        .iter()
        .map(|s| (s + 1).to_string())
        .collect::<Vec<_>>()
        .join(" · ");

    html! {
        <div class={classes!(
                "professional-tile",
                professional.category.theme_class(),
                props.is_highlighted.then(|| "highlighted"),
            )}
            onclick={onclick}>
            <h4>{ professional.role }</h4>
            <p>{ professional.focus }</p>
            <span class="professional-tile__steps">{ format!("Pasos {}", steps) }</span>
        </div>
    }
}
