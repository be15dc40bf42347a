use log::info;
use yew::prelude::*;

use crate::catalog::{PROFESSIONALS, STATS, STEPS};
use crate::components::animated_section::AnimatedSection;
use crate::components::flow_arrow::FlowArrow;
use crate::components::particles::ParticleField;
use crate::components::professional_tile::ProfessionalTile;
use crate::components::stat_badge::StatBadge;
use crate::components::step_card::StepCard;
use crate::config::PageConfig;
use crate::hooks::use_step_highlighter;
use crate::selection::Selection;

#[derive(Properties, PartialEq)]
pub struct InfographicProps {
    /// Starting highlight; its length is the number of steps shown.
    pub initial: Selection,
    pub config: PageConfig,
}

#[function_component(Infographic)]
pub fn infographic(props: &InfographicProps) -> Html {
    let highlighter = use_step_highlighter(props.initial, props.config.auto_advance_ms);
    let options = props.config.observer_options();

    {
        let len = props.initial.len();
        use_effect_with_deps(
            move |_| {
                info!("Infographic mounted with {} steps", len);
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let last = props.initial.len() - 1;

    html! {
        <div class="infographic">
            <section class="hero">
                <ParticleField count={props.config.particle_count} />
                <div class="hero__content">
                    <div class="hero__emblem"><span class="hero__cross">{"✚"}</span></div>
                    <h1>{"ACTIVACIÓN LÍNEA DE EMERGENCIA"}</h1>
                    <div class="hero__subtitle">{"PROTOCOLO INTEGRAL DE ATENCIÓN EN EVENTOS DE SALUD"}</div>
                    <div class="hero__stats">
                        { for STATS.iter().enumerate().map(|(i, stat)| html! {
                            <StatBadge stat={stat} delay={0.8 + i as f64 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="flow">
                <div class="flow__inner">
                    <AnimatedSection class={classes!("section-heading")} options={options.clone()}>
                        <div class="section-pill">{"◎ FLUJO DE EMERGENCIA"}</div>
                        <h2>{"PROCESO DE ACTIVACIÓN"}</h2>
                        <p>{"Protocolo paso a paso desde la detección hasta la resolución integral"}</p>
                    </AnimatedSection>

                    <div class="flow__steps">
                        { for STEPS.iter().map(|step| {
                            let delay = step.index as f64 * 0.1;
                            html! {
                                <div class="flow__step" key={step.index.to_string()}>
                                    <AnimatedSection delay={delay} options={options.clone()}>
                                        <StepCard
                                            step={step}
                                            is_active={highlighter.is_active(step.index)}
                                            on_select={highlighter.select.clone()}
                                            delay={delay}
                                            sparkle_count={props.config.sparkle_count}
                                        />
                                    </AnimatedSection>
                                    if step.index < last {
                                        <FlowArrow delay={delay + 0.2} />
                                    }
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="professionals">
                <AnimatedSection class={classes!("section-heading")} options={options.clone()}>
                    <div class="section-pill">{"✚ EQUIPO PROFESIONAL"}</div>
                    <h2>{"QUIÉN INTERVIENE"}</h2>
                    <p>{"Profesionales que participan en cada paso del protocolo"}</p>
                </AnimatedSection>
                <div class="professionals__grid">
                    { for PROFESSIONALS.iter().enumerate().map(|(i, professional)| html! {
                        <AnimatedSection delay={i as f64 * 0.1} options={options.clone()}>
                            <ProfessionalTile
                                professional={professional}
                                is_highlighted={professional.intervenes_in(highlighter.active())}
                                on_select={highlighter.select.clone()}
                            />
                        </AnimatedSection>
                    }) }
                </div>
            </section>

            <footer class="footer">
                <div class="footer__cross">{"✚"}</div>
                <AnimatedSection class={classes!("footer__content")} options={options.clone()}>
                    <div class="footer__shield">{"🛡"}</div>
                    <h3>{"SISTEMA DE EMERGENCIAS INTEGRADO"}</h3>
                    <p>{"Protocolo diseñado para garantizar atención oportuna y especializada en eventos de salud"}</p>
                </AnimatedSection>
                <AnimatedSection class={classes!("footer__legal")} delay={0.2} options={options.clone()}>
                    <p>{"© 2024 Sistema de Activación de Línea de Emergencia"}</p>
                </AnimatedSection>
            </footer>

            <style>
                {r#"
                .infographic {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #fef2f2, #fff7ed, #fefce8);
                    overflow-x: hidden;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #dc2626, #ea580c, #ca8a04);
                }
                .hero__content {
                    position: relative;
                    z-index: 1;
                    max-width: 72rem;
                    margin: 0 auto;
                    text-align: center;
                    color: #fff;
                }
                .hero__emblem {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 5rem;
                    height: 5rem;
                    margin-bottom: 2rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    animation: pop-in 0.8s ease-out both;
                }
                .hero__cross {
                    font-size: 2.5rem;
                    animation: spin 8s linear infinite;
                }
                .hero h1 {
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                    font-weight: 900;
                    margin-bottom: 1rem;
                    text-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                    animation: rise 0.6s 0.2s ease-out both;
                }
                .hero__subtitle {
                    font-size: 1.2rem;
                    font-weight: 600;
                    margin-bottom: 2rem;
                    opacity: 0.9;
                    animation: rise 0.5s 0.4s ease-out both;
                }
                .hero__stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .stat-badge {
                    padding: 1rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.2);
                    animation: pop-in 0.3s ease-out both;
                }
                .stat-badge__glyph, .stat-badge__label {
                    color: #fde047;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .stat-badge__glyph { font-size: 1.5rem; }
                .stat-badge__value {
                    font-size: 0.9rem;
                    font-weight: 900;
                }

                .flow {
                    padding: 4rem 1rem;
                }
                .flow__inner {
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .section-heading h2 {
                    font-size: clamp(1.9rem, 5vw, 3rem);
                    font-weight: 900;
                    color: #1f2937;
                    margin-bottom: 1rem;
                }
                .section-heading p {
                    color: #4b5563;
                    font-size: 1.1rem;
                    font-weight: 500;
                }
                .section-pill {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    margin-bottom: 1.5rem;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #ef4444, #f97316);
                    color: #fff;
                    font-weight: 700;
                    font-size: 0.85rem;
                }

                .animated-section {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.4s ease-out, transform 0.4s ease-out;
                }
                .animated-section.in-view {
                    opacity: 1;
                    transform: translateY(0);
                }

                .step-card {
                    position: relative;
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    cursor: pointer;
                    overflow: hidden;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    transition: transform 0.2s, box-shadow 0.3s;
                    animation: card-in 0.5s ease-out both;
                }
                .step-card.hovered { transform: scale(1.03) translateY(-5px); }
                .step-card:active { transform: scale(0.97); }
                .step-card.active { box-shadow: 0 0 0 4px rgba(250, 204, 21, 0.8), 0 20px 25px rgba(250, 204, 21, 0.4); }
                .step-card__number, .step-card__star {
                    position: absolute;
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #facc15;
                    color: #713f12;
                    font-weight: 700;
                    font-size: 0.85rem;
                    z-index: 2;
                }
                .step-card__number { top: 0.4rem; left: 0.4rem; animation: pop-in 0.3s ease-out both; }
                .step-card__star { top: 0.4rem; right: 0.4rem; animation: spin 2s linear infinite; }
                .step-card__shine {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05), transparent);
                    transform: translateX(-100%);
                    transition: transform 0.6s;
                }
                .step-card.hovered .step-card__shine { transform: translateX(100%); }
                .step-card__pulse {
                    position: absolute;
                    inset: 0;
                    border-radius: 1.5rem;
                    border: 2px solid #facc15;
                    animation: border-pulse 2s ease-in-out infinite;
                }
                .step-card__body {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .step-card__icon {
                    padding: 1rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.2);
                }
                .step-card__text { flex: 1; }
                .step-card__text h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 0.75rem;
                }
                .step-card__text p {
                    font-size: 0.9rem;
                    line-height: 1.6;
                    opacity: 0.9;
                    margin: 0;
                }
                .step-card__details {
                    margin: 0.75rem 0 0;
                    padding-left: 1.2rem;
                    font-size: 0.85rem;
                }
                .sparkle {
                    position: absolute;
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #fde047;
                    animation: sparkle 2.5s infinite;
                }

                .theme-emergency { background: linear-gradient(135deg, #ef4444, #dc2626, #b91c1c); }
                .theme-medical { background: linear-gradient(135deg, #3b82f6, #2563eb, #1d4ed8); }
                .theme-support { background: linear-gradient(135deg, #22c55e, #16a34a, #15803d); }
                .theme-care { background: linear-gradient(135deg, #a855f7, #9333ea, #7e22ce); }
                .theme-coordination { background: linear-gradient(135deg, #14b8a6, #0d9488, #0f766e); }
                .theme-psychology { background: linear-gradient(135deg, #ec4899, #db2777, #be185d); }
                .theme-therapy { background: linear-gradient(135deg, #f97316, #ea580c, #c2410c); }
                .theme-documentation { background: linear-gradient(135deg, #6366f1, #4f46e5, #4338ca); }
                .theme-family { background: linear-gradient(135deg, #06b6d4, #0891b2, #0e7490); }
                .theme-external { background: linear-gradient(135deg, #10b981, #059669, #047857); }

                .flow-arrow {
                    display: flex;
                    justify-content: center;
                    margin: 1.5rem 0;
                    animation: pop-in 0.4s ease-out both;
                }
                .flow-arrow__bounce {
                    position: relative;
                    animation: bounce 2s ease-in-out infinite;
                }
                .flow-arrow__disc, .flow-arrow__glow {
                    padding: 0.75rem 1.1rem;
                    border-radius: 50%;
                    background: linear-gradient(90deg, #ef4444, #f97316, #eab308);
                    color: #fff;
                    font-weight: 900;
                    font-size: 1.4rem;
                }
                .flow-arrow__glow {
                    position: absolute;
                    inset: 0;
                    filter: blur(12px);
                    opacity: 0.5;
                    animation: pulse 2s ease-in-out infinite;
                }

                .professionals {
                    padding: 2rem 1rem 4rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .professionals__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 1rem;
                }
                .professional-tile {
                    height: 100%;
                    padding: 1.25rem;
                    border-radius: 1.25rem;
                    color: #fff;
                    cursor: pointer;
                    opacity: 0.75;
                    transition: opacity 0.3s, transform 0.3s, box-shadow 0.3s;
                }
                .professional-tile.highlighted {
                    opacity: 1;
                    transform: translateY(-4px);
                    box-shadow: 0 0 0 3px #facc15;
                }
                .professional-tile h4 { margin: 0 0 0.5rem; font-size: 1.05rem; }
                .professional-tile p { margin: 0 0 0.75rem; font-size: 0.85rem; opacity: 0.9; }
                .professional-tile__steps { font-size: 0.75rem; font-weight: 700; }

                .footer {
                    position: relative;
                    overflow: hidden;
                    padding: 3rem 1rem;
                    text-align: center;
                    color: #fff;
                    background: linear-gradient(135deg, #111827, #7f1d1d, #7c2d12);
                }
                .footer__cross {
                    position: absolute;
                    top: 2.5rem;
                    right: 2.5rem;
                    font-size: 4rem;
                    opacity: 0.1;
                    animation: spin 30s linear infinite;
                }
                .footer__content { margin-bottom: 2rem; }
                .footer__shield {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 1rem;
                    border-radius: 50%;
                    background: linear-gradient(90deg, #ef4444, #f97316);
                    font-size: 2rem;
                }
                .footer h3 { font-size: 1.5rem; font-weight: 900; margin-bottom: 1rem; }
                .footer p { color: #d1d5db; font-weight: 500; }
                .footer__legal {
                    border-top: 1px solid #374151;
                    padding-top: 1.5rem;
                }
                .footer__legal p { color: #9ca3af; }

                @keyframes spin { to { transform: rotate(360deg); } }
                @keyframes pulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.3); }
                }
                @keyframes pop-in {
                    from { transform: scale(0); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                @keyframes rise {
                    from { transform: translateY(40px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @keyframes card-in {
                    from { transform: translateX(-50px) scale(0.8); opacity: 0; }
                    to { transform: translateX(0) scale(1); opacity: 1; }
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(0) scale(1); }
                    50% { transform: translateY(10px) scale(1.1); }
                }
                @keyframes border-pulse {
                    0%, 100% { opacity: 0.3; transform: scale(1); }
                    50% { opacity: 0.8; transform: scale(1.02); }
                }
                @keyframes sparkle {
                    0% { opacity: 0; transform: scale(0) rotate(0deg); }
                    30% { opacity: 1; transform: scale(1) rotate(180deg); }
                    60%, 100% { opacity: 0; transform: scale(0) rotate(360deg); }
                }

                @media (max-width: 768px) {
                    .hero__stats { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </div>
    }
}

/// Shown instead of the flow when the compiled-in catalog is unusable.
#[function_component(CatalogUnavailable)]
pub fn catalog_unavailable() -> Html {
    html! {
        <div class="infographic">
            <div class="catalog-error" style="padding: 4rem 1rem; text-align: center; color: #7f1d1d;">
                <h2>{"ACTIVACIÓN LÍNEA DE EMERGENCIA"}</h2>
                <p>{"El protocolo no está disponible en este momento. Comuníquese con la línea 123."}</p>
            </div>
        </div>
    }
}
