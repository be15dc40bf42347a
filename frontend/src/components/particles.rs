use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub from: Point,
    pub to: Point,
    pub duration_s: f64,
}

pub const FIELD_WIDTH: f64 = 1200.0;
pub const FIELD_HEIGHT: f64 = 800.0;

/// `rand` yields values in `[0, 1)`.
pub fn scatter_points(count: usize, width: f64, height: f64, mut rand: impl FnMut() -> f64) -> Vec<Point> {
    (0..count)
        .map(|_| Point {
            x: rand() * width,
            y: rand() * height,
        })
        .collect()
}

pub fn scatter_particles(count: usize, mut rand: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let from = Point {
                x: rand() * FIELD_WIDTH,
                y: rand() * FIELD_HEIGHT,
            };
            let to = Point {
                x: rand() * FIELD_WIDTH,
                y: rand() * FIELD_HEIGHT,
            };
            Particle {
                from,
                to,
                duration_s: rand() * 10.0 + 5.0,
            }
        })
        .collect()
}

pub fn browser_random() -> f64 {
    web_sys::js_sys::Math::random()
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub count: usize,
}

/// Drifting dots behind the hero. Positions are rolled once per mount.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let count = props.count;
    let particles = use_memo(move |&count| scatter_particles(count, browser_random), count);

    html! {
        <div class="particle-field">
            <style>
                {r#"
                    .particle-field {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .particle {
                        position: absolute;
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #fde047;
                        opacity: 0.3;
                        animation-name: drift;
                        animation-iteration-count: infinite;
                        animation-direction: alternate;
                        animation-timing-function: ease-in-out;
                    }
                    @keyframes drift {
                        from { transform: translate(var(--from-x), var(--from-y)); }
                        to { transform: translate(var(--to-x), var(--to-y)); }
                    }
                "#}
            </style>
            { for particles.iter().map(|p| {
                let style = format!(
                    "--from-x: {:.0}px; --from-y: {:.0}px; --to-x: {:.0}px; --to-y: {:.0}px; animation-duration: {:.2}s;",
                    p.from.x, p.from.y, p.to.x, p.to.y, p.duration_s
                );
                html! { <div class="particle" style={style}></div> }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn particles_stay_inside_field() {
        let particles = scatter_particles(15, sequence(&[0.0, 0.25, 0.5, 0.999]));
        assert_eq!(particles.len(), 15);
        for p in &particles {
            assert!((0.0..FIELD_WIDTH).contains(&p.from.x));
            assert!((0.0..FIELD_HEIGHT).contains(&p.to.y));
            assert!((5.0..15.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn points_scale_to_area() {
        let points = scatter_points(2, 250.0, 150.0, sequence(&[0.5, 0.25]));
        assert_eq!(points[0], Point { x: 125.0, y: 37.5 });
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(scatter_particles(0, || 0.5).is_empty());
    }
}
