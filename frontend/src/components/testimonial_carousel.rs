use yew::prelude::*;

use crate::carousel::state::{start_autoplay, Carousel, CarouselAction};
use crate::carousel::testimonials::{Testimonial, TESTIMONIALS, TESTIMONIAL_COUNT};
use crate::timers::BrowserScheduler;

const EXCERPT_CHARS: usize = 100;

fn stars(count: usize, class: &'static str) -> Html {
    (0..count)
        .map(|i| html! { <span key={i} class={class}>{"★"}</span> })
        .collect::<Html>()
}

fn featured(testimonial: &Testimonial) -> Html {
    html! {
        <div class="featured-testimonial">
            <div class="featured-badge">{"⭐ DESTAQUE DA SEMANA"}</div>
            <div class="featured-stars">{ stars(testimonial.stars(), "star star-large") }</div>
            <blockquote class="featured-text">{format!("“{}”", testimonial.text)}</blockquote>
            <div class="featured-author">
                <div class="avatar">{testimonial.initials()}</div>
                <div class="author-details">
                    <h4>{testimonial.name}</h4>
                    <p>{testimonial.role}</p>
                    <span class="highlight-badge">{testimonial.highlight}</span>
                </div>
            </div>
            <div class="featured-result">
                <p>{format!("✅ RESULTADO: {}", testimonial.results)}</p>
            </div>
        </div>
    }
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel() -> Html {
    let carousel = use_reducer_eq(|| Carousel::new(TESTIMONIAL_COUNT));

    // The interval keeps its own cadence; manual navigation does not reset it.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let autoplay = start_autoplay(&BrowserScheduler, move |action| dispatcher.dispatch(action));
                move || drop(autoplay)
            },
            (),
        );
    }

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };
    let select = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(index)))
    };

    let current = carousel.index();

    html! {
        <div class="testimonial-carousel">
            { featured(&TESTIMONIALS[current]) }

            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                    let selected = index == current;
                    html! {
                        <div
                            key={index}
                            class={classes!("testimonial-card", selected.then(|| "selected"))}
                            onclick={select(index)}
                        >
                            <div class="card-stars">{ stars(testimonial.stars(), "star") }</div>
                            <p class="card-text">{format!("“{}”", testimonial.excerpt(EXCERPT_CHARS))}</p>
                            <h4>{testimonial.name}</h4>
                            <p class="card-role">{testimonial.role}</p>
                            <p class="card-result">{testimonial.results}</p>
                            {
                                if selected {
                                    html! { <div class="focus-badge">{"EM FOCO"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }) }
            </div>

            <div class="carousel-controls">
                <button class="carousel-arrow" aria-label="Anterior" onclick={on_previous}>{"‹"}</button>
                <div class="carousel-dots">
                    { for (0..carousel.len()).map(|index| html! {
                        <button
                            key={index}
                            aria-label={format!("Depoimento {}", index + 1)}
                            class={classes!("carousel-dot", (index == current).then(|| "active"))}
                            onclick={select(index)}
                        />
                    }) }
                </div>
                <button class="carousel-arrow" aria-label="Próximo" onclick={on_next}>{"›"}</button>
            </div>
        </div>
    }
}
