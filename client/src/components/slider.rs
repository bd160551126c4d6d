//! Image carousel used by slider blocks in the editor and the public view.
//!
//! The autoplay interval is owned by the component through a local stored
//! value. Replacing or dropping it cancels the timer, so manual navigation
//! restarts the countdown and unmounting stops it.

use canvas::slider::{SliderConfig, SliderState};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Carousel over `images` with previous/next buttons and indicators.
#[component]
pub fn SliderView(images: Vec<String>, config: SliderConfig) -> impl IntoView {
    let state = RwSignal::new(SliderState::new(images.len()));
    let timer = StoredValue::new_local(None::<Interval>);

    let restart_timer = move || {
        timer.set_value(None);
        if state.get_untracked().wants_timer(config) {
            let interval = Interval::new(config.interval_ms, move || {
                state.update(|s| {
                    s.tick();
                });
            });
            timer.set_value(Some(interval));
        }
    };
    restart_timer();

    let go_to = move |index: usize| {
        if state.try_update(|s| s.go_to(index)).unwrap_or(false) {
            restart_timer();
        }
    };
    let change = move |direction: i64| {
        if state.try_update(|s| s.change(direction)).unwrap_or(false) {
            restart_timer();
        }
    };

    let count = images.len();
    let slides = images
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            let active = move || state.with(|s| s.is_active(index));
            view! {
                <div
                    class="slider__slide"
                    class:slider__slide--active=active
                    style:display=move || if active() { "block" } else { "none" }
                    attr:data-slide-index=index.to_string()
                >
                    <img class="slider__image" src=src alt=format!("Slide {}", index + 1) draggable="false"/>
                </div>
            }
        })
        .collect_view();

    let indicators = (0..count)
        .map(|index| {
            view! {
                <span
                    class="slider__indicator"
                    class:slider__indicator--active=move || state.with(|s| s.is_active(index))
                    on:click=move |_| go_to(index)
                ></span>
            }
        })
        .collect_view();

    view! {
        <div class="slider">
            <div class="slider__track">{slides}</div>
            {(count > 1)
                .then(|| {
                    view! {
                        <button class="slider__btn slider__btn--prev" title="Previous" on:click=move |_| change(-1)>
                            "‹"
                        </button>
                        <button class="slider__btn slider__btn--next" title="Next" on:click=move |_| change(1)>
                            "›"
                        </button>
                    }
                })}
            <div class="slider__indicators">{indicators}</div>
        </div>
    }
}
