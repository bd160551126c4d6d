//! Per-kind rendering of a block's content.
//!
//! Content is rebuilt only when a block's data or media flags change, never
//! on geometry updates, so dragging a slider does not reset it.

use canvas::doc::{BlockKind, BlockProps, FitMode};
use canvas::render::{MediaElement, button_style, heading_style, is_embed_url, media_style, text_style};
use canvas::slider::SliderConfig;
use leptos::prelude::*;
use serde_json::Value;

use super::slider::SliderView;

/// The parts of a block that its content depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentProps {
    pub kind: BlockKind,
    pub data: Value,
    pub proportional: bool,
    pub fit: FitMode,
}

/// Render one block's content.
///
/// `editing` disables link navigation so clicking a button block selects it
/// instead of leaving the editor.
#[component]
pub fn BlockContent(content: ContentProps, slide_interval_ms: u32, #[prop(optional)] editing: bool) -> impl IntoView {
    let ContentProps { kind, data, proportional, fit } = content;
    let props = BlockProps::new(kind, &data);

    match kind {
        BlockKind::Text => {
            let style = text_style(&props);
            let body = props.text("content").to_owned();
            view! { <p class="block-text" style=style>{body}</p> }.into_any()
        }
        BlockKind::Heading => heading_view(&props),
        BlockKind::Image => match props.optional_text("url") {
            Some(url) => {
                let style = media_style(MediaElement::Image, proportional, fit);
                let alt = props.text("alt").to_owned();
                view! { <img class="block-image" src=url.to_owned() alt=alt style=style draggable="false"/> }.into_any()
            }
            None => placeholder("No image yet"),
        },
        BlockKind::Button => {
            let style = button_style(&props);
            let align = format!("text-align: {};", props.align());
            let label = props.text("text").to_owned();
            let link = props.text("link").to_owned();
            let on_click = move |ev: leptos::ev::MouseEvent| {
                if editing {
                    ev.prevent_default();
                }
            };
            view! {
                <div class="block-button" style=align>
                    <a class="block-button__link" href=link style=style on:click=on_click>{label}</a>
                </div>
            }
            .into_any()
        }
        BlockKind::Video => match props.optional_text("url") {
            Some(url) if is_embed_url(url) => {
                let style = media_style(MediaElement::Frame, proportional, fit);
                view! {
                    <iframe class="block-video" src=url.to_owned() style=style allow="autoplay; fullscreen" attr:allowfullscreen=true></iframe>
                }
                .into_any()
            }
            Some(url) => {
                let style = media_style(MediaElement::Video, proportional, fit);
                let autoplay = props.autoplay();
                view! {
                    <video class="block-video" src=url.to_owned() style=style controls=true autoplay=autoplay muted=autoplay></video>
                }
                .into_any()
            }
            None => placeholder("No video yet"),
        },
        BlockKind::Slider => {
            let images: Vec<String> = props.images().into_iter().map(str::to_owned).collect();
            if images.is_empty() {
                return placeholder("Slider: add images");
            }
            let config = SliderConfig::from_data(&data, slide_interval_ms);
            view! { <SliderView images config/> }.into_any()
        }
    }
}

fn heading_view(props: &BlockProps<'_>) -> AnyView {
    let style = heading_style(props);
    let body = props.text("content").to_owned();
    match props.heading_level() {
        1 => view! { <h1 class="block-heading" style=style>{body}</h1> }.into_any(),
        2 => view! { <h2 class="block-heading" style=style>{body}</h2> }.into_any(),
        3 => view! { <h3 class="block-heading" style=style>{body}</h3> }.into_any(),
        4 => view! { <h4 class="block-heading" style=style>{body}</h4> }.into_any(),
        5 => view! { <h5 class="block-heading" style=style>{body}</h5> }.into_any(),
        _ => view! { <h6 class="block-heading" style=style>{body}</h6> }.into_any(),
    }
}

fn placeholder(label: &'static str) -> AnyView {
    view! { <div class="block-placeholder">{label}</div> }.into_any()
}
