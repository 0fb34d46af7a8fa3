use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use spinner::{SpinConfig, ViewMetrics};

use crate::driver::SpinDriver;
use crate::scroll::DomScrollSurface;
use crate::styles;

const PRIZES: &[&str] = &[
    "Golden Ticket",
    "Free Coffee",
    "Sticker Pack",
    "T-Shirt",
    "Mug",
    "Desk Plant",
    "Gift Card",
    "Mystery Box",
    "Extra Day Off",
    "Rubber Duck",
    "Keyboard",
    "Pizza Party",
    "Book Voucher",
    "Headphones",
    "Water Bottle",
    "Notebook",
    "Enamel Pin",
    "Poster",
    "Power Bank",
    "Grand Prize",
];

const ROW_HEIGHT: f64 = 56.0;
const ROW_SPACING: f64 = 8.0;
const VIEWPORT_HEIGHT: f64 = 320.0;

#[derive(Properties, PartialEq)]
pub struct ResultBannerProps {
    pub prize: Option<String>,
    pub near_result: bool,
}

#[function_component(ResultBanner)]
pub fn result_banner(props: &ResultBannerProps) -> Html {
    if let Some(prize) = &props.prize {
        html! {
            <div class={styles::RESULT_BANNER}>{format!("You won: {prize}!")}</div>
        }
    } else if props.near_result {
        html! {
            <div class={styles::RESULT_PENDING}>{"Almost there..."}</div>
        }
    } else {
        html! {}
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let container_ref = use_node_ref();
    let list_ref = use_node_ref();
    let is_spinning = use_state(|| false);
    let near_result = use_state(|| false);
    let winner = use_state(|| None::<usize>);

    let start_spin = {
        let container_ref = container_ref.clone();
        let list_ref = list_ref.clone();
        let is_spinning = is_spinning.clone();
        let near_result = near_result.clone();
        let winner = winner.clone();

        Callback::from(move |_: MouseEvent| {
            // One spin at a time; the choreography has no cancel.
            if *is_spinning {
                return;
            }

            let container = match container_ref.cast::<Element>() {
                Some(container) => container,
                None => return,
            };
            let list = match list_ref.cast::<HtmlElement>() {
                Some(list) => list,
                None => return,
            };

            let chosen = rand::thread_rng().gen_range(0..PRIZES.len());
            let row = match list
                .children()
                .item(chosen as u32)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                Some(row) => row,
                None => return,
            };

            let surface = DomScrollSurface::new(container, list);
            let view = ViewMetrics {
                frame_height: surface.frame_height(),
                target_center_y: DomScrollSurface::row_center_y(&row),
            };
            let config = SpinConfig {
                row_height: ROW_HEIGHT,
                row_spacing: ROW_SPACING,
                ..SpinConfig::default()
            };

            is_spinning.set(true);
            near_result.set(false);
            winner.set(None);

            let on_pre_surprise = {
                let near_result = near_result.clone();
                Callback::from(move |_| near_result.set(true))
            };
            let on_finished = {
                let is_spinning = is_spinning.clone();
                let near_result = near_result.clone();
                let winner = winner.clone();
                Callback::from(move |_| {
                    near_result.set(false);
                    winner.set(Some(chosen));
                    is_spinning.set(false);
                })
            };

            if let Err(err) = SpinDriver::spin(surface, view, config, on_pre_surprise, on_finished)
            {
                log::error!("spin rejected: {err}");
                is_spinning.set(false);
            }
        })
    };

    let button_text = if *is_spinning { "Spinning..." } else { "Spin" };
    let button_class = if *is_spinning {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">
                        {"Prize Roulette"}
                    </span>
                </h1>

                <div
                    ref={container_ref}
                    class={styles::LIST_CONTAINER}
                    style={format!("height:{VIEWPORT_HEIGHT}px")}
                >
                    <div ref={list_ref} class="px-3 py-3">
                        {
                            PRIZES.iter().enumerate().map(|(index, name)| {
                                let row_class = if *winner == Some(index) {
                                    styles::LIST_ROW_WINNER
                                } else {
                                    styles::LIST_ROW
                                };
                                html! {
                                    <div
                                        key={index}
                                        class={row_class}
                                        style={format!("height:{ROW_HEIGHT}px;margin-bottom:{ROW_SPACING}px")}
                                    >
                                        {*name}
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <button class={button_class} onclick={start_spin} disabled={*is_spinning}>
                    {button_text}
                </button>

                <ResultBanner
                    prize={(*winner).map(|index| PRIZES[index].to_string())}
                    near_result={*near_result}
                />
            </div>
        </div>
    }
}
