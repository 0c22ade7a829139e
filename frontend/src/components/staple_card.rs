use shared::Staple;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::stores::store_class;

use super::PLACEHOLDER_IMAGE;

#[derive(Properties, PartialEq)]
pub struct StapleCardProps {
    pub staple: Staple,
}

/// One compare-page grid entry: cheapest price with the savings versus the
/// dearest store, when known.
#[function_component(StapleCard)]
pub fn staple_card(props: &StapleCardProps) -> Html {
    let staple = &props.staple;

    let image_url = staple
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let on_image_error = Callback::from(|e: Event| {
        let image: HtmlImageElement = e.target_unchecked_into();
        if !image.src().ends_with(PLACEHOLDER_IMAGE) {
            image.set_src(PLACEHOLDER_IMAGE);
        }
    });

    html! {
        <div class="product-card">
            <div class="product-card-media">
                {if let Some(savings_cents) = staple.savings_amount {
                    html! {
                        <span class="savings-badge">
                            {format!("Save ${:.2}", savings_cents as f64 / 100.0)}
                        </span>
                    }
                } else {
                    html! {}
                }}
                <img
                    src={image_url}
                    alt={staple.name.clone()}
                    loading="lazy"
                    onerror={on_image_error}
                />
                <span class={classes!("store-badge", store_class(&staple.store_slug))}>
                    {&staple.store_name}
                </span>
            </div>

            <div class="product-card-body">
                <h3 class="product-name">{&staple.name}</h3>
                <div class="product-prices">
                    <span class="price-now">{format!("${:.2}", staple.price)}</span>
                    {if let Some(was_price) = staple.was_price {
                        html! { <span class="price-was">{format!("${:.2}", was_price)}</span> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>

            {if let Some(product_url) = &staple.product_url {
                html! {
                    <a
                        class="product-link"
                        href={product_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {format!("View at {}", staple.store_name)}
                    </a>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
