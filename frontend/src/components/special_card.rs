use shared::Special;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::stores::store_class;

use super::PLACEHOLDER_IMAGE;

#[derive(Properties, PartialEq)]
pub struct SpecialCardProps {
    pub special: Special,
}

/// Badge class and label for a known discount; no badge when the feed did
/// not include one.
fn discount_badge(discount_percent: Option<f64>) -> Option<(&'static str, String)> {
    let percent = discount_percent?;
    let class = if percent >= 50.0 {
        "discount-badge half-price"
    } else {
        "discount-badge"
    };
    Some((class, format!("{:.0}% OFF", percent)))
}

/// One specials grid entry. Purely presentational; the only behaviour is
/// swapping in the placeholder when the product image fails to load.
#[function_component(SpecialCard)]
pub fn special_card(props: &SpecialCardProps) -> Html {
    let special = &props.special;

    let image_url = special
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
                {if let Some((class, label)) = discount_badge(special.discount_percent) {
                    html! { <span class={class}>{label}</span> }
                } else {
                    html! {}
                }}
                <img
                    src={image_url}
                    alt={special.name.clone()}
                    loading="lazy"
                    onerror={on_image_error}
                />
                <span class={classes!("store-badge", store_class(&special.store_slug))}>
                    {&special.store_name}
                </span>
            </div>

            <div class="product-card-body">
                <h3 class="product-name">{&special.name}</h3>
                <div class="product-prices">
                    <span class="price-now">{format!("${:.2}", special.price)}</span>
                    {if let Some(was_price) = special.was_price {
                        html! { <span class="price-was">{format!("${:.2}", was_price)}</span> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>

            {if let Some(product_url) = &special.product_url {
                html! {
                    <a
                        class="product-link"
                        href={product_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {format!("View at {}", special.store_name)}
                    </a>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_badge_without_a_discount() {
        assert_eq!(discount_badge(None), None);
    }

    #[test]
    fn test_half_price_class_at_fifty_percent() {
        let (class, label) = discount_badge(Some(30.0)).unwrap();
        assert_eq!(class, "discount-badge");
        assert_eq!(label, "30% OFF");

        let (class, label) = discount_badge(Some(50.0)).unwrap();
        assert_eq!(class, "discount-badge half-price");
        assert_eq!(label, "50% OFF");
    }
}
