use showcase_core::Theme;
use showcase_core::catalog::ProductSummary;
use showcase_core::copy::HOME;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: ProductSummary,
    pub theme: Theme,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let copy = HOME.get(props.theme);
    let product = &props.product;

    html! {
        <div class={classes!("bg-card", "p-6", "shadow-lg", "hover:shadow-xl", "transition-all", "duration-300", copy.card_class)}>
            <div class="aspect-square mb-4 overflow-hidden rounded-md bg-gray-100">
                <img
                    src={product.primary_image().to_string()}
                    alt={product.title.clone()}
                    loading="lazy"
                    class="w-full h-full object-contain hover:scale-110 transition-transform duration-300"
                />
            </div>

            <h3 class={classes!("font-semibold", "text-app", "mb-2", "line-clamp-2", copy.product_title_class)}>
                { product.title.clone() }
            </h3>

            <p class="text-secondary text-sm mb-3 line-clamp-2">{ product.description.clone() }</p>

            <div class="flex items-center justify-between">
                <span class={classes!("font-bold", "text-primary", copy.price_class)}>
                    { product.price_label() }
                </span>
                <button class={classes!("px-4", "py-2", "bg-primary", "text-white", "hover:bg-accent", "transition-colors", copy.add_button_class)}>
                    { copy.add_label }
                </button>
            </div>
        </div>
    }
}
