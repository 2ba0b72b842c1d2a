//! 料理カードとページ送り

use leptos::prelude::*;
use menu_genius_common::{DishEntry, Language, MessageKey, PageDirection, UploadSession};

#[component]
pub fn MenuCards(session: RwSignal<UploadSession>) -> impl IntoView {
    view! {
        <Show when=move || session.with(|s| s.result().is_some())>
            <section class="menu">
                <h2>{move || session.with(|s| s.text(MessageKey::MenuTitle))}</h2>
                <div class="menu-grid">
                    {move || session.with(|s| {
                        let language = s.language();
                        let price_label = s.text(MessageKey::PriceLabel);
                        s.visible_dishes()
                            .iter()
                            .map(|dish| dish_card(dish, language, price_label))
                            .collect::<Vec<_>>()
                    })}
                </div>
                <Pagination session=session />
            </section>
        </Show>
    }
}

fn dish_card(dish: &DishEntry, language: Language, price_label: &'static str) -> impl IntoView {
    let name = dish.display_name(language).to_string();
    let description = dish.display_description(language).to_string();
    let price = dish.price.clone();

    view! {
        <div class="menu-card">
            <h3>{name}</h3>
            {price.map(|price| view! { <span class="price">{format!("{}: {}", price_label, price)}</span> })}
            <p>{description}</p>
        </div>
    }
}

#[component]
fn Pagination(session: RwSignal<UploadSession>) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn btn-secondary btn-small"
                disabled=move || !session.with(|s| s.can_go_previous())
                on:click=move |_| session.update(|s| s.change_page(PageDirection::Previous))
            >
                {move || session.with(|s| s.text(MessageKey::PreviousPage))}
            </button>
            <span class="page-label">{move || session.with(|s| s.page_label())}</span>
            <button
                class="btn btn-secondary btn-small"
                disabled=move || !session.with(|s| s.can_go_next())
                on:click=move |_| session.update(|s| s.change_page(PageDirection::Next))
            >
                {move || session.with(|s| s.text(MessageKey::NextPage))}
            </button>
        </div>
    }
}
