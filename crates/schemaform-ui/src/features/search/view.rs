//! Debounced search bar for table toolbars.
//!
//! # Design
//! - The bar keeps its own text; the table only sees settled intents.
//! - The latest timer handle lives in a ref and is dropped on reschedule,
//!   clear, and unmount.

use crate::components::atoms::IconButton;
use crate::components::clock::now_ms;
use crate::features::search::state::{SearchBarState, SearchQuery};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchBarProps {
    #[prop_or(250)]
    pub debounce_ms: u32,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub on_search: Callback<SearchQuery>,
}

#[function_component(SearchBar)]
pub(crate) fn search_bar(props: &SearchBarProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let debounce_ms = props.debounce_ms;
    let state = use_mut_ref(|| SearchBarState::with_delay(debounce_ms));
    let timer = use_mut_ref(|| None as Option<Timeout>);
    let force_update = use_force_update();

    {
        let state = state.clone();
        let timer = timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    timer.borrow_mut().take();
                    state.borrow_mut().cancel_pending();
                }
            },
            (),
        );
    }

    let oninput = {
        let state = state.clone();
        let timer = timer.clone();
        let on_search = props.on_search.clone();
        let force_update = force_update.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let ticket = state.borrow_mut().input(input.value(), now_ms());
            let state = state.clone();
            let on_search = on_search.clone();
            *timer.borrow_mut() = Some(Timeout::new(debounce_ms, move || {
                let settled = state.borrow_mut().fire(ticket);
                if let Some(query) = settled {
                    on_search.emit(query);
                }
            }));
            force_update.force_update();
        })
    };

    let onclear = {
        let state = state.clone();
        let timer = timer.clone();
        let on_search = props.on_search.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: MouseEvent| {
            timer.borrow_mut().take();
            let query = state.borrow_mut().clear();
            on_search.emit(query);
            force_update.force_update();
        })
    };

    let onfocus = {
        let state = state.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: FocusEvent| {
            state.borrow_mut().focus();
            force_update.force_update();
        })
    };
    let onblur = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| {
            state.borrow_mut().blur();
            force_update.force_update();
        })
    };

    let (text, active, shows_clear) = {
        let state = state.borrow();
        (
            state.text().to_string(),
            state.is_active(),
            state.shows_clear(),
        )
    };
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| AttrValue::from(bundle.text("search.placeholder", "Search")));

    html! {
        <label class={classes!("input", "input-sm", "search-bar", props.class.clone())}>
            <span class="iconify lucide--search text-base-content/60 size-4"></span>
            <input
                class={classes!("search-bar-input", active.then_some("search-bar-input-active"))}
                type="search"
                placeholder={placeholder}
                value={text}
                aria-label={bundle.text("search.aria", "search")}
                {oninput}
                {onfocus}
                {onblur}
            />
            {if shows_clear {
                html! {
                    <IconButton
                        aria_label={AttrValue::from(bundle.text("search.clear", "Clear search"))}
                        icon="lucide--x"
                        onclick={onclear}
                    />
                }
            } else {
                html! { <span class="search-bar-spacer"></span> }
            }}
        </label>
    }
}
