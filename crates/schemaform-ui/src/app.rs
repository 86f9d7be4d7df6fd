//! Application shell hosting the property editor and the table toolbar.

mod demo;
mod preferences;

use crate::core::store::{AppStore, apply_search};
use crate::features::enum_editor::view::EnumPropertyField;
use crate::features::search::state::SearchQuery;
use crate::features::search::view::SearchBar;
use crate::i18n::{LocaleCode, TranslationBundle};
use demo::demo_store;
use gloo::console;
use preferences::{load_locale, load_settings, persist_locale};
use schemaform_model::EnumValuesPath;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

#[function_component(SchemaformApp)]
pub(crate) fn schemaform_app() -> Html {
    let settings = use_memo(|_| load_settings(), ());
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let (store, dispatch) = use_store::<AppStore>();

    {
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                persist_locale(locale);
                || ()
            },
            locale,
        );
    }

    let path = EnumValuesPath::for_multiselect(store.schema.property.is_multiselect());
    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                    locale.set(next);
                }
            }
        })
    };
    let on_search = Callback::from(move |query: SearchQuery| {
        dispatch.reduce_mut(|store| apply_search(store, query));
    });

    let committed = serde_json::to_string_pretty(&store.schema.property).unwrap_or_else(|err| {
        console::error!(format!("failed to render property: {err}"));
        String::new()
    });
    let filter = match &store.table.query {
        SearchQuery::Text(text) => text.clone(),
        SearchQuery::Cleared => bundle.text("app.no_filter", "No filter"),
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <main class="schemaform-app p-6 flex flex-col gap-6" dir={bundle.rtl().then_some("rtl")}>
                <header class="flex items-center justify-between">
                    <h1 class="text-xl font-semibold">{bundle.text("app.title", "Schema editor")}</h1>
                    <select class="select select-sm" onchange={on_locale}>
                        {for LocaleCode::all().into_iter().map(|option| html! {
                            <option value={option.code()} selected={option == *locale}>
                                {option.label()}
                            </option>
                        })}
                    </select>
                </header>
                <section class="card card-border bg-base-100 p-4 flex flex-col gap-3">
                    <h2 class="font-semibold">
                        {bundle.text("app.property", "Property")}
                        {": "}
                        {store.schema.property.name.clone()}
                    </h2>
                    <EnumPropertyField
                        key={path.as_str()}
                        settings={settings.enum_editor.clone()}
                    />
                    <h3 class="text-sm font-semibold">
                        {bundle.text("app.committed", "Committed value")}
                        {format!(" (#{})", store.schema.revision)}
                    </h3>
                    <pre class="text-xs bg-base-200 p-2 rounded">{committed}</pre>
                </section>
                <section class="card card-border bg-base-100 p-4 flex flex-col gap-3">
                    <h2 class="font-semibold">{bundle.text("app.table", "Table")}</h2>
                    <SearchBar
                        debounce_ms={settings.search.debounce_ms}
                        placeholder={settings.search.placeholder_override().map(|text| AttrValue::from(text.to_string()))}
                        {on_search}
                    />
                    <p class="text-sm">
                        {bundle.text("app.filter", "Active filter")}
                        {": "}
                        {filter}
                    </p>
                </section>
            </main>
        </ContextProvider<TranslationBundle>>
    }
}

/// Mount the editor into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    Dispatch::<AppStore>::new().set(demo_store());
    match gloo::utils::document().get_element_by_id("root") {
        Some(root) => {
            yew::Renderer::<SchemaformApp>::with_root(root).render();
        }
        None => {
            console::error!("missing #root element; mounting on body");
            yew::Renderer::<SchemaformApp>::new().render();
        }
    }
}
