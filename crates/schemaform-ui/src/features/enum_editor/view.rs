//! Enum value editor views.
//!
//! # Design
//! - The property field owns one `EnumEditorState` for its lifetime; the
//!   store only hears about settled commits.
//! - Rows receive their draft and error by value and send edits back as
//!   actions.
//! - The id dialog is row-local presentation state.
//! - The multiselect toggle flushes the pending draft before the property
//!   changes shape, so the rebuilt editor starts from the latest values.
//! - The validation panel is a slot filled by the surrounding form.

use crate::components::array_container::ArrayContainer;
use crate::components::atoms::{Dialog, IconButton, TextField};
use crate::components::clock::now_ms;
use crate::core::store::{AppStore, apply_enum_commit, flush_and_set_multiselect};
use crate::features::enum_editor::actions::EnumEditorAction;
use crate::features::enum_editor::logic::{EntryError, ValidationPanel};
use crate::features::enum_editor::state::{EntryKey, EnumEditorState, EnumEntryDraft};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo_timers::callback::Timeout;
use schemaform_config::EnumEditorSettings;
use schemaform_model::EnumValuesPath;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct EnumPropertyFieldProps {
    pub settings: EnumEditorSettings,
    /// Validation controls for the property, supplied by the surrounding form.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EnumPropertyField)]
pub(crate) fn enum_property_field(props: &EnumPropertyFieldProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| AttrValue::from(bundle.text(key, default));
    let dispatch = Dispatch::<AppStore>::new();

    let state = {
        let store = dispatch.get();
        let settings = props.settings.clone();
        use_mut_ref(move || {
            EnumEditorState::from_property(
                &store.schema.property,
                &store.schema.registry,
                &settings,
            )
        })
    };
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

    let on_action = {
        let state = state.clone();
        let timer = timer.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |action: EnumEditorAction| {
            let scheduled = state.borrow_mut().apply(action, now_ms());
            let Some(ticket) = scheduled else {
                return;
            };
            let delay = state.borrow().commit_delay_ms();
            let state = state.clone();
            let dispatch = dispatch.clone();
            *timer.borrow_mut() = Some(Timeout::new(delay, move || {
                let settled = state.borrow_mut().fire(ticket);
                if let Some(commit) = settled {
                    dispatch.reduce_mut(|store| apply_enum_commit(store, &commit));
                }
            }));
            force_update.force_update();
        })
    };

    let on_multiselect = {
        let state = state.clone();
        let timer = timer.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let checked = input.checked();
            timer.borrow_mut().take();
            let flushed = state.borrow_mut().flush();
            dispatch.reduce_mut(|store| {
                flush_and_set_multiselect(store, flushed.as_ref(), checked);
            });
        })
    };

    let (entries, errors, path) = {
        let state = state.borrow();
        (state.entries().to_vec(), state.errors(), state.path())
    };
    let multiselect = path == EnumValuesPath::Nested;
    let panel = ValidationPanel::for_path(path);
    let entry_keys: Vec<EntryKey> = entries.iter().map(|entry| entry.key).collect();
    let keys: Vec<u64> = entry_keys.iter().map(|key| key.get()).collect();

    let build_entry = {
        let on_action = on_action.clone();
        Callback::from(move |(index, _key): (usize, u64)| -> Html {
            let Some(entry) = entries.get(index).cloned() else {
                return html! {};
            };
            let error = errors.get(index).cloned().flatten();
            let row_key = entry.key.get();
            html! {
                <EnumEntryRow
                    key={row_key}
                    {entry}
                    {error}
                    on_action={on_action.clone()}
                />
            }
        })
    };
    let on_add = {
        let on_action = on_action.clone();
        Callback::from(move |()| on_action.emit(EnumEditorAction::AddEntry))
    };
    let on_remove = {
        let on_action = on_action.clone();
        Callback::from(move |raw: u64| {
            if let Some(key) = entry_keys.iter().copied().find(|key| key.get() == raw) {
                on_action.emit(EnumEditorAction::RemoveEntry(key));
            }
        })
    };
    let on_move = Callback::from(move |(from, to): (usize, usize)| {
        on_action.emit(EnumEditorAction::MoveEntry { from, to });
    });

    html! {
        <section class="enum-property-field flex flex-col gap-2">
            <label class="label gap-2">
                <input
                    type="checkbox"
                    class="checkbox checkbox-sm"
                    checked={multiselect}
                    onchange={on_multiselect}
                />
                {t("enum.multiselect", "Allow multiple values")}
            </label>
            <h4 class="text-sm font-semibold mt-2">{t("enum.values", "Values")}</h4>
            <div class="card card-border bg-base-100 p-4">
                <ArrayContainer
                    {keys}
                    {build_entry}
                    {on_add}
                    {on_remove}
                    {on_move}
                    small=true
                    add_label={t("enum.add", "Add value")}
                    remove_label={t("enum.remove", "Remove value")}
                    move_up_label={t("enum.move_up", "Move up")}
                    move_down_label={t("enum.move_down", "Move down")}
                    empty_label={t("enum.empty", "No values yet")}
                />
            </div>
            <h4 class="text-sm font-semibold mt-2">{t("enum.validation", "Validation")}</h4>
            <div class="enum-validation" data-validation={panel.as_str()}>
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EnumEntryRowProps {
    pub entry: EnumEntryDraft,
    #[prop_or_default]
    pub error: Option<EntryError>,
    pub on_action: Callback<EnumEditorAction>,
}

#[function_component(EnumEntryRow)]
pub(crate) fn enum_entry_row(props: &EnumEntryRowProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let dialog_open = use_state(|| false);
    let key = props.entry.key;
    let helper_text = props
        .error
        .as_ref()
        .map(|error| AttrValue::from(error.to_string()));

    let on_label = {
        let on_action = props.on_action.clone();
        Callback::from(move |label: String| {
            on_action.emit(EnumEditorAction::EditLabel { key, label });
        })
    };
    let on_id = {
        let on_action = props.on_action.clone();
        Callback::from(move |id: String| on_action.emit(EnumEditorAction::EditId { key, id }))
    };
    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(true))
    };
    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |()| dialog_open.set(false))
    };

    html! {
        <div class="enum-entry flex items-center w-full gap-1">
            <TextField
                class="mx-1"
                value={AttrValue::from(props.entry.value.label.clone())}
                placeholder={AttrValue::from(bundle.text("enum.label_placeholder", "Label"))}
                helper_text={helper_text}
                error={props.error.is_some()}
                required=true
                small=true
                oninput={on_label}
            />
            <IconButton
                aria_label={AttrValue::from(bundle.text("enum.edit_id", "Edit id"))}
                icon="lucide--settings"
                onclick={open_dialog}
            />
            <EnumEntryDialog
                open={*dialog_open}
                id={AttrValue::from(props.entry.value.id.clone())}
                error={props.error.clone()}
                {on_id}
                on_close={close_dialog}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EnumEntryDialogProps {
    pub open: bool,
    pub id: AttrValue,
    #[prop_or_default]
    pub error: Option<EntryError>,
    pub on_id: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(EnumEntryDialog)]
pub(crate) fn enum_entry_dialog(props: &EnumEntryDialogProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let helper_text = props.error.as_ref().map_or_else(
        || bundle.text("enum.id_hint", "Value saved in the data source"),
        ToString::to_string,
    );

    html! {
        <Dialog
            open={props.open}
            confirm_label={AttrValue::from(bundle.text("enum.ok", "Ok"))}
            aria_label={AttrValue::from(bundle.text("enum.edit_id", "Edit id"))}
            on_close={props.on_close.clone()}
        >
            <TextField
                label={AttrValue::from(bundle.text("enum.id", "ID"))}
                value={props.id.clone()}
                helper_text={AttrValue::from(helper_text)}
                error={props.error.is_some()}
                required=true
                small=true
                autofocus=true
                oninput={props.on_id.clone()}
            />
        </Dialog>
    }
}
