//! Generic editor for ordered lists of rows.
//!
//! # Design
//! - Rows are identified by caller-provided stable keys; positions are only
//!   used for reordering.
//! - Row content comes from `build_entry`; the container owns the add,
//!   remove and reorder affordances (buttons plus drag and drop).

use crate::components::atoms::IconButton;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArrayContainerProps {
    /// Stable row keys in display order.
    pub keys: Vec<u64>,
    /// Renders the row at `(index, key)`.
    pub build_entry: Callback<(usize, u64), Html>,
    #[prop_or_default]
    pub on_add: Callback<()>,
    #[prop_or_default]
    pub on_remove: Callback<u64>,
    /// Reorder request as `(from, to)` positions.
    #[prop_or_default]
    pub on_move: Callback<(usize, usize)>,
    #[prop_or(true)]
    pub include_add_button: bool,
    #[prop_or_default]
    pub small: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub add_label: AttrValue,
    pub remove_label: AttrValue,
    pub move_up_label: AttrValue,
    pub move_down_label: AttrValue,
    #[prop_or_default]
    pub empty_label: Option<AttrValue>,
}

#[function_component(ArrayContainer)]
pub(crate) fn array_container(props: &ArrayContainerProps) -> Html {
    let dragging = use_state(|| None as Option<usize>);
    let count = props.keys.len();

    let rows = props.keys.iter().copied().enumerate().map(|(index, key)| {
        let ondragstart = {
            let dragging = dragging.clone();
            Callback::from(move |_: DragEvent| dragging.set(Some(index)))
        };
        let ondragover = Callback::from(|event: DragEvent| event.prevent_default());
        let ondrop = {
            let dragging = dragging.clone();
            let on_move = props.on_move.clone();
            Callback::from(move |event: DragEvent| {
                event.prevent_default();
                if let Some(from) = *dragging {
                    if from != index {
                        on_move.emit((from, index));
                    }
                }
                dragging.set(None);
            })
        };
        let ondragend = {
            let dragging = dragging.clone();
            Callback::from(move |_: DragEvent| dragging.set(None))
        };
        let move_up = {
            let on_move = props.on_move.clone();
            Callback::from(move |_: MouseEvent| on_move.emit((index, index.saturating_sub(1))))
        };
        let move_down = {
            let on_move = props.on_move.clone();
            Callback::from(move |_: MouseEvent| on_move.emit((index, index + 1)))
        };
        let remove = {
            let on_remove = props.on_remove.clone();
            Callback::from(move |_: MouseEvent| on_remove.emit(key))
        };
        let is_dragging = dragging.is_some_and(|from| from == index);

        html! {
            <li
                key={key}
                class={classes!("array-row", "flex", "items-center", "gap-1", is_dragging.then_some("opacity-50"))}
                draggable={(!props.disabled).to_string()}
                {ondragstart}
                {ondragover}
                {ondrop}
                {ondragend}
            >
                <span class="iconify lucide--grip-vertical size-4 cursor-grab text-base-content/50"></span>
                <div class="grow">{props.build_entry.emit((index, key))}</div>
                <IconButton
                    aria_label={props.move_up_label.clone()}
                    icon="lucide--arrow-up"
                    disabled={props.disabled || index == 0}
                    onclick={move_up}
                />
                <IconButton
                    aria_label={props.move_down_label.clone()}
                    icon="lucide--arrow-down"
                    disabled={props.disabled || index + 1 >= count}
                    onclick={move_down}
                />
                <IconButton
                    aria_label={props.remove_label.clone()}
                    icon="lucide--trash-2"
                    disabled={props.disabled}
                    onclick={remove}
                />
            </li>
        }
    });

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <div class={classes!("array-container", props.small.then_some("array-container-sm"))}>
            {if count == 0 {
                props.empty_label.clone().map(|label| html! {
                    <p class="text-sm text-base-content/60">{label}</p>
                }).unwrap_or_default()
            } else {
                html! { <ul class="flex flex-col gap-2">{ for rows }</ul> }
            }}
            {if props.include_add_button {
                html! {
                    <button
                        class={classes!("btn", "btn-ghost", props.small.then_some("btn-sm"), "mt-2")}
                        type="button"
                        disabled={props.disabled}
                        onclick={on_add}
                    >
                        <span class="iconify lucide--plus size-4"></span>
                        {props.add_label.clone()}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
