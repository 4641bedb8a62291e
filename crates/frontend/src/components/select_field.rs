use shared_types::{ReferenceKind, SelectOption};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub kind: ReferenceKind,
    pub options: Vec<SelectOption>,
    pub value: String,
    pub on_change: Callback<String>,
}

/// Required dropdown backed by one reference list
#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium mb-1">{ props.kind.field().label() }</label>
            <select class="border rounded p-2 w-full" required={props.kind.field().is_required()} {onchange}>
                { for props.options.iter().map(|option| html! {
                    <option
                        key={option.value.clone()}
                        value={option.value.clone()}
                        selected={option.value == props.value}
                    >
                        { &option.label }
                    </option>
                })}
            </select>
        </div>
    }
}
