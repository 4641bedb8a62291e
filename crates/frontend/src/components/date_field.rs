use shared_types::{Field, FieldEdit};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateFieldProps {
    pub date: String,
    pub unknown_year: bool,
    pub on_edit: Callback<FieldEdit>,
}

/// Date picker with the "Unknown year" checkbox next to it
#[function_component(DateField)]
pub fn date_field(props: &DateFieldProps) -> Html {
    let on_date = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit::Date(input.value()));
        })
    };

    let on_unknown_year = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit::UnknownYear(input.checked()));
        })
    };

    html! {
        <div class="space-y-2">
            <label class="block text-sm font-medium">{ "Date" }</label>
            <div class="flex items-center gap-4">
                <input
                    type="date"
                    class="w-full rounded-md border border-gray-300 p-2"
                    value={props.date.clone()}
                    onchange={on_date}
                    required={Field::Date.is_required()}
                />
                <div class="flex items-center gap-2">
                    <input
                        type="checkbox"
                        id="unknownYear"
                        class="rounded border-gray-300"
                        checked={props.unknown_year}
                        onchange={on_unknown_year}
                    />
                    <label for="unknownYear" class="text-sm">{ "Unknown year" }</label>
                </div>
            </div>
        </div>
    }
}
