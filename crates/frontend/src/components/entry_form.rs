use gloo::dialogs::alert;
use shared_types::{
    load_reference_lists, submit, EntryRecord, Field, FieldEdit, ReferenceKind, ReferenceLists,
    SubmissionController, SubmitOutcome,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::date_field::DateField;
use crate::components::select_field::SelectField;
use crate::services::api::SheetEndpoint;

#[derive(Properties, PartialEq)]
pub struct EntryFormProps {
    pub endpoint: SheetEndpoint,
}

fn notify(outcome: &SubmitOutcome) {
    if let Some(message) = outcome.notice() {
        alert(&message);
    }
}

// ============================================================================
// Entry Form Component - edits one record and submits it
// ============================================================================

#[function_component(EntryForm)]
pub fn entry_form(props: &EntryFormProps) -> Html {
    let record = use_state(EntryRecord::default);
    let lists = use_state(ReferenceLists::default);
    let submitting = use_state(|| false);
    let controller = use_mut_ref(SubmissionController::new);

    // Fetch reference lists once on mount
    {
        let lists = lists.clone();
        let endpoint = props.endpoint.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                lists.set(load_reference_lists(&endpoint).await);
            });
            || ()
        });
    }

    let on_edit = {
        let record = record.clone();
        Callback::from(move |edit: FieldEdit| {
            let field = edit.field();
            match record.apply(edit) {
                Ok(next) => record.set(next),
                Err(e) => tracing::warn!("Rejected edit of {}: {}", field, e),
            }
        })
    };

    let on_text = |make: fn(String) -> FieldEdit| {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(make(input.value()));
        })
    };

    let on_remarks = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit::Remarks(textarea.value()));
        })
    };

    let on_select = |make: fn(String) -> FieldEdit| {
        let on_edit = on_edit.clone();
        Callback::from(move |value: String| on_edit.emit(make(value)))
    };

    let on_submit = {
        let record = record.clone();
        let lists = lists.clone();
        let submitting = submitting.clone();
        let controller = controller.clone();
        let endpoint = props.endpoint.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*record).clone();
            let known = (*lists).clone();

            let record = record.clone();
            let submitting = submitting.clone();
            let controller = controller.clone();
            let endpoint = endpoint.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                let report = submit(&controller, &endpoint, &current, &known).await;
                submitting.set(controller.borrow().is_submitting());
                notify(&report.outcome);
                // On failure the form keeps whatever the user has on screen.
                if report.outcome.is_success() {
                    record.set(report.record);
                }
            });
        })
    };

    let select = |kind: ReferenceKind, make: fn(String) -> FieldEdit| {
        html! {
            <SelectField
                {kind}
                options={lists.select_options(kind)}
                value={record.selection(kind).to_string()}
                on_change={on_select(make)}
            />
        }
    };

    html! {
        <form class="space-y-4" onsubmit={on_submit}>
            <DateField
                date={record.date.clone()}
                unknown_year={record.unknown_year}
                on_edit={on_edit.clone()}
            />

            <div>
                <label class="block text-sm font-medium mb-1">{ "Title" }</label>
                <input
                    type="text"
                    class="border rounded p-2 w-full"
                    value={record.title.clone()}
                    oninput={on_text(FieldEdit::Title)}
                    required={Field::Title.is_required()}
                />
            </div>

            <div>
                <label class="block text-sm font-medium mb-1">{ "Name" }</label>
                <input
                    type="text"
                    class="border rounded p-2 w-full"
                    value={record.name.clone()}
                    oninput={on_text(FieldEdit::Name)}
                    required={Field::Name.is_required()}
                />
            </div>

            { select(ReferenceKind::Occasion, FieldEdit::Occasion) }
            { select(ReferenceKind::Group, FieldEdit::Group) }
            { select(ReferenceKind::Relationship, FieldEdit::Relationship) }

            <div>
                <label class="block text-sm font-medium mb-1">{ "Remarks" }</label>
                <textarea
                    class="border rounded p-2 w-full"
                    rows="3"
                    value={record.remarks.clone()}
                    oninput={on_remarks}
                />
            </div>

            <button
                type="submit"
                class="w-full bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600"
                disabled={*submitting}
            >
                { if *submitting { "Submitting..." } else { "Submit" } }
            </button>
        </form>
    }
}
