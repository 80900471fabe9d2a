//! Detail page layout with inline-editable fields.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn DetailsView(#[prop(into)] title: String, back_path: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="details-view">
            <Title text=format!("Warehouse Manager | {title} Details")/>
            <h1>{format!("{title} Details")}</h1>
            {children()}
            <A href=back_path>"Back"</A>
        </div>
    }
}

#[component]
pub fn DetailRow(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="detail-field">
            <span class="detail-field__label">{label}": "</span>
            <span class="detail-field__value">{move || value.get()}</span>
        </div>
    }
}

/// Read-only value with an Edit toggle that swaps in a one-field form.
/// Blank submissions are ignored.
#[component]
pub fn EditableField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] editable: Signal<bool>,
    on_save: Callback<String>,
) -> impl IntoView {
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(String::new());

    let start = move |_| {
        draft.set(value.get_untracked());
        editing.set(true);
    };
    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let next = draft.get_untracked().trim().to_owned();
        if next.is_empty() {
            return;
        }
        editing.set(false);
        if next != value.get_untracked() {
            on_save.run(next);
        }
    };

    view! {
        <div class="detail-field">
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <span class="detail-field__label">{label}": "</span>
                        <span class="detail-field__value">{move || value.get()}</span>
                        <Show when=move || editable.get()>
                            <button class="detail-field__edit" on:click=start>"Edit"</button>
                        </Show>
                    }
                }
            >
                <form class="detail-field__form" on:submit=save>
                    <label>
                        {label}": "
                        <input
                            type="text"
                            required=true
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=move |_| editing.set(false)>"Cancel"</button>
                </form>
            </Show>
        </div>
    }
}

/// Two-step delete button.
#[component]
pub fn ConfirmDelete(#[prop(into)] label: String, on_confirm: Callback<()>) -> impl IntoView {
    let confirming = RwSignal::new(false);
    view! {
        <div class="confirm-delete">
            <Show
                when=move || confirming.get()
                fallback=move || {
                    view! {
                        <button class="button--danger" on:click=move |_| confirming.set(true)>
                            "Delete"
                        </button>
                    }
                }
            >
                <span>{format!("Delete this {label}?")}</span>
                <button
                    class="button--danger"
                    on:click=move |_| {
                        confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Confirm"
                </button>
                <button on:click=move |_| confirming.set(false)>"Cancel"</button>
            </Show>
        </div>
    }
}
