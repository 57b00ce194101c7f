//! New Character Form
//!
//! One input per known field; the field set grows when the first fetched
//! character reveals keys we haven't seen.

use leptos::prelude::*;
use catalog_core::{Action, FieldKind};

use crate::context::use_app_context;

fn field_label(key: &str, kind: FieldKind) -> String {
    match kind {
        FieldKind::List => format!("{} (comma separated)", key),
        FieldKind::Scalar => key.to_string(),
    }
}

fn field_placeholder(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::List => "e.g. Film A, Film B",
        FieldKind::Scalar => "",
    }
}

#[component]
pub fn CharacterForm() -> impl IntoView {
    let ctx = use_app_context();

    // Keyed on field name so typing doesn't rebuild the inputs
    let fields = move || {
        ctx.with_catalog(|c| {
            c.form()
                .fields()
                .map(|(key, kind, _)| (key.to_string(), kind))
                .collect::<Vec<_>>()
        })
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let now_ms = js_sys::Date::now() as u64;
        ctx.dispatch(Action::Submit { now_ms });
    };

    view! {
        <form class="character-form" on:submit=submit>
            <For
                each=fields
                key=|(key, _)| key.clone()
                children=move |(key, kind)| {
                    let value_key = key.clone();
                    let input_key = key.clone();
                    view! {
                        <label class="form-field">
                            <span class="form-label">{field_label(&key, kind)}</span>
                            <input
                                placeholder=field_placeholder(kind)
                                prop:value=move || ctx.with_catalog(|c| {
                                    c.form().value(&value_key).unwrap_or_default().to_string()
                                })
                                on:input=move |ev| {
                                    ctx.dispatch(Action::SetField {
                                        key: input_key.clone(),
                                        value: event_target_value(&ev),
                                    });
                                }
                            />
                        </label>
                    }
                }
            />
            <div class="form-actions">
                <button type="submit">"Add to list"</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_fields_are_labelled() {
        assert_eq!(field_label("films", FieldKind::List), "films (comma separated)");
        assert_eq!(field_label("name", FieldKind::Scalar), "name");
        assert_eq!(field_placeholder(FieldKind::Scalar), "");
    }
}
