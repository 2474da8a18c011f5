//! Contact page with the simulated message form

use crate::components::{ContactDetails, LoadingSpinner};
use crate::hooks::{use_is_mounted, use_site_config};
use crate::services::GlooDelay;
use crate::theme::use_current_theme;
use showcase_core::contact::{
    ContactField, ContactForm, SubmissionPhase, SubmissionStep, SubmissionTicket,
    simulate_submission,
};
use showcase_core::copy::{CONTACT, ContactCopy, OFFICE_HOURS};
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full p-3 bg-app/5 border border-theme rounded-md focus:outline-none focus:ring-2 focus:ring-primary focus:border-transparent transition-all text-sm";

enum FormAction {
    Edit(ContactField, String),
    Submit,
    Step(SubmissionTicket, SubmissionStep),
}

#[derive(Clone, Default, PartialEq)]
struct FormState {
    form: ContactForm,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.form.edit(field, value),
            FormAction::Submit => {
                if let Err(err) = next.form.begin_submit() {
                    debug!(%err, "contact submission not started");
                }
            }
            FormAction::Step(ticket, step) => {
                if !next.form.apply_step(ticket, step) {
                    return self;
                }
            }
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let theme = use_current_theme();
    let config = use_site_config();
    let state = use_reducer(FormState::default);
    let mounted = use_is_mounted();
    let copy = CONTACT.get(theme);

    // Entering `Submitting` kicks off the simulated request
    {
        let dispatcher = state.dispatcher();
        let phase = state.form.phase();
        let ticket = state.form.current_submission();
        use_effect_with((phase, ticket), move |&(phase, ticket)| {
            if phase == SubmissionPhase::Submitting {
                spawn_local(async move {
                    simulate_submission(&GlooDelay, &config.contact, |step| {
                        if mounted.get() {
                            dispatcher.dispatch(FormAction::Step(ticket, step));
                        }
                    })
                    .await;
                });
            }
        });
    }

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(FormAction::Submit);
        })
    };

    let form = &state.form;
    let submitting = form.is_submitting();

    html! {
        <div class={classes!("space-y-8", "mt-10", copy.container_class)}>
            <section class="space-y-4">
                <h1 class={classes!("font-bold", "text-primary", copy.title_class)}>{ copy.title }</h1>
                <p class={classes!("text-secondary", copy.intro_class)}>{ copy.intro }</p>
            </section>

            <div class={classes!("grid", "gap-8", "text-left", copy.columns_class)}>
                <section>
                    <div class="bg-card p-6 sm:p-8 space-y-6">
                        <h2 class={classes!("font-semibold", "text-app", copy.heading_class)}>
                            { copy.form_heading }
                        </h2>

                        if form.shows_banner() {
                            <div class="p-4 bg-green-100 text-green-800 rounded-md border border-green-300" role="status">
                                { copy.success_message }
                            </div>
                        }

                        <form {onsubmit} novalidate={true} class="space-y-4">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                { field_input(&state, copy, ContactField::Name, "text") }
                                { field_input(&state, copy, ContactField::Email, "email") }
                            </div>
                            { field_input(&state, copy, ContactField::Subject, "text") }
                            { message_input(&state, copy) }

                            <button
                                type="submit"
                                disabled={submitting}
                                class={classes!(
                                    "w-full", "py-3", "px-6", "bg-primary", "text-white", "font-medium",
                                    "hover:bg-accent", "transition-all", "duration-200",
                                    "disabled:opacity-50", "disabled:cursor-not-allowed", "text-sm",
                                    copy.submit_class
                                )}
                            >
                                if submitting {
                                    <span class="flex items-center justify-center">
                                        <LoadingSpinner inline=true />
                                        { copy.sending_label }
                                    </span>
                                } else {
                                    { copy.submit_label }
                                }
                            </button>
                        </form>
                    </div>
                </section>

                <section class="space-y-6">
                    <div class="bg-card p-6 sm:p-8 space-y-6">
                        <h2 class={classes!("font-semibold", "text-app", copy.heading_class)}>
                            { copy.info_heading }
                        </h2>
                        <ContactDetails icons={copy.icons} />
                    </div>

                    <div class="bg-card p-6 space-y-4">
                        <h3 class="font-semibold text-app text-base">{ copy.hours_heading }</h3>
                        <div class="space-y-2 text-sm">
                            { for OFFICE_HOURS.iter().map(|(days, hours)| html! {
                                <div key={*days} class="flex justify-between">
                                    <span class="text-secondary">{ *days }</span>
                                    <span class="text-app">{ *hours }</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}

fn field_input(
    state: &UseReducerHandle<FormState>,
    copy: &ContactCopy,
    field: ContactField,
    input_type: &'static str,
) -> Html {
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(FormAction::Edit(field, input.value()));
            }
        })
    };
    let text = copy.field(field);

    html! {
        <div>
            <label for={field.as_str()} class="block text-app font-medium mb-2 text-sm">{ text.label }</label>
            <input
                id={field.as_str()}
                name={field.as_str()}
                type={input_type}
                required={field.is_required()}
                value={state.form.draft().field(field).to_string()}
                {oninput}
                class={INPUT_CLASS}
                placeholder={text.placeholder}
            />
            { missing_hint(state, field) }
        </div>
    }
}

fn message_input(state: &UseReducerHandle<FormState>, copy: &ContactCopy) -> Html {
    let field = ContactField::Message;
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                state.dispatch(FormAction::Edit(field, area.value()));
            }
        })
    };
    let text = copy.field(field);

    html! {
        <div>
            <label for={field.as_str()} class="block text-app font-medium mb-2 text-sm">{ text.label }</label>
            <textarea
                id={field.as_str()}
                name={field.as_str()}
                required=true
                rows="6"
                value={state.form.draft().field(field).to_string()}
                {oninput}
                class={classes!(INPUT_CLASS, "resize-y")}
                placeholder={text.placeholder}
            />
            { missing_hint(state, field) }
        </div>
    }
}

fn missing_hint(state: &UseReducerHandle<FormState>, field: ContactField) -> Html {
    if !state.form.missing().contains(&field) {
        return html! {};
    }
    html! {
        <p class="mt-1 text-xs text-red-500" role="alert">{ "This field is required." }</p>
    }
}
