use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::lead::emailjs::EmailJsClient;
use crate::lead::form::{
    schedule_status_reset, submit_lead, LeadForm, LeadFormAction, SubmissionOutcome, SubmissionStatus,
};
use crate::lead::validation::Field;
use crate::timers::{BrowserScheduler, BrowserTimer, TimerSlot};

const INPUT_CLASS: &str = "lead-input";

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub mailer: EmailJsClient,
}

#[function_component(LeadFormSection)]
pub fn lead_form_section(props: &LeadFormProps) -> Html {
    // Not use_reducer_eq: a masked phone can equal the previous state while
    // the input still shows the raw keystroke, and only a render rewrites it.
    let form = use_reducer(LeadForm::default);
    let reset_timer = use_state(TimerSlot::<BrowserTimer>::default);
    // Flipped synchronously so a double click cannot start two sends.
    let busy = use_mut_ref(|| false);

    {
        let reset_timer = (*reset_timer).clone();
        use_unmount(move || reset_timer.close());
    }

    let onsubmit = {
        let form = form.clone();
        let mailer = props.mailer.clone();
        let reset_timer = (*reset_timer).clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy.borrow() {
                return;
            }
            *busy.borrow_mut() = true;

            let fields = form.fields.clone();
            let dispatcher = form.dispatcher();
            let mailer = mailer.clone();
            let reset_timer = reset_timer.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let dispatch = {
                    let dispatcher = dispatcher.clone();
                    let reset_timer = reset_timer.clone();
                    move |action: LeadFormAction| {
                        if matches!(action, LeadFormAction::Sending) {
                            reset_timer.clear();
                        }
                        dispatcher.dispatch(action)
                    }
                };
                let outcome = submit_lead(&mailer, fields, dispatch).await;
                *busy.borrow_mut() = false;
                if outcome != SubmissionOutcome::Invalid {
                    reset_timer.replace(schedule_status_reset(&BrowserScheduler, move |action| {
                        dispatcher.dispatch(action)
                    }));
                }
            });
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LeadFormAction::SetName(input.value()));
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LeadFormAction::SetEmail(input.value()));
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LeadFormAction::SetPhone(input.value()));
        })
    };

    let on_consent = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LeadFormAction::SetConsent(input.checked()));
        })
    };

    let error_for = |field: Field| -> Html {
        match form.errors.message(field) {
            Some(message) => html! { <span class="field-error">{message}</span> },
            None => html! {},
        }
    };
    let input_class = |field: Field| {
        classes!(INPUT_CLASS, form.errors.get(field).is_some().then(|| "has-error"))
    };

    let status_class = match form.status {
        SubmissionStatus::Idle => "",
        SubmissionStatus::Sending => "status-sending",
        SubmissionStatus::Success => "status-success",
        SubmissionStatus::Error => "status-error",
    };

    html! {
        <form class="lead-form" onsubmit={onsubmit} autocomplete="off" novalidate={true}>
            <div class="lead-field">
                <label for="lead-name">{"Seu Nome Completo *"}</label>
                <input
                    id="lead-name"
                    type="text"
                    placeholder="Digite seu nome completo aqui"
                    class={input_class(Field::Name)}
                    value={form.fields.name.clone()}
                    oninput={on_name}
                />
                { error_for(Field::Name) }
            </div>
            <div class="lead-field">
                <label for="lead-email">{"Seu Melhor E-mail *"}</label>
                <input
                    id="lead-email"
                    type="email"
                    placeholder="exemplo@email.com"
                    class={input_class(Field::Email)}
                    value={form.fields.email.clone()}
                    oninput={on_email}
                />
                { error_for(Field::Email) }
            </div>
            <div class="lead-field">
                <label for="lead-phone">{"WhatsApp (opcional)"}</label>
                <input
                    id="lead-phone"
                    type="tel"
                    inputmode="numeric"
                    placeholder="(99) 99999-9999"
                    class={input_class(Field::Phone)}
                    value={form.fields.phone.clone()}
                    oninput={on_phone}
                />
                { error_for(Field::Phone) }
            </div>
            <div class="lead-consent">
                <input
                    id="lead-consent"
                    type="checkbox"
                    checked={form.fields.consent}
                    onchange={on_consent}
                />
                <label for="lead-consent">
                    {"Eu concordo em receber comunicações da Bebê Sitter sobre o curso e conteúdos relacionados. Você pode cancelar a qualquer momento."}
                </label>
            </div>
            { error_for(Field::Consent) }
            <div class="lead-submit">
                <button type="submit" class="cta-button" disabled={form.in_flight}>
                    {
                        if form.in_flight {
                            "ENVIANDO..."
                        } else {
                            "QUERO RECEBER AS INFORMAÇÕES"
                        }
                    }
                </button>
                <p class="lead-privacy">
                    {"🔒 Seus dados estão seguros conosco e não serão compartilhados com terceiros"}
                </p>
                {
                    if let Some(message) = form.status.message() {
                        html! { <div class={classes!("lead-status", status_class)}>{message}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </form>
    }
}
