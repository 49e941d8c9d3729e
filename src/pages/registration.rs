use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::use_toaster;
use crate::config::{PROGRAM_NAME, TOTAL_STEPS};
use crate::content;
use crate::wizard::{
    Experience, FieldEdit, ProgramFormat, ProjectDomain, RegistrationRecord, Step, WizardAction,
    WizardSession,
};

#[derive(Properties, PartialEq)]
pub struct RegistrationProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Registration modal. Renders nothing while closed; every open starts a new session.
#[function_component(Registration)]
pub fn registration(props: &RegistrationProps) -> Html {
    if !props.open {
        return html! {};
    }
    html! { <RegistrationModal on_close={props.on_close.clone()} /> }
}

#[derive(Properties, PartialEq)]
struct ModalProps {
    on_close: Callback<()>,
}

#[function_component(RegistrationModal)]
fn registration_modal(props: &ModalProps) -> Html {
    let session = use_reducer(|| WizardSession::open(Utc::now().timestamp_subsec_millis() as usize));
    let toaster = use_toaster();

    {
        let outcome_seq = session.outcome_seq();
        let session = session.clone();
        use_effect_with_deps(
            move |seq| {
                if seq.is_some() {
                    if let Some((_, outcome)) = session.last_outcome() {
                        toaster.show(outcome.notice());
                    }
                }
                || ()
            },
            outcome_seq,
        );
    }

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |closed| {
                if *closed {
                    on_close.emit(());
                }
                || ()
            },
            session.is_closed(),
        );
    }

    let dispatch = {
        let session = session.clone();
        Callback::from(move |action: WizardAction| session.dispatch(action))
    };
    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(WizardAction::Close))
    };
    let on_previous = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(WizardAction::Previous))
    };
    let on_next = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(WizardAction::Next))
    };
    let on_submit = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(WizardAction::Submit))
    };

    let step = session.step();
    let record = session.record();

    html! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <div class="modal-header">
                    <div class="modal-title-row">
                        <button class="btn-ghost" onclick={on_close} aria-label="Close">{"✕"}</button>
                        <h2 class="modal-title">{format!("{} Registration", PROGRAM_NAME)}</h2>
                        <div style="width: 2.5rem;"></div>
                    </div>
                    <div class="progress">
                        <div class="progress-fill" style={format!("width: {:.0}%;", session.progress() * 100.0)}></div>
                    </div>
                    <p class="muted step-count">{format!("Step {} of {}", step.number(), TOTAL_STEPS)}</p>
                </div>

                <div class="modal-body">
                    { step_view(step, record, session.quote_seed(), &dispatch) }

                    <div class="wizard-nav">
                        <button class="btn-outline" onclick={on_previous} disabled={!session.can_go_previous()}>
                            {"← Previous"}
                        </button>
                        if step == Step::LAST {
                            <button class="btn-primary" onclick={on_submit}>{"✔ Submit Registration"}</button>
                        } else {
                            <button class="btn-primary" onclick={on_next} disabled={!session.can_go_next()}>
                                {"Next →"}
                            </button>
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .modal-card {
                    width: 100%;
                    max-width: 42rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #ffffff;
                    color: #1f1f3a;
                    border-radius: 1rem;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.3);
                }
                .modal-header {
                    padding: 1.5rem;
                    border-bottom: 1px solid #e5e7eb;
                    text-align: center;
                }
                .modal-title-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }
                .modal-title {
                    font-size: 1.5rem;
                    margin: 0;
                    background: linear-gradient(135deg, #7c3aed, #f97316);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .btn-ghost {
                    background: transparent;
                    border: none;
                    font-size: 1.1rem;
                    cursor: pointer;
                    width: 2.5rem;
                }
                .step-count {
                    font-size: 0.85rem;
                    margin: 0.5rem 0 0;
                }
                .modal-body {
                    padding: 1.5rem;
                }
                .step-head {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .step-icon {
                    font-size: 3.5rem;
                }
                .step-head h3 {
                    font-size: 1.5rem;
                    color: #7c3aed;
                    margin: 0.5rem 0;
                }
                .field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }
                .field input, .field select, .field textarea {
                    font-size: 1.1rem;
                    padding: 0.9rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                }
                .field textarea {
                    min-height: 8rem;
                    resize: vertical;
                }
                .required {
                    color: #ef4444;
                }
                .member-row {
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                }
                .member-row input {
                    flex: 1;
                }
                .btn-remove {
                    background: #ef4444;
                    color: #ffffff;
                    border: none;
                    border-radius: 0.5rem;
                    width: 2.75rem;
                    height: 2.75rem;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .btn-add {
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px dashed #7c3aed;
                    color: #7c3aed;
                    background: transparent;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .choice {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    padding: 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    margin-bottom: 0.75rem;
                    cursor: pointer;
                }
                .choice:hover, .choice.selected {
                    background: #f5f3ff;
                    border-color: #7c3aed;
                }
                .choice-label {
                    font-weight: 600;
                }
                .domain-panel {
                    border-radius: 0.75rem;
                    padding: 1rem;
                }
                .quote-box {
                    background: #f5f3ff;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    font-style: italic;
                    text-align: center;
                    font-size: 0.9rem;
                }
                .review {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    padding: 1.25rem;
                    margin: 1rem 0;
                    line-height: 1.9;
                }
                .launch {
                    background: linear-gradient(135deg, #7c3aed, #f97316);
                    color: #ffffff;
                    border-radius: 0.75rem;
                    padding: 1.25rem;
                    text-align: center;
                }
                .wizard-nav {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 2rem;
                }
                "#}
            </style>
        </div>
    }
}

fn step_view(step: Step, record: &RegistrationRecord, quote_seed: usize, dispatch: &Callback<WizardAction>) -> Html {
    let head = html! {
        <div class="step-head">
            <div class="step-icon">
                { match (step, record.project_domain) {
                    (Step::ProjectDomain, Some(domain)) => domain.icon(),
                    _ => step.icon(),
                } }
            </div>
            <h3>{step.title()}</h3>
            <p class="muted">{step.tagline()}</p>
        </div>
    };

    let body = match step {
        Step::LeaderName => text_field("leaderName", "Full Name", &record.leader_name, "Enter your full name", "text", dispatch, FieldEdit::LeaderName),
        Step::Email => text_field("email", "Email Address", &record.email, "your.email@example.com", "email", dispatch, FieldEdit::Email),
        Step::Whatsapp => text_field("whatsapp", "WhatsApp Number", &record.whatsapp, "+91 98765 43210", "tel", dispatch, FieldEdit::Whatsapp),
        Step::Location => html! {
            <>
                { state_select(&record.state, dispatch) }
                { text_field("district", "District/City", &record.district, "Enter your district/city", "text", dispatch, FieldEdit::District) }
            </>
        },
        Step::Institution => text_field("institution", "Institution/Organization Name", &record.institution, "Enter your institution/organization name", "text", dispatch, FieldEdit::Institution),
        Step::FieldOfStudy => text_field("fieldOfStudy", "Field of Study/Work", &record.field_of_study, "e.g., Computer Science, Mechanical Engineering, etc.", "text", dispatch, FieldEdit::FieldOfStudy),
        Step::TeamName => text_field("teamName", "Team Name", &record.team_name, "Give your team a creative name", "text", dispatch, FieldEdit::TeamName),
        Step::TeamMembers => roster(record, dispatch),
        Step::ProgramFormat => html! {
            <div role="radiogroup">
                { for ProgramFormat::ALL.into_iter().map(|format| choice(
                    format.key(), format.label(), format.blurb(),
                    record.program_format == Some(format),
                    dispatch, FieldEdit::ProgramFormat(format),
                )) }
            </div>
        },
        Step::ProjectDomain => html! {
            <div role="radiogroup">
                { for ProjectDomain::ALL.into_iter().map(|domain| choice(
                    domain.key(), &format!("{} {}", domain.icon(), domain.label()), domain.blurb(),
                    record.project_domain == Some(domain),
                    dispatch, FieldEdit::ProjectDomain(domain),
                )) }
            </div>
        },
        Step::ProjectDescription => text_area("projectDescription", "Brief Project Description", &record.project_description, "Describe your project idea, its purpose, and potential impact...", dispatch, FieldEdit::ProjectDescription),
        Step::Experience => html! {
            <>
                <label class="choice-label">{"Previous Startup/Innovation Experience "}<span class="required">{"*"}</span></label>
                <div role="radiogroup">
                    { for Experience::ALL.into_iter().map(|answer| choice(
                        &format!("exp-{}", answer.key()), answer.label(), answer.blurb(),
                        record.has_experience == Some(answer),
                        dispatch, FieldEdit::HasExperience(answer),
                    )) }
                </div>
            </>
        },
        Step::Expectations => html! {
            <>
                { text_area("expectations", "What do you expect from this program?", &record.expectations, "Share your goals, what you hope to learn, and how this program fits into your vision...", dispatch, FieldEdit::Expectations) }
                { motivational_quote(quote_seed) }
                { review(record) }
            </>
        },
    };

    let panel_style = match (step, record.project_domain) {
        (Step::ProjectDomain, Some(domain)) => format!("background: {};", domain.tint()),
        _ => String::new(),
    };

    html! {
        <div class="domain-panel" style={panel_style}>
            { head }
            { body }
        </div>
    }
}

fn label(id: &str, text: &str) -> Html {
    html! {
        <label for={id.to_string()}>{text}{" "}<span class="required">{"*"}</span></label>
    }
}

fn text_field(
    id: &'static str,
    text: &str,
    value: &str,
    placeholder: &'static str,
    kind: &'static str,
    dispatch: &Callback<WizardAction>,
    edit: fn(String) -> FieldEdit,
) -> Html {
    let oninput = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(WizardAction::Edit(edit(input.value())));
        })
    };
    html! {
        <div class="field">
            { label(id, text) }
            <input {id} type={kind} value={value.to_string()} {placeholder} {oninput} required=true />
        </div>
    }
}

fn text_area(
    id: &'static str,
    text: &str,
    value: &str,
    placeholder: &'static str,
    dispatch: &Callback<WizardAction>,
    edit: fn(String) -> FieldEdit,
) -> Html {
    let oninput = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            dispatch.emit(WizardAction::Edit(edit(area.value())));
        })
    };
    html! {
        <div class="field">
            { label(id, text) }
            <textarea {id} value={value.to_string()} {placeholder} {oninput} required=true />
        </div>
    }
}

fn state_select(selected: &str, dispatch: &Callback<WizardAction>) -> Html {
    let onchange = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatch.emit(WizardAction::Edit(FieldEdit::State(select.value())));
        })
    };
    html! {
        <div class="field">
            { label("state", "State") }
            <select id="state" {onchange}>
                <option value="" disabled=true selected={selected.is_empty()}>{"Select your state"}</option>
                { for content::site().states.iter().map(|state| html! {
                    <option value={state.clone()} selected={state.as_str() == selected}>{state}</option>
                }) }
            </select>
        </div>
    }
}

fn roster(record: &RegistrationRecord, dispatch: &Callback<WizardAction>) -> Html {
    let on_add = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(WizardAction::AddMember))
    };

    html! {
        <div>
            { for record.team_members().iter().enumerate().map(|(index, name)| {
                let oninput = {
                    let dispatch = dispatch.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        dispatch.emit(WizardAction::Edit(FieldEdit::TeamMember { index, name: input.value() }));
                    })
                };
                let on_remove = {
                    let dispatch = dispatch.clone();
                    Callback::from(move |_: MouseEvent| dispatch.emit(WizardAction::RemoveMember(index)))
                };
                html! {
                    <div class="field member-row" key={index}>
                        <input
                            value={name.clone()}
                            placeholder={format!("Team member {} name", index + 1)}
                            {oninput}
                        />
                        if record.can_remove_member() {
                            <button type="button" class="btn-remove" onclick={on_remove}>{"×"}</button>
                        }
                    </div>
                }
            }) }
            if record.can_add_member() {
                <button type="button" class="btn-add" onclick={on_add}>{"Add Team Member"}</button>
            }
        </div>
    }
}

fn choice(
    id: &str,
    title: &str,
    blurb: &str,
    checked: bool,
    dispatch: &Callback<WizardAction>,
    edit: FieldEdit,
) -> Html {
    let onchange = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: Event| dispatch.emit(WizardAction::Edit(edit.clone())))
    };
    html! {
        <label for={id.to_string()} class={classes!("choice", checked.then(|| "selected"))}>
            <input type="radio" id={id.to_string()} {checked} {onchange} />
            <div>
                <div class="choice-label">{title}</div>
                <div class="muted">{blurb}</div>
            </div>
        </label>
    }
}

fn motivational_quote(seed: usize) -> Html {
    let quotes = &content::site().motivational_quotes;
    if quotes.is_empty() {
        return html! {};
    }
    html! {
        <div class="quote-box">{format!("\"{}\"", quotes[seed % quotes.len()])}</div>
    }
}

fn review(record: &RegistrationRecord) -> Html {
    let or_dash = |value: Option<&'static str>| value.unwrap_or("-");
    html! {
        <>
            <div class="review">
                <div><strong>{"Leader: "}</strong>{&record.leader_name}</div>
                <div><strong>{"Email: "}</strong>{&record.email}</div>
                <div><strong>{"Team: "}</strong>{&record.team_name}</div>
                <div><strong>{"Members: "}</strong>{record.named_member_count()}</div>
                <div><strong>{"Domain: "}</strong>{or_dash(record.project_domain.map(ProjectDomain::label))}</div>
                <div><strong>{"Format: "}</strong>{or_dash(record.program_format.map(ProgramFormat::label))}</div>
            </div>
            <div class="launch">
                <h4>{"🎉 Ready to Launch Your Innovation Journey?"}</h4>
                <p>{format!("Click submit to secure your spot in {}!", PROGRAM_NAME)}</p>
            </div>
        </>
    }
}
