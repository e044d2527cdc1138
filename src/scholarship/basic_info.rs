use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::scholarship::models::{
    ApplicantProfile, Field, FieldErrors, COURSE_GROUPS, QUALIFICATIONS, UNIVERSITIES,
};
use crate::scholarship::terms::TermsModal;
use crate::scholarship::validation::validate_basic_information;

#[derive(Properties, PartialEq)]
pub struct BasicInformationProps {
    pub profile: ApplicantProfile,
    pub errors: FieldErrors,
    /// Emits the edited field together with the updated profile.
    pub on_change: Callback<(Field, ApplicantProfile)>,
}

pub fn field_error(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{"⚠ "}{message}</p> },
        None => html! {},
    }
}

fn input_class(errors: &FieldErrors, field: Field) -> Classes {
    classes!("form-control", errors.contains(field).then(|| "invalid"))
}

#[function_component]
pub fn BasicInformation(props: &BasicInformationProps) -> Html {
    let terms_open = use_state(|| false);

    let text_input = |field: Field, apply: fn(&mut ApplicantProfile, String)| {
        let profile = props.profile.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut profile = profile.clone();
            apply(&mut profile, value);
            on_change.emit((field, profile));
        })
    };
    let select_input = |field: Field, apply: fn(&mut ApplicantProfile, String)| {
        let profile = props.profile.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut profile = profile.clone();
            apply(&mut profile, value);
            on_change.emit((field, profile));
        })
    };

    let on_terms = {
        let profile = props.profile.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let mut profile = profile.clone();
            profile.terms_accepted = e.target_unchecked_into::<HtmlInputElement>().checked();
            on_change.emit((Field::Terms, profile));
        })
    };
    let open_terms = {
        let terms_open = terms_open.clone();
        Callback::from(move |_: MouseEvent| terms_open.set(true))
    };
    let close_terms = {
        let terms_open = terms_open.clone();
        Callback::from(move |_: ()| terms_open.set(false))
    };

    let profile = &props.profile;
    let errors = &props.errors;
    let complete = validate_basic_information(profile).is_empty();

    html! {
        <div class="wizard-step">
            <div class="step-heading">
                <h3>{"Basic Information"}</h3>
                <p>{"Please provide your personal information"}</p>
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label>{"Full Name *"}</label>
                    <input
                        type="text"
                        class={input_class(errors, Field::FullName)}
                        value={profile.full_name.clone()}
                        oninput={text_input(Field::FullName, |p, v| p.full_name = v)}
                        placeholder="Enter your full name"
                    />
                    { field_error(errors, Field::FullName) }
                </div>
                <div class="form-group">
                    <label>{"Email Address *"}</label>
                    <input
                        type="email"
                        class={input_class(errors, Field::Email)}
                        value={profile.email.clone()}
                        oninput={text_input(Field::Email, |p, v| p.email = v)}
                        placeholder="Enter your email address"
                    />
                    { field_error(errors, Field::Email) }
                </div>
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label>{"Academic Qualification *"}</label>
                    <select
                        class={input_class(errors, Field::Qualification)}
                        onchange={select_input(Field::Qualification, |p, v| p.qualification = v)}
                    >
                        <option value="" selected={profile.qualification.is_empty()}>{"Select qualification"}</option>
                        { for QUALIFICATIONS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={profile.qualification == *value}>{*label}</option>
                        }) }
                    </select>
                    { field_error(errors, Field::Qualification) }
                </div>
                <div class="form-group">
                    <label>{"Age *"}</label>
                    <input
                        type="number"
                        min="18"
                        max="100"
                        class={input_class(errors, Field::Age)}
                        value={profile.age.clone()}
                        oninput={text_input(Field::Age, |p, v| p.age = v)}
                        placeholder="Enter your age"
                    />
                    { field_error(errors, Field::Age) }
                </div>
            </div>

            <div class="form-group">
                <label>{"Preferred University *"}</label>
                <select
                    class={input_class(errors, Field::University)}
                    onchange={select_input(Field::University, |p, v| p.university = v)}
                >
                    <option value="" selected={profile.university.is_empty()}>{"Select your preferred university"}</option>
                    { for UNIVERSITIES.iter().map(|u| html! {
                        <option
                            value={u.value}
                            disabled={!u.available}
                            class={classes!((!u.available).then(|| "unavailable"))}
                            selected={profile.university == u.value}
                        >
                            {u.label}
                        </option>
                    }) }
                </select>
                { field_error(errors, Field::University) }
                <p class="form-hint">
                    {"Currently, only The University of Tulsa is available for applications. More universities will be added soon."}
                </p>
            </div>

            <div class="form-group">
                <label>{"Preferred Course of Study *"}</label>
                <select
                    class={input_class(errors, Field::Course)}
                    onchange={select_input(Field::Course, |p, v| p.course = v)}
                >
                    <option value="" selected={profile.course.is_empty()}>{"Select your preferred course"}</option>
                    { for COURSE_GROUPS.iter().map(|group| html! {
                        <optgroup label={group.category}>
                            { for group.courses.iter().map(|course| html! {
                                <option value={*course} selected={profile.course == *course}>{*course}</option>
                            }) }
                        </optgroup>
                    }) }
                </select>
                { field_error(errors, Field::Course) }
                <p class="form-hint">
                    {"All courses listed are available for master's degree programs at The University of Tulsa."}
                </p>
            </div>

            <div class="terms-box">
                <input
                    type="checkbox"
                    class={classes!(errors.contains(Field::Terms).then(|| "invalid"))}
                    checked={profile.terms_accepted}
                    onchange={on_terms}
                />
                <div>
                    <p>
                        {"I accept the "}
                        <button type="button" class="link-button" onclick={open_terms}>
                            {"terms and conditions"}
                        </button>
                        {" *"}
                    </p>
                    { field_error(errors, Field::Terms) }
                </div>
            </div>

            if complete {
                <div class="step-complete">
                    {"✓ Basic information completed! You can proceed to the next step."}
                </div>
            }

            <TermsModal is_open={*terms_open} on_close={close_terms} />
        </div>
    }
}
