//! Apply section: application form, confirmation and error views

use leptos::prelude::*;

use crate::core::domains::{DEPARTMENTS, Domain, YEARS, select_options};
use crate::core::registration::ApplyError;
use crate::core::{ApplyFlow, ApplyView, Field};
use crate::ui::common::{ErrorMessage, FormField, SelectField};

/// Anchor id of the apply section.
pub const APPLY_SECTION_ID: &str = "apply-section";

/// Posts applications to the site's own registration endpoint.
#[cfg(feature = "hydrate")]
pub struct ApiStore;

#[cfg(feature = "hydrate")]
impl crate::core::RegistrationStore for ApiStore {
    async fn insert(
        &self,
        registration: &crate::core::Registration,
    ) -> Result<(), crate::core::StoreError> {
        use crate::core::StoreError;
        use crate::core::registration::REGISTRATIONS_PATH;
        use gloo_net::http::Request;

        let response = Request::post(REGISTRATIONS_PATH)
            .header("Content-Type", "application/json")
            .json(registration)
            .map_err(|e| StoreError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(StoreError::Rejected {
                status: response.status(),
                body,
            })
        }
    }
}

/// Options for the select-backed fields; `None` for free-text fields.
fn field_options(field: Field) -> Option<Vec<(String, String)>> {
    match field {
        Field::Year => Some(select_options("Select Year", YEARS)),
        Field::Department => Some(select_options("Select Department", DEPARTMENTS)),
        Field::InterestedDomain => Some(select_options(
            "Choose your path",
            Domain::FORM_ORDER.iter().map(|d| d.form_value()),
        )),
        _ => None,
    }
}

/// Apply section component
///
/// Rendered only while the flow is visible.
#[component]
pub fn ApplySection(flow: RwSignal<ApplyFlow>) -> impl IntoView {
    let view_state = Memo::new(move |_| flow.with(|f| f.view()));

    view! {
        <Show when=move || view_state.get() != ApplyView::Hidden>
            <section id=APPLY_SECTION_ID class="py-20 bg-muted">
                <div class="container mx-auto px-4 max-w-2xl">
                    <div class="western-border card animate-fade-in-up">
                        {move || match view_state.get() {
                            ApplyView::Confirmation => view! { <Confirmation flow=flow /> }.into_any(),
                            ApplyView::Error => view! { <SubmitError flow=flow /> }.into_any(),
                            _ => view! { <ApplicationForm flow=flow /> }.into_any(),
                        }}
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[component]
fn Confirmation(flow: RwSignal<ApplyFlow>) -> impl IntoView {
    view! {
        <div class="card-header text-center">
            <h2 class="text-4xl font-space-grotesk text-primary mb-4">"🎉 Thank You for Applying!"</h2>
            <p class="text-lg font-dm-sans mb-6">
                "We've received your application. Our team will review it and get back to you soon."
            </p>
            <button
                class="western-btn text-lg px-8 py-4 font-space-grotesk"
                on:click=move |_| flow.update(|f| f.reset())
            >
                "Submit Another Application"
            </button>
        </div>
    }
}

#[component]
fn SubmitError(flow: RwSignal<ApplyFlow>) -> impl IntoView {
    view! {
        <div class="card-header text-center">
            <h2 class="text-4xl font-space-grotesk text-red-600 mb-4">"⚠️ Error Occurred"</h2>
            <p class="text-lg font-dm-sans mb-6">"Error occurred. Please try again later."</p>
            <button
                class="western-btn text-lg px-8 py-4 font-space-grotesk"
                on:click=move |_| flow.update(|f| f.retry())
            >
                "Try Again"
            </button>
        </div>
    }
}

#[component]
fn ApplicationForm(flow: RwSignal<ApplyFlow>) -> impl IntoView {
    let form_error = RwSignal::new(None::<String>);
    let submitting = Signal::derive(move || flow.with(|f| f.is_submitting()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut started = Err(ApplyError::NotEditing);
        flow.update(|f| started = f.begin_submit());

        let registration = match started {
            Ok(registration) => registration,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        form_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::core::RegistrationStore;

            let outcome = ApiStore.insert(&registration).await;
            flow.update(|f| f.finish(outcome));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = registration;
    };

    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            let value = Signal::derive(move || flow.with(|f| f.form().get(field).to_string()));
            let on_change = Callback::new(move |v: String| flow.update(|f| f.set_field(field, v)));

            match field_options(field) {
                Some(options) => view! {
                    <SelectField
                        id=field.column()
                        label=field.to_string()
                        value=value
                        on_change=on_change
                        options=options
                        disabled=submitting
                    />
                }
                .into_any(),
                None => view! {
                    <FormField
                        id=field.column()
                        label=field.to_string()
                        input_type=field.input_type()
                        value=value
                        on_input=on_change
                        disabled=submitting
                    />
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <div class="card-header text-center">
            <h2 class="text-4xl font-space-grotesk text-primary mb-4">"Join the Ride – Apply Now"</h2>
            <p class="text-lg font-dm-sans">
                "Ready to embark on your journey with ACM SIGKDD? Fill out the form below, partner."
            </p>
        </div>
        <div class="card-content">
            <form on:submit=on_submit class="space-y-6">
                {fields}
                <ErrorMessage error=form_error />
                <button
                    type="submit"
                    class="western-btn w-full text-lg py-6 font-space-grotesk animate-glow"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Application" }}
                </button>
            </form>
        </div>
    }
}
