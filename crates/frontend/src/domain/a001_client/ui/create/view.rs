use contracts::domain::a001_client::{ClientDto, ClientField};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::wizard::{CreateClientWizard, PrimaryOutcome, WizardStep};
use crate::domain::a001_client::api;
use crate::domain::a001_client::store::{pending_client, use_clients_store, ClientsAction};

#[component]
pub fn CreateClientDialog(
    /// Dialog visibility; thaw also clears it on an overlay click
    open: RwSignal<bool>,
    wizard: RwSignal<CreateClientWizard>,
) -> impl IntoView {
    let store = use_clients_store();
    // Inputs rebuild on step change only.
    let step = Memo::new(move |_| wizard.with(|w| w.step));
    let submitting = Signal::derive(move || wizard.with(|w| w.submitting));

    let submit = move |form: ClientDto, session: u64| {
        let request = form.to_create_request();
        let pending = pending_client(&form);
        let pending_id = pending.id.clone();
        store.dispatch(ClientsAction::InsertPending(pending));

        spawn_local(async move {
            match api::create_client(&request).await {
                Ok(client) => {
                    log::info!("Created client {}", client.id);
                    store.dispatch(ClientsAction::Reconcile { pending_id, client });
                    let mut current = false;
                    wizard.update(|w| current = w.submit_succeeded(session));
                    if current {
                        open.set(false);
                    }
                }
                Err(e) => {
                    log::error!("Error creating client: {}", e);
                    store.dispatch(ClientsAction::DiscardPending(pending_id));
                    wizard.update(|w| w.submit_failed(session));
                }
            }
        });
    };

    let on_primary = move |_| {
        let mut outcome = PrimaryOutcome::Ignored;
        wizard.update(|w| outcome = w.primary());
        if let PrimaryOutcome::Submit { form, session } = outcome {
            submit(form, session);
        }
    };

    let field_input = move |field: ClientField| {
        view! {
            <div class="form__group">
                <Label>{field.label()}</Label>
                <input
                    type="text"
                    class="form__input"
                    style="width: 100%;"
                    prop:value=move || wizard.with(|w| w.form.get(field).to_string())
                    prop:disabled=move || submitting.get()
                    on:input=move |ev| {
                        wizard.update(|w| w.set_field(field, event_target_value(&ev)));
                    }
                />
            </div>
        }
    };

    let step_class = move |s: WizardStep| {
        let current = step.get();
        if s == current {
            "wizard-steps__item wizard-steps__item--active"
        } else if s.index() < current.index() {
            "wizard-steps__item wizard-steps__item--done"
        } else {
            "wizard-steps__item"
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Create New Client"</DialogTitle>
                    <DialogContent>
                        <div class="wizard-steps">
                            {WizardStep::ALL
                                .into_iter()
                                .map(move |s| {
                                    view! {
                                        <div class=move || step_class(s)>
                                            <span class="wizard-steps__index">{s.index() + 1}</span>
                                            <span class="wizard-steps__title">{s.title()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="wizard-content" style="margin-top: 16px;">
                            {move || step.get().fields().into_iter().map(field_input).collect_view()}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || wizard.with(|w| w.back_disabled()))
                            on_click=move |_| wizard.update(|w| w.back())
                        >
                            "Back"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=submitting
                            on_click=on_primary
                        >
                            {move || step.get().primary_label()}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
