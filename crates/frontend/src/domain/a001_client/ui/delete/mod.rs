use leptos::prelude::*;
use thaw::*;

/// Confirmation for deleting the selected clients.
#[component]
pub fn DeleteClientsDialog(
    open: RwSignal<bool>,
    /// Number of selected clients, shown in the prompt
    #[prop(into)]
    count: Signal<usize>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Confirm Delete"</DialogTitle>
                    <DialogContent>
                        "Are you sure you want to delete the selected client(s)?"
                        <div class="dialog__hint">
                            {move || format!("Selected: {}", count.get())}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            "Delete"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
