//! Registration modal (`#registerDialog`).
//!
//! Registering does not sign the user in; they log in afterwards with the
//! new credentials.

use leptos::prelude::*;

use crate::net::api::Endpoints;
#[cfg(feature = "hydrate")]
use crate::net::types::RegisterRequest;
use crate::state::dialogs::DialogState;

#[component]
pub fn RegisterDialog() -> impl IntoView {
    let dialogs = expect_context::<RwSignal<DialogState>>();

    view! {
        <Show when=move || dialogs.get().register.open>
            <RegisterDialogBody/>
        </Show>
    }
}

#[component]
fn RegisterDialogBody() -> impl IntoView {
    let dialogs = expect_context::<RwSignal<DialogState>>();
    let endpoints = expect_context::<Endpoints>();
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(form) = form_ref.get() else {
                return;
            };
            let request = match crate::util::form::decode_form::<RegisterRequest>(&form) {
                Ok(request) => request,
                Err(error) => {
                    log::warn!("register form incomplete: {error}");
                    dialogs.update(|d| d.register.fail());
                    return;
                }
            };
            let endpoints = endpoints.clone();
            leptos::task::spawn_local(async move {
                match endpoints.register(&request).await {
                    Ok(user_id) => {
                        log::info!("registered user {user_id}");
                        form.reset();
                        dialogs.update(|d| d.register.succeed());
                    }
                    Err(error) => {
                        log::warn!("register rejected: {error}");
                        dialogs.update(|d| d.register.fail());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &endpoints;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| dialogs.update(|d| d.register.close())>
            <div id="registerDialog" class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Register"</h2>
                <form node_ref=form_ref on:submit=on_submit>
                    <label class="dialog__label">
                        "Username"
                        <input class="dialog__input" type="text" name="username" required/>
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input class="dialog__input" type="password" name="password" required/>
                    </label>
                    <label class="dialog__label">
                        "Company"
                        <input class="dialog__input" type="text" name="companyId" required/>
                    </label>
                    <label class="dialog__checkbox">
                        <input type="checkbox" name="roles[]" value="ROLE_ADMIN"/>
                        "Admin"
                    </label>
                    <p class="error" hidden=move || !dialogs.get().register.error>
                        "Registration failed. The username may already be taken."
                    </p>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| dialogs.update(|d| d.register.close())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Register"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
