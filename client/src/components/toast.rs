//! Toast for the contact form's one-shot notice.

use leptos::prelude::*;

use crate::state::contact_form::{ContactFormState, NoticeKind};

/// How long a notice stays up before dismissing itself.
pub const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(5);

/// Shows the current notice; dismissed by click or after [`TOAST_DURATION`].
#[component]
pub fn Toast() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();

    // Field edits change the form state but not this id, so only a newly
    // raised notice starts a timer.
    #[cfg(feature = "hydrate")]
    {
        let notice_id = Memo::new(move |_| form.with(|f| f.notice.as_ref().map(|n| n.id)));
        Effect::new(move || {
            let Some(id) = notice_id.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(TOAST_DURATION).await;
                form.update(|f| f.dismiss_notice_if(id));
            });
        });
    }

    view! {
        {move || {
            form.with(|f| f.notice.clone())
                .map(|notice| {
                    let is_error = notice.kind == NoticeKind::Error;
                    view! {
                        <div
                            class="toast"
                            class:toast--error=is_error
                            role="status"
                            on:click=move |_| form.update(ContactFormState::dismiss_notice)
                        >
                            <strong class="toast__title">{notice.title}</strong>
                            <p class="toast__description">{notice.description}</p>
                        </div>
                    }
                })
        }}
    }
}
