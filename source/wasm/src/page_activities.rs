use {
    crate::{
        api::{
            req_get_json,
            req_signup,
            req_unregister,
            ReqError,
        },
        notify::NotifyKind,
        state::{
            spawn_log,
            state,
        },
    },
    flowcontrol::shed,
    gloo::utils::window,
    rooting::{
        el,
        El,
    },
    shared::interface::wire::{
        c2s::{
            Activity,
            ActivityListing,
        },
        url::{
            activities_url,
            decode_component,
            encode_component,
        },
    },
    wasm_bindgen::JsCast,
    web_sys::{
        Element,
        HtmlFormElement,
        HtmlInputElement,
        HtmlSelectElement,
    },
};

fn placeholder_option() -> El {
    return el("option").attr("value", "").text("-- Select an activity --");
}

fn build_activity_card(name: &str, activity: &Activity) -> El {
    let participants;
    if activity.participants.is_empty() {
        participants = el("p").classes(&["info"]).text("No participants yet");
    } else {
        participants = el("ul").classes(&["participants-list"]);
        for p in &activity.participants {
            let entry = el("li");
            entry.ref_push(el("span").classes(&["participant-email"]).text(p));
            entry.ref_push(
                el("button")
                    .classes(&["participant-remove"])
                    .attr("type", "button")
                    .attr("title", "Remove participant")
                    .attr("data-activity", &encode_component(name))
                    .attr("data-email", &encode_component(p))
                    .text("\u{2715}"),
            );
            participants.ref_push(entry);
        }
    }
    let card = el("div").classes(&["activity-card"]);
    card.ref_push(el("h4").text(name));
    card.ref_push(el("p").text(&activity.description));
    let schedule = el("p");
    schedule.ref_push(el("strong").text("Schedule:"));
    schedule.ref_push(el("span").text(&format!(" {}", activity.schedule)));
    card.ref_push(schedule);
    let availability = el("p");
    availability.ref_push(el("strong").text("Availability:"));
    availability.ref_push(el("span").text(&format!(" {} spots left", activity.spots_left())));
    card.ref_push(availability);
    let participants_cont = el("div").classes(&["participants"]);
    let participants_title = el("p").classes(&["participants-title"]);
    participants_title.ref_push(el("strong").text("Participants:"));
    participants_cont.ref_push(participants_title);
    participants_cont.ref_push(participants);
    card.ref_push(participants_cont);
    return card;
}

/// Re-fetch the whole collection and replace the rendered list and select
/// options with it. The server response is the sole source of truth; nothing
/// of the previous render survives a successful refresh.
pub async fn refresh_activities(activities_list: &El, activity_select: &El) {
    match req_get_json::<ActivityListing>(&state().env, &activities_url()).await {
        Ok(listing) => {
            activities_list.ref_clear();
            activity_select.ref_clear();
            activity_select.ref_push(placeholder_option());
            for (name, activity) in &listing.0 {
                activities_list.ref_push(build_activity_card(name, activity));
                activity_select.ref_push(el("option").attr("value", name).text(name));
            }
        },
        Err(e) => {
            // The select keeps whatever it already had; only the list shows the failure.
            activities_list.ref_clear();
            activities_list.ref_push(el("p").text("Failed to load activities. Please try again later."));
            state().log.log(&format!("Error fetching activities: {}", e));
        },
    }
}

async fn register_participant(
    form: &El,
    activities_list: &El,
    activity_select: &El,
    activity: &str,
    email: &str,
) {
    match req_signup(&state().env, activity, email).await {
        Ok(ok) => {
            form.raw().dyn_into::<HtmlFormElement>().unwrap().reset();
            state().notify.show(NotifyKind::Success, &ok.message);
            refresh_activities(activities_list, activity_select).await;
        },
        Err(ReqError::Rejected { detail, .. }) => {
            state().notify.show(NotifyKind::Error, detail.as_deref().unwrap_or("An error occurred"));
        },
        Err(e @ ReqError::Transport(..)) => {
            state().notify.show(NotifyKind::Error, "Failed to sign up. Please try again.");
            state().log.log(&format!("Error signing up: {}", e));
        },
    }
}

async fn unregister_participant(activities_list: &El, activity_select: &El, activity: &str, email: &str) {
    match req_unregister(&state().env, activity, email).await {
        Ok(ok) => {
            state().notify.show(NotifyKind::Success, &ok.message);
            refresh_activities(activities_list, activity_select).await;
        },
        Err(ReqError::Rejected { detail, .. }) => {
            state().notify.show(NotifyKind::Error, detail.as_deref().unwrap_or("An error occurred"));
        },
        Err(e @ ReqError::Transport(..)) => {
            state().notify.show(NotifyKind::Error, "Failed to unregister. Please try again.");
            state().log.log(&format!("Error unregistering: {}", e));
        },
    }
}

pub fn build() -> El {
    let activities_list = el("div").attr("id", "activities-list");
    let activity_select = el("select").attr("id", "activity").attr("name", "activity").attr("required", "");
    activity_select.ref_push(placeholder_option());
    let email_input =
        el("input")
            .attr("id", "email")
            .attr("type", "email")
            .attr("name", "email")
            .attr("required", "")
            .attr("placeholder", "you@example.com");

    // Removal buttons come and go with every refresh, so removal is one
    // delegated listener on the list container.
    activities_list.ref_on("click", {
        let activities_list = activities_list.weak();
        let activity_select = activity_select.weak();
        move |ev| shed!{
            let Some(activities_list) = activities_list.upgrade() else {
                break;
            };
            let Some(activity_select) = activity_select.upgrade() else {
                break;
            };
            let Some(target) = ev.target() else {
                break;
            };
            let Ok(button) = target.dyn_into::<Element>() else {
                break;
            };
            if !button.class_list().contains("participant-remove") {
                break;
            }
            let Some(enc_activity) = button.get_attribute("data-activity") else {
                break;
            };
            let Some(enc_email) = button.get_attribute("data-email") else {
                break;
            };
            let activity = match decode_component(&enc_activity) {
                Ok(v) => v,
                Err(e) => {
                    state().log.log(&e);
                    break;
                },
            };
            let email = match decode_component(&enc_email) {
                Ok(v) => v,
                Err(e) => {
                    state().log.log(&e);
                    break;
                },
            };
            match window().confirm_with_message(&format!("Unregister {} from {}?", email, activity)) {
                Ok(true) => { },
                Ok(false) | Err(_) => {
                    break;
                },
            }
            spawn_log("Unregistering participant", async move {
                unregister_participant(&activities_list, &activity_select, &activity, &email).await;
                return Ok(());
            });
        }
    });
    let form = el("form").attr("id", "signup-form");
    form.ref_push(el("label").attr("for", "email").text("Email:"));
    form.ref_push(email_input.clone());
    form.ref_push(el("label").attr("for", "activity").text("Select Activity:"));
    form.ref_push(activity_select.clone());
    form.ref_push(el("button").attr("type", "submit").text("Sign Up"));
    form.ref_on("submit", {
        let form = form.weak();
        let email_input = email_input.weak();
        let activities_list = activities_list.weak();
        let activity_select = activity_select.weak();
        move |ev| {
            ev.prevent_default();
            shed!{
                let Some(form) = form.upgrade() else {
                    break;
                };
                let Some(email_input) = email_input.upgrade() else {
                    break;
                };
                let Some(activities_list) = activities_list.upgrade() else {
                    break;
                };
                let Some(activity_select) = activity_select.upgrade() else {
                    break;
                };
                let email = email_input.raw().dyn_into::<HtmlInputElement>().unwrap().value();
                let activity = activity_select.raw().dyn_into::<HtmlSelectElement>().unwrap().value();
                spawn_log("Signing up participant", async move {
                    register_participant(&form, &activities_list, &activity_select, &activity, &email).await;
                    return Ok(());
                });
            }
        }
    });

    // Assemble the page
    let activities_section = el("section").attr("id", "activities-container");
    activities_section.ref_push(el("h3").text("Available Activities"));
    activities_section.ref_push(activities_list.clone());
    let signup_section = el("section").attr("id", "signup-container");
    signup_section.ref_push(el("h3").text("Sign Up for an Activity"));
    signup_section.ref_push(form);
    signup_section.ref_push(state().notify.root());
    let page = el("div");
    page.ref_push(activities_section);
    page.ref_push(signup_section);

    // Initial load
    activities_list.ref_push(el("p").text("Loading activities..."));
    spawn_log("Loading activities", {
        let activities_list = activities_list.clone();
        let activity_select = activity_select.clone();
        async move {
            refresh_activities(&activities_list, &activity_select).await;
            return Ok(());
        }
    });
    return page;
}
