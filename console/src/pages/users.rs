//! Admin user management: list, details with delete, and registration.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use session::{Clock, Role, SystemClock, UserProfile};

use crate::components::details_view::{ConfirmDelete, DetailRow, DetailsView};
use crate::components::form_field::TextField;
use crate::components::list_view::ListView;
use crate::net::api::HttpGateway;
use crate::net::types::NewUser;
use crate::pages::{list_rows, navigate_on, route_id};
use crate::state::fetch::Fetch;
use crate::util::form::{MIN_PASSWORD_LEN, iso_date, parse_date, parse_email, required};
use crate::util::list_view::Listed;
use crate::util::task::{load, load_into, run_action};

#[component]
pub fn UserListPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let users = load(async move { gateway.list_users().await });

    view! { <ListView title="Users" columns=UserProfile::columns() rows=list_rows(users) add_path="/users/register"/> }
}

#[component]
pub fn UserDetailsPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let id = route_id();
    let user = RwSignal::new(Fetch::<UserProfile>::Loading);
    let error = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<String>);
    navigate_on(redirect);

    let gw = gateway.clone();
    Effect::new(move || match id.get() {
        Some(id) => {
            let gw = gw.clone();
            load_into(user, async move { gw.get_user(id).await });
        }
        None => user.set(Fetch::Failed("Unknown user.".to_owned())),
    });

    let on_delete = Callback::new(move |()| {
        let Some(id) = id.get_untracked() else { return };
        let gw = gateway.clone();
        run_action(async move { gw.delete_user(id).await }, error, move |_| {
            redirect.set(Some("/users".to_owned()));
        });
    });

    let field = move |pick: fn(&UserProfile) -> String| {
        Signal::derive(move || user.with(|f| f.ready().map(pick).unwrap_or_default()))
    };

    view! {
        <DetailsView title="User" back_path="/users">
            {move || match user.get() {
                Fetch::Loading => view! { <p>"Loading..."</p> }.into_any(),
                Fetch::Failed(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                Fetch::Ready(_) => {
                    view! {
                        <DetailRow label="ID" value=field(|u| u.id.to_string())/>
                        <DetailRow label="Username" value=field(|u| u.username.clone())/>
                        <DetailRow label="Name" value=field(UserProfile::display_name)/>
                        <DetailRow label="Email" value=field(|u| u.email.clone())/>
                        <DetailRow label="Role" value=field(|u| u.role.clone())/>
                        <DetailRow label="Joined" value=field(|u| u.joined_date().to_owned())/>
                        <DetailRow label="Active" value=field(|u| if u.is_active { "Yes" } else { "No" }.to_owned())/>
                        <ConfirmDelete label="user" on_confirm=on_delete/>
                    }
                        .into_any()
                }
            }}
            {move || error.get().map(|message| view! { <p class="notice notice--error">{message}</p> })}
        </DetailsView>
    }
}

fn validate_new_user(
    username: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    date_joined: &str,
    role: &str,
) -> Result<NewUser, &'static str> {
    let role = Role::parse(role).ok_or("Pick a role.")?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(NewUser {
        username: required(username, "Username is required.")?,
        first_name: required(first_name, "First name is required.")?,
        last_name: required(last_name, "Last name is required.")?,
        email: parse_email(email)?,
        password: password.to_owned(),
        date_joined: parse_date(date_joined)?,
        role: role.as_str().to_owned(),
    })
}

#[component]
pub fn AddUserPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let today = iso_date(SystemClock.now_millis());
    let username = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let date_joined = RwSignal::new(today.clone());
    let role = RwSignal::new(Role::User.as_str().to_owned());
    let error = RwSignal::new(None::<String>);
    let message = RwSignal::new(None::<String>);

    let reset = move || {
        for field in [username, first_name, last_name, email, password] {
            field.set(String::new());
        }
        date_joined.set(today.clone());
        role.set(Role::User.as_str().to_owned());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        message.set(None);
        let payload = match validate_new_user(
            &username.get_untracked(),
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &date_joined.get_untracked(),
            &role.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        let gw = gateway.clone();
        let reset = reset.clone();
        run_action(async move { gw.register_user(&payload).await }, error, move |created| {
            message.set(Some(format!("User {} created successfully!", created.username)));
            reset();
        });
    };

    view! {
        <div class="form-page">
            <Title text="Warehouse Manager | Create User"/>
            <h1>"Create New User"</h1>
            {move || message.get().map(|text| view! { <p class="notice notice--success">{text}</p> })}
            {move || error.get().map(|text| view! { <p class="notice notice--error">{text}</p> })}
            <form on:submit=on_submit>
                <TextField label="Username" value=username/>
                <TextField label="First Name" value=first_name/>
                <TextField label="Last Name" value=last_name/>
                <TextField label="Email" value=email kind="email"/>
                <TextField label="Password" value=password kind="password"/>
                <TextField label="Date Joined" value=date_joined kind="date"/>
                <label class="form-field">
                    <span>"Role"</span>
                    <select prop:value=move || role.get() on:change=move |ev| role.set(event_target_value(&ev))>
                        <option value="user">"User"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                </label>
                <button type="submit">"Create User"</button>
            </form>
        </div>
    }
}
