//! Sign-in and account creation dialogs.
//!
//! Any non-empty username and password are accepted; nothing is stored.

use cursive::Cursive;
use cursive::align::HAlign;
use cursive::view::{Nameable, Resizable};
use cursive::views::{Dialog, DummyView, EditView, LinearLayout, TextView};

use budget_core::{Credentials, DashboardEvent, Registration};

use super::chrome::{Screen, footer};
use super::{dispatch_or_report, replace_step};

const USERNAME_FIELD: &str = "login_username";
const PASSWORD_FIELD: &str = "login_password";

const SIGNUP_USERNAME_FIELD: &str = "signup_username";
const SIGNUP_EMAIL_FIELD: &str = "signup_email";
const SIGNUP_PASSWORD_FIELD: &str = "signup_password";
const SIGNUP_CONFIRM_FIELD: &str = "signup_confirm";

/// Shows the sign-in dialog as a new layer.
pub fn show_login(siv: &mut Cursive) {
    let form = LinearLayout::vertical()
        .child(field_row(
            "Username:",
            EditView::new()
                .on_submit(|s, _| on_sign_in(s))
                .with_name(USERNAME_FIELD),
        ))
        .child(field_row(
            "Password:",
            EditView::new()
                .secret()
                .on_submit(|s, _| on_sign_in(s))
                .with_name(PASSWORD_FIELD),
        ));

    let layout = LinearLayout::vertical()
        .child(
            TextView::new("Smart budget analysis and financial planning")
                .h_align(HAlign::Center)
                .full_width(),
        )
        .child(DummyView.fixed_height(1))
        .child(form)
        .child(DummyView.fixed_height(1))
        .child(footer(Screen::SignIn));

    let dialog = Dialog::around(layout)
        .title("BudgetWise")
        .button("Sign In", on_sign_in)
        .button("Create Account", show_signup)
        .button("Quit", |s| s.quit())
        .padding_lrtb(2, 2, 1, 1);

    siv.add_layer(dialog);
}

fn field_row<V: cursive::View>(
    label: &str,
    field: V,
) -> LinearLayout {
    LinearLayout::horizontal()
        .child(TextView::new(format!("{label:18}")))
        .child(field.fixed_width(28))
}

fn field_text(
    siv: &mut Cursive,
    name: &str,
) -> String {
    siv.call_on_name(name, |v: &mut EditView| v.get_content().to_string())
        .unwrap_or_default()
}

fn on_sign_in(siv: &mut Cursive) {
    let credentials = Credentials::new(
        field_text(siv, USERNAME_FIELD),
        field_text(siv, PASSWORD_FIELD),
    );

    if dispatch_or_report(siv, DashboardEvent::Login(credentials), "Sign In Failed") {
        replace_step(siv);
    }
}

fn show_signup(siv: &mut Cursive) {
    let form = LinearLayout::vertical()
        .child(field_row(
            "Username:",
            EditView::new().with_name(SIGNUP_USERNAME_FIELD),
        ))
        .child(field_row("Email:", EditView::new().with_name(SIGNUP_EMAIL_FIELD)))
        .child(field_row(
            "Password:",
            EditView::new().secret().with_name(SIGNUP_PASSWORD_FIELD),
        ))
        .child(field_row(
            "Confirm Password:",
            EditView::new()
                .secret()
                .on_submit(|s, _| on_create_account(s))
                .with_name(SIGNUP_CONFIRM_FIELD),
        ));

    let layout = LinearLayout::vertical()
        .child(form)
        .child(DummyView.fixed_height(1))
        .child(footer(Screen::SignUp));

    siv.add_layer(
        Dialog::around(layout)
            .title("Create Account")
            .button("Create Account", on_create_account)
            .button("Cancel", |s| {
                s.pop_layer();
            })
            .padding_lrtb(2, 2, 1, 1),
    );
}

fn on_create_account(siv: &mut Cursive) {
    let registration = Registration {
        username: field_text(siv, SIGNUP_USERNAME_FIELD),
        email: field_text(siv, SIGNUP_EMAIL_FIELD),
        password: field_text(siv, SIGNUP_PASSWORD_FIELD),
        confirm_password: field_text(siv, SIGNUP_CONFIRM_FIELD),
    };

    if dispatch_or_report(
        siv,
        DashboardEvent::Signup(registration),
        "Sign Up Failed",
    ) {
        // Sign-up layer, then the sign-in layer beneath it.
        siv.pop_layer();
        replace_step(siv);
    }
}
