// Shared page chrome: document shell, navigation and flash messages

use maud::{html, Markup, DOCTYPE};

use crate::database::User;

/// Wraps `body` in the full document with the navigation bar
pub fn page(title: &str, current: Option<&User>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Tweeter" }
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                (nav(current))
                main { (body) }
            }
        }
    }
}

fn nav(current: Option<&User>) -> Markup {
    html! {
        nav.top {
            a.brand href="/" { "Tweeter" }
            @match current {
                Some(user) => {
                    a href="/create_post" { "New post" }
                    a href={ "/profile/" (user.id()) } { "Profile" }
                    a href="/settings" { "Settings" }
                    @if user.is_admin() {
                        a href="/admin" { "Admin" }
                    }
                    span.whoami { "Signed in as " (user_name(user)) }
                    form.inline method="post" action="/logout" {
                        button type="submit" { "Log out" }
                    }
                },
                None => {
                    a href="/login" { "Log in" }
                    a href="/register" { "Register" }
                },
            }
        }
    }
}

/// Name with the verified badge when granted
pub fn user_name(user: &User) -> Markup {
    html! {
        span.username {
            (user.name())
            @if user.blue() {
                " " span.badge title="Verified" { "✔" }
            }
        }
    }
}

pub fn flash(err: Option<&str>, success: Option<&str>) -> Markup {
    html! {
        @if let Some(err) = err {
            p.flash.error { (err) }
        }
        @if let Some(success) = success {
            p.flash.success { (success) }
        }
    }
}
