// Page bodies. Every interpolated string goes through maud's escaping.

use std::collections::HashMap;

use axum::http::StatusCode;
use maud::{html, Markup};

use super::layout::{flash, page, user_name};
use crate::database::{Post, User};
use crate::utils::time::format_time;

fn post_card(post: &Post, author: Option<&User>) -> Markup {
    html! {
        article.post {
            header {
                @match author {
                    Some(author) => {
                        a href={ "/profile/" (author.id()) } { (user_name(author)) }
                    },
                    None => span.username { "[deleted]" },
                }
                time { (format_time(post.timestamp())) }
            }
            p.contents { (post.contents()) }
        }
    }
}

fn timeline(posts: &[Post], authors: &HashMap<u64, User>) -> Markup {
    html! {
        @if posts.is_empty() {
            p.empty { "No posts yet." }
        }
        @for post in posts {
            (post_card(post, authors.get(&post.author_id())))
        }
    }
}

pub fn index(current: Option<&User>, posts: &[Post], authors: &HashMap<u64, User>) -> Markup {
    page(
        "Home",
        current,
        html! {
            h1 { "Latest posts" }
            (timeline(posts, authors))
        },
    )
}

fn credentials_form(action: &str, button: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            label for="username" { "Username" }
            input id="username" type="text" name="username" required;
            label for="password" { "Password" }
            input id="password" type="password" name="password" required;
            button type="submit" { (button) }
        }
    }
}

pub fn register(err: Option<&str>) -> Markup {
    page(
        "Register",
        None,
        html! {
            h1 { "Create an account" }
            (flash(err, None))
            (credentials_form("/register", "Register"))
            p { "Already have an account? " a href="/login" { "Log in" } }
        },
    )
}

pub fn login(err: Option<&str>) -> Markup {
    page(
        "Log in",
        None,
        html! {
            h1 { "Log in" }
            (flash(err, None))
            (credentials_form("/login", "Log in"))
            p { "New here? " a href="/register" { "Register" } }
        },
    )
}

pub fn create_post(current: &User, err: Option<&str>) -> Markup {
    page(
        "New post",
        Some(current),
        html! {
            h1 { "What's happening?" }
            (flash(err, None))
            form method="post" action="/create_post" {
                textarea name="contents" rows="4" required {}
                button type="submit" { "Post" }
            }
        },
    )
}

pub fn profile(current: Option<&User>, user: &User, posts: &[Post]) -> Markup {
    let authors: HashMap<u64, User> = HashMap::from([(user.id(), user.clone())]);

    page(
        user.name(),
        current,
        html! {
            section.profile {
                h1 { (user_name(user)) }
                @if user.bio().is_empty() {
                    p.bio.empty { "This user has not written a bio yet." }
                } @else {
                    p.bio { (user.bio()) }
                }
            }
            h2 { "Posts" }
            (timeline(posts, &authors))
        },
    )
}

pub fn settings(user: &User, err: Option<&str>, success: Option<&str>) -> Markup {
    page(
        "Settings",
        Some(user),
        html! {
            h1 { "Settings" }
            (flash(err, success))
            form method="post" action="/settings" {
                label for="bio" { "Bio" }
                textarea id="bio" name="bio" rows="4" { (user.bio()) }
                fieldset {
                    legend { "Change password (optional)" }
                    label for="currpass" { "Current password" }
                    input id="currpass" type="password" name="currpass";
                    label for="newpass" { "New password" }
                    input id="newpass" type="password" name="newpass";
                }
                button type="submit" { "Save" }
            }
        },
    )
}

pub fn admin_index(
    current: &User,
    num_users: u64,
    posts: &[Post],
    authors: &HashMap<u64, User>,
) -> Markup {
    page(
        "Admin",
        Some(current),
        html! {
            h1 { "Admin" }
            ul.stats {
                li { "Users: " (num_users) }
                li { "Posts: " (posts.len()) }
            }
            p { a href="/admin/users" { "Manage users" } }
            h2 { "Moderation" }
            @for post in posts {
                div.moderate {
                    (post_card(post, authors.get(&post.author_id())))
                    form.inline method="post" action="/admin/posts" {
                        input type="hidden" name="id" value=(post.id());
                        button type="submit" { "Delete" }
                    }
                }
            }
        },
    )
}

pub fn admin_users(current: &User, users: &[User]) -> Markup {
    page(
        "Users",
        Some(current),
        html! {
            h1 { "Users" }
            table.users {
                thead {
                    tr { th { "Id" } th { "Name" } th { "Role" } th { "Verified" } th {} }
                }
                tbody {
                    @for user in users {
                        tr {
                            td { (user.id()) }
                            td { a href={ "/profile/" (user.id()) } { (user.name()) } }
                            td { (format!("{:?}", user.role())) }
                            td { @if user.blue() { "yes" } @else { "no" } }
                            td {
                                form.inline method="post" action="/admin/users" {
                                    input type="hidden" name="id" value=(user.id());
                                    @if user.blue() {
                                        input type="hidden" name="cmd" value="RemoveBlue";
                                        button type="submit" { "Remove badge" }
                                    } @else {
                                        input type="hidden" name="cmd" value="GrantBlue";
                                        button type="submit" { "Grant badge" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(current: Option<&User>, status: StatusCode, message: &str) -> Markup {
    let reason: &str = status.canonical_reason().unwrap_or("Error");

    page(
        reason,
        current,
        html! {
            h1 { (status.as_u16()) " " (reason) }
            @if !message.is_empty() {
                p.error { (message) }
            }
            p { a href="/" { "Back to the timeline" } }
        },
    )
}
