//! Server-rendered HTML pages.
//!
//! Markup is built with plain string formatting; all user-supplied text
//! goes through [`escape`] before interpolation.

use quill_entity::post::Post;
use quill_entity::user::User;

/// HTML-escapes user-supplied text for safe interpolation.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(current_user: Option<&User>) -> String {
    match current_user {
        Some(user) => format!(
            r#"<span class="user">{}</span> <a href="/auth/logout">Log Out</a>"#,
            escape(&user.username)
        ),
        None => r#"<a href="/auth/register">Register</a> <a href="/auth/login">Log In</a>"#
            .to_string(),
    }
}

fn flash_block(flash: Option<&str>) -> String {
    match flash {
        Some(message) => format!(r#"<div class="flash">{}</div>"#, escape(message)),
        None => String::new(),
    }
}

/// Shared document shell: title, nav with the login state, pending flash
/// message, then the page body.
fn layout(title: &str, current_user: Option<&User>, flash: Option<&str>, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head><title>{title} - Quill</title></head>
<body>
<nav><h1><a href="/">Quill</a></h1><div>{nav}</div></nav>
<section class="content">
<header><h2>{title}</h2></header>
{flash}
{body}
</section>
</body>
</html>"#,
        title = escape(title),
        nav = nav(current_user),
        flash = flash_block(flash),
        body = body,
    )
}

fn post_list(posts: &[Post]) -> String {
    let mut items = String::new();
    for post in posts {
        items.push_str(&format!(
            r#"<article class="post"><header><div class="about">{}</div></header><p class="body">{}</p></article>
"#,
            escape(&post.author),
            escape(&post.body)
        ));
    }
    items
}

/// GET / — every post, oldest first.
pub fn index_page(posts: &[Post], current_user: Option<&User>, flash: Option<&str>) -> String {
    let body = format!(
        r#"<a href="/submit">New</a> <a href="/view">Random</a>
{}"#,
        post_list(posts)
    );
    layout("Posts", current_user, flash, &body)
}

/// GET /auth/register.
pub fn register_page(current_user: Option<&User>, flash: Option<&str>) -> String {
    let body = r#"<form method="post">
<label for="username">Username</label>
<input name="username" id="username" required>
<label for="password">Password</label>
<input type="password" name="password" id="password" required>
<input type="submit" value="Register">
</form>"#;
    layout("Register", current_user, flash, body)
}

/// GET /auth/login.
pub fn login_page(current_user: Option<&User>, flash: Option<&str>) -> String {
    let body = r#"<form method="post">
<label for="username">Username</label>
<input name="username" id="username" required>
<label for="password">Password</label>
<input type="password" name="password" id="password" required>
<input type="submit" value="Log In">
</form>"#;
    layout("Log In", current_user, flash, body)
}

/// GET /submit.
pub fn submit_page(current_user: Option<&User>, flash: Option<&str>) -> String {
    let body = r#"<form method="post">
<label for="author">Author</label>
<input name="author" id="author">
<label for="message">Message</label>
<textarea name="message" id="message"></textarea>
<input type="submit" value="Submit">
</form>"#;
    layout("Submit", current_user, flash, body)
}

/// GET /view — prompts for a sample size.
pub fn view_page(current_user: Option<&User>, flash: Option<&str>) -> String {
    let body = r#"<form method="post">
<label for="num">How many messages?</label>
<input name="num" id="num">
<input type="submit" value="View">
</form>"#;
    layout("View", current_user, flash, body)
}

/// GET /randomview — the sampled posts.
pub fn randomview_page(
    posts: &[Post],
    current_user: Option<&User>,
    flash: Option<&str>,
) -> String {
    layout("Random Posts", current_user, flash, &post_list(posts))
}

/// Fallback error page for faults not recovered on a form.
pub fn error_page(message: &str) -> String {
    layout("Error", None, None, &format!("<p>{}</p>", escape(message)))
}
