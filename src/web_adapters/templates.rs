use chrono::DateTime;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;

const TEMPLATES: [(&str, &str); 14] = [
    ("base.html", include_str!("templates/base.html")),
    ("404.html", include_str!("templates/404.html")),
    ("500.html", include_str!("templates/500.html")),
    ("form_errors.html", include_str!("templates/form_errors.html")),
    ("notes/home.html", include_str!("templates/notes/home.html")),
    ("notes/note_card.html", include_str!("templates/notes/note_card.html")),
    ("notes/note_form.html", include_str!("templates/notes/note_form.html")),
    ("notes/update.html", include_str!("templates/notes/update.html")),
    ("tags/list.html", include_str!("templates/tags/list.html")),
    ("tags/detail.html", include_str!("templates/tags/detail.html")),
    ("tags/form.html", include_str!("templates/tags/form.html")),
    ("tags/delete_confirm.html", include_str!("templates/tags/delete_confirm.html")),
    ("users/login.html", include_str!("templates/users/login.html")),
    ("users/register.html", include_str!("templates/users/register.html")),
];

pub static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)
            .expect("Built-in templates must parse.");
    }
    env.add_filter("datetime", datetime);
    env
});

/// Formats an RFC 3339 timestamp as `31.12.2024 18:30`, leaving anything else as is.
fn datetime(value: String) -> String {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or(value)
}

pub fn render(name: &str, ctx: Value) -> Result<String, minijinja::Error> {
    ENV.get_template(name)?.render(ctx)
}
