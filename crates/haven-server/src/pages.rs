//! HTML pages rendered with Tera from templates compiled into the binary.

use haven_core::{Error, Result};
use tera::{Context, Tera};

/// Renders the chat, about and resources pages.
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
            ("about.html", include_str!("../templates/about.html")),
            ("resources.html", include_str!("../templates/resources.html")),
        ])
        .map_err(|e| Error::Internal(format!("Failed to load templates: {}", e)))?;
        Ok(Self { tera })
    }

    /// Chat page, optionally showing the last exchange.
    pub fn chat(&self, user_message: Option<&str>, bot_reply: &str) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("user_message", &user_message.unwrap_or(""));
        ctx.insert("bot_reply", bot_reply);
        self.render("index.html", &ctx)
    }

    pub fn about(&self) -> Result<String> {
        self.render("about.html", &Context::new())
    }

    pub fn resources(&self) -> Result<String> {
        self.render("resources.html", &Context::new())
    }

    fn render(&self, name: &str, ctx: &Context) -> Result<String> {
        self.tera
            .render(name, ctx)
            .map_err(|e| Error::Internal(format!("Failed to render {}: {}", name, e)))
    }
}
