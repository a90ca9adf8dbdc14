//! HTML rendering of a transcript
//!
//! Markup lives in `templates/` and is compiled into the binary. htmx
//! drives the page: the input form is swapped in place after every send,
//! and the message list rides along as an out-of-band swap.
//!
//! Templates end in `.html`, so minijinja escapes every interpolated value.

use crate::transcript::{encode, Role, Transcript};
use minijinja::{context, Environment, UndefinedBehavior};
use serde::Serialize;
use thiserror::Error;

const TEMPLATES: [(&str, &str); 4] = [
    ("page.html", include_str!("../templates/page.html")),
    ("messages.html", include_str!("../templates/messages.html")),
    ("input.html", include_str!("../templates/input.html")),
    ("alert.html", include_str!("../templates/alert.html")),
];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
    #[error("transcript could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Tailwind classes for one role's bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BubbleStyle {
    pub background: &'static str,
    pub text: &'static str,
    pub align: &'static str,
}

/// Every role has a style; there is no fallback branch.
pub fn bubble_style(role: Role) -> BubbleStyle {
    match role {
        Role::User => BubbleStyle {
            background: "bg-blue-500",
            text: "text-white",
            align: "justify-end",
        },
        Role::System | Role::Assistant => BubbleStyle {
            background: "bg-gray-200",
            text: "text-gray-800",
            align: "justify-start",
        },
    }
}

/// What the message template sees for one turn
#[derive(Debug, Serialize)]
struct Bubble<'a> {
    label: &'static str,
    content: &'a str,
    style: BubbleStyle,
}

fn bubbles(transcript: &Transcript) -> Vec<Bubble<'_>> {
    transcript
        .turns()
        .iter()
        .map(|turn| Bubble {
            label: turn.role.label(),
            content: &turn.content,
            style: bubble_style(turn.role),
        })
        .collect()
}

/// Compiled chat templates
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Full page for a fresh session
    pub fn page(&self, transcript: &Transcript) -> Result<String, RenderError> {
        let html = self.env.get_template("page.html")?.render(context! {
            bubbles => bubbles(transcript),
            swap_oob => false,
            history => encode(transcript)?,
            notice => None::<&str>,
        })?;
        Ok(html)
    }

    /// The message list. `swap_oob` marks it for an htmx out-of-band replace.
    pub fn chat_messages(
        &self,
        transcript: &Transcript,
        swap_oob: bool,
    ) -> Result<String, RenderError> {
        let html = self.env.get_template("messages.html")?.render(context! {
            bubbles => bubbles(transcript),
            swap_oob,
        })?;
        Ok(html)
    }

    /// The submission form carrying `transcript` as hidden state.
    ///
    /// `notice` renders an inline error alert above the textarea.
    pub fn chat_input(
        &self,
        transcript: &Transcript,
        notice: Option<&str>,
    ) -> Result<String, RenderError> {
        let html = self.env.get_template("input.html")?.render(context! {
            history => encode(transcript)?,
            notice,
        })?;
        Ok(html)
    }
}
