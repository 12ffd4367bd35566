//! Transport-neutral reply structures.
//!
//! The chat transport renders these; the commands only build them.

use serde::Serialize;

/// Embed colors, as 24-bit RGB.
pub mod colors {
    pub const CYBER: u32 = 0x20F0D0;
    pub const ORANGE: u32 = 0xE67E22;
    pub const RED: u32 = 0xE74C3C;
    pub const LIGHT_GREY: u32 = 0xBDC3C7;
    pub const GREY: u32 = 0x95A5A6;
}

/// One labeled field of a successful reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A successful reply: title, ordered fields, color, optional footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub title: String,
    pub fields: Vec<ReplyField>,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Reply {
    pub fn new(title: impl Into<String>, color: u32) -> Reply {
        Reply {
            title: title.into(),
            fields: Vec::new(),
            color,
            footer: None,
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Reply {
        self.fields.push(ReplyField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Reply {
        self.footer = Some(footer.into());
        self
    }
}

/// A user-error reply: one human-readable cause per line plus a pointer
/// at the command's help.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReply {
    pub title: String,
    pub causes: Vec<String>,
    pub help: String,
    pub color: u32,
}

impl ErrorReply {
    pub fn new(causes: Vec<String>, command: &str) -> ErrorReply {
        ErrorReply {
            title: "ERROR".to_string(),
            causes,
            help: format!("Type `q!{}` for help", command),
            color: colors::ORANGE,
        }
    }
}

/// Everything a command can hand back to the transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Response {
    Embed(Reply),
    Error(ErrorReply),
    /// A plain text message, no embed.
    Text(String),
}
