pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const KONAMI_MESSAGE: &str = "🎮 Konami Code Activated! Enjoy the portfolio!";

pub const CONTACT_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    #[cfg_attr(not(test), allow(dead_code))]
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification {}", self.as_str())
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Info => "fas fa-info-circle",
        }
    }
}

/// Inner markup of a toast. The message is escaped; only the icon and close
/// button are markup.
pub fn notification_markup(kind: NotificationKind, message: &str) -> String {
    format!(
        "<i class=\"{}\"></i><span>{}</span><button class=\"notification-close\"><i class=\"fas fa-times\"></i></button>",
        kind.icon_class(),
        escape_html(message)
    )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Snapshot of the contact form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Builds the message from a field lookup; missing fields read as empty.
    pub fn from_fields(mut get: impl FnMut(&str) -> Option<String>) -> Self {
        let [name, email, subject, message] =
            CONTACT_FIELDS.map(|field| get(field).unwrap_or_default());
        Self {
            name,
            email,
            subject,
            message,
        }
    }
}

// ---------------- Floating form labels ----------------

/// Whether a field's group keeps the `focused` class after blur.
#[inline]
pub fn keeps_focus_on_blur(value: &str) -> bool {
    !value.is_empty()
}

#[inline]
pub fn has_value(value: &str) -> bool {
    !value.is_empty()
}
