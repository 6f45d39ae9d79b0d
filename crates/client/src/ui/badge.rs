use std::fmt;

use common::prelude::{ProjectStatus, SyncStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Amber,
    Blue,
    Green,
    Red,
    Slate,
}

impl Tone {
    /// ANSI foreground color code for terminal rendering
    pub fn ansi(&self) -> &'static str {
        match self {
            Tone::Amber => "33",
            Tone::Blue => "34",
            Tone::Green => "32",
            Tone::Red => "31",
            Tone::Slate => "37",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

impl Badge {
    pub fn sync_status(status: SyncStatus) -> Self {
        let tone = match status {
            SyncStatus::Pending => Tone::Amber,
            SyncStatus::InProgress => Tone::Blue,
            SyncStatus::Success => Tone::Green,
            SyncStatus::Failed => Tone::Red,
        };
        Self {
            label: status.label(),
            tone,
        }
    }

    pub fn project_status(status: ProjectStatus) -> Self {
        let tone = match status {
            ProjectStatus::Active => Tone::Green,
            ProjectStatus::Inactive => Tone::Slate,
            ProjectStatus::Pending => Tone::Amber,
        };
        Self {
            label: status.label(),
            tone,
        }
    }

    pub fn synced(synced: bool) -> Self {
        if synced {
            Self {
                label: "Yes",
                tone: Tone::Green,
            }
        } else {
            Self {
                label: "No",
                tone: Tone::Slate,
            }
        }
    }

    /// Label wrapped in color escapes
    pub fn colored(&self) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.tone.ansi(), self.label)
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
