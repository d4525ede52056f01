use crate::fields::Phone;
use crate::model::Record;

pub mod birthday;
pub mod create;
pub mod delete;
pub mod email;
pub mod helpers;
pub mod list;
pub mod persist;
pub mod phones;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A contact with the number of days left until its birthday.
#[derive(Debug, Clone)]
pub struct UpcomingBirthday {
    pub record: Record,
    pub days: i64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub phones: Vec<Phone>,
    pub days: Option<i64>,
    pub upcoming: Vec<UpcomingBirthday>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_phones(mut self, phones: Vec<Phone>) -> Self {
        self.phones = phones;
        self
    }

    pub fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming = upcoming;
        self
    }
}
