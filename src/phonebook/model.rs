use crate::error::{BookError, Result};
use crate::fields::{Birthday, Email, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, any number of phones, and optionally a birthday
/// and an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
    email: Option<Email>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
            email: None,
        })
    }

    pub fn with_phone(name: &str, phone: &str) -> Result<Self> {
        let mut record = Self::new(name)?;
        record.phones.push(Phone::new(phone)?);
        Ok(record)
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Appends a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> Result<String> {
        let phone = Phone::new(phone)?;
        let message = format!("Added phone {} to contact {}", phone, self.name);
        self.phones.push(phone);
        Ok(message)
    }

    /// Returns the last phone containing `query`.
    pub fn find_phone(&self, query: &str) -> Option<&Phone> {
        self.phones.iter().rev().find(|p| p.contains(query))
    }

    /// Removes the phone [`find_phone`](Self::find_phone) would return.
    pub fn remove_phone(&mut self, phone: &str) -> Result<String> {
        let pos = self
            .phones
            .iter()
            .rposition(|p| p.contains(phone))
            .ok_or_else(|| self.phone_not_found(phone))?;
        self.phones.remove(pos);
        Ok(format!("Removed phone {} from contact {}", phone, self.name))
    }

    /// Replaces the first phone equal to `old` with a freshly validated `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<String> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| self.phone_not_found(old))?;
        self.phones[pos] = Phone::new(new)?;
        Ok(format!("Changed phone {} for contact {} to {}", old, self.name, new))
    }

    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    pub fn days_to_birthday(&self) -> Result<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday. A birthday falling on
    /// `today` counts as passed, so the answer is the distance to next
    /// year's occurrence, never zero.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Result<i64> {
        let birthday = self
            .birthday
            .ok_or_else(|| BookError::NoBirthday(self.name.to_string()))?;

        let this_year = anniversary(birthday.date(), today.year())?;
        let next = if this_year > today {
            this_year
        } else {
            anniversary(birthday.date(), today.year() + 1)?
        };
        Ok((next - today).num_days())
    }

    fn phone_not_found(&self, phone: &str) -> BookError {
        BookError::PhoneNotFound {
            name: self.name.to_string(),
            phone: phone.to_string(),
        }
    }
}

/// The occurrence of `date`'s month and day in `year`. February 29th falls
/// back to the 28th outside leap years.
fn anniversary(date: NaiveDate, year: i32) -> Result<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .ok_or(BookError::Format {
            field: "date",
            expected: "Year is outside the supported calendar range",
        })
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "none".to_string());

        write!(
            f,
            "Contact name: {}, birthday: {}, phones: {}",
            self.name, birthday, phones
        )?;
        if let Some(email) = &self.email {
            write!(f, ", email: {}", email)?;
        }
        Ok(())
    }
}
