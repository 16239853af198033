//! Diary entries.
//!
//! An [`Entry`] is one record: title, content, creation time, a free-text
//! tag string, and a flag saying whether `content` currently holds
//! plaintext or sealed (keystream + base64) text.

use chrono::{DateTime, Local, NaiveDate, SubsecRound, Utc};
use serde::Serialize;

use crate::crypto::{open, seal, SessionKey};
use crate::error::{DiaryError, Result};

/// Display format for entry timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single diary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    title: String,
    content: String,
    timestamp: DateTime<Utc>,
    tags: String,
    encrypted: bool,
}

impl Entry {
    /// Create a plaintext entry stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            timestamp: Utc::now().trunc_subsecs(0),
            tags: String::new(),
            encrypted: false,
        }
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Override the creation time. Sub-second precision is dropped.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp.trunc_subsecs(0);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    /// Seal the content with `key`. No-op if already encrypted.
    pub fn encrypt(&mut self, key: &SessionKey) {
        if self.encrypted {
            return;
        }
        self.content = seal(self.content.as_bytes(), key.as_bytes());
        self.encrypted = true;
    }

    /// Open sealed content with `key`. No-op if already plaintext.
    ///
    /// A wrong key yields unreadable text rather than an error; bytes that
    /// are not valid UTF-8 are replaced.
    pub fn decrypt(&mut self, key: &SessionKey) {
        if !self.encrypted {
            return;
        }
        let bytes = open(&self.content, key.as_bytes());
        self.content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("entry \"{}\" did not decrypt to UTF-8", self.title);
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        self.encrypted = false;
    }

    /// Creation time in local time as `YYYY-MM-DD HH:MM:SS`.
    pub fn format_date(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format(DATE_FORMAT)
            .to_string()
    }

    /// Whether the entry was created on `date` in local time.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.timestamp.with_timezone(&Local).date_naive() == date
    }

    /// Literal, case-sensitive substring match on title or content.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.title.contains(keyword) || self.content.contains(keyword)
    }

    /// Literal substring match on the tag string.
    pub fn matches_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Serialize as five fields: title, unix seconds, tags, flag, content.
    ///
    /// Content runs to the end of the record and may span lines.
    pub fn serialize(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}",
            self.title,
            self.timestamp.timestamp(),
            self.tags,
            u8::from(self.encrypted),
            self.content
        )
    }

    /// Parse the layout produced by [`Entry::serialize`].
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::CorruptRecord` if a header line is missing, the
    /// timestamp is not an integer in range, or the flag is not `0` or `1`.
    pub fn deserialize(data: &str) -> Result<Self> {
        let mut fields = data.splitn(5, '\n');
        let title = next_field(&mut fields, "title")?;
        let timestamp = next_field(&mut fields, "timestamp")?;
        let tags = next_field(&mut fields, "tags")?;
        let flag = next_field(&mut fields, "encrypted flag")?;
        let content = next_field(&mut fields, "content")?;

        let seconds: i64 = timestamp.trim().parse().map_err(|_| {
            DiaryError::corrupt(format!("entry \"{}\" has timestamp {:?}", title, timestamp))
        })?;
        let timestamp = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            DiaryError::corrupt(format!("entry \"{}\" timestamp out of range", title))
        })?;
        let encrypted = match flag.trim() {
            "0" => false,
            "1" => true,
            other => {
                return Err(DiaryError::corrupt(format!(
                    "entry \"{}\" has encrypted flag {:?}",
                    title, other
                )))
            }
        };

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            timestamp,
            tags: tags.to_string(),
            encrypted,
        })
    }
}

fn next_field<'a>(fields: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<&'a str> {
    fields
        .next()
        .ok_or_else(|| DiaryError::corrupt(format!("entry record is missing the {}", name)))
}
