use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Success or error banner that hides itself once `expires_at` has passed
///
/// A view holds at most one notice, so showing a success message always replaces a
/// pending error and the other way around.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>, now: DateTime<Utc>, ttl: TimeDelta) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            expires_at: now + ttl,
        }
    }

    pub fn error(message: impl Into<String>, now: DateTime<Utc>, ttl: TimeDelta) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            expires_at: now + ttl,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Drops `notice` once it has expired
pub fn expire(notice: &mut Option<Notice>, now: DateTime<Utc>) {
    if notice.as_ref().is_some_and(|n| n.is_expired(now)) {
        *notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires_after_ttl() {
        let now = Utc::now();
        let mut notice = Some(Notice::success("Saved", now, TimeDelta::milliseconds(3000)));

        expire(&mut notice, now + TimeDelta::milliseconds(2999));
        assert!(notice.is_some());

        expire(&mut notice, now + TimeDelta::milliseconds(3000));
        assert!(notice.is_none());
    }
}
