use time::{OffsetDateTime, UtcOffset, macros::format_description};

/// Wall clock used for message timestamps and the last-access cookie.
///
/// The offset is resolved once by the caller. Reading the local offset is only
/// reliable before the runtime spawns worker threads.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    offset: UtcOffset,
}

impl Default for Clock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock {
    pub fn utc() -> Self {
        Self { offset: UtcOffset::UTC }
    }

    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Uses the host's offset, or UTC when it can't be determined.
    pub fn local() -> Self {
        Self::with_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
    }

    pub fn now(&self) -> Result<String, time::error::Format> {
        stamp(OffsetDateTime::now_utc().to_offset(self.offset))
    }
}

fn stamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
}
