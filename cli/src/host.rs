//! Terminal host for the session controller.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use session::{Notice, NoticeLevel, SessionHost, SessionSnapshot};

/// Prints notices to the terminal; snapshots and navigation are only logged,
/// since a one-shot command has no screen to update.
#[derive(Debug, Default)]
pub struct ConsoleHost;

impl SessionHost for ConsoleHost {
    fn publish(&self, snapshot: &SessionSnapshot) {
        tracing::debug!(status = ?snapshot.status, loading = snapshot.is_loading, "session updated");
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", render_notice(&notice)),
            NoticeLevel::Error => eprintln!("{}", render_notice(&notice)),
        }
    }

    fn navigate(&self, path: &str) {
        tracing::debug!(%path, "navigation requested");
    }
}

pub(crate) fn render_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => notice.message.clone(),
        NoticeLevel::Error => format!("error: {}", notice.message),
    }
}
