//! Opening social links with the system handler

use folio_core::content::SocialLink;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::event::LinkOpenResult;

/// Open `link` with the platform opener, blocking until it has been handed off
pub fn open_link(link: &SocialLink) -> folio_core::Result<()> {
    let url = link.url()?;
    info!("Opening {} ({})", link.label, url);
    open::that(url.as_str())?;
    Ok(())
}

/// Open `link` on the blocking pool and report the outcome on `tx`
pub fn spawn_open_link(link: SocialLink, tx: mpsc::UnboundedSender<LinkOpenResult>) {
    tokio::task::spawn_blocking(move || {
        let result = match open_link(&link) {
            Ok(()) => LinkOpenResult::Opened { label: link.label },
            Err(e) => {
                warn!("Failed to open {}: {}", link.label, e);
                LinkOpenResult::Failed {
                    label: link.label,
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_href() {
        let link = SocialLink {
            label: "Broken".to_string(),
            href: "not a url".to_string(),
            icon: "?".to_string(),
        };
        assert!(matches!(open_link(&link), Err(folio_core::Error::Link(_))));
    }
}
