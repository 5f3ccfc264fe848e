//! "Download CV" button.
//!
//! The copy or placeholder write runs on the blocking pool; the outcome is
//! reported in a notice under the button.

use dioxus::prelude::*;
use webfolio_core::cv::placeholder_notice;
use webfolio_core::{CvDownloader, CvOutcome, FsProbe};
use webfolio_ui::{Button, ButtonVariant};

use crate::context::use_site;

#[component]
pub fn CvDownloadButton() -> Element {
    let site = use_site();
    let mut notice = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let download = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        let owner = site.config.owner.clone();
        let asset_path = site.config.cv.asset_path.clone();
        let downloader = CvDownloader::new(
            FsProbe::new(site.assets_dir.clone()),
            asset_path.clone(),
            site.downloads_dir.clone(),
        );
        spawn(async move {
            let result =
                tokio::task::spawn_blocking(move || downloader.download(&owner)).await;
            let message = match result {
                Ok(Ok(CvOutcome::Asset(path))) => format!("CV saved to {}", path.display()),
                Ok(Ok(CvOutcome::Placeholder(path))) => {
                    format!("{} Saved {}", placeholder_notice(&asset_path), path.display())
                }
                Ok(Err(e)) => {
                    tracing::error!("CV download failed: {}", e);
                    format!("Could not save the CV: {}", e)
                }
                Err(e) => {
                    tracing::error!("CV download task failed: {}", e);
                    "Could not save the CV.".to_string()
                }
            };
            notice.set(Some(message));
            busy.set(false);
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            disabled: busy(),
            onclick: download,
            "Download CV"
        }
        if let Some(message) = notice() {
            p { class: "cv-notice", role: "status", "{message}" }
        }
    }
}
