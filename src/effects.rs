//! # Effects
//! Collaborators that carry out what the navigator asks for (clipboard copy,
//! detail navigation) plus transient user notices.
//!
//! Dispatch is fire-and-forget: failures are logged and surfaced as an error
//! notice, never retried, and never touch the navigator.

use chrono::{DateTime, Utc};
use metrics::counter;
use serde::Serialize;
use std::sync::Mutex;
use tracing::{info, warn};

use crate::spotlight::SpotlightEffect;

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

pub trait DetailNavigator: Send + Sync {
    /// Resolve `identifier` to a detail view and open it.
    fn open(&self, identifier: &str) -> anyhow::Result<()>;
}

pub trait Notifier: Send + Sync {
    fn notice(&self, notice: Notice);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient, user-visible confirmation (a toast).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub ts: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            ts: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            ts: Utc::now(),
        }
    }
}

/// Fans effects out to the configured collaborators.
pub struct EffectDispatcher<'a> {
    pub clipboard: &'a dyn Clipboard,
    pub navigator: &'a dyn DetailNavigator,
    pub notifier: &'a dyn Notifier,
}

impl EffectDispatcher<'_> {
    /// Perform `effect`. Returns whether the collaborator reported success.
    pub fn dispatch(&self, effect: &SpotlightEffect) -> bool {
        counter!("spotlight_effects_total", "kind" => effect.label()).increment(1);

        let res = match effect {
            SpotlightEffect::NavigateToDetail { identifier } => self.navigator.open(identifier),
            SpotlightEffect::CopyToClipboard {
                identifier,
                confirmation,
            } => self
                .clipboard
                .write_text(identifier)
                .map(|()| self.notifier.notice(Notice::success(confirmation.clone()))),
        };

        match res {
            Ok(()) => true,
            Err(e) => {
                counter!("spotlight_effect_failures_total", "kind" => effect.label()).increment(1);
                warn!(
                    target: "spotlight",
                    kind = effect.label(),
                    identifier = effect.identifier(),
                    "effect failed: {e:#}"
                );
                self.notifier.notice(Notice::error(format!(
                    "Could not {} {}: {e}",
                    effect.label(),
                    effect.identifier()
                )));
                false
            }
        }
    }
}

/// Builds `<base>?ftu=<identifier>` deep links and remembers the last one.
#[derive(Debug)]
pub struct DeepLinkNavigator {
    base: String,
    last: Mutex<Option<String>>,
}

impl DeepLinkNavigator {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            last: Mutex::new(None),
        }
    }

    pub fn link_for(&self, identifier: &str) -> String {
        format!("{}?ftu={}", self.base, identifier)
    }

    pub fn last_link(&self) -> Option<String> {
        self.last.lock().expect("deep link mutex poisoned").clone()
    }
}

impl DetailNavigator for DeepLinkNavigator {
    fn open(&self, identifier: &str) -> anyhow::Result<()> {
        let link = self.link_for(identifier);
        info!(target: "spotlight", %link, "open detail");
        *self.last.lock().map_err(|_| anyhow::anyhow!("deep link mutex poisoned"))? = Some(link);
        Ok(())
    }
}

/// In-process clipboard; keeps the last written text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.text.lock().expect("clipboard mutex poisoned").clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        *self.text.lock().map_err(|_| anyhow::anyhow!("clipboard mutex poisoned"))? =
            Some(text.to_string());
        Ok(())
    }
}

/// Bounded in-memory notice list (newest last).
#[derive(Debug)]
pub struct NoticeLog {
    inner: Mutex<Vec<Notice>>,
    cap: usize,
}

impl NoticeLog {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.clamp(1, 1_000);
        Self {
            inner: Mutex::new(Vec::with_capacity(cap)),
            cap,
        }
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<Notice> {
        let v = self.inner.lock().expect("notice log mutex poisoned");
        let start = v.len().saturating_sub(n);
        v[start..].to_vec()
    }
}

impl Notifier for NoticeLog {
    fn notice(&self, notice: Notice) {
        let mut v = self.inner.lock().expect("notice log mutex poisoned");
        v.push(notice);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }
}

/// Notices to the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notice(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => info!(target: "spotlight", "{}", notice.message),
            NoticeLevel::Error => warn!(target: "spotlight", "{}", notice.message),
        }
    }
}
