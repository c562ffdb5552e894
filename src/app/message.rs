// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::StyleService;
use crate::config::Config;
use crate::ui::{analysis, moodboards, outfits};
use std::fmt;
use std::sync::Arc;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Analysis(analysis::Message),
    Outfits(outfits::Message),
    Moodboards(moodboards::Message),
    /// Hide the startup warning banner.
    DismissWarning,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to set up the application.
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Configuration read at startup.
    pub config: Config,
    /// i18n key of a warning raised while reading the configuration.
    pub config_warning: Option<String>,
    /// Style service used by the analysis and outfit workflows.
    pub service: Arc<dyn StyleService>,
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flags")
            .field("lang", &self.lang)
            .field("config", &self.config)
            .field("config_warning", &self.config_warning)
            .finish_non_exhaustive()
    }
}
