// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the three workflow
//! sections.
//!
//! The `App` struct wires together localization, the injected style service
//! and the analysis, outfit and moodboard components, and translates their
//! effects into tasks. The sections never share state; they are only mounted
//! side by side.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::StyleService;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::{analysis, moodboards, outfits};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    service: Arc<dyn StyleService>,
    analysis: analysis::State,
    outfits: outfits::State,
    moodboards: moodboards::State,
    /// Directory holding the moodboard artwork.
    moodboard_dir: Option<PathBuf>,
    /// i18n key of a startup warning shown above the sections.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("analysis", &self.analysis.status())
            .field("outfits", &self.outfits.status())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
///
/// Close requests are routed through `App::update` (see
/// [`Message::WindowCloseRequested`]) so previews are released first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the launcher flags.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            config,
            config_warning,
            service,
        } = flags;

        let app = App {
            i18n: I18n::new(lang, &config),
            theme_mode: config.general.theme_mode,
            service,
            analysis: analysis::State::new(),
            outfits: outfits::State::new(&config.outfits),
            moodboards: moodboards::State::new(),
            moodboard_dir: config.moodboards.image_dir.clone(),
            warning: config_warning,
        };
        tracing::info!(locale = %app.i18n.current_locale(), "application started");

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        match self.analysis.selection() {
            Some(file) => self
                .i18n
                .tr_with_args("window-title-with-file", &[("file", file.name())]),
            None => self.i18n.tr("window-title"),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            service: &self.service,
            analysis: &mut self.analysis,
            outfits: &mut self.outfits,
            moodboards: &mut self.moodboards,
        };

        match message {
            Message::Analysis(message) => update::handle_analysis_message(&mut ctx, message),
            Message::Outfits(message) => update::handle_outfits_message(&mut ctx, message),
            Message::Moodboards(message) => update::handle_moodboards_message(&mut ctx, message),
            Message::DismissWarning => {
                self.warning = None;
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.analysis.release();
                tracing::debug!("window closing");
                window::close(id)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            service: self.service.as_ref(),
            analysis: &self.analysis,
            outfits: &self.outfits,
            moodboards: &self.moodboards,
            moodboard_dir: self.moodboard_dir.as_deref(),
            warning: self.warning.as_deref(),
        })
    }

    pub fn analysis(&self) -> &analysis::State {
        &self.analysis
    }

    pub fn outfits(&self) -> &outfits::State {
        &self.outfits
    }

    pub fn moodboards(&self) -> &moodboards::State {
        &self.moodboards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::analysis::{AnalysisReport, RecommendationItem};
    use crate::domain::moodboard::MoodboardId;
    use crate::domain::request::RequestId;
    use crate::domain::upload::SelectedFile;
    use crate::test_utils::FakeStyleService;

    fn app_with_service() -> (App, Arc<FakeStyleService>) {
        let service = Arc::new(FakeStyleService::new());
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            config: Config::default(),
            config_warning: None,
            service: service.clone(),
        });
        (app, service)
    }

    fn app() -> App {
        app_with_service().0
    }

    fn analyze(app: &mut App) {
        let _ = app.update(Message::Analysis(analysis::Message::Analyze));
    }

    #[test]
    fn new_starts_idle() {
        let app = app();
        assert_eq!(app.analysis().status(), analysis::Status::Idle);
        assert_eq!(app.outfits().status(), outfits::Status::Empty);
    }

    #[test]
    fn title_shows_app_name_without_selection() {
        assert_eq!(app().title(), "StyleSpark");
    }

    #[test]
    fn title_shows_selected_file_name() {
        let mut app = app();
        app.analysis.select_file(Some(SelectedFile::new("shirt.png", vec![0])));
        assert_eq!(app.title(), "shirt.png - StyleSpark");
    }

    #[test]
    fn sections_do_not_share_state() {
        let mut app = app();
        let _ = app.update(Message::Moodboards(moodboards::Message::Explore(
            MoodboardId::new(2),
        )));
        let _ = app.update(Message::Outfits(outfits::Message::ToggleTop("t1".into())));

        assert!(app.moodboards().is_expanded(MoodboardId::new(2)));
        assert_eq!(app.outfits().status(), outfits::Status::PartialSelection);
        assert_eq!(app.analysis().status(), analysis::Status::Idle);
    }

    #[test]
    fn analyze_without_file_calls_no_service() {
        let (mut app, service) = app_with_service();
        analyze(&mut app);

        assert_eq!(service.analyze_calls(), 0);
        assert_eq!(app.analysis().status(), analysis::Status::Failed);
    }

    #[test]
    fn repeated_analyze_issues_one_call() {
        let (mut app, service) = app_with_service();
        app.analysis.select_file(Some(SelectedFile::new("shirt.png", vec![0])));

        analyze(&mut app);
        analyze(&mut app);

        assert_eq!(service.analyze_calls(), 1);
    }

    #[test]
    fn reselecting_while_analyzing_issues_one_call() {
        // The fake's futures are never polled here, so the first call never
        // completes.
        let (mut app, service) = app_with_service();
        app.analysis.select_file(Some(SelectedFile::new("shirt.png", vec![0])));
        analyze(&mut app);

        app.analysis.select_file(Some(SelectedFile::new("dress.png", vec![1])));
        analyze(&mut app);
        let _ = app.update(Message::Analysis(analysis::Message::ClearSelection));
        analyze(&mut app);

        assert_eq!(service.analyze_calls(), 1);
        assert!(app.analysis().is_analyzing());
    }

    #[test]
    fn generate_with_empty_selection_calls_no_service() {
        let (mut app, service) = app_with_service();
        let _ = app.update(Message::Outfits(outfits::Message::Generate));

        assert_eq!(service.generate_calls(), 0);
        assert_eq!(app.outfits().status(), outfits::Status::Failed);
    }

    #[test]
    fn generate_with_complete_selection_calls_service_once() {
        let (mut app, service) = app_with_service();
        let _ = app.update(Message::Outfits(outfits::Message::ToggleTop("t1".into())));
        let _ = app.update(Message::Outfits(outfits::Message::ToggleBottom("b1".into())));

        let _ = app.update(Message::Outfits(outfits::Message::Generate));
        let _ = app.update(Message::Outfits(outfits::Message::Generate));

        assert_eq!(service.generate_calls(), 1);
        assert_eq!(app.outfits().status(), outfits::Status::Generating);
    }

    #[test]
    fn successful_report_fetches_one_thumbnail_per_recommendation() {
        let (mut app, service) = app_with_service();
        app.analysis.select_file(Some(SelectedFile::new("shirt.png", vec![0])));
        analyze(&mut app);

        // First request issued by a fresh workflow.
        let request = RequestId::default().next();
        let report = AnalysisReport {
            recommendations: ["42", "7", "13"]
                .iter()
                .map(|id| RecommendationItem {
                    id: (*id).to_string(),
                    ..RecommendationItem::default()
                })
                .collect(),
            ..AnalysisReport::default()
        };
        let _ = app.update(Message::Analysis(analysis::Message::AnalysisCompleted {
            request,
            result: Ok(report),
        }));

        assert_eq!(app.analysis().status(), analysis::Status::Analyzed);
        assert_eq!(service.image_calls(), 3);
    }

    #[test]
    fn config_warning_is_shown_until_dismissed() {
        let (mut app, _task) = App::new(Flags {
            lang: None,
            config: Config::default(),
            config_warning: Some("notification-config-load-error".to_string()),
            service: Arc::new(FakeStyleService::new()),
        });
        assert!(app.warning.is_some());
        let _ = app.update(Message::DismissWarning);
        assert!(app.warning.is_none());
    }

    #[test]
    fn view_renders() {
        let app = app();
        let _element = app.view();
    }
}
