// SPDX-License-Identifier: MPL-2.0
//! End-to-end workflow tests.
//!
//! The components are driven through their public `update` functions, the
//! service calls their effects describe are awaited on a fake service, and
//! the completions are fed back the way the application shell does.

use futures_util::future::{BoxFuture, FutureExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use style_spark::application::port::{ServiceError, ServiceResult, StyleService};
use style_spark::config::{Config, OutfitsConfig};
use style_spark::domain::analysis::{
    AnalysisReport, AnalysisResult, RecommendationItem, Similarity,
};
use style_spark::domain::moodboard::MoodboardId;
use style_spark::domain::outfit::{GarmentId, OutfitPair};
use style_spark::domain::upload::SelectedFile;
use style_spark::i18n::fluent::I18n;
use style_spark::media::PreviewRegistry;
use style_spark::ui::{analysis, moodboards, outfits};

/// Service answering from fixed results and counting its calls.
struct ScriptedService {
    analysis: ServiceResult<AnalysisReport>,
    outfits: ServiceResult<Vec<OutfitPair>>,
    analyze_calls: AtomicUsize,
    generate_calls: AtomicUsize,
}

impl ScriptedService {
    fn new(
        analysis: ServiceResult<AnalysisReport>,
        outfits: ServiceResult<Vec<OutfitPair>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            analysis,
            outfits,
            analyze_calls: AtomicUsize::new(0),
            generate_calls: AtomicUsize::new(0),
        })
    }

    fn analyze_calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }

    fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }
}

impl StyleService for ScriptedService {
    fn analyze(&self, _file: SelectedFile) -> BoxFuture<'static, ServiceResult<AnalysisReport>> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        let result = self.analysis.clone();
        async move { result }.boxed()
    }

    fn generate_outfits(
        &self,
        _tops: Vec<GarmentId>,
        _bottoms: Vec<GarmentId>,
    ) -> BoxFuture<'static, ServiceResult<Vec<OutfitPair>>> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        let result = self.outfits.clone();
        async move { result }.boxed()
    }

    fn fetch_catalog_image(&self, _id: String) -> BoxFuture<'static, ServiceResult<Vec<u8>>> {
        async { Err(ServiceError::Status(404)) }.boxed()
    }

    fn catalog_image_url(&self, id: &str) -> String {
        format!("http://scripted.local/static/catalog_images/{id}.jpg")
    }
}

fn shirt_report() -> AnalysisReport {
    AnalysisReport {
        analysis: AnalysisResult {
            caption: "blue shirt".to_string(),
            season: "Summer".to_string(),
            aesthetic_category: "Casual".to_string(),
            aesthetic_vibe: "Relaxed".to_string(),
            display_name: "Linen Shirt".to_string(),
            colors: vec!["#1e3a8a".to_string()],
        },
        recommendations: vec![RecommendationItem {
            id: "42".to_string(),
            product_display_name: "Oxford Shirt".to_string(),
            base_colour: "Blue".to_string(),
            season: "Summer".to_string(),
            aesthetic_category: "Casual".to_string(),
            similarity: Similarity::new(0.87),
        }],
    }
}

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

fn shirt() -> SelectedFile {
    SelectedFile::new("shirt.png", vec![0x89, b'P', b'N', b'G'])
}

/// Runs an analysis effect against `service` and feeds the completion back.
async fn drive_analysis(
    state: &mut analysis::State,
    service: &dyn StyleService,
    effect: analysis::Effect,
) -> analysis::Effect {
    match effect {
        analysis::Effect::Analyze { request, file } => {
            let result = service.analyze(file).await;
            analysis::update(
                state,
                analysis::Message::AnalysisCompleted { request, result },
            )
        }
        other => other,
    }
}

#[tokio::test]
async fn analysis_shows_caption_and_recommendation() {
    let service = ScriptedService::new(Ok(shirt_report()), Ok(Vec::new()));
    let mut state = analysis::State::new();

    state.select_file(Some(shirt()));
    let effect = analysis::update(&mut state, analysis::Message::Analyze);
    assert_eq!(state.status(), analysis::Status::Analyzing);

    let follow_up = drive_analysis(&mut state, service.as_ref(), effect).await;

    assert_eq!(state.status(), analysis::Status::Analyzed);
    let report = state.report().expect("report after success");
    assert_eq!(report.analysis.caption, "blue shirt");
    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[0].similarity.to_string(), "87.0%");
    assert!(matches!(
        follow_up,
        analysis::Effect::FetchThumbnails { ref ids, .. } if ids == &["42".to_string()]
    ));
    assert_eq!(service.analyze_calls(), 1);
}

#[tokio::test]
async fn analysis_without_file_is_rejected_locally() {
    let service = ScriptedService::new(Ok(shirt_report()), Ok(Vec::new()));
    let mut state = analysis::State::new();
    let i18n = english();

    let effect = analysis::update(&mut state, analysis::Message::Analyze);
    let _ = drive_analysis(&mut state, service.as_ref(), effect).await;

    let error = state.error().expect("validation error");
    assert_eq!(i18n.tr(error.i18n_key()), "Please select an image first.");
    assert_eq!(service.analyze_calls(), 0);
}

#[tokio::test]
async fn analysis_failure_keeps_selection() {
    let service = ScriptedService::new(
        Err(ServiceError::Transport("connection refused".to_string())),
        Ok(Vec::new()),
    );
    let mut state = analysis::State::new();
    let i18n = english();

    state.select_file(Some(shirt()));
    let effect = state.analyze();
    let _ = drive_analysis(&mut state, service.as_ref(), effect).await;

    assert_eq!(state.status(), analysis::Status::Failed);
    let error = state.error().expect("remote error");
    assert_eq!(
        i18n.tr(error.i18n_key()),
        "Error analyzing image. Please try again."
    );
    assert_eq!(state.selection().map(SelectedFile::name), Some("shirt.png"));
    assert!(state.report().is_none());
}

#[tokio::test]
async fn at_most_one_analysis_in_flight() {
    let service = ScriptedService::new(Ok(shirt_report()), Ok(Vec::new()));
    let mut state = analysis::State::new();
    state.select_file(Some(shirt()));

    let first = state.analyze();
    let second = state.analyze();
    assert_eq!(second, analysis::Effect::None);

    let _ = drive_analysis(&mut state, service.as_ref(), first).await;
    assert_eq!(service.analyze_calls(), 1);
    assert_eq!(state.status(), analysis::Status::Analyzed);
}

#[tokio::test]
async fn completion_after_reselection_is_ignored() {
    let service = ScriptedService::new(Ok(shirt_report()), Ok(Vec::new()));
    let mut state = analysis::State::new();
    state.select_file(Some(shirt()));
    let effect = state.analyze();

    state.select_file(Some(SelectedFile::new("dress.png", vec![1, 2, 3])));
    let _ = drive_analysis(&mut state, service.as_ref(), effect).await;

    assert!(state.report().is_none());
    assert_eq!(state.status(), analysis::Status::FileChosen);
}

#[test]
fn reselecting_releases_the_previous_preview() {
    let registry = PreviewRegistry::new();
    let mut state = analysis::State::with_registry(registry.clone());

    state.select_file(Some(shirt()));
    state.select_file(Some(SelectedFile::new("dress.png", vec![1])));
    assert_eq!(registry.live_count(), 1);

    state.select_file(None);
    assert_eq!(registry.live_count(), 0);
}

#[tokio::test]
async fn generate_renders_one_outfit() {
    let service = ScriptedService::new(
        Ok(AnalysisReport::default()),
        Ok(vec![OutfitPair {
            top: "t1".into(),
            bottom: "b1".into(),
        }]),
    );
    let mut state = outfits::State::new(&OutfitsConfig::default());

    outfits::update(&mut state, outfits::Message::ToggleTop("t1".into()));
    outfits::update(&mut state, outfits::Message::ToggleBottom("b1".into()));
    let effect = outfits::update(&mut state, outfits::Message::Generate);

    let outfits::Effect::Generate {
        request,
        tops,
        bottoms,
    } = effect
    else {
        panic!("expected a generation request");
    };
    assert_eq!(tops, vec![GarmentId::new("t1")]);
    assert_eq!(bottoms, vec![GarmentId::new("b1")]);

    let result = service.generate_outfits(tops, bottoms).await;
    outfits::update(
        &mut state,
        outfits::Message::GenerationCompleted { request, result },
    );

    assert_eq!(state.status(), outfits::Status::Generated);
    assert_eq!(
        state.outfits(),
        &[OutfitPair {
            top: "t1".into(),
            bottom: "b1".into(),
        }]
    );
    assert_eq!(service.generate_calls(), 1);
}

#[test]
fn generate_with_empty_selection_issues_nothing() {
    let mut state = outfits::State::new(&OutfitsConfig::default());
    let i18n = english();

    let effect = outfits::update(&mut state, outfits::Message::Generate);

    assert_eq!(effect, outfits::Effect::None);
    let error = state.error().expect("validation error");
    assert_eq!(
        i18n.tr(error.i18n_key()),
        "Please select at least one top and one bottom."
    );
}

#[test]
fn toggling_twice_restores_selection() {
    let mut state = outfits::State::new(&OutfitsConfig::default());
    outfits::update(&mut state, outfits::Message::ToggleBottom("b2".into()));
    let before = state.selection().clone();

    outfits::update(&mut state, outfits::Message::ToggleTop("t1".into()));
    outfits::update(&mut state, outfits::Message::ToggleTop("t1".into()));

    assert_eq!(state.selection(), &before);
}

#[test]
fn explore_toggles_gallery() {
    let mut state = moodboards::State::new();
    let id = MoodboardId::new(2);

    moodboards::update(&mut state, moodboards::Message::Explore(id));
    assert!(state.is_expanded(id));

    moodboards::update(&mut state, moodboards::Message::Explore(id));
    assert!(!state.is_expanded(id));
}
