use super::*;
use async_trait::async_trait;
use std::sync::Mutex;

/// How the fake backend answers.
enum Mode {
    /// Prefixes the input with `zh:`.
    Tag,
    /// Hands the input back unchanged, like a backend that exhausted retries.
    Fail,
    /// Returns an empty string.
    Blank,
}

struct FakeTranslator {
    mode: Mode,
    calls: Mutex<Vec<String>>,
}

impl FakeTranslator {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    fn name(&self) -> &str {
        "fake"
    }

    async fn translate(&self, text: &str) -> String {
        self.calls.lock().unwrap().push(text.to_string());
        match self.mode {
            Mode::Tag => format!("zh:{text}"),
            Mode::Fail => text.to_string(),
            Mode::Blank => String::new(),
        }
    }
}

fn mapping(pairs: &[(&str, &str)]) -> Mapping {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

async fn run(
    translator: &FakeTranslator,
    overrides: &Overrides,
    source: &Mapping,
    target: &Mapping,
    snapshot: &Mapping,
) -> SyncOutcome {
    SyncEngine::new(translator, overrides)
        .with_pace(Duration::ZERO)
        .run(source, target, snapshot)
        .await
}

#[tokio::test]
async fn test_reuses_unchanged_and_translates_new() {
    let fake = FakeTranslator::new(Mode::Tag);
    let source = mapping(&[("a", "Hello"), ("b", "World")]);
    let target = mapping(&[("a", "你好")]);
    let snapshot = mapping(&[("a", "Hello")]);

    let out = run(&fake, &Overrides::default(), &source, &target, &snapshot).await;

    assert_eq!(out.target, mapping(&[("a", "你好"), ("b", "zh:World")]));
    assert_eq!(out.snapshot, source);
    assert_eq!(
        out.stats,
        SyncStats {
            reused: 1,
            translated: 1,
            total: 2
        }
    );
    assert_eq!(fake.calls(), vec!["World".to_string()]);
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let fake = FakeTranslator::new(Mode::Tag);
    let overrides = Overrides::builtin();
    let source = mapping(&[
        ("common.save", "Save"),
        ("nav.home", "Home"),
        ("nav.settings", "Settings"),
    ]);

    let first = run(&fake, &overrides, &source, &Mapping::new(), &Mapping::new()).await;
    assert_eq!(first.stats.translated, 2);
    assert_eq!(first.stats.reused, 1);

    let second = run(&fake, &overrides, &source, &first.target, &first.snapshot).await;
    assert_eq!(second.target, first.target);
    assert_eq!(second.snapshot, first.snapshot);
    assert_eq!(second.stats.reused, 3);
    assert_eq!(second.stats.translated, 0);
    assert_eq!(fake.calls().len(), 2, "second run must not call the backend");
}

#[tokio::test]
async fn test_changed_source_is_retranslated() {
    let fake = FakeTranslator::new(Mode::Tag);
    let source = mapping(&[("nav.home", "Home page")]);
    let target = mapping(&[("nav.home", "首页")]);
    let snapshot = mapping(&[("nav.home", "Home")]);

    let out = run(&fake, &Overrides::default(), &source, &target, &snapshot).await;

    assert_eq!(out.target["nav.home"], "zh:Home page");
    assert_eq!(out.snapshot["nav.home"], "Home page");
    assert_eq!(fake.calls(), vec!["Home page".to_string()]);
}

#[tokio::test]
async fn test_missing_snapshot_forces_translation() {
    let fake = FakeTranslator::new(Mode::Tag);
    let source = mapping(&[("a", "Hello")]);
    let target = mapping(&[("a", "你好")]);

    let out = run(&fake, &Overrides::default(), &source, &target, &Mapping::new()).await;

    assert_eq!(out.target["a"], "zh:Hello");
    assert_eq!(out.stats.translated, 1);
}

#[tokio::test]
async fn test_blank_previous_translation_is_retranslated() {
    let fake = FakeTranslator::new(Mode::Tag);
    let source = mapping(&[("a", "Hello"), ("b", "Bye")]);
    let target = mapping(&[("a", ""), ("b", "  ")]);
    let snapshot = source.clone();

    let out = run(&fake, &Overrides::default(), &source, &target, &snapshot).await;

    assert_eq!(out.target, mapping(&[("a", "zh:Hello"), ("b", "zh:Bye")]));
    assert_eq!(out.stats.translated, 2);
    assert_eq!(out.stats.reused, 0);
}

#[tokio::test]
async fn test_override_beats_valid_reuse() {
    let fake = FakeTranslator::new(Mode::Tag);
    let overrides = Overrides::builtin();
    let source = mapping(&[("common.status", "Status")]);
    let target = mapping(&[("common.status", "状况")]);
    let snapshot = mapping(&[("common.status", "Status")]);

    let out = run(&fake, &overrides, &source, &target, &snapshot).await;

    assert_eq!(out.target["common.status"], "状态");
    assert_eq!(out.snapshot["common.status"], "Status");
    assert_eq!(out.stats.reused, 1);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_override_applies_on_first_run() {
    let fake = FakeTranslator::new(Mode::Tag);
    let extra = mapping(&[("custom.key", "自定义")]);
    let overrides = Overrides::with_builtin(&extra);
    let source = mapping(&[("custom.key", "Custom")]);

    let out = run(&fake, &overrides, &source, &Mapping::new(), &Mapping::new()).await;

    assert_eq!(out.target["custom.key"], "自定义");
    assert_eq!(out.stats.reused, 1);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_outputs_cover_exactly_source_keys() {
    let fake = FakeTranslator::new(Mode::Tag);
    let source = mapping(&[("keep", "Keep"), ("new", "New")]);
    let target = mapping(&[("keep", "保留"), ("gone", "消失")]);
    let snapshot = mapping(&[("keep", "Keep"), ("gone", "Gone")]);

    let out = run(&fake, &Overrides::default(), &source, &target, &snapshot).await;

    let source_keys: Vec<_> = source.keys().collect();
    assert_eq!(out.target.keys().collect::<Vec<_>>(), source_keys);
    assert_eq!(out.snapshot.keys().collect::<Vec<_>>(), source_keys);
    assert!(!out.target.contains_key("gone"));
}

#[tokio::test]
async fn test_failing_backend_degrades_to_source() {
    let fake = FakeTranslator::new(Mode::Fail);
    let source = mapping(&[("a", "Hello"), ("b", "World")]);
    let target = mapping(&[("a", "你好")]);
    let snapshot = mapping(&[("a", "Hello")]);

    let out = run(&fake, &Overrides::default(), &source, &target, &snapshot).await;

    assert_eq!(out.target, mapping(&[("a", "你好"), ("b", "World")]));
    assert_eq!(out.snapshot, source);
    assert_eq!(out.stats.translated, 1);
}

#[tokio::test]
async fn test_empty_translation_falls_back_to_source() {
    let fake = FakeTranslator::new(Mode::Blank);
    let source = mapping(&[("a", "Hello")]);

    let out = run(&fake, &Overrides::default(), &source, &Mapping::new(), &Mapping::new()).await;

    assert_eq!(out.target["a"], "Hello");
}

#[tokio::test]
async fn test_empty_source() {
    let fake = FakeTranslator::new(Mode::Tag);
    let target = mapping(&[("a", "你好")]);
    let snapshot = mapping(&[("a", "Hello")]);

    let out = run(&fake, &Overrides::builtin(), &Mapping::new(), &target, &snapshot).await;

    assert!(out.target.is_empty());
    assert!(out.snapshot.is_empty());
    assert_eq!(out.stats, SyncStats::default());
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_translation_calls_follow_key_order() {
    let fake = FakeTranslator::new(Mode::Tag);
    let source = mapping(&[("c", "Three"), ("a", "One"), ("b", "Two")]);

    run(&fake, &Overrides::default(), &source, &Mapping::new(), &Mapping::new()).await;

    assert_eq!(fake.calls(), vec!["One", "Two", "Three"]);
}

#[test]
fn test_stats_display() {
    let stats = SyncStats {
        reused: 1,
        translated: 1,
        total: 2,
    };
    assert_eq!(stats.to_string(), "1 reused, 1 translated, 2 total.");
}
