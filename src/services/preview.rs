use std::{sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use tokio::{
    sync::{
        mpsc::{UnboundedReceiver, UnboundedSender},
        watch,
    },
    time::{sleep_until, Instant},
};

use crate::domain::brand::EnrichmentResult;

use super::BrandFetcher;

/// Queries shorter than this reset the preview instead of fetching.
pub const MIN_QUERY_CHARS: usize = 2;

// Cosmetic sequence timings, measured from the moment enrichment loads.
const CURSOR_APPEAR_DELAY: Duration = Duration::from_millis(2000);
const CURSOR_SETTLE_DELAY: Duration = Duration::from_millis(100);
const CURSOR_TRAVEL_TIME: Duration = Duration::from_millis(1200);
const CLICK_FEEDBACK_TIME: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    Search,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Hidden,
    Waiting,
    Moving,
    Clicked,
}

/// Opaque screen coordinates; the presentation layer decides what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewState {
    pub company_name: String,
    pub enrichment: EnrichmentResult,
    pub scene: Scene,
    pub cursor: Cursor,
    pub cursor_target: Option<Point>,
}

impl Default for PreviewState {
    fn default() -> Self {
        PreviewState {
            company_name: String::new(),
            enrichment: EnrichmentResult::default(),
            scene: Scene::Search,
            cursor: Cursor::Hidden,
            cursor_target: None,
        }
    }
}

pub enum PreviewEvent {
    QueryChanged(String),
    TargetMoved(Point),
    Fetched {
        generation: u64,
        result: EnrichmentResult,
    },
}

pub struct PreviewEventSender {
    pub sender: UnboundedSender<PreviewEvent>,
}

pub struct PreviewStateReceiver {
    pub receiver: watch::Receiver<PreviewState>,
}

// At most one of these is armed at any time; a query change disarms it.
enum Timer {
    Fetch { query: String, generation: u64 },
    CursorAppear,
    CursorMove,
    CursorArrive,
    SceneSwitch,
}

/// Owns the live preview state: debounces enrichment fetches and plays the
/// cursor/scene sequence once a result lands. Readers observe the state
/// through the watch channel, so they never see a half-updated pair.
pub async fn preview_engine_handler(
    fetcher: Arc<dyn BrandFetcher>,
    mut event_receiver: UnboundedReceiver<PreviewEvent>,
    event_sender: UnboundedSender<PreviewEvent>,
    state_sender: watch::Sender<PreviewState>,
    debounce: Duration,
) {
    log::info!("Started preview engine");

    let mut state = PreviewState::default();
    let mut generation: u64 = 0;
    let mut timer: Option<(Instant, Timer)> = None;

    loop {
        let deadline = timer.as_ref().map(|(at, _)| *at);

        tokio::select! {
            maybe_event = event_receiver.recv() => {
                let Some(event) = maybe_event else { break };

                match event {
                    PreviewEvent::QueryChanged(query) => {
                        // Supersedes any armed timer and any fetch in flight.
                        generation += 1;
                        timer = None;
                        state.company_name = query.clone();
                        state.scene = Scene::Search;
                        state.cursor = Cursor::Hidden;

                        let trimmed = query.trim();
                        if trimmed.chars().count() < MIN_QUERY_CHARS {
                            state.enrichment.is_loading = false;
                            state.enrichment.is_loaded = false;
                        } else {
                            state.enrichment.is_loading = true;
                            state.enrichment.is_loaded = false;
                            timer = Some((
                                Instant::now() + debounce,
                                Timer::Fetch {
                                    query: trimmed.to_string(),
                                    generation,
                                },
                            ));
                        }

                        state_sender.send_replace(state.clone());
                    }
                    PreviewEvent::TargetMoved(point) => {
                        state.cursor_target = Some(point);
                        state_sender.send_replace(state.clone());
                    }
                    PreviewEvent::Fetched { generation: fetched, result } => {
                        if fetched != generation {
                            log::info!("Dropping enrichment for superseded generation {}", fetched);
                        } else {
                            state.enrichment = EnrichmentResult {
                                is_loading: false,
                                is_loaded: true,
                                ..result
                            };
                            if state.scene == Scene::Search {
                                timer = Some((
                                    Instant::now() + CURSOR_APPEAR_DELAY,
                                    Timer::CursorAppear,
                                ));
                            }
                            state_sender.send_replace(state.clone());
                        }
                    }
                }
            }

            _ = async { sleep_until(deadline.unwrap()).await }, if deadline.is_some() => {
                let Some((_, fired)) = timer.take() else { continue };

                match fired {
                    Timer::Fetch { query, generation: fetch_generation } => {
                        let fetcher = fetcher.clone();
                        let sender = event_sender.clone();
                        tokio::spawn(async move {
                            let result = fetcher.fetch_brand(&query).await;
                            // The engine may already be gone during shutdown.
                            let _ = sender.send(PreviewEvent::Fetched {
                                generation: fetch_generation,
                                result,
                            });
                        });
                    }
                    Timer::CursorAppear => {
                        state.cursor = Cursor::Waiting;
                        timer = Some((Instant::now() + CURSOR_SETTLE_DELAY, Timer::CursorMove));
                        state_sender.send_replace(state.clone());
                    }
                    Timer::CursorMove => {
                        state.cursor = Cursor::Moving;
                        timer = Some((Instant::now() + CURSOR_TRAVEL_TIME, Timer::CursorArrive));
                        state_sender.send_replace(state.clone());
                    }
                    Timer::CursorArrive => {
                        state.cursor = Cursor::Clicked;
                        timer = Some((Instant::now() + CLICK_FEEDBACK_TIME, Timer::SceneSwitch));
                        state_sender.send_replace(state.clone());
                    }
                    Timer::SceneSwitch => {
                        state.scene = Scene::Chat;
                        state.cursor = Cursor::Hidden;
                        state_sender.send_replace(state.clone());
                    }
                }
            }
        }
    }

    log::info!("Preview engine stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use tokio::sync::{mpsc, watch};

    use super::*;
    use crate::domain::{
        brand::{DescriptionSource, EnrichmentResult},
        content::{offer_for, sitelinks_for},
        industry::{classify, Industry},
    };

    struct StubFetcher {
        calls: Mutex<Vec<String>>,
        delay: Duration,
    }

    #[async_trait]
    impl BrandFetcher for StubFetcher {
        async fn fetch_brand(&self, name: &str) -> EnrichmentResult {
            self.calls.lock().unwrap().push(name.to_string());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let industry = classify(name, "");
            EnrichmentResult {
                logo_url: Some(format!("https://icons.test/{}", name)),
                description: Some(format!("{} is a test fixture.", name)),
                description_source: DescriptionSource::Fetched,
                industry,
                sitelinks: sitelinks_for(industry),
                offer: offer_for(industry, name),
                is_loading: false,
                is_loaded: false,
            }
        }
    }

    fn spawn_engine(
        fetch_delay: Duration,
    ) -> (
        Arc<StubFetcher>,
        mpsc::UnboundedSender<PreviewEvent>,
        watch::Receiver<PreviewState>,
    ) {
        let fetcher = Arc::new(StubFetcher {
            calls: Mutex::new(vec![]),
            delay: fetch_delay,
        });
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        let (state_sender, state_receiver) = watch::channel(PreviewState::default());

        tokio::spawn(preview_engine_handler(
            fetcher.clone(),
            event_receiver,
            event_sender.clone(),
            state_sender,
            Duration::from_millis(600),
        ));

        (fetcher, event_sender, state_receiver)
    }

    fn query(events: &mpsc::UnboundedSender<PreviewEvent>, name: &str) {
        events
            .send(PreviewEvent::QueryChanged(name.to_string()))
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_edits_fetch_once_with_the_final_query() {
        let (fetcher, events, state) = spawn_engine(Duration::ZERO);

        query(&events, "A");
        query(&events, "Ac");
        query(&events, "Acme");
        tokio::time::sleep(Duration::from_millis(700)).await;

        assert_eq!(*fetcher.calls.lock().unwrap(), vec!["Acme".to_string()]);
        let current = state.borrow().clone();
        assert!(current.enrichment.is_loaded);
        assert!(!current.enrichment.is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn short_queries_reset_without_fetching() {
        let (fetcher, events, state) = spawn_engine(Duration::ZERO);

        query(&events, "Acme");
        tokio::time::sleep(Duration::from_millis(100)).await; // inside the quiet window
        query(&events, "A");
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(fetcher.calls.lock().unwrap().is_empty());
        let current = state.borrow().clone();
        assert!(!current.enrichment.is_loading);
        assert!(!current.enrichment.is_loaded);
        assert_eq!(current.scene, Scene::Search);
        assert_eq!(current.cursor, Cursor::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_mid_fetch_discards_the_stale_result() {
        let (fetcher, events, state) = spawn_engine(Duration::from_millis(500));

        query(&events, "Acme");
        tokio::time::sleep(Duration::from_millis(700)).await; // fetch is now in flight
        assert_eq!(fetcher.calls.lock().unwrap().len(), 1);

        query(&events, "");
        tokio::time::sleep(Duration::from_secs(5)).await;

        let current = state.borrow().clone();
        assert!(!current.enrichment.is_loading);
        assert!(!current.enrichment.is_loaded);
        assert_eq!(current.scene, Scene::Search);
        assert_eq!(current.cursor, Cursor::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn loaded_result_walks_the_cursor_into_the_chat_scene() {
        let (_fetcher, events, state) = spawn_engine(Duration::ZERO);

        query(&events, "Royal Bank");

        // Debounce fires at 600ms; the result loads immediately after.
        tokio::time::sleep(Duration::from_millis(700)).await;
        {
            let current = state.borrow().clone();
            assert!(current.enrichment.is_loaded);
            assert_eq!(current.enrichment.industry, Industry::Finance);
            assert_eq!(
                current.enrichment.offer,
                "Special Low Interest Personal Loan for you!"
            );
            assert_eq!(current.scene, Scene::Search);
            assert_eq!(current.cursor, Cursor::Hidden);
        }

        // t=2650: inside the waiting window (2600..2700).
        tokio::time::sleep(Duration::from_millis(1950)).await;
        assert_eq!(state.borrow().cursor, Cursor::Waiting);

        // t=2750: cursor is travelling (2700..3900).
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(state.borrow().cursor, Cursor::Moving);

        // t=3950: click feedback (3900..4200).
        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(state.borrow().cursor, Cursor::Clicked);

        // t=4250: the scene has switched and the cursor is gone.
        tokio::time::sleep(Duration::from_millis(300)).await;
        let current = state.borrow().clone();
        assert_eq!(current.scene, Scene::Chat);
        assert_eq!(current.cursor, Cursor::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn typing_during_the_sequence_resets_to_search() {
        let (_fetcher, events, state) = spawn_engine(Duration::ZERO);

        query(&events, "Grand Hotel");
        tokio::time::sleep(Duration::from_millis(2650)).await;
        assert_eq!(state.borrow().cursor, Cursor::Waiting);

        query(&events, "Grand Hotels");
        tokio::time::sleep(Duration::from_millis(100)).await;

        let current = state.borrow().clone();
        assert_eq!(current.cursor, Cursor::Hidden);
        assert_eq!(current.scene, Scene::Search);
        assert!(current.enrichment.is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn target_coordinates_pass_through_untouched() {
        let (_fetcher, events, state) = spawn_engine(Duration::ZERO);

        events
            .send(PreviewEvent::TargetMoved(Point { x: 150.0, y: 350.0 }))
            .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(
            state.borrow().cursor_target,
            Some(Point { x: 150.0, y: 350.0 })
        );
    }
}
