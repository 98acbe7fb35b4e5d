//! Tokio task that runs a [`SearchSession`] against a [`SearchSource`].

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use super::{
    KeyOutcome, NavigationKey, SearchCommand, SearchSession, SearchSource, SearchView, Selection,
};
use crate::client::ClientError;
use crate::dto::SearchResult;

const EVENT_BUFFER: usize = 32;

/// User interaction forwarded to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The input text changed.
    Input(String),
    /// A navigation key was pressed in the input.
    Key(NavigationKey),
    /// Pointer selection of the result at this index.
    Select(usize),
    /// The input gained focus.
    Focus,
    /// A pointer press landed outside the search bar.
    ClickOutside,
}

/// The driver task has exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search driver stopped")]
pub struct DriverStopped;

type Completion = (u64, Result<Vec<SearchResult>, ClientError>);

/// Caller side of a running search driver.
pub struct SearchHandle {
    events: mpsc::Sender<SearchEvent>,
    views: watch::Receiver<SearchView>,
    selections: mpsc::UnboundedReceiver<Selection>,
    task: JoinHandle<()>,
}

impl SearchHandle {
    /// Forward an interaction.
    ///
    /// # Errors
    /// Returns [`DriverStopped`] when the driver task is gone.
    pub async fn send(&self, event: SearchEvent) -> Result<(), DriverStopped> {
        self.events.send(event).await.map_err(|_| DriverStopped)
    }

    /// Latest published view.
    #[must_use]
    pub fn view(&self) -> SearchView {
        self.views.borrow().clone()
    }

    /// Receiver notified on every view change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchView> {
        self.views.clone()
    }

    /// Next selected result, waiting until one is made.
    pub async fn next_selection(&mut self) -> Option<Selection> {
        self.selections.recv().await
    }

    /// Stop the driver and wait for it to exit.
    pub async fn shutdown(self) {
        let Self { events, task, .. } = self;
        drop(events);
        if let Err(err) = task.await {
            debug!(error = %err, "search driver ended abnormally");
        }
    }
}

/// Start a driver on the current runtime.
pub fn spawn_search(source: Arc<dyn SearchSource>) -> SearchHandle {
    let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
    let (views_tx, views_rx) = watch::channel(SearchView::default());
    let (selections_tx, selections_rx) = mpsc::unbounded_channel();
    let driver = Driver {
        session: SearchSession::new(),
        source,
        views: views_tx,
        selections: selections_tx,
        in_flight: None,
    };
    let task = tokio::spawn(driver.run(events_rx));
    SearchHandle {
        events: events_tx,
        views: views_rx,
        selections: selections_rx,
        task,
    }
}

struct Driver {
    session: SearchSession,
    source: Arc<dyn SearchSource>,
    views: watch::Sender<SearchView>,
    selections: mpsc::UnboundedSender<Selection>,
    in_flight: Option<JoinHandle<()>>,
}

impl Driver {
    async fn run(mut self, mut events: mpsc::Receiver<SearchEvent>) {
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
        loop {
            let deadline = self.session.deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
                () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(command) = self.session.debounce_elapsed(Instant::now()) {
                        self.fetch(command, done_tx.clone());
                    }
                }
                Some((generation, outcome)) = done_rx.recv() => {
                    if !self.session.results_arrived(generation, outcome, Instant::now()) {
                        debug!(generation, "discarded stale search results");
                    }
                }
            }
            self.views.send_replace(self.session.view());
        }
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }

    fn handle(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Input(text) => {
                self.session.input_changed(text, Instant::now());
            }
            SearchEvent::Key(key) => {
                if let KeyOutcome::Selected(selection) = self.session.key(key) {
                    self.publish(selection);
                }
            }
            SearchEvent::Select(index) => {
                if let Some(selection) = self.session.select(index) {
                    self.publish(selection);
                }
            }
            SearchEvent::Focus => self.session.focus(),
            SearchEvent::ClickOutside => self.session.click_outside(),
        }
    }

    fn publish(&self, selection: Selection) {
        if self.selections.send(selection).is_err() {
            debug!("selection dropped; no receiver");
        }
    }

    fn fetch(&mut self, command: SearchCommand, done: mpsc::UnboundedSender<Completion>) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        let source = Arc::clone(&self.source);
        debug!(query = %command.query, generation = command.generation, "searching");
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = source.search(&command.query).await;
            if done.send((command.generation, outcome)).is_err() {
                debug!("search driver stopped before results arrived");
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use rstest::rstest;
    use tokio::time::{sleep, timeout};

    use super::*;
    use crate::dto::EntityType;
    use crate::routes::AppRoute;
    use crate::search::SearchStatus;

    /// Answers from a fixed table after a per-query delay.
    #[derive(Default)]
    struct ScriptedSource {
        answers: HashMap<&'static str, (Duration, Vec<SearchResult>)>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn answer(mut self, query: &'static str, delay_ms: u64, names: &[&str]) -> Self {
            let rows = names
                .iter()
                .enumerate()
                .map(|(index, name)| SearchResult {
                    id: format!("1:campground:{query}-{index}"),
                    entity_type: EntityType::Campground,
                    provider_id: 1,
                    provider_name: "RecreationDotGov".to_owned(),
                    recreation_area_id: None,
                    recreation_area_name: None,
                    campground_id: Some(format!("{query}-{index}")),
                    campground_name: Some((*name).to_owned()),
                })
                .collect();
            self.answers
                .insert(query, (Duration::from_millis(delay_ms), rows));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    #[async_trait]
    impl SearchSource for ScriptedSource {
        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
            self.calls.lock().expect("calls lock").push(query.to_owned());
            let Some((delay, rows)) = self.answers.get(query).cloned() else {
                return Err(ClientError::Status {
                    status: 500,
                    code: None,
                    message: "unscripted".to_owned(),
                    trace_id: None,
                });
            };
            sleep(delay).await;
            Ok(rows)
        }
    }

    async fn wait_for(
        handle: &SearchHandle,
        predicate: impl FnMut(&SearchView) -> bool,
    ) -> SearchView {
        let mut views = handle.subscribe();
        let view = timeout(Duration::from_secs(30), views.wait_for(predicate))
            .await
            .expect("view within timeout")
            .expect("driver running");
        view.clone()
    }

    fn names(view: &SearchView) -> Vec<&str> {
        view.results.iter().map(SearchResult::display_name).collect()
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn typing_burst_issues_one_request() {
        let source = Arc::new(ScriptedSource::default().answer("pines", 50, &["UPPER PINES"]));
        let handle = spawn_search(source.clone());

        for text in ["p", "pi", "pin", "pine", "pines"] {
            handle
                .send(SearchEvent::Input(text.to_owned()))
                .await
                .expect("send");
            sleep(Duration::from_millis(100)).await;
        }
        assert!(source.calls().is_empty());

        let view = wait_for(&handle, |view| view.status == SearchStatus::Results).await;
        assert!(view.open);
        assert_eq!(names(&view), vec!["UPPER PINES"]);
        assert_eq!(source.calls(), vec!["pines"]);
        handle.shutdown().await;
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn superseded_search_never_lands() {
        let source = Arc::new(
            ScriptedSource::default()
                .answer("yosemite", 2_000, &["YOSEMITE CREEK"])
                .answer("pines", 10, &["LOWER PINES"]),
        );
        let handle = spawn_search(source.clone());

        handle
            .send(SearchEvent::Input("yosemite".to_owned()))
            .await
            .expect("send");
        sleep(Duration::from_millis(400)).await;
        handle
            .send(SearchEvent::Input("pines".to_owned()))
            .await
            .expect("send");

        let view = wait_for(&handle, |view| view.status == SearchStatus::Results).await;
        assert_eq!(names(&view), vec!["LOWER PINES"]);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(names(&handle.view()), vec!["LOWER PINES"]);
        assert_eq!(source.calls(), vec!["yosemite", "pines"]);
        handle.shutdown().await;
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn repeated_query_is_served_from_cache() {
        let source = Arc::new(
            ScriptedSource::default()
                .answer("pines", 10, &["LOWER PINES"])
                .answer("upper", 10, &["UPPER PINES"]),
        );
        let handle = spawn_search(source.clone());

        for query in ["pines", "upper", "pines"] {
            handle
                .send(SearchEvent::Input(query.to_owned()))
                .await
                .expect("send");
            sleep(Duration::from_secs(1)).await;
        }

        assert_eq!(names(&handle.view()), vec!["LOWER PINES"]);
        assert_eq!(source.calls(), vec!["pines", "upper"]);
        handle.shutdown().await;
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn keyboard_selection_yields_route() {
        let source = Arc::new(ScriptedSource::default().answer(
            "pines",
            10,
            &["LOWER PINES", "UPPER PINES"],
        ));
        let mut handle = spawn_search(source);

        handle

            .send(SearchEvent::Input("pines".to_owned()))

            .await

            .expect("send");
        wait_for(&handle, |view| view.status == SearchStatus::Results).await;
        handle
            .send(SearchEvent::Key(NavigationKey::ArrowUp))
            .await
            .expect("send");
        handle
            .send(SearchEvent::Key(NavigationKey::Enter))
            .await
            .expect("send");

        let selection = handle.next_selection().await.expect("selection");
        assert_eq!(
            selection.route,
            Some(AppRoute::Campground {
                provider_id: 1,
                id: "pines-1".to_owned()
            })
        );
        let view = wait_for(&handle, |view| !view.open).await;
        assert_eq!(view.input, "Upper Pines");
        handle.shutdown().await;
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn failed_search_reports_error() {
        let handle = spawn_search(Arc::new(ScriptedSource::default()));
        handle
            .send(SearchEvent::Input("nowhere".to_owned()))
            .await
            .expect("send");
        let view = wait_for(&handle, |view| view.status == SearchStatus::Failed).await;
        assert!(view.results.is_empty());
        handle.shutdown().await;
    }
}
