use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use anyhow::Result;
use egui::{RichText, ScrollArea, Ui};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::error::FetchFailure;
use crate::hn_client::SearchApi;
use crate::models::SearchResultPage;
use crate::state::{self, AppState, FetchRequest, Footer};
use crate::ui::{self, AppTheme, ButtonProps, Msg, SearchProps, TableProps};

/// A finished fetch on its way back to the UI thread.
struct Completion {
    generation: u64,
    request: FetchRequest,
    result: Result<SearchResultPage, FetchFailure>,
}

/// Gates completions: results from a torn-down session are dropped, not applied.
#[derive(Debug, Clone, Copy, Default)]
struct Session {
    generation: u64,
    mounted: bool,
}

impl Session {
    fn accepts(&self, generation: u64) -> bool {
        self.mounted && self.generation == generation
    }
}

pub struct SearchApp {
    state: AppState,
    theme: AppTheme,
    api: Arc<dyn SearchApi>,
    runtime: Runtime,
    completions_tx: Sender<Completion>,
    completions_rx: Receiver<Completion>,
    session: Session,
    repaint: Option<egui::Context>,
}

impl SearchApp {
    pub fn new(config: &SearchConfig, api: Arc<dyn SearchApi>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("hn-search-fetch")
            .enable_all()
            .build()?;
        let (completions_tx, completions_rx) = mpsc::channel();

        Ok(Self {
            state: AppState::new(config.default_query.clone()),
            theme: AppTheme::for_mode(config.dark_mode),
            api,
            runtime,
            completions_tx,
            completions_rx,
            session: Session::default(),
            repaint: None,
        })
    }

    /// Lets background fetches wake the UI when they finish.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.session.mounted
    }

    /// Mounts the session and loads the first page of the default query.
    /// Calling it again while mounted does nothing.
    pub fn initialize(&mut self) {
        if self.session.mounted {
            return;
        }
        self.session.mounted = true;
        let (next, request) = state::initialize(std::mem::take(&mut self.state));
        self.state = next;
        self.issue(request);
    }

    /// Tears down the session. Fetches still in flight finish on their own,
    /// but their results are discarded.
    pub fn unmount(&mut self) {
        self.session.mounted = false;
        self.session.generation += 1;
    }

    pub fn dispatch(&mut self, msg: Msg) {
        match msg {
            Msg::QueryTextChanged(text) => {
                self.state = state::on_query_text_changed(std::mem::take(&mut self.state), text);
            }
            Msg::QuerySubmitted => {
                let (next, request) = state::on_query_submitted(std::mem::take(&mut self.state));
                self.state = next;
                match request {
                    Some(request) => self.issue(request),
                    None => debug!(query = %self.state.active_query_key, "query already cached"),
                }
            }
            Msg::HitDismissed(object_id) => {
                self.state = state::on_hit_dismissed(std::mem::take(&mut self.state), &object_id);
            }
            Msg::MoreRequested => {
                let request = state::request_more(&self.state);
                self.issue(request);
            }
            Msg::OpenLink(url) => open_link(&url),
            Msg::ToggleTheme => {
                self.theme = AppTheme::for_mode(!self.theme.dark_mode);
            }
        }
    }

    /// Applies every completion that has arrived so far.
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply(completion);
        }
    }

    // Duplicate requests for one key are not coalesced; both results append.
    fn issue(&mut self, request: FetchRequest) {
        self.state = state::fetch_started(std::mem::take(&mut self.state));
        info!(query = %request.query_key, page = request.page, "fetching search page");

        let api = Arc::clone(&self.api);
        let tx = self.completions_tx.clone();
        let repaint = self.repaint.clone();
        let generation = self.session.generation;
        self.runtime.spawn(async move {
            let result = api.search(&request.query_key, request.page).await;
            if tx.send(Completion { generation, request, result }).is_err() {
                debug!("search view closed before the fetch finished");
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    fn apply(&mut self, completion: Completion) {
        let Completion { generation, request, result } = completion;
        if !self.session.accepts(generation) {
            debug!(query = %request.query_key, page = request.page, "dropping result from a closed session");
            return;
        }

        let current = std::mem::take(&mut self.state);
        self.state = match result {
            Ok(page) => {
                debug!(query = %request.query_key, page = request.page, hits = page.hits.len(), "search page loaded");
                state::fetch_succeeded(current, &request.query_key, page)
            }
            Err(err) => {
                warn!(query = %request.query_key, page = request.page, error = %err, "search fetch failed");
                state::fetch_failed(current, err)
            }
        };
    }

    /// Lays out one frame. Reads state only; anything the user does comes back as `Msg`s.
    fn render(&self, ui: &mut Ui, focus_search: bool, msgs: &mut Vec<Msg>) {
        let theme = &self.theme;

        ui.horizontal(|ui| {
            ui.label(RichText::new("HN Search").color(theme.highlight).size(22.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if self.theme.dark_mode { "Light" } else { "Dark" };
                ui::button(ui, theme, ButtonProps::new(label), || msgs.push(Msg::ToggleTheme));
            });
        });
        ui.add(egui::Separator::default().spacing(12.0));

        let search_props = SearchProps {
            request_focus: focus_search,
            ..SearchProps::new(&self.state.pending_query_text)
        };
        ui::search(ui, theme, search_props, |event| msgs.push(event.into()));
        ui.add_space(8.0);

        let listing_height = (ui.available_height() - 48.0).max(0.0);
        ScrollArea::vertical()
            .id_salt("results_scroll")
            .auto_shrink([false, false])
            .max_height(listing_height)
            .show(ui, |ui| match &self.state.last_error {
                Some(err) => error_panel(ui, theme, err),
                None => {
                    ui::table(
                        ui,
                        theme,
                        TableProps {
                            hits: self.state.current_hits(),
                        },
                        |event| msgs.push(event.into()),
                    );
                }
            });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| match self.state.footer() {
            Footer::Loading => ui::loading(ui, theme),
            Footer::More => {
                ui::button(ui, theme, ButtonProps::new("More"), || msgs.push(Msg::MoreRequested));
            }
            Footer::Hidden => {}
        });
    }
}

impl eframe::App for SearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme.apply_to_ctx(ctx);
        self.poll_completions();

        let focus_search = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::F));

        let mut msgs = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| self.render(ui, focus_search, &mut msgs));

        for msg in msgs {
            self.dispatch(msg);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.unmount();
    }
}

fn error_panel(ui: &mut Ui, theme: &AppTheme, err: &FetchFailure) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.label(RichText::new("Something went wrong").color(theme.error).size(18.0).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(err.message()).color(theme.secondary_text).size(14.0));
    });
}

fn open_link(url: &str) {
    if let Err(err) = open::that(url) {
        warn!(url, error = %err, "failed to open link");
    }
}
