use crossbeam_channel::{Receiver, Sender};
use shared::domain::User;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{AppState, FetchPhase};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(205, 66, 66);

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: AppState,
    status: String,
}

impl DesktopGuiApp {
    pub fn bootstrap(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: AppState::new(),
            status: "Starting backend worker".to_string(),
        };
        // The one-time directory load; later state changes never re-queue it.
        dispatch_backend_command(&app.cmd_tx, BackendCommand::FetchUsers, &mut app.status);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                event => self.state.apply(event),
            }
        }
    }

    fn show_error_banner(&self, ui: &mut egui::Ui) {
        if let Some(message) = &self.state.last_error {
            egui::Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui| {
                    ui.colored_label(ERROR_COLOR, message);
                });
            ui.add_space(4.0);
        }
    }

    fn show_search_section(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.state.selection.search_term)
                    .hint_text("Search users by name or email...")
                    .desired_width(340.0),
            );
            if ui.button("Reset").clicked() {
                self.state.reset();
            }
        });
    }

    fn show_users_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Users");
        match &self.state.directory.phase {
            FetchPhase::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading users...");
                });
            }
            FetchPhase::Failed(message) => {
                ui.colored_label(ERROR_COLOR, message);
            }
            FetchPhase::Ready(_) => {
                let mut clicked = None;
                let term = self.state.selection.search_term.clone();
                egui::ScrollArea::vertical()
                    .id_salt("users_grid")
                    .max_height(280.0)
                    .show(ui, |ui| {
                        for user in self.state.directory.filtered(&term) {
                            let selected = self.state.selection.selected == Some(user.id);
                            if user_card(ui, user, selected).clicked() {
                                clicked = Some(user.id);
                            }
                        }
                    });
                if let Some(user_id) = clicked {
                    if let Some(cmd) = self.state.select_user(user_id) {
                        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
                    }
                }
            }
        }
    }

    fn show_posts_section(&mut self, ui: &mut egui::Ui) {
        let Some(user_id) = self.state.selection.selected else {
            return;
        };
        let owner = self
            .state
            .directory
            .user_name(user_id)
            .unwrap_or("Unknown user")
            .to_string();

        ui.separator();
        ui.horizontal(|ui| {
            ui.heading(format!("Posts by {owner}"));
            if self.state.posts.is_loading() {
                ui.spinner();
            }
        });

        match self.state.posts.phase() {
            None | Some(FetchPhase::Loading) => {
                ui.label("Loading posts...");
            }
            Some(FetchPhase::Failed(message)) => {
                ui.colored_label(ERROR_COLOR, message);
            }
            Some(FetchPhase::Ready(posts)) if posts.is_empty() => {
                ui.label(egui::RichText::new("This user has no posts yet.").weak());
            }
            Some(FetchPhase::Ready(posts)) => {
                egui::ScrollArea::vertical()
                    .id_salt("posts_list")
                    .max_height(260.0)
                    .show(ui, |ui| {
                        for post in posts {
                            ui.group(|ui| {
                                ui.label(egui::RichText::new(&post.title).strong());
                                ui.label(&post.body);
                            });
                        }
                    });
            }
        }
    }

    fn show_stats_section(&self, ui: &mut egui::Ui) {
        let stats = self.state.stats();
        ui.separator();
        ui.heading("Statistics");
        ui.horizontal(|ui| {
            stat_cell(ui, stats.total_users.to_string(), "Total Users");
            stat_cell(ui, stats.filtered_users.to_string(), "Filtered Users");
            stat_cell(ui, stats.selected_posts.to_string(), "User Posts");
            stat_cell(
                ui,
                if stats.selection_active { "Yes" } else { "No" }.to_string(),
                "User Selected",
            );
        });
    }
}

fn user_card(ui: &mut egui::Ui, user: &User, selected: bool) -> egui::Response {
    let text = format!(
        "{}\n{}\n{} · {}",
        user.name, user.email, user.company.name, user.website
    );
    ui.selectable_label(selected, text)
}

fn stat_cell(ui: &mut egui::Ui, value: String, label: &str) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(value).strong().size(20.0));
            ui.label(egui::RichText::new(label).weak());
        });
    });
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("User Directory Browser");
            ui.label("Dependent fetching, search, and summary statistics");
            ui.add_space(6.0);

            self.show_error_banner(ui);
            self.show_search_section(ui);
            ui.separator();
            self.show_users_section(ui);
            self.show_posts_section(ui);
            self.show_stats_section(ui);
        });

        // Backend events arrive off-thread; keep polling while idle.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
