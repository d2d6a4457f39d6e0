use client_core::{Action, CreateStage, PageControl, ViewState};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{DraftField, Problem, SearchField};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{reduce_action, reduce_event};

pub struct CatalogApp {
    state: ViewState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
}

impl CatalogApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            state: ViewState::new(),
            cmd_tx,
            ui_rx,
            status: "Loading problems...".to_string(),
        };
        app.dispatch(Action::Mounted);
        app
    }

    fn dispatch(&mut self, action: Action) {
        if let Some(cmd) = reduce_action(&mut self.state, action) {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let Some(cmd) = reduce_event(&mut self.state, event, &mut self.status) {
                dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
            }
        }
    }

    fn show_toolbar(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.heading("Problem List");
            });
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Revise").clicked() {
                    actions.push(Action::ReviseRequested);
                }
                if ui.button("Add New").clicked() {
                    actions.push(Action::OpenCreate);
                }
                for field in SearchField::ALL {
                    let mut value = self.state.criteria.get(field).to_string();
                    let edit = egui::TextEdit::singleline(&mut value)
                        .hint_text(format!("Search by {}", field.label()))
                        .desired_width(160.0);
                    if ui.add(edit).changed() {
                        actions.push(Action::SearchChanged { field, value });
                    }
                }
            });
            ui.add_space(6.0);
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(&self.status);
        });
    }

    fn show_listing(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    egui::Grid::new("problem_table")
                        .striped(true)
                        .num_columns(6)
                        .spacing([24.0, 8.0])
                        .show(ui, |ui| {
                            for header in ["ID", "Name", "Topic", "Level", "Platform", "Action"] {
                                ui.strong(header);
                            }
                            ui.end_row();

                            for problem in self.state.visible_page() {
                                show_problem_row(ui, problem);
                            }
                        });
                });

            ui.separator();
            ui.horizontal(|ui| {
                for control in self.state.page_controls() {
                    show_page_control(ui, control, actions);
                }
            });
        });
    }

    fn show_create_window(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        if !self.state.is_create_open() {
            return;
        }

        let mut open = true;
        egui::Window::new("Add New Problem")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 80.0])
            .show(ctx, |ui| {
                egui::Grid::new("draft_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        for field in DraftField::ALL {
                            ui.label(field.label());
                            let mut value = self.state.draft.field(field).to_string();
                            let edit = egui::TextEdit::singleline(&mut value).desired_width(280.0);
                            if ui.add(edit).changed() {
                                actions.push(Action::DraftEdited { field, value });
                            }
                            ui.end_row();
                        }
                    });

                if let Some(err) = &self.state.draft_error {
                    ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                }

                ui.add_space(6.0);
                let submitting = self.state.create_stage == CreateStage::Submitting;
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!submitting, egui::Button::new("Submit"))
                        .clicked()
                    {
                        actions.push(Action::SubmitDraft);
                    }
                    if submitting {
                        ui.spinner();
                    }
                });
            });

        if !open {
            actions.push(Action::CloseCreate);
        }
    }

    fn show_revision_window(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let Some(problem) = self.state.open_revision() else {
            return;
        };

        let mut open = true;
        egui::Window::new("Revise Problem")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 80.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(&problem.name);
                });
                ui.add_space(6.0);
                labelled(ui, "Topic", &problem.topic);
                labelled(ui, "Level", &problem.level);
                labelled(ui, "Platform", &problem.platform);
                ui.add_space(6.0);
                ui.hyperlink_to("View Problem", &problem.link);
            });

        if !open {
            actions.push(Action::CloseRevision);
        }
    }
}

fn labelled(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.strong(format!("{label}:"));
        ui.label(value);
    });
}

fn show_problem_row(ui: &mut egui::Ui, problem: &Problem) {
    ui.label(problem.id.to_string());
    ui.label(&problem.name);
    ui.label(&problem.topic);
    ui.label(&problem.level);
    ui.label(&problem.platform);
    ui.hyperlink_to("View", &problem.link);
    ui.end_row();
}

fn show_page_control(ui: &mut egui::Ui, control: PageControl, actions: &mut Vec<Action>) {
    match control {
        PageControl::Previous { target } => {
            if ui
                .add_enabled(target.is_some(), egui::Button::new("previous"))
                .clicked()
            {
                if let Some(page) = target {
                    actions.push(Action::PageSelected(page));
                }
            }
        }
        PageControl::Page { index, selected } => {
            if ui
                .selectable_label(selected, (index + 1).to_string())
                .clicked()
                && !selected
            {
                actions.push(Action::PageSelected(index));
            }
        }
        PageControl::Break => {
            ui.label("...");
        }
        PageControl::Next { target } => {
            if ui
                .add_enabled(target.is_some(), egui::Button::new("next"))
                .clicked()
            {
                if let Some(page) = target {
                    actions.push(Action::PageSelected(page));
                }
            }
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        self.show_toolbar(ctx, &mut actions);
        self.show_status_bar(ctx);
        self.show_listing(ctx, &mut actions);
        self.show_create_window(ctx, &mut actions);
        self.show_revision_window(ctx, &mut actions);

        for action in actions {
            self.dispatch(action);
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

impl Drop for CatalogApp {
    fn drop(&mut self) {
        let _ = self.cmd_tx.try_send(BackendCommand::Shutdown);
    }
}
