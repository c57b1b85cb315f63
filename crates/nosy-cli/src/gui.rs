use eframe::egui;

use nosy_core::config::Config;
use nosy_core::{
    Channel, ChannelId, ChannelKind, ChannelRegistry, Dashboard, DialogOutcome, NosyError,
    ProfileDialog, ProfileDraft, Result, SummaryConfigDialog,
};

pub fn run(config: Config) -> Result<()> {
    let registry = config.seed_registry()?;
    let title = config.dashboard.title;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "nosy-worker",
        options,
        Box::new(move |cc| Ok(Box::new(NosyApp::new(cc, registry, title)))),
    )
    .map_err(|e| NosyError::Gui(e.to_string()))?;

    Ok(())
}

#[derive(Default)]
struct WindowProfileDialog {
    draft: Option<ProfileDraft>,
    new_source: String,
    error: Option<String>,
}

impl ProfileDialog for WindowProfileDialog {
    fn open(&mut self, target: &Channel) {
        self.draft = Some(ProfileDraft::from_channel(target));
        self.new_source.clear();
        self.error = None;
    }

    fn close(&mut self) {
        self.draft = None;
        self.error = None;
    }

    fn is_open(&self) -> bool {
        self.draft.is_some()
    }
}

#[derive(Default)]
struct WindowSummaryDialog {
    open: bool,
}

impl SummaryConfigDialog for WindowSummaryDialog {
    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

enum DialogAction {
    Save,
    Cancel,
}

struct NosyApp {
    dashboard: Dashboard<WindowProfileDialog, WindowSummaryDialog>,
    title: String,
    new_channel_name: String,
    new_channel_kind: ChannelKind,
}

impl NosyApp {
    fn new(_cc: &eframe::CreationContext<'_>, registry: ChannelRegistry, title: String) -> Self {
        Self {
            dashboard: Dashboard::new(
                registry,
                WindowProfileDialog::default(),
                WindowSummaryDialog::default(),
            ),
            title,
            new_channel_name: String::new(),
            new_channel_kind: ChannelKind::ChatSource,
        }
    }

    fn channel_list(&mut self, ui: &mut egui::Ui) {
        let mut toggles: Vec<ChannelId> = Vec::new();
        let mut edit: Option<ChannelId> = None;

        for channel in self.dashboard.channels() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(channel.name.as_str()).strong());
                ui.label(format!("[{}]", channel.kind().label()));
                if channel.has_profile() {
                    ui.label(egui::RichText::new("Profile Configured").italics());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut enabled = channel.enabled;
                    if ui.checkbox(&mut enabled, "Monitor").changed() {
                        toggles.push(channel.id().clone());
                    }
                    let label = if channel.has_profile() {
                        "Edit Profile"
                    } else {
                        "Set Profile"
                    };
                    if ui.button(label).clicked() {
                        edit = Some(channel.id().clone());
                    }
                });
            });
            ui.separator();
        }

        for id in toggles {
            self.dashboard.toggle_channel(&id);
        }
        if let Some(id) = edit {
            self.dashboard.open_channel_profile(&id);
        }

        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.new_channel_name);
            ui.radio_value(
                &mut self.new_channel_kind,
                ChannelKind::MailSource,
                ChannelKind::MailSource.label(),
            );
            ui.radio_value(
                &mut self.new_channel_kind,
                ChannelKind::ChatSource,
                ChannelKind::ChatSource.label(),
            );
            let name = self.new_channel_name.trim().to_string();
            if ui.button("Add Channel").clicked() && !name.is_empty() {
                self.dashboard.add_channel(name, self.new_channel_kind);
                self.new_channel_name.clear();
            }
        });
    }

    fn profile_window(&mut self, ctx: &egui::Context) {
        let mut outcome = None;
        let dialog = self.dashboard.profile_dialog_mut();

        if let Some(draft) = dialog.draft.as_mut() {
            let mut open = true;
            let mut remove = None;
            let mut action = None;

            egui::Window::new(format!("Channel Profile: {}", draft.channel_name))
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Audience:");
                        ui.text_edit_singleline(&mut draft.audience);
                    });

                    ui.label("Data sources:");
                    for (i, source) in draft.data_sources.iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(format!("{}. {}", i + 1, source));
                            if ui.small_button("x").clicked() {
                                remove = Some(i);
                            }
                        });
                    }

                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut dialog.new_source);
                        if ui.button("Add").clicked() {
                            draft.add_data_source(std::mem::take(&mut dialog.new_source));
                        }
                    });

                    if let Some(error) = &dialog.error {
                        ui.colored_label(egui::Color32::RED, error.as_str());
                    }

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            action = Some(DialogAction::Save);
                        }
                        if ui.button("Cancel").clicked() {
                            action = Some(DialogAction::Cancel);
                        }
                    });
                });

            if let Some(i) = remove {
                draft.remove_data_source(i);
            }

            match action {
                Some(DialogAction::Save) => match draft.clone().into_outcome() {
                    Ok(saved) => outcome = Some(saved),
                    Err(e) => dialog.error = Some(e.to_string()),
                },
                Some(DialogAction::Cancel) => outcome = Some(DialogOutcome::Dismissed),
                None if !open => outcome = Some(DialogOutcome::Dismissed),
                None => {}
            }
        }

        if let Some(outcome) = outcome {
            self.dashboard.resolve_profile_dialog(outcome);
        }
    }

    fn summary_window(&mut self, ctx: &egui::Context) {
        let mut open = self.dashboard.summary_dialog().is_open();
        if !open {
            return;
        }

        egui::Window::new("Summary Configuration")
            .open(&mut open)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Summary settings apply to every enabled channel.");
            });

        if !open {
            self.dashboard.close_summary_config();
        }
    }
}

impl eframe::App for NosyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(self.title.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Summary Settings").clicked() {
                        self.dashboard.open_summary_config();
                    }
                });
            });
            ui.label("Your Intelligent Operations Assistant");
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Active Channels: {}",
                    self.dashboard.active_channel_count()
                ))
                .strong(),
            );
            ui.separator();

            ui.heading("Communication Channels");
            ui.label("Select which Outlook emails and Slack channels to monitor and summarize");
            ui.add_space(8.0);
            self.channel_list(ui);

            ui.add_space(16.0);
            ui.heading("Recent Activity");
            ui.label(egui::RichText::new("Customer Support Summary").strong());
            ui.label("3 new support tickets requiring attention. 2 customers reporting login issues.");
            ui.label(egui::RichText::new("Action Required · 2 minutes ago").weak());
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Sales Team Update").strong());
            ui.label("New lead from enterprise client. Follow-up meeting scheduled for tomorrow.");
            ui.label(egui::RichText::new("Informational · 15 minutes ago").weak());
        });

        self.profile_window(ctx);
        self.summary_window(ctx);
    }
}
