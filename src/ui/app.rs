//! Main application for the Gobang GUI

use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use crate::engine::MAX_DEPTH;
use crate::game::{GameMode, GameResult, GameSettings, GameState};
use crate::Player;

use super::board_view::{BoardFrame, BoardView};
use super::theme::*;

/// Main Gobang application
pub struct GobangApp {
    state: GameState,
    board_view: BoardView,
    /// Settings being edited, applied on "Apply"
    draft: GameSettings,
    /// Side offered to the human when switching to human-ai mode
    draft_human: Player,
    show_settings: bool,
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        let draft = state.settings;
        let draft_human = match draft.mode {
            GameMode::HumanAi { human } => human,
            _ => Player::Black,
        };
        Self {
            state,
            board_view: BoardView::default(),
            draft,
            draft_human,
            show_settings: false,
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with status and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .exact_width(220.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_settings {
                    ui.add_space(10.0);
                    self.render_settings_card(ui);
                }

                ui.add_space(10.0);
                self.render_ai_card(ui);

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(STATUS_BUSY));
                }
            });
    }

    /// Render turn / result indicator
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (text, color) = match &self.state.game_over {
                Some(GameResult::Win { winner, .. }) => {
                    (format!("{} wins!", winner.name()), STATUS_WIN)
                }
                Some(GameResult::Draw) => ("Draw".to_string(), STATUS_WIN),
                None if self.state.is_ai_thinking() => (
                    format!("{} (AI) thinking...", self.state.current.name()),
                    STATUS_BUSY,
                ),
                None => (format!("{} to move", self.state.current.name()), STATUS_OK),
            };
            ui.label(RichText::new(text).size(18.0).strong().color(color));
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New Game").clicked() {
                    self.state.new_game();
                }
                if ui.button("Settings").clicked() {
                    self.show_settings = !self.show_settings;
                    self.draft = self.state.settings;
                }
            });
        });
    }

    /// Mode, depth and side selection
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MODE").size(10.0).color(TEXT_MUTED));
            if ui
                .radio(self.draft.mode == GameMode::HumanHuman, "Human vs Human")
                .clicked()
            {
                self.draft.mode = GameMode::HumanHuman;
            }
            if ui
                .radio(
                    matches!(self.draft.mode, GameMode::HumanAi { .. }),
                    "Human vs AI",
                )
                .clicked()
            {
                self.draft.mode = GameMode::HumanAi {
                    human: self.draft_human,
                };
            }
            if ui.radio(self.draft.mode == GameMode::AiAi, "AI vs AI").clicked() {
                self.draft.mode = GameMode::AiAi;
            }

            ui.add_space(6.0);
            ui.label(RichText::new("AI DEPTH").size(10.0).color(TEXT_MUTED));
            ui.add(egui::Slider::new(&mut self.draft.depth, 1..=MAX_DEPTH));

            ui.add_space(6.0);
            ui.label(RichText::new("PLAY AS").size(10.0).color(TEXT_MUTED));
            ui.horizontal(|ui| {
                ui.radio_value(&mut self.draft_human, Player::Black, "Black");
                ui.radio_value(&mut self.draft_human, Player::White, "White");
            });
            if let GameMode::HumanAi { human } = &mut self.draft.mode {
                *human = self.draft_human;
            }

            ui.add_space(6.0);
            if ui.button("Apply").clicked() {
                match self.state.apply_settings(self.draft) {
                    Ok(()) => self.show_settings = false,
                    Err(err) => self.state.message = Some(err.to_string()),
                }
            }
        });
    }

    /// Last engine result
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.label(
                RichText::new(format!("Depth {}", self.state.settings.depth))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(20.0)
                        .color(STATUS_BUSY),
                );
            }

            if let Some(result) = &self.state.last_ai_result {
                ui.label(
                    RichText::new(format!("{:?}  score {}", result.search_type, result.score))
                        .size(11.0)
                        .color(STATUS_OK),
                );
                ui.label(
                    RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
                if let Some(pos) = result.best_move {
                    ui.label(
                        RichText::new(format!("-> ({}, {})", pos.row, pos.col))
                            .size(12.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                }
            }
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = match &self.state.game_over {
                Some(GameResult::Win { line, .. }) => Some(line.as_slice()),
                _ => None,
            };
            let accepts_input = self.state.game_over.is_none()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                BoardFrame {
                    board: &self.state.board,
                    to_move: self.state.current,
                    winning_line,
                    accepts_input,
                },
            );

            if let Some(pos) = clicked {
                if let Err(err) = self
                    .state
                    .try_place_stone(i32::from(pos.row), i32::from(pos.col))
                {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.new_game();
        }

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
