use crate::QuizApp;
use crate::app::completion::LEVEL_THRESHOLD;
use crate::ui::helpers::difficulty_badge;
use crate::view_models::QuizCardInfo;
use egui::{Button, CentralPanel, Context, ProgressBar, RichText, ScrollArea};

pub fn ui_student_dashboard(app: &mut QuizApp, ctx: &Context) {
    let nombre = app
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let progression = app
        .user
        .as_ref()
        .map(|u| u.progression)
        .unwrap_or_default();
    let fraccion = app.fraccion_hasta_siguiente_nivel();
    let cards: Vec<QuizCardInfo> = app.quiz_cards();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 760.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);

            // Cabecera con nivel y experiencia
            ui.add_space(10.0);
            ui.heading(format!("🚀 ¡Bienvenido de nuevo, {nombre}!"));
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("🏆 Nivel {}", progression.level)).strong(),
                );
                ui.label(RichText::new(format!("⭐ {} XP", progression.xp)).strong());
            });
            ui.add_space(4.0);
            ui.add(
                ProgressBar::new(fraccion)
                    .text(format!(
                        "Hacia el nivel {}: {} / {} XP",
                        progression.level + 1,
                        progression.xp,
                        LEVEL_THRESHOLD
                    ))
                    .desired_width(panel_width * 0.6),
            );

            ui.add_space(18.0);
            ui.heading("🧠 Tus misiones");
            ui.add_space(6.0);

            ScrollArea::vertical().show(ui, |ui| {
                if cards.is_empty() {
                    ui.label("Todavía no hay quizzes publicados.");
                    return;
                }

                for card in &cards {
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.set_width(panel_width - 40.0);
                            ui.horizontal(|ui| {
                                difficulty_badge(ui, card.difficulty);
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(card.puntos_label());
                                        ui.label(card.preguntas_label());
                                    },
                                );
                            });
                            ui.heading(&card.title);
                            ui.label(&card.description);
                            ui.add_space(6.0);
                            if ui
                                .add_sized([140.0, 32.0], Button::new("▶ Empezar"))
                                .clicked()
                            {
                                app.empezar_quiz(card.idx);
                            }
                        });
                    ui.add_space(8.0);
                }
            });

            if !app.message.is_empty() {
                ui.add_space(6.0);
                ui.label(&app.message);
            }
        });
    });
}
