use crate::QuizApp;
use crate::model::Difficulty;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, ComboBox, Context, Spinner, TextEdit};

pub fn ui_create_quiz(app: &mut QuizApp, ctx: &Context) {
    let generando = app.is_generation_pending();

    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.horizontal(|ui| {
                if ui.button("‹ Volver").clicked() {
                    app.volver_al_panel();
                }
                ui.heading("✨ Generador de quizzes con IA");
            });
            ui.add_space(16.0);

            let field_w = (ui.available_width() * 0.9).clamp(240.0, 480.0);

            ui.label("Tema o asignatura");
            ui.add_sized(
                [field_w, 28.0],
                TextEdit::singleline(&mut app.form_topic)
                    .hint_text("p. ej. Fotosíntesis, Historia, Fracciones"),
            );
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Dificultad");
                ComboBox::from_id_salt("form_difficulty")
                    .selected_text(app.form_difficulty.etiqueta())
                    .show_ui(ui, |ui| {
                        for dificultad in Difficulty::todas() {
                            ui.selectable_value(
                                &mut app.form_difficulty,
                                dificultad,
                                dificultad.etiqueta(),
                            );
                        }
                    });

                ui.add_space(16.0);

                ui.label("Preguntas");
                ComboBox::from_id_salt("form_count")
                    .selected_text(app.form_count.to_string())
                    .show_ui(ui, |ui| {
                        for n in [3u32, 5, 10] {
                            ui.selectable_value(&mut app.form_count, n, n.to_string());
                        }
                    });
            });

            ui.add_space(18.0);

            if generando {
                ui.add(Spinner::new());
                ui.label("Generando quiz, un momento...");
            } else {
                let puede_generar = !app.form_topic.trim().is_empty();
                let boton = ui.add_enabled(
                    puede_generar,
                    Button::new("✨ Generar quiz").min_size(egui::vec2(field_w, 40.0)),
                );
                if boton.clicked() {
                    app.iniciar_generacion();
                }
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }

            ui.add_space(14.0);
            ui.weak("Impulsado por Gemini");
        });
    });
}
